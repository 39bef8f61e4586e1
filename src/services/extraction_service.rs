use async_trait::async_trait;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::DocumentFormat,
};

/// The external text-extraction capability: document bytes in, raw text
/// out. Binary format parsing itself lives outside this codebase.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: &[u8], format: DocumentFormat) -> AppResult<String>;
}

/// Extractor backed by a Tika-style HTTP service. Plain-text uploads are
/// decoded in-process; PDF and PPTX bytes are forwarded to the configured
/// endpoint, which replies with the extracted plain text.
pub struct TikaTextExtractor {
    client: reqwest::Client,
    extractor_url: String,
}

impl TikaTextExtractor {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            extractor_url: config.extractor_url.clone(),
        }
    }
}

#[async_trait]
impl TextExtractor for TikaTextExtractor {
    async fn extract(&self, bytes: &[u8], format: DocumentFormat) -> AppResult<String> {
        if format == DocumentFormat::PlainText {
            return String::from_utf8(bytes.to_vec())
                .map_err(|_| AppError::ExtractionError("document is not valid UTF-8".to_string()));
        }

        log::info!(
            "Forwarding {} byte {} document to extractor at {}",
            bytes.len(),
            format.mime_type(),
            self.extractor_url
        );

        let response = self
            .client
            .put(&self.extractor_url)
            .header(reqwest::header::CONTENT_TYPE, format.mime_type())
            .header(reqwest::header::ACCEPT, "text/plain")
            .body(bytes.to_vec())
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNSUPPORTED_MEDIA_TYPE {
            return Err(AppError::UnsupportedFormat(
                format.mime_type().to_string(),
            ));
        }
        if !status.is_success() {
            return Err(AppError::ExtractionError(format!(
                "extractor replied with status {}",
                status
            )));
        }

        let text = response.text().await?;
        Ok(text)
    }
}
