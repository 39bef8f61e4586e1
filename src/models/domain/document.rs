use crate::errors::{AppError, AppResult};

/// Document formats accepted for quiz material, detected from the uploaded
/// filename's extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Pptx,
}

impl DocumentFormat {
    pub fn from_filename(filename: &str) -> AppResult<Self> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" | "md" => Ok(DocumentFormat::PlainText),
            "pdf" => Ok(DocumentFormat::Pdf),
            "pptx" => Ok(DocumentFormat::Pptx),
            _ => Err(AppError::UnsupportedFormat(format!(
                "'{}' (use .txt, .md, .pdf or .pptx)",
                filename
            ))),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::PlainText => "text/plain",
            DocumentFormat::Pdf => "application/pdf",
            DocumentFormat::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
        }
    }
}
