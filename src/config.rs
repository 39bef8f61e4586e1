use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub extractor_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub questions_amount: u32,
    pub segment_max_chars: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| "sk-placeholder".to_string()),
            ),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string()),
            extractor_url: env::var("EXTRACTOR_URL")
                .unwrap_or_else(|_| "http://localhost:9998/tika".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            questions_amount: env::var("QUESTIONS_AMOUNT")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(20),
            segment_max_chars: env::var("SEGMENT_MAX_CHARS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(1350),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.openai_api_key.expose_secret() == "sk-placeholder" {
            panic!(
                "FATAL: OPENAI_API_KEY is using the placeholder value! Set OPENAI_API_KEY environment variable."
            );
        }

        if self.questions_amount == 0 {
            panic!("FATAL: QUESTIONS_AMOUNT must be at least 1.");
        }

        if self.segment_max_chars == 0 {
            panic!("FATAL: SEGMENT_MAX_CHARS must be at least 1.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_model: "gpt-4.1-mini".to_string(),
            extractor_url: "http://localhost:9998/tika".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            questions_amount: 20,
            segment_max_chars: 1350,
        }
    }
}
