use std::env;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_MODEL_SERVICE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("MODEL_SERVICE_URL must be an http(s) URL, got {0:?}")]
    InvalidModelServiceUrl(String),
}

/// Server settings read from `.env` and the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_dir: String,
    pub model_service_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let frontend_dir = lookup("FRONTEND_DIR").unwrap_or_else(|| match lookup("CARGO_MANIFEST_DIR") {
            Some(manifest_dir) => format!("{}/../frontend/dist", manifest_dir),
            None => "/usr/src/app/frontend/dist".to_string(),
        });

        let model_service_url = lookup("MODEL_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_MODEL_SERVICE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(model_service_url.starts_with("http://") || model_service_url.starts_with("https://")) {
            return Err(ConfigError::InvalidModelServiceUrl(model_service_url));
        }

        Ok(Self { port, frontend_dir, model_service_url })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
