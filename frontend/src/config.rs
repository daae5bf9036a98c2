/// Build-time settings baked into the wasm bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for `/api/...` paths; empty means same origin.
    pub api_base_url: String,
    pub log_level: log::Level,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        let api_base_url = option_env!("API_BASE_URL")
            .unwrap_or("")
            .trim()
            .trim_end_matches('/')
            .to_string();

        let log_level = option_env!("LOG_LEVEL")
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::Level::Info);

        Self { api_base_url, log_level }
    }
}
