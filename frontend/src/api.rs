use gloo_net::http::Request;
use shared::{Endpoint, HttpReply, PredictionTransport, SubmitError};

use crate::config::AppConfig;

/// `fetch`-backed transport for the prediction endpoints.
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl PredictionTransport for GlooTransport {
    async fn post_json(&self, endpoint: Endpoint, body: String) -> Result<HttpReply, SubmitError> {
        let response = Request::post(&self.url(endpoint))
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                log::error!("{} network error: {:?}", endpoint.path(), e);
                SubmitError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log::error!("{} body read failed: {:?}", endpoint.path(), e);
            SubmitError::Transport(e.to_string())
        })?;
        log::info!("{} responded with status {}", endpoint.path(), status);

        Ok(HttpReply { status, body })
    }
}
