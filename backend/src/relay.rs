use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde::de::IgnoredAny;
use serde_json::json;
use shared::Endpoint;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Model service unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("Model service returned an invalid reply: {0}")]
    InvalidReply(String),
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::Unavailable(_) | RelayError::InvalidReply(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}

/// Status and JSON body exactly as the model service sent them.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl UpstreamReply {
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::build(self.status).content_type("application/json").body(self.body)
    }
}

/// Forwards validated prediction requests to the model service.
#[derive(Clone)]
pub struct RelayService {
    http_client: HttpClient,
    base_url: String,
}

impl RelayService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http_client: HttpClient::new(), base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn forward<T: Serialize>(&self, endpoint: Endpoint, body: &T) -> Result<UpstreamReply, RelayError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        log::info!("Relaying {} to {}", endpoint.path(), url);

        let response = self.http_client.post(&url).json(body).send().await.map_err(|e| {
            log::error!("Model service request to {} failed: {}", url, e);
            RelayError::from(e)
        })?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|e| RelayError::InvalidReply(e.to_string()))?;
        let body = response.bytes().await?.to_vec();
        serde_json::from_slice::<IgnoredAny>(&body).map_err(|e| RelayError::InvalidReply(e.to_string()))?;

        if !status.is_success() {
            log::warn!("Model service answered {} with {}", endpoint.path(), status);
        }
        Ok(UpstreamReply { status, body })
    }
}
