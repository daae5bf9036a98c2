use thiserror::Error;

/// Everything that can stop a form submission short of a rendered report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// A required element was never mounted. Developer error, logged only.
    #[error("Required element not found: {0}")]
    Configuration(String),
    #[error("{0}")]
    Validation(String),
    #[error("HTTP error! status: {status}")]
    Network { status: u16 },
    #[error("Network request failed: {0}")]
    Transport(String),
    #[error("{0}")]
    Prediction(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl SubmitError {
    /// Text for the blocking notification shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(msg) => msg.clone(),
            other => format!("Error: {}", other),
        }
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Decode(err.to_string())
    }
}
