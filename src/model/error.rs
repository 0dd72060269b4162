use reqwest::StatusCode;
use thiserror::Error;

/// Why a completion call produced no text.
///
/// The `Display` output is what callers show to the user, so each variant
/// renders with the prefix clients already recognise.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Error communicating with the API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Error communicating with the API: {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Error processing the response: {0}")]
    Response(String),
}

impl AssistantError {
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            Self::Response(_) => false,
        }
    }
}
