use http::StatusCode;

use carelink_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpeechError>;

/// Errors from speech service token minting
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Service credentials missing from the environment
    #[error("Speech service is not configured: {0}")]
    ConfigError(String),

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Identity provider returned a non-success status
    #[error("Identity provider error ({status}): {message}")]
    IdentityApiError { status: u16, message: String },

    /// Identity provider returned a body we could not parse
    #[error("Invalid identity provider response: {0}")]
    InvalidResponse(String),
}

impl HttpError for SpeechError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
