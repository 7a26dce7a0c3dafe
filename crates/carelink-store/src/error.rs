use http::StatusCode;

use carelink_core::HttpError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors from the reminder document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store credentials or URL missing from the environment
    #[error("Store is not configured: {0}")]
    ConfigError(String),

    /// Requested reminder id does not exist
    #[error("Reminder not found: {0}")]
    NotFound(String),

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Store returned a non-success status
    #[error("Store API error ({status}): {message}")]
    StoreApiError { status: u16, message: String },

    /// Store returned a body we could not parse
    #[error("Invalid store response: {0}")]
    InvalidResponse(String),
}

impl HttpError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ConfigError(_) | Self::ConnectionError(_) | Self::StoreApiError { .. } | Self::InvalidResponse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
