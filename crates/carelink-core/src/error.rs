use http::StatusCode;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each relay crate's error type. Route handlers convert
/// these into the per-endpoint JSON error bodies, keeping domain errors
/// decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}
