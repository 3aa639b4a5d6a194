use reqwest::StatusCode;
use thiserror::Error;

/// Why a call to the remote task service failed
///
/// The store treats every variant the same ("operation failed"); the
/// distinction only feeds the logs.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Transport failure or undecodable body
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Unexpected status {0}")]
    Status(StatusCode),

    /// Failure reported by a non-HTTP service implementation
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for remote service calls
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
