//! Error types for edge ingestion.

use genenet_common::GenenetError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Timeout, DNS, connection failure or a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not a JSON array of records.
    #[error("Unexpected response: {0}")]
    Parse(String),

    /// The request URL was refused by the client allowlist.
    #[error("Request blocked: {0}")]
    Security(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl From<GenenetError> for FetchError {
    fn from(e: GenenetError) -> Self {
        match e {
            GenenetError::Security(msg) => FetchError::Security(msg),
            GenenetError::Http(err) => FetchError::Network(err.to_string()),
            GenenetError::Serialization(err) => FetchError::Parse(err.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}
