//! Graph export errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KgError>;

#[derive(Debug, Error)]
pub enum KgError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),
}
