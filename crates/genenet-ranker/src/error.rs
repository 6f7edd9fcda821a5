//! Score matrix errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoreError>;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("Score {value} out of range [{min}, {max}]")]
    Range { value: i64, min: u8, max: u8 },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("Export failed: {0}")]
    Export(String),
}

impl From<csv::Error> for ScoreError {
    fn from(e: csv::Error) -> Self {
        ScoreError::Export(e.to_string())
    }
}
