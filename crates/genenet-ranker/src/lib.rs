//! genenet-ranker — Tool evaluation matrix.
//!
//! A fixed set of gene-network resources scored 1–5 on fixed criteria,
//! editable one cell at a time and exportable as CSV.

pub mod criteria;
pub mod error;
pub mod matrix;

pub use criteria::{Criterion, CRITERIA};
pub use error::{Result, ScoreError};
pub use matrix::{ScoreMatrix, ToolScores, MAX_SCORE, MIN_SCORE, TOTAL_COLUMN};
