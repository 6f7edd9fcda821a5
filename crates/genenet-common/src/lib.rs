//! genenet-common — Shared types, errors, and helpers used across all Genenet crates.

pub mod error;
pub mod genes;
pub mod links;
pub mod sandbox;

// Re-export commonly used types
pub use error::{ApiError, GenenetError, Result};
pub use genes::{parse_gene_list, GeneSymbol, DEFAULT_GENES, HUMAN_TAXON_ID};
