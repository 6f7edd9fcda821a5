//! genenet-ingestion — Interaction edge ingestion.
//!
//! - STRING network API client with lenient record parsing
//! - In-memory result cache keyed by the requested gene list
//! - `EdgeFetcher`, the entry point used by the dashboard

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod sources;

pub use error::{FetchError, Result};
pub use fetcher::{EdgeFetcher, FetchOutcome};
pub use models::Edge;
pub use sources::InteractionSource;
