//! Interaction network source clients.

pub mod string_db;

use async_trait::async_trait;
use genenet_common::GeneSymbol;

use crate::error::Result;
use crate::models::{Edge, InteractionSourceKind};

pub use string_db::StringDbClient;

/// Common interface for interaction network sources.
#[async_trait]
pub trait InteractionSource: Send + Sync {
    fn kind(&self) -> InteractionSourceKind;

    /// Issue one request covering all `genes` and return the parsed edges.
    /// Callers guarantee `genes` is non-empty.
    async fn network(&self, genes: &[GeneSymbol]) -> Result<Vec<Edge>>;
}
