//! `EdgeFetcher` — gene list in, edge list out.
//!
//! Wraps an [`InteractionSource`] with the empty-input short circuit, the
//! result cache, and the "warn and carry on with zero edges" policy the
//! dashboard relies on.

use std::num::NonZeroUsize;
use std::sync::Arc;

use genenet_common::{GenenetError, GeneSymbol};
use genenet_config::StringDbConfig;
use tracing::{debug, info, warn};

use crate::cache::EdgeCache;
use crate::error::Result;
use crate::models::Edge;
use crate::sources::{InteractionSource, StringDbClient};

/// Result of a fetch that never fails: on error `edges` is empty and
/// `warning` holds the message to show the user.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub edges: Arc<[Edge]>,
    pub warning: Option<String>,
}

impl FetchOutcome {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

pub struct EdgeFetcher {
    source: Arc<dyn InteractionSource>,
    cache: EdgeCache,
}

impl EdgeFetcher {
    pub fn new(source: Arc<dyn InteractionSource>, cache_capacity: NonZeroUsize) -> Self {
        Self { source, cache: EdgeCache::new(cache_capacity) }
    }

    /// Fetcher backed by the STRING API described in `config`.
    pub fn from_config(config: &StringDbConfig) -> std::result::Result<Self, GenenetError> {
        let capacity = NonZeroUsize::new(config.cache_capacity).ok_or_else(|| {
            GenenetError::Config("string_db.cache_capacity must be at least 1".to_string())
        })?;
        let client = StringDbClient::new(config)
            .map_err(|e| GenenetError::Config(e.to_string()))?;
        Ok(Self::new(Arc::new(client), capacity))
    }

    /// Edges for `genes`.
    ///
    /// An empty list returns immediately without touching the network.
    /// Identical gene lists are served from the cache; failures are not cached.
    pub async fn fetch(&self, genes: &[GeneSymbol]) -> Result<Arc<[Edge]>> {
        if genes.is_empty() {
            debug!("Empty gene list, skipping network call");
            return Ok(Arc::from(Vec::new()));
        }

        let key = EdgeCache::key(genes);
        if let Some(edges) = self.cache.get(&key) {
            debug!(n_genes = genes.len(), n_edges = edges.len(), "Edge cache hit");
            return Ok(edges);
        }

        let edges: Arc<[Edge]> = self.source.network(genes).await?.into();
        info!(
            source = self.source.kind().as_str(),
            n_genes = genes.len(),
            n_edges = edges.len(),
            "Fetched interaction network"
        );
        self.cache.insert(key, edges.clone());
        Ok(edges)
    }

    /// Like [`fetch`](Self::fetch) but converts any failure into a
    /// user-facing warning and an empty edge list.
    pub async fn fetch_or_warn(&self, genes: &[GeneSymbol]) -> FetchOutcome {
        match self.fetch(genes).await {
            Ok(edges) => FetchOutcome { edges, warning: None },
            Err(e) => {
                warn!(source = self.source.kind().as_str(), error = %e, "Interaction fetch failed");
                FetchOutcome {
                    edges: Arc::from(Vec::new()),
                    warning: Some(format!("STRING-db API error: {}", e)),
                }
            }
        }
    }

    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }
}
