//! Shared application state for the web server.

use std::num::NonZeroUsize;
use std::sync::Arc;

use genenet_common::GenenetError;
use genenet_config::Config;
use genenet_ingestion::{EdgeFetcher, InteractionSource};

use crate::session::SessionStore;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    pub fetcher: EdgeFetcher,
    pub sessions: SessionStore,
}

impl AppState {
    /// State backed by the live STRING API.
    pub fn from_config(config: Config) -> Result<Self, GenenetError> {
        let fetcher = EdgeFetcher::from_config(&config.string_db)?;
        Ok(Self { config, fetcher, sessions: SessionStore::new() })
    }

    /// State backed by an arbitrary interaction source.
    pub fn with_source(config: Config, source: Arc<dyn InteractionSource>) -> Result<Self, GenenetError> {
        let capacity = NonZeroUsize::new(config.string_db.cache_capacity).ok_or_else(|| {
            GenenetError::Config("string_db.cache_capacity must be at least 1".to_string())
        })?;
        let fetcher = EdgeFetcher::new(source, capacity);
        Ok(Self { config, fetcher, sessions: SessionStore::new() })
    }
}

pub type SharedState = Arc<AppState>;
