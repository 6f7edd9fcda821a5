//! Shared fixtures for Genenet tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use genenet_common::GeneSymbol;
use genenet_ingestion::models::InteractionSourceKind;
use genenet_ingestion::{Edge, FetchError, InteractionSource};

/// A trimmed STRING `network` response for FSHR and LHCGR.
pub const FSHR_LHCGR_RESPONSE: &str =
    r#"[{"preferredName_A":"FSHR","preferredName_B":"LHCGR","score":0.9}]"#;

/// Builds a gene list from string literals.
pub fn genes(symbols: &[&str]) -> Vec<GeneSymbol> {
    symbols.iter().filter_map(|s| GeneSymbol::new(s)).collect()
}

enum Reply {
    Edges(Vec<Edge>),
    Fail(String),
}

/// In-memory [`InteractionSource`] that records every call it receives.
pub struct StubSource {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<Vec<String>>>,
}

impl StubSource {
    pub fn with_edges(edges: Vec<Edge>) -> Self {
        Self::new(Reply::Edges(edges))
    }

    /// Every call fails with `FetchError::Network(message)`.
    pub fn failing(message: &str) -> Self {
        Self::new(Reply::Fail(message.to_string()))
    }

    fn new(reply: Reply) -> Self {
        Self { reply, calls: AtomicUsize::new(0), requests: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Gene lists received, in call order.
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl InteractionSource for StubSource {
    fn kind(&self) -> InteractionSourceKind {
        InteractionSourceKind::StringDb
    }

    async fn network(&self, genes: &[GeneSymbol]) -> Result<Vec<Edge>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(genes.iter().map(|g| g.as_str().to_string()).collect());
        }
        match &self.reply {
            Reply::Edges(edges) => Ok(edges.clone()),
            Reply::Fail(message) => Err(FetchError::Network(message.clone())),
        }
    }
}
