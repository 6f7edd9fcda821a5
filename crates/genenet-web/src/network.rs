//! Gene list → edges → graph → layout, as one request-scoped pipeline.

use std::sync::Arc;

use genenet_common::{parse_gene_list, GeneSymbol};
use genenet_ingestion::Edge;
use genenet_kg::{spring_layout_seeded, GeneGraph, Layout, SpringConfig};
use tracing::{debug, instrument};

use crate::state::AppState;

/// Everything the dashboard needs to draw one network.
#[derive(Debug, Clone)]
pub struct NetworkView {
    pub genes: Vec<GeneSymbol>,
    pub edges: Arc<[Edge]>,
    pub graph: GeneGraph,
    pub layout: Layout,
    /// Set when the interaction fetch failed; the view then has no edges.
    pub warning: Option<String>,
}

impl NetworkView {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Parse `raw`, fetch its interactions and lay the resulting graph out.
#[instrument(skip(state))]
pub async fn run_network(state: &AppState, raw: &str) -> NetworkView {
    let genes = parse_gene_list(raw);
    let outcome = state.fetcher.fetch_or_warn(&genes).await;

    let graph = GeneGraph::build(&outcome.edges);
    let spring = SpringConfig::default().with_iterations(state.config.layout.iterations);
    let layout = spring_layout_seeded(&graph, state.config.layout.seed, &spring);
    debug!(
        n_genes = genes.len(),
        n_nodes = graph.node_count(),
        n_edges = graph.edge_count(),
        "Network built"
    );

    NetworkView { genes, edges: outcome.edges, graph, layout, warning: outcome.warning }
}
