//! Network export and JSON view.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use genenet_common::ApiError;
use genenet_kg::edges_to_csv;
use serde::{Deserialize, Serialize};

use crate::handlers::csv_attachment;
use crate::network::run_network;
use crate::state::SharedState;

pub const EDGES_FILENAME: &str = "string_network.csv";

#[derive(Debug, Deserialize, Default)]
pub struct NetworkQuery {
    pub genes: Option<String>,
}

/// GET /download/edges?genes=…
pub async fn download_edges(
    State(state): State<SharedState>,
    Query(query): Query<NetworkQuery>,
) -> Result<Response, ApiError> {
    let view = run_network(&state, query.genes.as_deref().unwrap_or_default()).await;
    let csv = edges_to_csv(&view.graph).map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(csv_attachment(EDGES_FILENAME, csv).into_response())
}

// === API Types ===

#[derive(Debug, Serialize)]
pub struct ApiNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize)]
pub struct ApiEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct ApiInteraction {
    pub source: String,
    pub target: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct ApiNetwork {
    pub genes: Vec<String>,
    pub nodes: Vec<ApiNode>,
    pub edges: Vec<ApiEdge>,
    /// Upstream records as received, before deduplication.
    pub interactions: Vec<ApiInteraction>,
    pub warning: Option<String>,
}

/// GET /api/network?genes=…
pub async fn api_network(
    State(state): State<SharedState>,
    Query(query): Query<NetworkQuery>,
) -> Json<ApiNetwork> {
    let view = run_network(&state, query.genes.as_deref().unwrap_or_default()).await;

    let nodes = view
        .layout
        .iter()
        .map(|(id, p)| ApiNode { id: id.to_string(), x: p.x, y: p.y })
        .collect();
    let edges = view
        .graph
        .edges()
        .iter()
        .map(|e| ApiEdge { source: e.source.clone(), target: e.target.clone() })
        .collect();
    let interactions = view
        .edges
        .iter()
        .map(|e| ApiInteraction { source: e.source.clone(), target: e.target.clone(), score: e.score })
        .collect();

    Json(ApiNetwork {
        genes: view.genes.iter().map(|g| g.as_str().to_string()).collect(),
        nodes,
        edges,
        interactions,
        warning: view.warning,
    })
}
