//! Evaluation table: slider edits, reset, export, and the JSON view.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use genenet_common::ApiError;
use genenet_ranker::{Criterion, ScoreMatrix};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::handlers::csv_attachment;
use crate::handlers::dashboard::render_page;
use crate::state::SharedState;

pub const EVALUATION_FILENAME: &str = "gene_network_eval.csv";

#[derive(Debug, Deserialize)]
pub struct ScoreForm {
    pub tool: String,
    pub criterion: String,
    /// Kept as text so a malformed value is reported on the page.
    pub value: String,
    pub genes: Option<String>,
    pub run: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetForm {
    pub genes: Option<String>,
    pub run: Option<String>,
}

/// POST /evaluation: set one cell, then re-render the dashboard.
pub async fn update_score(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<ScoreForm>,
) -> (CookieJar, Html<String>) {
    let (jar, session) = state.sessions.resolve(jar);

    let result = match form.value.trim().parse::<i64>() {
        Ok(value) => state
            .sessions
            .with_scores(session, |scores| scores.set_score(&form.tool, &form.criterion, value))
            .map_err(|e| e.to_string()),
        Err(_) => Err(format!("Score must be a whole number, got {:?}", form.value)),
    };

    let notice = match result {
        Ok(()) => None,
        Err(message) => {
            warn!(tool = %form.tool, criterion = %form.criterion, %message, "Score edit rejected");
            Some(format!("Score not updated: {}", message))
        }
    };

    let scores = state.sessions.scores(session);
    let page = render_page(
        &state,
        form.genes.as_deref(),
        form.run.is_some(),
        &scores,
        notice.as_deref(),
    )
    .await;
    (jar, Html(page))
}

/// POST /evaluation/reset
pub async fn reset_scores(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<ResetForm>,
) -> (CookieJar, Html<String>) {
    let (jar, session) = state.sessions.resolve(jar);
    state.sessions.with_scores(session, ScoreMatrix::reset);
    info!(%session, "Evaluation scores reset");

    let scores = state.sessions.scores(session);
    let page = render_page(&state, form.genes.as_deref(), form.run.is_some(), &scores, None).await;
    (jar, Html(page))
}

/// GET /download/evaluation
pub async fn download_evaluation(State(state): State<SharedState>, jar: CookieJar) -> Response {
    let (jar, session) = state.sessions.resolve(jar);
    match state.sessions.scores(session).export_csv() {
        Ok(csv) => (jar, csv_attachment(EVALUATION_FILENAME, csv)).into_response(),
        Err(e) => ApiError::internal(e.to_string()).into_response(),
    }
}

// === API Types ===

#[derive(Debug, Serialize)]
pub struct ApiToolScores {
    pub tool: String,
    pub scores: Vec<u8>,
    pub total: u32,
}

#[derive(Debug, Serialize)]
pub struct ApiEvaluation {
    pub criteria: &'static [Criterion],
    pub tools: Vec<ApiToolScores>,
}

/// GET /api/evaluation
pub async fn api_evaluation(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiEvaluation>) {
    let (jar, session) = state.sessions.resolve(jar);
    let scores = state.sessions.scores(session);
    let tools = scores
        .rows()
        .iter()
        .map(|row| ApiToolScores { tool: row.tool.clone(), scores: row.scores.to_vec(), total: row.total() })
        .collect();
    (jar, Json(ApiEvaluation { criteria: scores.criteria(), tools }))
}
