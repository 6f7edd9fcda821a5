//! HTTP handlers for all web routes.

pub mod dashboard;
pub mod evaluation;
pub mod network;
pub mod system;

use axum::http::header;
use axum::response::{IntoResponse, Response};

/// CSV body served as a file download.
pub(crate) fn csv_attachment(filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", filename)),
        ],
        body,
    )
        .into_response()
}
