use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// GET /health
/// Liveness only; does not touch the database.
async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}
