pub mod health;
pub mod metrics;
mod report;

use axum::{Router, routing::post};

use crate::ai::OllamaClient;

/// Build report API routes
pub fn report_routes() -> Router<OllamaClient> {
    Router::new().route("/generate-report", post(report::generate))
}
