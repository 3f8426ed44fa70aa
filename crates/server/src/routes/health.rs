//! Health check endpoint

use axum::{Json, extract::State};
use serde::Serialize;

use crate::ai::OllamaClient;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    ollama: &'static str,
}

/// GET /api/health - Report server liveness and model server reachability
///
/// Always answers 200; an unreachable model server only changes `ollama`.
pub async fn check(State(client): State<OllamaClient>) -> Json<HealthResponse> {
    let connected = client.check_health().await;
    if !connected {
        tracing::warn!(ollama_url = client.base_url(), "Ollama not reachable");
    }

    Json(HealthResponse {
        status: "ok",
        ollama: if connected { "connected" } else { "disconnected" },
    })
}
