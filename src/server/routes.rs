use super::AppState;
use crate::error::AgentError;
use crate::model::{AgentResponse, Product};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub struct AgentRequest {
    /// Missing is treated like empty.
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn run_agent(
    State(state): State<AppState>,
    body: Result<Json<AgentRequest>, JsonRejection>,
) -> Result<Json<AgentResponse>, AgentError> {
    let Json(request) = body.map_err(|rejection| AgentError::InvalidBody(rejection.body_text()))?;
    let prompt = request.prompt.unwrap_or_default();
    debug!(%prompt, "Agent request");
    state.agent.run(&prompt).await.map(Json)
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.get_all())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
