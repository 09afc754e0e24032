use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backend_url: String,
    pub sessions: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: format!("rigorcheck-v{}", env!("CARGO_PKG_VERSION")),
        backend_url: state.client.base_url().to_string(),
        sessions: state.sessions.len(),
    })
}
