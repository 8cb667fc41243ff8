use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::DirectState;

/// `GET /health`
pub async fn health(State(state): State<DirectState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "mock_mode": state.controller.uses_mock(),
    }))
}
