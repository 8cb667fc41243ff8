use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::log_warn;

use super::ProxyState;

/// `GET /api/ping`
pub async fn ping(State(state): State<ProxyState>) -> (StatusCode, Json<Value>) {
    match state.device.ping().await {
        Ok(text) => (StatusCode::OK, Json(json!({ "pong": text }))),
        Err(e) => {
            log_warn!("📡 Remote device did not answer ping: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        }
    }
}
