use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Value};

use crate::{api::parse_duration, error::Result, log_error, log_info};

use super::ProxyState;

/// `POST /api/water`, forwarded to the remote device
pub async fn water(State(state): State<ProxyState>, body: Bytes) -> Result<Json<Value>> {
    let duration = parse_duration(&body, state.default_duration, state.max_duration)?;

    let result = state.device.water(duration).await.map_err(|e| {
        log_error!("Remote watering via {} failed: {}", state.device.base_url(), e);
        e
    })?;

    log_info!("📡 Remote device accepted watering ({}s)", duration);

    let message = result
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(Json(json!({
        "success": true,
        "message": message,
        "result": result,
    })))
}
