use std::time::Duration;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{
    api::parse_duration,
    controller::ActivationOutcome,
    error::{Result, WateringError},
    log_debug,
};

use super::DirectState;

/// `POST /api/water`
pub async fn water(
    State(state): State<DirectState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>)> {
    let duration = parse_duration(&body, state.default_duration, state.max_duration)?;
    log_debug!("💧 Watering requested for {}s", duration);

    // Spawned so the watering runs to completion even if the client goes away.
    let controller = state.controller.clone();
    let outcome = tokio::spawn(async move {
        controller.activate(Duration::from_secs_f64(duration)).await
    })
    .await
    .unwrap_or_else(|e| ActivationOutcome::Faulted(format!("watering task failed: {}", e)));

    let code = match outcome {
        ActivationOutcome::Rejected => WateringError::Busy.status_code(),
        ActivationOutcome::Completed | ActivationOutcome::Faulted(_) => StatusCode::OK,
    };

    Ok((
        code,
        Json(json!({
            "success": outcome.is_success(),
            "message": outcome.message(),
            "status": state.controller.get_status(),
        })),
    ))
}
