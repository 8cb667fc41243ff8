use axum::{extract::State, Json};

use crate::controller::WateringStatus;

use super::DirectState;

/// `GET /api/status`
pub async fn status(State(state): State<DirectState>) -> Json<WateringStatus> {
    Json(state.controller.get_status())
}
