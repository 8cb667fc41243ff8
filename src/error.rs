use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::relay::RelayError;

#[derive(Error, Debug)]
pub enum WateringError {
    #[error("{0}")]
    Validation(String),

    #[error("already watering")]
    Busy,

    #[error("relay fault: {0}")]
    ActuatorFault(#[from] RelayError),

    #[error("connection to remote device failed")]
    RemoteUnavailable(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl WateringError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WateringError::Validation(_) => StatusCode::BAD_REQUEST,
            WateringError::Busy => StatusCode::CONFLICT,
            // The caller still gets a status payload for relay faults.
            WateringError::ActuatorFault(_) => StatusCode::OK,
            WateringError::RemoteUnavailable(_) | WateringError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for WateringError {
    fn into_response(self) -> Response {
        let body = match &self {
            WateringError::RemoteUnavailable(e) => json!({
                "success": false,
                "message": self.to_string(),
                "error": e.to_string(),
            }),
            _ => json!({
                "success": false,
                "message": self.to_string(),
            }),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, WateringError>;
