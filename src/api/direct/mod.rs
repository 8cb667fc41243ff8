mod health;
mod status;
mod water;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{config::Mode, controller::WateringController};

pub use health::health;
pub use status::status;
pub use water::water;

/// Shared by every direct-mode handler
#[derive(Clone)]
pub struct DirectState {
    pub controller: Arc<WateringController>,
    pub default_duration: f64,
    pub max_duration: f64,
}

impl DirectState {
    pub fn new(controller: Arc<WateringController>, default_duration: f64) -> Self {
        Self {
            controller,
            default_duration,
            max_duration: Mode::Direct.max_duration(),
        }
    }
}

pub fn router(state: DirectState) -> Router {
    Router::new()
        .route("/api/water", post(water))
        .route("/api/status", get(status))
        .route("/health", get(health))
        .with_state(state)
}
