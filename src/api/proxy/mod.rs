mod health;
mod ping;
mod remote_device;
mod water;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::config::Mode;

pub use health::health;
pub use ping::ping;
pub use remote_device::{RemoteDevice, PING_TIMEOUT, WATER_TIMEOUT};
pub use water::water;

/// Shared by every proxy-mode handler
#[derive(Clone)]
pub struct ProxyState {
    pub device: Arc<RemoteDevice>,
    pub default_duration: f64,
    pub max_duration: f64,
}

impl ProxyState {
    pub fn new(device: Arc<RemoteDevice>, default_duration: f64) -> Self {
        Self {
            device,
            default_duration,
            max_duration: Mode::Proxy.max_duration(),
        }
    }
}

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/water", post(water))
        .route("/api/ping", get(ping))
        .route("/health", get(health))
        .with_state(state)
}
