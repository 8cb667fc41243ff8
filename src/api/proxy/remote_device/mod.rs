mod new;
mod ping;
mod water;

use std::time::Duration;

pub const WATER_TIMEOUT: Duration = Duration::from_secs(5);
pub const PING_TIMEOUT: Duration = Duration::from_secs(3);

/// HTTP client for a device that exposes its own `/water` and `/ping`
#[derive(Debug, Clone)]
pub struct RemoteDevice {
    base_url: String,
    client: reqwest::Client,
}
