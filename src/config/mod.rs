mod from_env;
mod from_lookup;
mod mode;

pub use mode::Mode;

/// Listen port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;
/// BCM pin the relay board is wired to by default
pub const DEFAULT_GPIO_PIN: u8 = 17;
/// Shortest watering any mode accepts, in seconds
pub const MIN_DURATION_SECS: f64 = 1.0;

/// Process configuration, read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub mode: Mode,
    pub port: u16,
    pub gpio_pin: u8,
    pub default_duration: f64,
    pub mock_gpio: bool,
    pub relay_active_low: bool,
    /// Only set (and required) in proxy mode
    pub remote_base_url: Option<String>,
    pub debug: bool,
}

impl AppConfig {
    pub fn max_duration(&self) -> f64 {
        self.mode.max_duration()
    }
}
