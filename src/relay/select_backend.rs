use crate::{config::AppConfig, log_error, log_info};

use super::{GpioRelay, MockRelay, Relay, RelayError};

/// Pick the relay backend once, at startup.
///
/// A failing `open` falls back to the mock instead of aborting startup.
pub fn select_backend<F>(mock_requested: bool, open: F) -> Box<dyn Relay>
where
    F: FnOnce() -> Result<Box<dyn Relay>, RelayError>,
{
    if mock_requested {
        log_info!("🧪 Mock mode requested, relay will not be driven");
        return Box::new(MockRelay::new());
    }

    match open() {
        Ok(relay) => relay,
        Err(e) => {
            log_error!("GPIO initialisation failed: {}", e);
            log_info!("🧪 Falling back to mock mode");
            Box::new(MockRelay::new())
        }
    }
}

/// Backend for the configured pin, honouring `MOCK_GPIO`
pub fn from_config(config: &AppConfig) -> Box<dyn Relay> {
    let pin = config.gpio_pin;
    let active_low = config.relay_active_low;

    select_backend(config.mock_gpio, || {
        GpioRelay::open(pin, active_low).map(|relay| Box::new(relay) as Box<dyn Relay>)
    })
}
