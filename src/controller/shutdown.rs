use crate::{log_error, log_info, log_warn};

use super::WateringController;

impl WateringController {
    /// Switch the relay off before the process exits. Best effort.
    pub fn shutdown(&self) {
        if self.is_busy() {
            log_warn!("🛑 Shutting down while watering, forcing relay off");
        }

        match self.with_relay(|relay| relay.off()) {
            Ok(()) => log_info!("🛑 Relay off, controller stopped"),
            Err(e) => log_error!("Relay could not be switched off on shutdown: {}", e),
        }
    }
}
