use std::time::Duration;

use crate::{error::WateringError, log_error, log_info, log_warn};

use super::{activation_guard::ActivationGuard, ActivationOutcome, WateringController};

pub const COMPLETED: &str = "completed";
pub const ALREADY_WATERING: &str = "already watering";

impl WateringController {
    /// Hold the relay on for `duration`.
    ///
    /// Range checks belong to the caller. A second call while one is running is
    /// rejected immediately without touching the relay.
    pub async fn activate(&self, duration: Duration) -> ActivationOutcome {
        let Some(mut guard) = ActivationGuard::claim(self) else {
            log_warn!("🚿 Watering rejected, one is already in progress");
            return ActivationOutcome::Rejected;
        };

        log_info!("🚿 Watering started ({:.1}s)", duration.as_secs_f64());

        // Mark energized before switching so a partial `on` still gets an `off`.
        guard.set_energized(true);
        if let Err(e) = self.with_relay(|relay| relay.on()) {
            log_error!("Watering failed while switching on: {}", e);
            return ActivationOutcome::Faulted(WateringError::from(e).to_string());
        }

        tokio::time::sleep(duration).await;

        if let Err(e) = self.with_relay(|relay| relay.off()) {
            log_error!("Watering failed while switching off: {}", e);
            return ActivationOutcome::Faulted(WateringError::from(e).to_string());
        }
        guard.set_energized(false);

        self.record_completion(chrono::Local::now());
        log_info!("✅ Watering completed");

        ActivationOutcome::Completed
    }
}
