use std::sync::atomic::{AtomicBool, Ordering};

use crate::log_error;

use super::WateringController;

/// Holds the busy claim for one activation.
///
/// Dropping the guard releases `busy` on every path out of `activate`. If the
/// relay is still marked energized at that point it is switched off first.
pub(super) struct ActivationGuard<'a> {
    controller: &'a WateringController,
    energized: bool,
}

impl<'a> ActivationGuard<'a> {
    /// Claim the busy flag, or `None` when another activation holds it.
    pub(super) fn claim(controller: &'a WateringController) -> Option<Self> {
        controller
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { controller, energized: false })
    }

    pub(super) fn set_energized(&mut self, energized: bool) {
        self.energized = energized;
    }
}

impl Drop for ActivationGuard<'_> {
    fn drop(&mut self) {
        if self.energized {
            if let Err(e) = self.controller.with_relay(|relay| relay.off()) {
                log_error!("Relay could not be switched off: {}", e);
            }
        }
        release(&self.controller.busy);
    }
}

fn release(busy: &AtomicBool) {
    busy.store(false, Ordering::Release);
}
