use std::sync::PoisonError;

use crate::relay::{Relay, RelayError};

use super::WateringController;

impl WateringController {
    /// Run one relay command under the relay lock.
    pub(super) fn with_relay<F>(&self, command: F) -> Result<(), RelayError>
    where
        F: FnOnce(&mut dyn Relay) -> Result<(), RelayError>,
    {
        let mut relay = self.relay.lock().unwrap_or_else(PoisonError::into_inner);
        command(&mut **relay)
    }
}
