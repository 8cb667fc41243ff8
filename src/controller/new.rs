use std::sync::{atomic::AtomicBool, Mutex, RwLock};

use crate::{log_info, relay::Relay};

use super::{WateringController, WateringHistory};

impl WateringController {
    pub fn new(relay: Box<dyn Relay>) -> Self {
        let uses_mock = relay.is_mock();

        log_info!("🌱 Watering controller ready ({})",
            if uses_mock { "mock relay" } else { "GPIO relay" });

        Self {
            relay: Mutex::new(relay),
            busy: AtomicBool::new(false),
            history: RwLock::new(WateringHistory::default()),
            uses_mock,
        }
    }

    pub fn uses_mock(&self) -> bool {
        self.uses_mock
    }
}
