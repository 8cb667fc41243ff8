use crate::log_info;

use super::{Relay, RelayError};

/// No-hardware relay. Only logs what it would have done.
#[derive(Debug, Default)]
pub struct MockRelay {
    energized: bool,
}

impl MockRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_energized(&self) -> bool {
        self.energized
    }
}

impl Relay for MockRelay {
    fn on(&mut self) -> Result<(), RelayError> {
        log_info!("[MOCK] relay ON");
        self.energized = true;
        Ok(())
    }

    fn off(&mut self) -> Result<(), RelayError> {
        log_info!("[MOCK] relay OFF");
        self.energized = false;
        Ok(())
    }

    fn is_mock(&self) -> bool {
        true
    }
}
