mod activate;
mod activation_guard;
mod get_status;
mod new;
mod record_completion;
mod shutdown;
mod with_relay;

use std::sync::{atomic::AtomicBool, Mutex, RwLock};

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use crate::relay::Relay;

pub use activate::{ALREADY_WATERING, COMPLETED};

/// Result of one `activate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Held for the full duration and switched off again
    Completed,
    /// Another watering was already running; nothing was touched
    Rejected,
    /// The relay failed; busy was cleared and off was attempted
    Faulted(String),
}

impl ActivationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActivationOutcome::Completed)
    }

    pub fn message(&self) -> &str {
        match self {
            ActivationOutcome::Completed => COMPLETED,
            ActivationOutcome::Rejected => ALREADY_WATERING,
            ActivationOutcome::Faulted(detail) => detail,
        }
    }
}

/// Snapshot returned by `/api/status`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WateringStatus {
    pub is_watering: bool,
    pub last_watered: Option<DateTime<Local>>,
    pub last_watered_relative: Option<String>,
    pub today_count: u32,
    pub mock_mode: bool,
}

#[derive(Debug, Default)]
struct WateringHistory {
    last_completed_at: Option<DateTime<Local>>,
    count_day: Option<NaiveDate>,
    count: u32,
}

/// Single-writer guard around the relay.
///
/// `busy` is the only synchronisation point for activations. The relay mutex is
/// only ever taken for a single on/off call, and status reads go through
/// `history` so they never wait on a running watering.
pub struct WateringController {
    relay: Mutex<Box<dyn Relay>>,
    busy: AtomicBool,
    history: RwLock<WateringHistory>,
    uses_mock: bool,
}
