use std::sync::{atomic::Ordering, PoisonError};

use chrono::Local;

use crate::util::time::relative_time;

use super::{WateringController, WateringStatus};

impl WateringController {
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Current state. Never waits on a running watering and never touches the relay.
    pub fn get_status(&self) -> WateringStatus {
        let now = Local::now();
        let history = self.history.read().unwrap_or_else(PoisonError::into_inner);

        let today_count = match history.count_day {
            Some(day) if day == now.date_naive() => history.count,
            _ => 0,
        };

        WateringStatus {
            is_watering: self.is_busy(),
            last_watered: history.last_completed_at,
            last_watered_relative: history
                .last_completed_at
                .as_ref()
                .map(|then| relative_time(then, &now)),
            today_count,
            mock_mode: self.uses_mock,
        }
    }
}
