use std::sync::PoisonError;

use chrono::{DateTime, Local};

use super::WateringController;

impl WateringController {
    pub(super) fn record_completion(&self, at: DateTime<Local>) {
        let mut history = self.history.write().unwrap_or_else(PoisonError::into_inner);
        let day = at.date_naive();

        if history.count_day == Some(day) {
            history.count += 1;
        } else {
            history.count_day = Some(day);
            history.count = 1;
        }
        history.last_completed_at = Some(at);
    }
}
