use serde_json::Value;

use crate::{
    config::MIN_DURATION_SECS,
    error::{Result, WateringError},
};

/// Pull `duration` (seconds) out of a `/api/water` body.
///
/// An empty body counts as `{}` and yields `default`. Anything else must be a
/// JSON object, and a present `duration` must be a number within `[1, max]`.
pub fn parse_duration(body: &[u8], default: f64, max: f64) -> Result<f64> {
    let requested = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => fields.remove("duration"),
            Ok(_) | Err(_) => return Err(body_error()),
        }
    };

    let duration = match requested {
        None => default,
        Some(value) => value.as_f64().ok_or_else(|| range_error(max))?,
    };

    if !(MIN_DURATION_SECS..=max).contains(&duration) {
        return Err(range_error(max));
    }

    Ok(duration)
}

/// Whole seconds go out as JSON integers, anything else as a float.
pub fn duration_json(seconds: f64) -> Value {
    if seconds.fract() == 0.0 {
        Value::from(seconds as u64)
    } else {
        Value::from(seconds)
    }
}

fn body_error() -> WateringError {
    WateringError::Validation("request body must be a JSON object".to_string())
}

fn range_error(max: f64) -> WateringError {
    WateringError::Validation(format!(
        "duration must be between {} and {} seconds",
        MIN_DURATION_SECS, max
    ))
}
