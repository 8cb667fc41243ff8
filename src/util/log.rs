// src/util/log.rs

//! Logger Utility - tracing subscriber setup plus the crate's logging macros
use std::sync::OnceLock;

use tracing::Level;

#[doc(hidden)]
pub use tracing;

pub static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Install the global fmt subscriber. `debug` raises the level from INFO to DEBUG.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init(debug: bool) {
    let debug = *DEBUG_ENABLED.get_or_init(|| debug);

    let level = if debug { Level::DEBUG } else { Level::INFO };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Convenience macro for error logging with formatting
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::util::log::tracing::error!("{}", message);
    }};
}

/// Convenience macro for warning logging with formatting
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::util::log::tracing::warn!("{}", message);
    }};
}

/// Convenience macro for info logging with formatting
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::util::log::tracing::info!("{}", message);
    }};
}

/// Convenience macro for debug logging with formatting
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if *$crate::util::log::DEBUG_ENABLED.get().unwrap_or(&false) {
            let message = format!($($arg)*);
            $crate::util::log::tracing::debug!("{}", message);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(false);
        init(true);

        // First caller wins
        assert_eq!(DEBUG_ENABLED.get(), Some(&false));

        crate::log_info!("info {}", 1);
        crate::log_debug!("debug {}", 2);
    }
}
