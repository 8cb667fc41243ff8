use std::str::FromStr;

use crate::error::{Result, WateringError};

use super::{AppConfig, Mode, DEFAULT_GPIO_PIN, DEFAULT_PORT, MIN_DURATION_SECS};

impl AppConfig {
    /// Build the configuration from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mode = match get("WATERING_MODE") {
            Some(raw) => raw.parse::<Mode>()?,
            None => Mode::Direct,
        };

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let gpio_pin = parse_or("GPIO_PIN", get("GPIO_PIN"), DEFAULT_GPIO_PIN)?;
        let default_duration =
            parse_or("WATERING_DURATION", get("WATERING_DURATION"), mode.default_duration())?;

        if !(MIN_DURATION_SECS..=mode.max_duration()).contains(&default_duration) {
            return Err(WateringError::Configuration(format!(
                "WATERING_DURATION must be between {} and {} seconds in {} mode, got {}",
                MIN_DURATION_SECS,
                mode.max_duration(),
                mode,
                default_duration
            )));
        }

        let mock_gpio = flag("MOCK_GPIO", get("MOCK_GPIO"))?;
        let relay_active_low = flag("RELAY_ACTIVE_LOW", get("RELAY_ACTIVE_LOW"))?;
        let debug = flag("DEBUG", get("DEBUG"))?;

        let remote_base_url = get("WATERING_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        if mode == Mode::Proxy && remote_base_url.is_none() {
            return Err(WateringError::Configuration(
                "WATERING_API_BASE_URL must be set in proxy mode".to_string(),
            ));
        }

        Ok(Self {
            mode,
            port,
            gpio_pin,
            default_duration,
            mock_gpio,
            relay_active_low,
            remote_base_url,
            debug,
        })
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| {
            WateringError::Configuration(format!("{} has an invalid value: \"{}\"", key, raw))
        }),
    }
}

fn flag(key: &str, raw: Option<String>) -> Result<bool> {
    let lowered = raw.as_deref().map(str::to_ascii_lowercase);

    match lowered.as_deref() {
        None => Ok(false),
        Some("true") | Some("1") | Some("yes") => Ok(true),
        Some("false") | Some("0") | Some("no") => Ok(false),
        Some(_) => Err(WateringError::Configuration(format!(
            "{} must be true or false, got \"{}\"",
            key,
            raw.unwrap_or_default()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_direct_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.mode, Mode::Direct);
        assert_eq!(config.port, 5000);
        assert_eq!(config.gpio_pin, 17);
        assert_eq!(config.default_duration, 3.0);
        assert_eq!(config.max_duration(), 10.0);
        assert!(!config.mock_gpio);
        assert!(!config.relay_active_low);
        assert!(config.remote_base_url.is_none());
    }

    #[test]
    fn test_proxy_requires_base_url() {
        let result = load(&[("WATERING_MODE", "proxy")]);
        assert!(matches!(result, Err(WateringError::Configuration(_))));

        let result = load(&[("WATERING_MODE", "proxy"), ("WATERING_API_BASE_URL", "  ")]);
        assert!(matches!(result, Err(WateringError::Configuration(_))));
    }

    #[test]
    fn test_proxy_defaults() {
        let config = load(&[
            ("WATERING_MODE", "Proxy"),
            ("WATERING_API_BASE_URL", "http://192.168.2.163/"),
        ])
        .unwrap();

        assert_eq!(config.mode, Mode::Proxy);
        assert_eq!(config.default_duration, 10.0);
        assert_eq!(config.max_duration(), 30.0);
        assert_eq!(config.remote_base_url.as_deref(), Some("http://192.168.2.163"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("GPIO_PIN", "27"),
            ("WATERING_DURATION", "5"),
            ("MOCK_GPIO", "TRUE"),
            ("RELAY_ACTIVE_LOW", "1"),
            ("DEBUG", "true"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.gpio_pin, 27);
        assert_eq!(config.default_duration, 5.0);
        assert!(config.mock_gpio);
        assert!(config.relay_active_low);
        assert!(config.debug);
    }

    #[test]
    fn test_default_duration_out_of_range() {
        assert!(load(&[("WATERING_DURATION", "15")]).is_err());
        assert!(load(&[("WATERING_DURATION", "0")]).is_err());

        let config = load(&[
            ("WATERING_MODE", "proxy"),
            ("WATERING_API_BASE_URL", "http://device"),
            ("WATERING_DURATION", "15"),
        ])
        .unwrap();
        assert_eq!(config.default_duration, 15.0);
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("PORT", "not-a-port")]).is_err());
        assert!(load(&[("GPIO_PIN", "300")]).is_err());
        assert!(load(&[("MOCK_GPIO", "maybe")]).is_err());
        assert!(load(&[("WATERING_MODE", "remote")]).is_err());
    }
}
