use std::{fmt, str::FromStr};

use crate::error::WateringError;

/// How `/api/water` reaches the relay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Drive a relay wired to this host
    Direct,
    /// Forward to a remote device's own HTTP API
    Proxy,
}

impl Mode {
    pub fn max_duration(&self) -> f64 {
        match self {
            Mode::Direct => 10.0,
            Mode::Proxy => 30.0,
        }
    }

    pub fn default_duration(&self) -> f64 {
        match self {
            Mode::Direct => 3.0,
            Mode::Proxy => 10.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Direct => "direct",
            Mode::Proxy => "proxy",
        }
    }
}

impl FromStr for Mode {
    type Err = WateringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Mode::Direct),
            "proxy" => Ok(Mode::Proxy),
            other => Err(WateringError::Configuration(format!(
                "WATERING_MODE must be \"direct\" or \"proxy\", got \"{}\"",
                other
            ))),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
