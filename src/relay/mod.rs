mod gpio;
mod mock;
mod select_backend;

use thiserror::Error;

pub use gpio::GpioRelay;
pub use mock::MockRelay;
pub use select_backend::{from_config, select_backend};

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("GPIO error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    #[error("Relay driver error: {0}")]
    Driver(String),
}

/// A binary actuator switching the water pump/valve.
///
/// The controller is the only owner; backends never need to be `Sync`.
pub trait Relay: Send {
    /// Energize the relay
    fn on(&mut self) -> Result<(), RelayError>;

    /// Release the relay
    fn off(&mut self) -> Result<(), RelayError>;

    /// True for backends that do not drive real hardware
    fn is_mock(&self) -> bool {
        false
    }
}
