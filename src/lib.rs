pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod relay;
pub mod util;

pub use config::{AppConfig, Mode};
pub use controller::{ActivationOutcome, WateringController, WateringStatus};
pub use error::{Result, WateringError};
