use rppal::gpio::{Gpio, OutputPin};

use crate::log_info;

use super::{Relay, RelayError};

/// Relay board driven by one GPIO output line.
pub struct GpioRelay {
    pin: OutputPin,
    pin_number: u8,
    active_low: bool,
}

impl GpioRelay {
    /// Claim `pin_number` as an output, starting with the relay released.
    pub fn open(pin_number: u8, active_low: bool) -> Result<Self, RelayError> {
        let gpio = Gpio::new()?;
        let pin = gpio.get(pin_number)?;

        let pin = if active_low {
            pin.into_output_high()
        } else {
            pin.into_output_low()
        };

        log_info!("🔌 GPIO relay ready on pin {} (active {})",
            pin_number, if active_low { "low" } else { "high" });

        Ok(Self { pin, pin_number, active_low })
    }

    pub fn pin_number(&self) -> u8 {
        self.pin_number
    }
}

impl Relay for GpioRelay {
    fn on(&mut self) -> Result<(), RelayError> {
        if self.active_low {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
        Ok(())
    }

    fn off(&mut self) -> Result<(), RelayError> {
        if self.active_low {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        Ok(())
    }
}

impl Drop for GpioRelay {
    fn drop(&mut self) {
        let _ = self.off();
        log_info!("🔌 GPIO relay on pin {} released", self.pin_number());
    }
}
