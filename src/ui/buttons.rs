//! GPIO button input with polled debouncing.
//!
//! Two physical buttons:
//!   - LEFT  - start the selected mode / pause-resume / (hold) back to start
//!   - RIGHT - next mode / skip phase / (hold) restart phase
//!
//! Each button is sampled once per control-loop tick; no edge interrupts
//! and no waiting. Wiring polarity is configurable per button.

use crate::error::InputError;
use crate::ui::debounce::{ButtonEvent, Debouncer};
use embedded_hal::digital::InputPin;

/// Which pin level means "pressed".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pressed pulls the line low (pull-up wiring).
    ActiveLow,
    /// Pressed drives the line high (no pull-up).
    ActiveHigh,
}

impl Polarity {
    pub fn from_pull_up(pull_up: bool) -> Self {
        if pull_up {
            Polarity::ActiveLow
        } else {
            Polarity::ActiveHigh
        }
    }
}

/// One debounced physical button.
pub struct Button<P> {
    pin: P,
    polarity: Polarity,
    debouncer: Debouncer,
}

impl<P: InputPin> Button<P> {
    /// Wrap `pin`, settling the debouncer on its current level.
    pub fn new(mut pin: P, polarity: Polarity, now: u32) -> Self {
        let pressed = read_asserted(&mut pin, polarity).unwrap_or(false);
        Self {
            pin,
            polarity,
            debouncer: Debouncer::new(pressed, now),
        }
    }

    /// Sample the pin and run the debouncer. A failed read leaves the
    /// debounce state untouched.
    pub fn poll(&mut self, now: u32) -> Result<Option<ButtonEvent>, InputError> {
        let pressed = read_asserted(&mut self.pin, self.polarity)?;
        Ok(self.debouncer.update(pressed, now))
    }

    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_pressed()
    }
}

fn read_asserted<P: InputPin>(pin: &mut P, polarity: Polarity) -> Result<bool, InputError> {
    match polarity {
        Polarity::ActiveLow => pin.is_low(),
        Polarity::ActiveHigh => pin.is_high(),
    }
    .map_err(|_| InputError::Read)
}
