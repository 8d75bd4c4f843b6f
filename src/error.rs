//! Unified error type for the timer firmware.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.
//!
//! Nothing in the timer or debounce logic can fail; errors only come from
//! the hardware edges (display transport, pin reads) and are reported to
//! the control loop, which logs them and keeps ticking.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Drawing on the display failed.
    Display(DisplayError),

    /// Reading a button pin failed.
    Input(InputError),
}

/// Display failures surfaced by a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI / pin transaction to the panel failed.
    Bus,
}

/// Pin read failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// The HAL could not sample the pin level.
    Read,
}

// Convenience conversions

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Display(e)
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::Input(e)
    }
}
