//! User interface subsystem - colour TFT + two physical buttons.
//!
//! The controller keeps a two-screen state machine that reacts to classified
//! button presses and draws through the [`surface::Surface`] abstraction.
//!
//! ## Components
//!
//! - **Display**: ST7789 240×135 TFT via SPI, wrapped by [`display`]
//! - **Buttons**: 2 tactile switches with debouncing and long-press
//!   detection (LEFT, RIGHT)

pub mod buttons;
pub mod debounce;
pub mod display;
pub mod input_logic;
pub mod render;
pub mod surface;
pub mod transition;

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Mode selection - shows the highlighted preset.
    Start,
    /// Countdown - phase, remaining time, round dots and progress bar.
    Timer,
}
