//! Two-button Pomodoro timer - host-testable library.
//!
//! Everything except the hardware bring-up lives here: debouncing, the
//! phase timer, the session counter, the render gate and layouts, the
//! transition flash and the control loop. It only talks to hardware through
//! small traits ([`clock::Clock`], [`ui::surface::Surface`],
//! `embedded_hal::digital::InputPin`), so it builds and tests on the host.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary (`src/main.rs`, `--features embedded`) is
//! `#![no_std]` + `#![no_main]` and wires these pieces to embassy-nrf.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod phase;
pub mod session;
pub mod timer;
pub mod ui;

#[cfg(test)]
mod testing;

pub use app::{Action, Controller, Inputs, Tick};
pub use error::{DisplayError, Error, InputError};
pub use phase::{Mode, Phase};
pub use ui::Screen;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - cross-module behaviour
// ═══════════════════════════════════════════════════════════════════════════
