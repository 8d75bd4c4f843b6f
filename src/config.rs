//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, duration modes, colours and screen layout
//! constants live here so they can be tuned in one place.

use crate::phase::Mode;
use crate::ui::surface::Rgb;

// Buttons

/// Raw input must stay unchanged for longer than this before the stable
/// state may flip (ms).
pub const DEBOUNCE_MS: u32 = 30;

/// Hold time after which a press is reported as a long press (ms).
pub const LONG_PRESS_MS: u32 = 2000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button LEFT    → P0.11  (start / pause / exit)
//   Button RIGHT   → P0.12  (mode / skip / reset)
//   SPI SCK        → P0.27
//   SPI MOSI       → P0.26
//   Panel DC       → P0.04
//   Panel CS       → P0.03
//   Panel RST      → P0.28
//   Panel BL       → P0.29

/// Enable the internal pull-up on the left button (active-low wiring).
pub const BUTTON_LEFT_PULL_UP: bool = true;

/// Enable the internal pull-up on the right button (active-low wiring).
pub const BUTTON_RIGHT_PULL_UP: bool = true;

// Durations

const MINUTE_MS: u32 = 60 * 1000;

/// Selectable duration presets, cycled on the start screen.
pub const MODES: &[Mode] = &[
    Mode::new("25/5", 25 * MINUTE_MS, 5 * MINUTE_MS, 15 * MINUTE_MS),
    Mode::new("15/5", 15 * MINUTE_MS, 5 * MINUTE_MS, 15 * MINUTE_MS),
];

/// Focus sessions per cycle; the break after the last one is a long break.
pub const SESSIONS_PER_CYCLE: u8 = 4;

// Colours

pub const FOCUS_RGB: Rgb = Rgb::new(40, 220, 120);
pub const SHORT_BREAK_RGB: Rgb = Rgb::new(60, 170, 255);
pub const LONG_BREAK_RGB: Rgb = Rgb::new(255, 150, 0);
pub const MUTED_RGB: Rgb = Rgb::new(160, 160, 160);
pub const BACKGROUND_RGB: Rgb = Rgb::new(0, 0, 0);
pub const FLASH_RGB: Rgb = Rgb::new(220, 220, 220);

// Phase transition

/// Number of on/off flashes shown between phases.
pub const TRANSITION_FLASHES: u8 = 3;

/// Duration of each half of a flash cycle (ms).
pub const TRANSITION_FLASH_MS: u32 = 90;

// Layout

/// Glyph cell at text size 1 (px).
pub const GLYPH_WIDTH: i32 = 6;
pub const GLYPH_HEIGHT: i32 = 8;

/// Panel resolution in landscape orientation.
pub const PANEL_WIDTH: u16 = 240;
pub const PANEL_HEIGHT: u16 = 135;

pub const TITLE_Y: i32 = 6;
pub const EDGE_MARGIN: i32 = 6;
pub const HINT_BOTTOM_OFFSET: i32 = 18;
pub const MODE_TEXT_SIZE: u8 = 6;

pub const ROUND_Y: i32 = 24;
pub const TIME_TEXT_SIZE: u8 = 4;
pub const TIME_PAUSED_Y: i32 = 34;
pub const PAUSED_Y: i32 = 78;

pub const DOT_RADIUS: i32 = 4;
pub const DOT_GAP: i32 = 10;
pub const DOT_BOTTOM_OFFSET: i32 = 30;

pub const BAR_X: i32 = 10;
pub const BAR_BOTTOM_OFFSET: i32 = 14;
pub const BAR_SIDE_MARGIN: i32 = 20;
pub const BAR_HEIGHT: i32 = 8;

pub const TRANSITION_LINE1_Y: i32 = 40;
pub const TRANSITION_LINE2_Y: i32 = 68;
