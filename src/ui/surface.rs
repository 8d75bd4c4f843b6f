//! Drawing surface abstraction.
//!
//! The renderer talks to the panel through a small cursor-based text +
//! primitives API. Coordinates are pixels with (0,0) top-left in landscape
//! orientation. Text is laid out on a 6×8 glyph cell multiplied by the
//! current text size, anchored at the cursor's top-left corner.

use crate::config::{
    BACKGROUND_RGB, FLASH_RGB, FOCUS_RGB, GLYPH_HEIGHT, GLYPH_WIDTH, LONG_BREAK_RGB, MUTED_RGB,
    SHORT_BREAK_RGB,
};
use crate::error::DisplayError;
use crate::phase::Phase;

/// 8-bit-per-channel colour as written in the config.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed RGB565 word, the native format of most small TFT panels.
    pub const fn to_rgb565(self) -> u16 {
        ((self.r as u16 & 0xF8) << 8) | ((self.g as u16 & 0xFC) << 3) | (self.b as u16 >> 3)
    }
}

pub trait Surface {
    /// Panel-native colour value.
    type Color: Copy + PartialEq;

    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Convert a config colour to the panel's native format.
    fn color(&self, rgb: Rgb) -> Self::Color;

    fn clear(&mut self, color: Self::Color) -> Result<(), DisplayError>;
    fn set_cursor(&mut self, x: i32, y: i32);
    fn set_text_size(&mut self, size: u8);
    fn set_text_color(&mut self, fg: Self::Color, bg: Self::Color);
    /// Draw `text` at the cursor and move the cursor past it.
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, color: Self::Color)
        -> Result<(), DisplayError>;
    fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: Self::Color)
        -> Result<(), DisplayError>;
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Self::Color)
        -> Result<(), DisplayError>;
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Self::Color)
        -> Result<(), DisplayError>;
}

/// Pixel width of `text` at `size`.
pub fn text_width(text: &str, size: u8) -> i32 {
    text.len() as i32 * GLYPH_WIDTH * i32::from(size)
}

/// Pixel height of one line at `size`.
pub fn text_height(size: u8) -> i32 {
    GLYPH_HEIGHT * i32::from(size)
}

/// X coordinate that centres `text` horizontally on `surface`.
pub fn centered_x<S: Surface + ?Sized>(surface: &S, text: &str, size: u8) -> i32 {
    (surface.width() - text_width(text, size)) / 2
}

/// Print `text` at `size`, horizontally centred, top edge at `y`.
pub fn print_centered<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    size: u8,
    y: i32,
) -> Result<(), DisplayError> {
    let x = centered_x(surface, text, size);
    surface.set_text_size(size);
    surface.set_cursor(x, y);
    surface.print(text)
}

/// Config colours converted once to the panel's native format.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette<C> {
    pub focus: C,
    pub short_break: C,
    pub long_break: C,
    pub muted: C,
    pub background: C,
    pub flash: C,
}

impl<C: Copy> Palette<C> {
    pub fn new<S: Surface<Color = C> + ?Sized>(surface: &S) -> Self {
        Self {
            focus: surface.color(FOCUS_RGB),
            short_break: surface.color(SHORT_BREAK_RGB),
            long_break: surface.color(LONG_BREAK_RGB),
            muted: surface.color(MUTED_RGB),
            background: surface.color(BACKGROUND_RGB),
            flash: surface.color(FLASH_RGB),
        }
    }

    pub fn phase(&self, phase: Phase) -> C {
        match phase {
            Phase::Focus => self.focus,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb565_packing() {
        assert_eq!(Rgb::new(0, 0, 0).to_rgb565(), 0x0000);
        assert_eq!(Rgb::new(255, 255, 255).to_rgb565(), 0xFFFF);
        assert_eq!(Rgb::new(255, 0, 0).to_rgb565(), 0xF800);
        assert_eq!(Rgb::new(0, 255, 0).to_rgb565(), 0x07E0);
        assert_eq!(Rgb::new(0, 0, 255).to_rgb565(), 0x001F);
        // 255>>3 = 31, 150>>2 = 37, 0
        assert_eq!(LONG_BREAK_RGB.to_rgb565(), (31 << 11) | (37 << 5));
    }

    #[test]
    fn text_metrics() {
        assert_eq!(text_width("25/5", 6), 4 * 36);
        assert_eq!(text_width("", 3), 0);
        assert_eq!(text_height(1), 8);
        assert_eq!(text_height(4), 32);
    }
}
