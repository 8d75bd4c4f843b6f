//! Host-side fakes shared by the unit tests.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

use crate::clock::Clock;
use crate::error::DisplayError;
use crate::ui::surface::{text_width, Rgb, Surface};

/// Clock that only moves when told to; delays advance it.
pub struct ManualClock {
    now: u32,
    delays: Vec<u32>,
}

impl ManualClock {
    pub fn new(now: u32) -> Self {
        Self {
            now,
            delays: Vec::new(),
        }
    }

    pub fn set(&mut self, now: u32) {
        self.now = now;
    }

    pub fn advance(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
    }

    pub fn delays(&self) -> &[u32] {
        &self.delays
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
        self.advance(ms);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Clear(u16),
    Cursor(i32, i32),
    TextSize(u8),
    TextColor(u16, u16),
    /// Text with the cursor position and size it was printed at.
    Print(String, i32, i32, u8),
    DrawCircle(i32, i32, i32, u16),
    FillCircle(i32, i32, i32, u16),
    DrawRect(i32, i32, i32, i32, u16),
    FillRect(i32, i32, i32, i32, u16),
}

/// Surface that records every call; `fail` makes drawing calls error.
pub struct RecordingSurface {
    width: i32,
    height: i32,
    cursor: (i32, i32),
    text_size: u8,
    pub calls: Vec<Call>,
    pub fail: bool,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cursor: (0, 0),
            text_size: 1,
            calls: Vec::new(),
            fail: false,
        }
    }

    pub fn printed(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Print(text, ..) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn printed_at(&self, text: &str, x: i32, y: i32, size: u8) -> bool {
        self.calls
            .contains(&Call::Print(text.to_string(), x, y, size))
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn clears(&self) -> usize {
        self.count(|c| matches!(c, Call::Clear(_)))
    }

    fn draw(&mut self, call: Call) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Bus);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    type Color = u16;

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn color(&self, rgb: Rgb) -> u16 {
        rgb.to_rgb565()
    }

    fn clear(&mut self, color: u16) -> Result<(), DisplayError> {
        self.draw(Call::Clear(color))
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
        self.calls.push(Call::Cursor(x, y));
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size;
        self.calls.push(Call::TextSize(size));
    }

    fn set_text_color(&mut self, fg: u16, bg: u16) {
        self.calls.push(Call::TextColor(fg, bg));
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        let (x, y) = self.cursor;
        self.draw(Call::Print(text.to_string(), x, y, self.text_size))?;
        self.cursor.0 += text_width(text, self.text_size);
        Ok(())
    }

    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, color: u16) -> Result<(), DisplayError> {
        self.draw(Call::DrawCircle(cx, cy, r, color))
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: u16) -> Result<(), DisplayError> {
        self.draw(Call::FillCircle(cx, cy, r, color))
    }

    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.draw(Call::DrawRect(x, y, w, h, color))
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.draw(Call::FillRect(x, y, w, h, color))
    }
}

#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Input pin whose level is set by the test; clones share state.
#[derive(Clone)]
pub struct ScriptedPin {
    high: Rc<Cell<bool>>,
    failing: Rc<Cell<bool>>,
}

impl ScriptedPin {
    pub fn new(high: bool) -> Self {
        Self {
            high: Rc::new(Cell::new(high)),
            failing: Rc::new(Cell::new(false)),
        }
    }

    pub fn set_high(&self, high: bool) {
        self.high.set(high);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }
}

impl ErrorType for ScriptedPin {
    type Error = PinFault;
}

impl InputPin for ScriptedPin {
    fn is_high(&mut self) -> Result<bool, PinFault> {
        if self.failing.get() {
            return Err(PinFault);
        }
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, PinFault> {
        self.is_high().map(|high| !high)
    }
}
