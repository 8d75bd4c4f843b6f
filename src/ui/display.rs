//! `embedded-graphics` backed drawing surface.
//!
//! Wraps any RGB565 `DrawTarget` (the ST7789 driver on the device, an
//! in-memory framebuffer in tests) and provides the cursor-based text API
//! the renderer expects. Text size `n` draws the 6-px-wide mono font with
//! every glyph pixel blown up to an `n × n` block.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::error::DisplayError;
use crate::ui::surface::{text_width, Rgb, Surface};

pub struct GraphicsSurface<D> {
    target: D,
    cursor: Point,
    text_size: u8,
    fg: Rgb565,
    bg: Rgb565,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            text_size: 1,
            fg: Rgb565::WHITE,
            bg: Rgb565::BLACK,
        }
    }

    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor.x, self.cursor.y)
    }

    pub fn inner(&self) -> &D {
        &self.target
    }

    pub fn inner_mut(&mut self) -> &mut D {
        &mut self.target
    }
}

fn bus<E>(_: E) -> DisplayError {
    DisplayError::Bus
}

fn area(x: i32, y: i32, w: i32, h: i32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(w.max(0) as u32, h.max(0) as u32))
}

/// Circle of radius `r` centred on (cx, cy), `2r + 1` pixels across.
fn circle(cx: i32, cy: i32, r: i32) -> Circle {
    Circle::with_center(Point::new(cx, cy), (2 * r.max(0) + 1) as u32)
}

impl<D> Surface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
{
    type Color = Rgb565;

    fn width(&self) -> i32 {
        self.target.size().width as i32
    }

    fn height(&self) -> i32 {
        self.target.size().height as i32
    }

    fn color(&self, rgb: Rgb) -> Rgb565 {
        Rgb565::new(rgb.r >> 3, rgb.g >> 2, rgb.b >> 3)
    }

    fn clear(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        self.target.clear(color).map_err(bus)
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size.max(1);
    }

    fn set_text_color(&mut self, fg: Rgb565, bg: Rgb565) {
        self.fg = fg;
        self.bg = bg;
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(self.fg)
            .background_color(self.bg)
            .build();

        let mut scaled = Scaled {
            target: &mut self.target,
            origin: self.cursor,
            factor: u32::from(self.text_size),
        };
        Text::with_baseline(text, Point::zero(), style, Baseline::Top)
            .draw(&mut scaled)
            .map_err(bus)?;

        self.cursor.x += text_width(text, self.text_size);
        Ok(())
    }

    fn draw_circle(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        circle(cx, cy, r)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
            .map_err(bus)
    }

    fn fill_circle(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        circle(cx, cy, r)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
            .map_err(bus)
    }

    fn draw_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        area(x, y, w, h)
            .into_styled(PrimitiveStyle::with_stroke(color, 1))
            .draw(&mut self.target)
            .map_err(bus)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        self.target.fill_solid(&area(x, y, w, h), color).map_err(bus)
    }
}

/// Draw target view that scales every pixel to a `factor × factor` block
/// placed relative to `origin`.
struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
    factor: u32,
}

impl<D: DrawTarget> Dimensions for Scaled<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        let bounds = self.target.bounding_box();
        let f = self.factor as i32;
        let top_left = Point::new(
            (bounds.top_left.x - self.origin.x).div_euclid(f),
            (bounds.top_left.y - self.origin.y).div_euclid(f),
        );
        let size = Size::new(
            bounds.size.width / self.factor + 1,
            bounds.size.height / self.factor + 1,
        );
        Rectangle::new(top_left, size)
    }
}

impl<D: DrawTarget> DrawTarget for Scaled<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let f = self.factor;
        for Pixel(point, color) in pixels {
            let block = Rectangle::new(self.origin + point * f as i32, Size::new(f, f));
            self.target.fill_solid(&block, color)?;
        }
        Ok(())
    }
}
