//! Render gate and screen layouts.
//!
//! Every tick the controller describes what should be on screen as a
//! [`View`]. The gate reduces it to a [`Snapshot`] - the handful of values
//! that change what is drawn - and only clears and repaints the panel when
//! that snapshot differs from the last one painted, or when forced.
//!
//! Repainting clears the whole panel, so skipping identical frames is what
//! keeps the display from flickering at loop speed.

use core::fmt::Write;

use crate::config::{
    BAR_BOTTOM_OFFSET, BAR_HEIGHT, BAR_SIDE_MARGIN, BAR_X, DOT_BOTTOM_OFFSET, DOT_GAP, DOT_RADIUS,
    EDGE_MARGIN, HINT_BOTTOM_OFFSET, MODE_TEXT_SIZE, PAUSED_Y, ROUND_Y, SESSIONS_PER_CYCLE,
    TIME_PAUSED_Y, TIME_TEXT_SIZE, TITLE_Y,
};
use crate::error::DisplayError;
use crate::phase::{Mode, Phase};
use crate::timer::PhaseTimer;
use crate::ui::surface::{print_centered, text_height, text_width, Palette, Surface};

const TITLE: &str = "POMODORO";
const START_LABEL: &str = "START";
const MODE_HINT: &str = "NEXT MODE";
const PAUSED_LABEL: &str = "PAUSED";

/// Values whose change requires a repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Snapshot {
    Start {
        selected_mode: usize,
    },
    Timer {
        remaining_secs: u32,
        phase: Phase,
        running: bool,
        completed: u8,
    },
}

/// Everything needed to paint the timer screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerView {
    pub phase: Phase,
    pub running: bool,
    pub elapsed_ms: u32,
    pub duration_ms: u32,
    pub completed: u8,
    pub round: u8,
}

impl TimerView {
    pub fn from_timer(timer: &PhaseTimer, now: u32) -> Self {
        let sessions = timer.sessions();
        Self {
            phase: timer.phase(),
            running: timer.is_running(),
            elapsed_ms: timer.elapsed(now),
            duration_ms: timer.duration(),
            completed: sessions.completed(),
            round: sessions.display_round(timer.phase().is_focus()),
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.duration_ms.saturating_sub(self.elapsed_ms) / 1000
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View<'a> {
    /// Mode selection; `mode` is the highlighted, not yet active, preset.
    Start { selected_mode: usize, mode: &'a Mode },
    Timer(TimerView),
}

impl View<'_> {
    pub fn snapshot(&self) -> Snapshot {
        match self {
            View::Start { selected_mode, .. } => Snapshot::Start {
                selected_mode: *selected_mode,
            },
            View::Timer(timer) => Snapshot::Timer {
                remaining_secs: timer.remaining_secs(),
                phase: timer.phase,
                running: timer.running,
                completed: timer.completed,
            },
        }
    }
}

/// Remembers the last painted snapshot.
#[derive(Debug, Default)]
pub struct RenderGate {
    last: Option<Snapshot>,
}

impl RenderGate {
    pub const fn new() -> Self {
        Self { last: None }
    }

    pub fn last(&self) -> Option<Snapshot> {
        self.last
    }

    /// Paint `view` if it changed since the last paint or `force` is set.
    ///
    /// Returns whether the panel was touched. A failed paint forgets the
    /// last snapshot so the next call repaints.
    pub fn render<S: Surface>(
        &mut self,
        surface: &mut S,
        palette: &Palette<S::Color>,
        view: &View<'_>,
        force: bool,
    ) -> Result<bool, DisplayError> {
        let snapshot = view.snapshot();
        if !force && self.last == Some(snapshot) {
            return Ok(false);
        }

        let painted = match view {
            View::Start { mode, .. } => draw_start(surface, palette, mode.label),
            View::Timer(timer) => draw_timer(surface, palette, timer),
        };

        match painted {
            Ok(()) => {
                self.last = Some(snapshot);
                Ok(true)
            }
            Err(e) => {
                self.last = None;
                Err(e)
            }
        }
    }
}

fn draw_start<S: Surface>(
    surface: &mut S,
    palette: &Palette<S::Color>,
    mode_label: &str,
) -> Result<(), DisplayError> {
    let (w, h) = (surface.width(), surface.height());
    surface.clear(palette.background)?;

    surface.set_text_color(palette.focus, palette.background);
    print_centered(surface, TITLE, 2, TITLE_Y)?;

    surface.set_text_size(1);
    surface.set_text_color(palette.short_break, palette.background);
    surface.set_cursor(w - text_width(START_LABEL, 1) - EDGE_MARGIN, TITLE_Y);
    surface.print(START_LABEL)?;

    surface.set_text_color(palette.focus, palette.background);
    print_centered(
        surface,
        mode_label,
        MODE_TEXT_SIZE,
        (h - text_height(MODE_TEXT_SIZE)) / 2,
    )?;

    surface.set_text_size(1);
    surface.set_text_color(palette.muted, palette.background);
    surface.set_cursor(
        w - text_width(MODE_HINT, 1) - EDGE_MARGIN,
        h - HINT_BOTTOM_OFFSET,
    );
    surface.print(MODE_HINT)
}

fn draw_timer<S: Surface>(
    surface: &mut S,
    palette: &Palette<S::Color>,
    view: &TimerView,
) -> Result<(), DisplayError> {
    let h = surface.height();
    let color = palette.phase(view.phase);
    surface.clear(palette.background)?;

    let label = view.phase.label();
    surface.set_text_color(color, palette.background);
    print_centered(surface, label, 2, TITLE_Y)?;

    let round = format_round(view.round);
    print_centered(surface, &round, 1, ROUND_Y)?;

    let time = format_clock(view.remaining_secs());
    let time_y = if view.running {
        (h - text_height(TIME_TEXT_SIZE)) / 2
    } else {
        TIME_PAUSED_Y
    };
    print_centered(surface, &time, TIME_TEXT_SIZE, time_y)?;

    if !view.running {
        surface.set_text_color(palette.muted, palette.background);
        print_centered(surface, PAUSED_LABEL, 2, PAUSED_Y)?;
    }

    draw_round_dots(surface, view.completed, color)?;
    draw_progress_bar(surface, view.elapsed_ms, view.duration_ms, color)
}

fn draw_round_dots<S: Surface>(
    surface: &mut S,
    completed: u8,
    color: S::Color,
) -> Result<(), DisplayError> {
    let total = i32::from(SESSIONS_PER_CYCLE);
    let dots_width = total * DOT_RADIUS * 2 + DOT_GAP * (total - 1);
    let start_x = (surface.width() - dots_width) / 2;
    let cy = surface.height() - DOT_BOTTOM_OFFSET;

    for i in 0..total {
        let cx = start_x + i * (DOT_RADIUS * 2 + DOT_GAP) + DOT_RADIUS;
        if i < i32::from(completed) {
            surface.fill_circle(cx, cy, DOT_RADIUS, color)?;
        } else {
            surface.draw_circle(cx, cy, DOT_RADIUS, color)?;
        }
    }
    Ok(())
}

fn draw_progress_bar<S: Surface>(
    surface: &mut S,
    elapsed_ms: u32,
    duration_ms: u32,
    color: S::Color,
) -> Result<(), DisplayError> {
    let bar_y = surface.height() - BAR_BOTTOM_OFFSET;
    let bar_w = surface.width() - BAR_SIDE_MARGIN;

    surface.draw_rect(BAR_X, bar_y, bar_w, BAR_HEIGHT, color)?;
    match fill_width(bar_w - 2, elapsed_ms, duration_ms) {
        Some(fill) if fill > 0 => {
            surface.fill_rect(BAR_X + 1, bar_y + 1, fill, BAR_HEIGHT - 2, color)
        }
        _ => Ok(()),
    }
}

/// Filled width of a progress bar with `interior` usable pixels.
///
/// `None` for a zero duration; otherwise the proportional width, rounded
/// down and clamped to the interior.
pub fn fill_width(interior: i32, elapsed_ms: u32, duration_ms: u32) -> Option<i32> {
    if duration_ms == 0 {
        return None;
    }
    let interior = interior.max(0);
    let fill = u64::from(interior.unsigned_abs()) * u64::from(elapsed_ms) / u64::from(duration_ms);
    Some(fill.min(interior as u64) as i32)
}

/// `M:SS` with zero-padded seconds; minutes are not padded or capped.
pub fn format_clock(total_secs: u32) -> heapless::String<12> {
    let mut out = heapless::String::new();
    let _ = write!(out, "{}:{:02}", total_secs / 60, total_secs % 60);
    out
}

fn format_round(round: u8) -> heapless::String<12> {
    let mut out = heapless::String::new();
    let _ = write!(out, "ROUND {}/{}", round, SESSIONS_PER_CYCLE);
    out
}
