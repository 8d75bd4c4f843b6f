//! Work/rest phases and the duration presets they are timed against.

/// One segment of the work/rest cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Upper-case label shown on the timer and transition screens.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Focus => "FOCUS",
            Phase::ShortBreak => "SHORT BREAK",
            Phase::LongBreak => "LONG BREAK",
        }
    }

    pub fn is_focus(self) -> bool {
        matches!(self, Phase::Focus)
    }
}

/// A named set of phase durations, all in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mode {
    pub label: &'static str,
    pub focus_ms: u32,
    pub short_break_ms: u32,
    pub long_break_ms: u32,
}

impl Mode {
    pub const fn new(
        label: &'static str,
        focus_ms: u32,
        short_break_ms: u32,
        long_break_ms: u32,
    ) -> Self {
        Self {
            label,
            focus_ms,
            short_break_ms,
            long_break_ms,
        }
    }

    /// Length of `phase` under this mode.
    pub fn duration(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Focus => self.focus_ms,
            Phase::ShortBreak => self.short_break_ms,
            Phase::LongBreak => self.long_break_ms,
        }
    }
}
