//! Completed-focus counter that decides short vs long breaks.

use crate::config::SESSIONS_PER_CYCLE;

/// Number of focus phases finished in the current cycle, clamped to
/// `0..=SESSIONS_PER_CYCLE`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionCounter {
    completed: u8,
}

impl SessionCounter {
    pub const fn new() -> Self {
        Self { completed: 0 }
    }

    pub fn completed(&self) -> u8 {
        self.completed
    }

    /// True once the cycle is full and the next break must be long.
    pub fn cycle_complete(&self) -> bool {
        self.completed >= SESSIONS_PER_CYCLE
    }

    /// Round shown on screen: finished sessions, plus the one in progress
    /// while focusing, kept within `1..=SESSIONS_PER_CYCLE`.
    pub fn display_round(&self, focusing: bool) -> u8 {
        let round = self.completed + u8::from(focusing);
        round.clamp(1, SESSIONS_PER_CYCLE)
    }

    pub(crate) fn record_focus(&mut self) {
        self.completed = (self.completed + 1).min(SESSIONS_PER_CYCLE);
    }

    pub(crate) fn reset(&mut self) {
        self.completed = 0;
    }
}
