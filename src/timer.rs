//! Phase timer - the focus/break state machine and its elapsed-time
//! accounting.
//!
//! Time is never sampled here; every operation takes the caller's `now`
//! (a reading of the wrapping millisecond counter, see [`crate::clock`]).
//!
//! While running, elapsed time is derived from `started_at`; while paused
//! it is frozen in `paused_elapsed`. Resuming back-dates `started_at` by
//! the frozen amount, so a pause never loses or gains time.

use crate::clock::{since, Clock};
use crate::phase::{Mode, Phase};
use crate::session::SessionCounter;

#[derive(Clone, Debug)]
pub struct PhaseTimer {
    mode: Mode,
    phase: Phase,
    running: bool,
    /// Counter reading the current phase (re)started at. Only meaningful
    /// while running.
    started_at: u32,
    /// Elapsed time frozen at the last pause. Only meaningful while paused.
    paused_elapsed: u32,
    /// Duration cached from `mode` when the phase started.
    duration: u32,
    sessions: SessionCounter,
}

impl PhaseTimer {
    /// Timer parked on a fresh, not-yet-running focus phase.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            phase: Phase::Focus,
            running: false,
            started_at: 0,
            paused_elapsed: 0,
            duration: mode.duration(Phase::Focus),
            sessions: SessionCounter::new(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Switch the active mode. The current phase keeps its cached
    /// duration; the new one applies from the next `start`.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn sessions(&self) -> &SessionCounter {
        &self.sessions
    }

    /// Time spent in the current phase.
    pub fn elapsed(&self, now: u32) -> u32 {
        if self.running {
            since(now, self.started_at)
        } else {
            self.paused_elapsed
        }
    }

    pub fn remaining(&self, now: u32) -> u32 {
        self.duration.saturating_sub(self.elapsed(now))
    }

    /// The running phase has used up its duration.
    pub fn is_complete(&self, now: u32) -> bool {
        self.running && self.elapsed(now) >= self.duration
    }

    /// Enter `phase` from zero, optionally running.
    pub fn start(&mut self, phase: Phase, running: bool, now: u32) {
        self.phase = phase;
        self.duration = self.mode.duration(phase);
        self.paused_elapsed = 0;
        if running {
            self.started_at = now;
        }
        self.running = running;
    }

    pub fn pause(&mut self, now: u32) {
        if !self.running {
            return;
        }
        self.paused_elapsed = self.elapsed(now);
        self.running = false;
    }

    pub fn resume(&mut self, now: u32) {
        if self.running {
            return;
        }
        self.started_at = now.wrapping_sub(self.paused_elapsed);
        self.running = true;
    }

    pub fn toggle(&mut self, now: u32) {
        if self.running {
            self.pause(now);
        } else {
            self.resume(now);
        }
    }

    /// Restart the current phase from zero without changing whether it runs.
    pub fn reset_current_phase(&mut self, now: u32) {
        self.paused_elapsed = 0;
        if self.running {
            self.started_at = now;
        }
    }

    /// Decide the phase that follows the current one.
    ///
    /// Leaving focus records a finished session when `counts_toward_session`
    /// is set; a full cycle routes to the long break. Leaving the long break
    /// always starts a new cycle.
    pub fn next_phase(&mut self, counts_toward_session: bool) -> Phase {
        match self.phase {
            Phase::Focus => {
                if counts_toward_session {
                    self.sessions.record_focus();
                }
                if self.sessions.cycle_complete() {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak => Phase::Focus,
            Phase::LongBreak => {
                self.sessions.reset();
                Phase::Focus
            }
        }
    }

    /// Move to the next phase.
    ///
    /// `transition` runs between deciding the next phase and starting it;
    /// it is the blocking flash on the firmware. The new phase is stamped
    /// with the clock reading taken after `transition` returns.
    pub fn advance<C, F>(
        &mut self,
        counts_toward_session: bool,
        keep_running: bool,
        clock: &mut C,
        transition: F,
    ) -> Phase
    where
        C: Clock,
        F: FnOnce(Phase, &mut C),
    {
        let next = self.next_phase(counts_toward_session);
        transition(next, clock);
        self.start(next, keep_running, clock.now_ms());
        next
    }

    /// Begin a new cycle: no finished sessions, focus parked or running.
    pub fn restart_cycle(&mut self, running: bool, now: u32) {
        self.sessions.reset();
        self.start(Phase::Focus, running, now);
    }
}
