//! Millisecond clock boundary.
//!
//! The counter is a free-running `u32` that wraps after ~49.7 days. Every
//! consumer only ever takes `wrapping_sub` deltas between two readings, so
//! a wrap between them is harmless.

/// Monotonic millisecond source plus the one blocking wait the firmware
/// allows itself (the phase-transition flash).
pub trait Clock {
    /// Current counter value in milliseconds.
    fn now_ms(&self) -> u32;

    /// Busy-wait for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Milliseconds from `earlier` to `now`, tolerant of counter wraparound.
#[inline]
pub fn since(now: u32, earlier: u32) -> u32 {
    now.wrapping_sub(earlier)
}
