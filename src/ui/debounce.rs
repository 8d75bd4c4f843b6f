//! Non-blocking debounce and press classification for one button.
//!
//! The debouncer is fed one raw "asserted" sample per control-loop tick.
//! Every raw flip restarts the settle window; only a reading that has stayed
//! put for longer than [`DEBOUNCE_MS`] may change the stable state.
//!
//! Presses are classified on the stable signal:
//! - release before [`LONG_PRESS_MS`] → [`ButtonEvent::Short`] on release;
//! - hold for [`LONG_PRESS_MS`] → [`ButtonEvent::Long`] while still held,
//!   and the release that follows is swallowed.

use crate::clock::since;
use crate::config::{DEBOUNCE_MS, LONG_PRESS_MS};

/// Classified press, emitted at most once per call to [`Debouncer::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Short,
    Long,
}

#[derive(Clone, Debug)]
pub struct Debouncer {
    stable_pressed: bool,
    last_reading: bool,
    /// Counter reading of the most recent raw flip.
    last_flip_at: u32,
    /// Counter reading when the stable state became pressed.
    pressed_at: u32,
    long_fired: bool,
}

impl Debouncer {
    /// Start settled on `initial_pressed`.
    ///
    /// A button already held at power-up is treated as if its long press had
    /// fired, so neither a long press nor a release event comes out of it.
    pub fn new(initial_pressed: bool, now: u32) -> Self {
        Self {
            stable_pressed: initial_pressed,
            last_reading: initial_pressed,
            last_flip_at: now,
            pressed_at: now,
            long_fired: initial_pressed,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.stable_pressed
    }

    /// Feed one raw sample taken at `now`.
    pub fn update(&mut self, reading: bool, now: u32) -> Option<ButtonEvent> {
        if reading != self.last_reading {
            self.last_flip_at = now;
            self.last_reading = reading;
        }

        if since(now, self.last_flip_at) > DEBOUNCE_MS && reading != self.stable_pressed {
            self.stable_pressed = reading;
            if reading {
                self.pressed_at = now;
                self.long_fired = false;
            } else if !self.long_fired {
                return Some(ButtonEvent::Short);
            }
        }

        if self.stable_pressed
            && !self.long_fired
            && since(now, self.pressed_at) >= LONG_PRESS_MS
        {
            self.long_fired = true;
            return Some(ButtonEvent::Long);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Drive `reading` every millisecond over `from..to`, collecting events.
    fn hold(
        debouncer: &mut Debouncer,
        reading: bool,
        from: u32,
        to: u32,
        events: &mut heapless::Vec<(u32, ButtonEvent), 8>,
    ) {
        for now in from..to {
            if let Some(event) = debouncer.update(reading, now) {
                let _ = events.push((now, event));
            }
        }
    }

    #[test]
    fn idle_button_emits_nothing() {
        let mut debouncer = Debouncer::new(false, 0);
        let mut events = heapless::Vec::new();
        hold(&mut debouncer, false, 0, 5_000, &mut events);
        assert!(events.is_empty());
        assert!(!debouncer.is_pressed());
    }

    #[test]
    fn press_settles_after_debounce_window() {
        let mut debouncer = Debouncer::new(false, 0);
        assert_eq!(debouncer.update(true, 100), None);
        assert!(!debouncer.is_pressed());
        // Exactly the window is not enough; it must be exceeded.
        assert_eq!(debouncer.update(true, 130), None);
        assert!(!debouncer.is_pressed());
        assert_eq!(debouncer.update(true, 131), None);
        assert!(debouncer.is_pressed());
    }

    #[test]
    fn short_press_fires_once_on_release() {
        let mut debouncer = Debouncer::new(false, 0);
        let mut events = heapless::Vec::new();
        hold(&mut debouncer, true, 0, 500, &mut events);
        hold(&mut debouncer, false, 500, 1_000, &mut events);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1, ButtonEvent::Short);
        // Reported once the release has settled.
        assert_eq!(events[0].0, 531);
    }

    #[test]
    fn long_press_fires_while_held_and_swallows_release() {
        let mut debouncer = Debouncer::new(false, 0);
        let mut events = heapless::Vec::new();
        hold(&mut debouncer, true, 0, 4_000, &mut events);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1, ButtonEvent::Long);
        // Stable from t=31, long after 2000 ms of stable press.
        assert_eq!(events[0].0, 2_031);

        hold(&mut debouncer, false, 4_000, 5_000, &mut events);
        assert_eq!(events.len(), 1);
        assert!(!debouncer.is_pressed());
    }

    #[test]
    fn release_just_before_threshold_is_short() {
        let mut debouncer = Debouncer::new(false, 0);
        let mut events = heapless::Vec::new();
        // Stable press at 31; released stably at 2_030 → held 1_999 ms.
        hold(&mut debouncer, true, 0, 1_999, &mut events);
        hold(&mut debouncer, false, 1_999, 2_500, &mut events);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].1, ButtonEvent::Short);
    }

    #[test]
    fn every_raw_flip_restarts_window() {
        let mut debouncer = Debouncer::new(false, 0);
        // Chatter: flip every 20 ms for a while, never stable for 30 ms.
        let mut reading = false;
        for now in (0..400).step_by(20) {
            reading = !reading;
            assert_eq!(debouncer.update(reading, now), None);
            assert_eq!(debouncer.update(reading, now + 19), None);
        }
        assert!(!debouncer.is_pressed());
    }

    #[test]
    fn second_press_after_long_press_can_be_short() {
        let mut debouncer = Debouncer::new(false, 0);
        let mut events = heapless::Vec::new();
        hold(&mut debouncer, true, 0, 3_000, &mut events);
        hold(&mut debouncer, false, 3_000, 3_200, &mut events);
        hold(&mut debouncer, true, 3_200, 3_400, &mut events);
        hold(&mut debouncer, false, 3_400, 3_600, &mut events);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].1, ButtonEvent::Long);
        assert_eq!(events[1].1, ButtonEvent::Short);
    }

    #[test]
    fn held_at_power_up_is_ignored() {
        let mut debouncer = Debouncer::new(true, 0);
        let mut events = heapless::Vec::new();
        hold(&mut debouncer, true, 0, 5_000, &mut events);
        hold(&mut debouncer, false, 5_000, 5_500, &mut events);
        assert!(events.is_empty());
        assert!(!debouncer.is_pressed());
    }

    #[test]
    fn works_across_counter_wraparound() {
        let start = u32::MAX - 1_000;
        let mut debouncer = Debouncer::new(false, start);
        let mut long_at = None;
        for offset in 0..3_000u32 {
            let now = start.wrapping_add(offset);
            if let Some(ButtonEvent::Long) = debouncer.update(true, now) {
                long_at = Some(offset);
            }
        }
        assert_eq!(long_at, Some(2_031));
    }

    proptest! {
        /// A glitch shorter than the debounce window never moves the
        /// stable state, whichever side it starts on.
        #[test]
        fn short_glitch_is_rejected(
            settled in any::<bool>(),
            glitch_len in 1u32..=DEBOUNCE_MS,
            start in 100u32..10_000,
        ) {
            let mut debouncer = Debouncer::new(settled, 0);
            for now in 0..start {
                debouncer.update(settled, now);
            }
            for now in start..start + glitch_len {
                prop_assert_eq!(debouncer.update(!settled, now), None);
                prop_assert_eq!(debouncer.is_pressed(), settled);
            }
            for now in start + glitch_len..start + glitch_len + 200 {
                prop_assert_eq!(debouncer.update(settled, now), None);
                prop_assert_eq!(debouncer.is_pressed(), settled);
            }
        }

        /// One stable press yields exactly one event, and its kind depends
        /// only on how long the press was held.
        #[test]
        fn one_press_one_event(held in 40u32..5_000) {
            let mut debouncer = Debouncer::new(false, 0);
            let mut shorts = 0;
            let mut longs = 0;
            for now in 0..1_000 + held + 1_000 {
                let pressed = (1_000..1_000 + held).contains(&now);
                match debouncer.update(pressed, now) {
                    Some(ButtonEvent::Short) => shorts += 1,
                    Some(ButtonEvent::Long) => longs += 1,
                    None => {}
                }
            }
            // A release confirmed on the very tick the hold reaches the
            // threshold is still a short press.
            if held > LONG_PRESS_MS {
                prop_assert_eq!((shorts, longs), (0, 1));
            } else {
                prop_assert_eq!((shorts, longs), (1, 0));
            }
        }
    }
}
