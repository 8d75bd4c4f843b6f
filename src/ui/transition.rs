//! Phase-change banner and flash.
//!
//! This is the only place the control loop blocks: a fixed number of
//! full-screen flashes with fixed waits in between. The sequence always
//! runs to the end, even if the panel reports errors part-way through.

use crate::clock::Clock;
use crate::config::{
    TRANSITION_FLASHES, TRANSITION_FLASH_MS, TRANSITION_LINE1_Y, TRANSITION_LINE2_Y,
};
use crate::error::DisplayError;
use crate::phase::Phase;
use crate::ui::surface::{print_centered, Palette, Surface};

const BANNER: &str = "PHASE CHANGE";

/// Total time spent blocked in [`play`].
pub const TRANSITION_TOTAL_MS: u32 = TRANSITION_FLASHES as u32 * 2 * TRANSITION_FLASH_MS;

/// Announce `next` and flash the panel. Returns the first drawing error,
/// if any, after the whole sequence has run.
pub fn play<S: Surface, C: Clock>(
    surface: &mut S,
    palette: &Palette<S::Color>,
    next: Phase,
    clock: &mut C,
) -> Result<(), DisplayError> {
    let mut result = draw_banner(surface, palette, next);

    for _ in 0..TRANSITION_FLASHES {
        result = result.and(surface.clear(palette.flash));
        clock.delay_ms(TRANSITION_FLASH_MS);
        result = result.and(surface.clear(palette.background));
        clock.delay_ms(TRANSITION_FLASH_MS);
    }

    result
}

fn draw_banner<S: Surface>(
    surface: &mut S,
    palette: &Palette<S::Color>,
    next: Phase,
) -> Result<(), DisplayError> {
    surface.clear(palette.background)?;
    surface.set_text_color(palette.phase(next), palette.background);
    print_centered(surface, BANNER, 2, TRANSITION_LINE1_Y)?;
    print_centered(surface, next.label(), 2, TRANSITION_LINE2_Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, ManualClock, RecordingSurface};

    #[test]
    fn flashes_three_times_and_blocks_540ms() {
        let mut surface = RecordingSurface::new(240, 135);
        let palette = Palette::new(&surface);
        let mut clock = ManualClock::new(1_000);

        assert_eq!(play(&mut surface, &palette, Phase::ShortBreak, &mut clock), Ok(()));

        assert_eq!(TRANSITION_TOTAL_MS, 540);
        assert_eq!(clock.now_ms(), 1_540);
        assert_eq!(clock.delays(), &[90, 90, 90, 90, 90, 90]);

        let flashes = surface.count(|c| *c == Call::Clear(palette.flash));
        let blanks = surface.count(|c| *c == Call::Clear(palette.background));
        assert_eq!(flashes, 3);
        // Banner clear plus one per flash.
        assert_eq!(blanks, 4);
        // Screen ends blank.
        assert_eq!(surface.calls.last(), Some(&Call::Clear(palette.background)));
    }

    #[test]
    fn banner_names_next_phase_in_its_colour() {
        let mut surface = RecordingSurface::new(240, 135);
        let palette = Palette::new(&surface);
        let mut clock = ManualClock::new(0);

        play(&mut surface, &palette, Phase::LongBreak, &mut clock).unwrap();

        assert_eq!(surface.printed(), ["PHASE CHANGE", "LONG BREAK"]);
        assert!(surface.printed_at("PHASE CHANGE", 48, 40, 2));
        assert!(surface.printed_at("LONG BREAK", 60, 68, 2));
        assert!(surface
            .calls
            .contains(&Call::TextColor(palette.long_break, palette.background)));
    }

    #[test]
    fn display_failure_does_not_cut_sequence_short() {
        let mut surface = RecordingSurface::new(240, 135);
        let palette = Palette::new(&surface);
        let mut clock = ManualClock::new(0);
        surface.fail = true;

        assert_eq!(
            play(&mut surface, &palette, Phase::Focus, &mut clock),
            Err(DisplayError::Bus)
        );
        assert_eq!(clock.now_ms(), TRANSITION_TOTAL_MS);
    }
}
