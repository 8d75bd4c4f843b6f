use crate::ui::debounce::ButtonEvent;
use crate::ui::Screen;

/// Which physical button an event came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

/// What a classified press asks the controller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Activate the selected mode and start focusing.
    Start,
    /// Move the start-screen selection to the next mode.
    NextMode,
    TogglePause,
    /// Restart the current phase from zero.
    ResetPhase,
    /// Jump to the next phase without waiting for completion.
    SkipPhase,
    /// Leave the timer and go back to mode selection.
    Exit,
}

/// Map a button event to a command for the given screen.
pub fn command_for(screen: Screen, side: Side, event: ButtonEvent) -> Option<Command> {
    match (screen, side, event) {
        (Screen::Start, Side::Left, ButtonEvent::Short) => Some(Command::Start),
        (Screen::Start, Side::Right, ButtonEvent::Short) => Some(Command::NextMode),
        (Screen::Start, _, ButtonEvent::Long) => None,
        (Screen::Timer, Side::Left, ButtonEvent::Short) => Some(Command::TogglePause),
        (Screen::Timer, Side::Left, ButtonEvent::Long) => Some(Command::Exit),
        (Screen::Timer, Side::Right, ButtonEvent::Short) => Some(Command::SkipPhase),
        (Screen::Timer, Side::Right, ButtonEvent::Long) => Some(Command::ResetPhase),
    }
}

/// Commands after which the controller renders and finishes the tick:
/// screen changes and manual skips. No further input or completion check
/// is handled in the same tick.
pub fn ends_tick(command: Command) -> bool {
    matches!(command, Command::Start | Command::SkipPhase | Command::Exit)
}

/// Advance the mode selection, wrapping back to the first mode.
pub fn next_mode(selected: usize, mode_count: usize) -> usize {
    if selected + 1 < mode_count {
        selected + 1
    } else {
        0
    }
}
