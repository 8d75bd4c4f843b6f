//! Control loop - one tick of input, timer and display work.
//!
//! The [`Controller`] owns every piece of mutable state: the active screen,
//! the start-screen selection, the [`PhaseTimer`] and the [`RenderGate`].
//! The firmware calls [`Controller::step`] in a tight loop, yielding to the
//! executor in between; nothing here sleeps except the transition flash.
//!
//! Per tick:
//! 1. poll both buttons (before any timer mutation);
//! 2. dispatch their commands, left first; screen changes and manual skips
//!    render and end the tick right there;
//! 3. on the timer screen, advance once if the running phase is used up;
//! 4. render through the gate.
//!
//! Nothing is logged here. The returned [`Tick`] tells the caller what
//! happened so the firmware can log it.

use embedded_hal::digital::InputPin;

use crate::clock::Clock;
use crate::config::{BUTTON_LEFT_PULL_UP, BUTTON_RIGHT_PULL_UP, MODES};
use crate::error::{DisplayError, Error};
use crate::phase::{Mode, Phase};
use crate::timer::PhaseTimer;
use crate::ui::buttons::{Button, Polarity};
use crate::ui::debounce::ButtonEvent;
use crate::ui::input_logic::{command_for, ends_tick, next_mode, Command, Side};
use crate::ui::render::{RenderGate, Snapshot, TimerView, View};
use crate::ui::surface::{Palette, Surface};
use crate::ui::{transition, Screen};

/// Most actions one tick can produce: pause toggle, phase reset and a
/// completion.
pub const MAX_ACTIONS_PER_TICK: usize = 3;

/// State change made during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Selected mode activated; a fresh cycle is running.
    Started { mode: usize },
    /// Start-screen selection moved.
    ModeSelected { mode: usize },
    Paused,
    Resumed,
    PhaseReset,
    /// Phase left early by the user.
    Skipped { from: Phase, to: Phase },
    /// Phase ran to the end of its duration.
    Completed { from: Phase, to: Phase },
    /// Back on the start screen.
    Exited,
}

/// Report of one [`Controller::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub left: Option<ButtonEvent>,
    pub right: Option<ButtonEvent>,
    pub actions: heapless::Vec<Action, MAX_ACTIONS_PER_TICK>,
    /// The panel was repainted.
    pub redrawn: bool,
    /// First error hit during the tick. Drawing errors take precedence
    /// over a pin read failure in the same tick. Errors never stop the
    /// tick.
    pub result: Result<(), Error>,
}

impl Tick {
    fn new(left: Option<ButtonEvent>, right: Option<ButtonEvent>) -> Self {
        Self {
            left,
            right,
            actions: heapless::Vec::new(),
            redrawn: false,
            result: Ok(()),
        }
    }

    /// Nothing was pressed, changed or drawn.
    pub fn is_idle(&self) -> bool {
        self.left.is_none()
            && self.right.is_none()
            && self.actions.is_empty()
            && !self.redrawn
            && self.result.is_ok()
    }

    fn push(&mut self, action: Action) {
        let _ = self.actions.push(action);
    }

    fn fail(&mut self, error: impl Into<Error>) {
        if self.result.is_ok() {
            self.result = Err(error.into());
        }
    }

    fn record_render(&mut self, rendered: Result<bool, DisplayError>) {
        match rendered {
            Ok(drawn) => self.redrawn |= drawn,
            Err(e) => self.fail(e),
        }
    }
}

/// The two debounced buttons, wired with the configured polarity.
pub struct Inputs<L, R> {
    pub left: Button<L>,
    pub right: Button<R>,
}

impl<L: InputPin, R: InputPin> Inputs<L, R> {
    pub fn new(left: L, right: R, now: u32) -> Self {
        Self {
            left: Button::new(left, Polarity::from_pull_up(BUTTON_LEFT_PULL_UP), now),
            right: Button::new(right, Polarity::from_pull_up(BUTTON_RIGHT_PULL_UP), now),
        }
    }
}

pub struct Controller<C> {
    screen: Screen,
    selected_mode: usize,
    timer: PhaseTimer,
    gate: RenderGate,
    palette: Palette<C>,
}

impl<C: Copy> Controller<C> {
    /// Start screen with the first mode selected and the timer parked on
    /// focus. Nothing is drawn until [`boot`](Self::boot).
    pub fn new<S: Surface<Color = C>>(surface: &S) -> Self {
        Self {
            screen: Screen::Start,
            selected_mode: 0,
            timer: PhaseTimer::new(MODES[0]),
            gate: RenderGate::new(),
            palette: Palette::new(surface),
        }
    }

    /// Paint the start screen unconditionally.
    pub fn boot<S: Surface<Color = C>>(&mut self, surface: &mut S) -> Result<(), DisplayError> {
        self.render(surface, 0, true).map(|_| ())
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_mode(&self) -> usize {
        self.selected_mode
    }

    pub fn timer(&self) -> &PhaseTimer {
        &self.timer
    }

    pub fn last_snapshot(&self) -> Option<Snapshot> {
        self.gate.last()
    }

    /// Poll both buttons, then run one [`tick`](Self::tick).
    pub fn step<L, R, S, K>(
        &mut self,
        inputs: &mut Inputs<L, R>,
        surface: &mut S,
        clock: &mut K,
    ) -> Tick
    where
        L: InputPin,
        R: InputPin,
        S: Surface<Color = C>,
        K: Clock,
    {
        let now = clock.now_ms();
        let left = inputs.left.poll(now);
        let right = inputs.right.poll(now);

        let mut tick = self.tick(
            left.unwrap_or_default(),
            right.unwrap_or_default(),
            surface,
            clock,
        );
        if let Err(e) = left.and(right) {
            tick.fail(e);
        }
        tick
    }

    /// Handle already-classified button events and keep the timer and
    /// display up to date.
    pub fn tick<S, K>(
        &mut self,
        left: Option<ButtonEvent>,
        right: Option<ButtonEvent>,
        surface: &mut S,
        clock: &mut K,
    ) -> Tick
    where
        S: Surface<Color = C>,
        K: Clock,
    {
        let mut tick = Tick::new(left, right);
        let mut force = false;

        for (side, event) in [(Side::Left, left), (Side::Right, right)] {
            let Some(command) = event.and_then(|e| command_for(self.screen, side, e)) else {
                continue;
            };
            let action = self.apply(command, surface, clock, &mut tick);
            tick.push(action);
            force = true;

            if ends_tick(command) {
                let rendered = self.render(surface, clock.now_ms(), true);
                tick.record_render(rendered);
                return tick;
            }
        }

        if self.screen == Screen::Timer && self.timer.is_complete(clock.now_ms()) {
            let from = self.timer.phase();
            let to = self.advance(true, true, surface, clock, &mut tick);
            tick.push(Action::Completed { from, to });
            force = true;
        }

        let rendered = self.render(surface, clock.now_ms(), force);
        tick.record_render(rendered);
        tick
    }

    fn apply<S, K>(
        &mut self,
        command: Command,
        surface: &mut S,
        clock: &mut K,
        tick: &mut Tick,
    ) -> Action
    where
        S: Surface<Color = C>,
        K: Clock,
    {
        let now = clock.now_ms();
        match command {
            Command::Start => {
                self.timer.set_mode(*selected(self.selected_mode));
                self.timer.restart_cycle(true, now);
                self.screen = Screen::Timer;
                Action::Started {
                    mode: self.selected_mode,
                }
            }
            Command::NextMode => {
                self.selected_mode = next_mode(self.selected_mode, MODES.len());
                Action::ModeSelected {
                    mode: self.selected_mode,
                }
            }
            Command::TogglePause => {
                self.timer.toggle(now);
                if self.timer.is_running() {
                    Action::Resumed
                } else {
                    Action::Paused
                }
            }
            Command::ResetPhase => {
                self.timer.reset_current_phase(now);
                Action::PhaseReset
            }
            Command::SkipPhase => {
                let from = self.timer.phase();
                let running = self.timer.is_running();
                let to = self.advance(from.is_focus(), running, surface, clock, tick);
                Action::Skipped { from, to }
            }
            Command::Exit => {
                self.timer.restart_cycle(false, now);
                self.screen = Screen::Start;
                Action::Exited
            }
        }
    }

    /// Move the timer on, playing the transition flash in between.
    fn advance<S, K>(
        &mut self,
        counts_toward_session: bool,
        keep_running: bool,
        surface: &mut S,
        clock: &mut K,
        tick: &mut Tick,
    ) -> Phase
    where
        S: Surface<Color = C>,
        K: Clock,
    {
        let palette = &self.palette;
        let mut flashed = Ok(());
        let next = self
            .timer
            .advance(counts_toward_session, keep_running, clock, |next, clock| {
                flashed = transition::play(surface, palette, next, clock);
            });
        if let Err(e) = flashed {
            tick.fail(e);
        }
        next
    }

    fn render<S: Surface<Color = C>>(
        &mut self,
        surface: &mut S,
        now: u32,
        force: bool,
    ) -> Result<bool, DisplayError> {
        let view = match self.screen {
            Screen::Start => View::Start {
                selected_mode: self.selected_mode,
                mode: selected(self.selected_mode),
            },
            Screen::Timer => View::Timer(TimerView::from_timer(&self.timer, now)),
        };
        self.gate.render(surface, &self.palette, &view, force)
    }
}

fn selected(index: usize) -> &'static Mode {
    MODES.get(index).unwrap_or(&MODES[0])
}
