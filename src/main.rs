//! Pomodoro timer firmware - entry point.
//!
//! Target: nRF52840 with an ST7789 240×135 TFT and two push buttons.
//!
//! A single embassy task runs the control loop: poll the buttons, tick the
//! controller, log what happened, yield. There is no sleeping between
//! ticks; the only blocking wait is the phase-change flash.

#![no_std]
#![no_main]

mod firmware;

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive};
use embassy_nrf::spim::{self, Spim};
use {defmt_rtt as _, panic_probe as _};

use pomodoro::clock::Clock;
use pomodoro::config::{BUTTON_LEFT_PULL_UP, BUTTON_RIGHT_PULL_UP};
use pomodoro::ui::display::GraphicsSurface;
use pomodoro::{Controller, Inputs, Tick};

use crate::firmware::{button_pull, EmbassyClock, Irqs};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("pomodoro starting");

    // Display: SPIM3, TX only
    let mut config = spim::Config::default();
    config.frequency = spim::Frequency::M32;
    config.mode = spim::MODE_3;
    let spim = Spim::new_txonly(p.SPI3, Irqs, p.P0_27, p.P0_26, config);

    let dc = Output::new(p.P0_04, Level::Low, OutputDrive::Standard);
    let cs = Output::new(p.P0_03, Level::High, OutputDrive::Standard);
    let rst = Output::new(p.P0_28, Level::High, OutputDrive::Standard);
    let backlight = Output::new(p.P0_29, Level::High, OutputDrive::Standard);
    let panel = firmware::init_panel(spim, dc, cs, rst, backlight);

    // Buttons
    let left = Input::new(p.P0_11, button_pull(BUTTON_LEFT_PULL_UP));
    let right = Input::new(p.P0_12, button_pull(BUTTON_RIGHT_PULL_UP));

    let mut clock = EmbassyClock;
    let mut surface = GraphicsSurface::new(panel);
    let mut inputs = Inputs::new(left, right, clock.now_ms());
    let mut controller = Controller::new(&surface);

    if let Err(e) = controller.boot(&mut surface) {
        warn!("start screen draw failed: {}", e);
    }
    info!("ready");

    loop {
        let tick = controller.step(&mut inputs, &mut surface, &mut clock);
        log_tick(&tick);
        embassy_futures::yield_now().await;
    }
}

fn log_tick(tick: &Tick) {
    if tick.is_idle() {
        return;
    }
    if let Some(event) = tick.left {
        debug!("left: {}", event);
    }
    if let Some(event) = tick.right {
        debug!("right: {}", event);
    }
    for action in &tick.actions {
        info!("{}", action);
    }
    if let Err(e) = tick.result {
        warn!("tick error: {}", e);
    }
}
