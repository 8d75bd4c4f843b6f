//! Board bring-up for the nRF52840 + ST7789 target.
//!
//! Only compiled into the firmware binary. Everything here is glue between
//! embassy-nrf peripherals and the traits the library is written against.

use defmt::{info, warn};
use display_interface_spi::SPIInterface;
use embassy_nrf::gpio::{Output, Pull};
use embassy_nrf::peripherals::SPI3;
use embassy_nrf::spim::{self, Spim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{block_for, Delay, Duration, Instant};
use st7789::{Orientation, ST7789};

use pomodoro::clock::Clock;
use pomodoro::config::{PANEL_HEIGHT, PANEL_WIDTH};

bind_interrupts!(pub struct Irqs {
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

/// Concrete panel driver: ST7789 over SPIM3 with DC / CS / RST / BL lines.
pub type Panel = ST7789<
    SPIInterface<Spim<'static, SPI3>, Output<'static>, Output<'static>>,
    Output<'static>,
    Output<'static>,
>;

/// Millisecond clock on the embassy time driver (RTC1).
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation gives the wrapping u32 counter the library expects.
        Instant::now().as_millis() as u32
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}

/// Pin pull for a button, from its config flag.
pub fn button_pull(pull_up: bool) -> Pull {
    if pull_up {
        Pull::Up
    } else {
        Pull::None
    }
}

/// Initialise the ST7789 in landscape.
///
/// A failed init is logged and the panel handed back anyway; every later
/// draw reports its own error and the timer keeps running.
pub fn init_panel(
    spim: Spim<'static, SPI3>,
    dc: Output<'static>,
    cs: Output<'static>,
    rst: Output<'static>,
    backlight: Output<'static>,
) -> Panel {
    let interface = SPIInterface::new(spim, dc, cs);
    let mut panel = ST7789::new(
        interface,
        Some(rst),
        Some(backlight),
        PANEL_WIDTH,
        PANEL_HEIGHT,
    );

    if panel.init(&mut Delay).is_err() {
        warn!("ST7789 init failed");
    } else if panel.set_orientation(Orientation::Landscape).is_err() {
        warn!("ST7789 orientation failed");
    } else {
        info!("ST7789 ready ({}x{})", PANEL_WIDTH, PANEL_HEIGHT);
    }
    panel
}
