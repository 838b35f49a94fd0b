//! # Wi-Fi Message Box
//! Raspberry Pi Pico W that polls an HTTP inbox and shows the latest
//! message on a 128x64 SSD1306 OLED. A new message flashes the LED until
//! the button acknowledges it, which posts a read receipt back.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use {defmt_rtt as _, panic_probe as _};

mod api;
mod config;
mod event;
mod state;
mod task;

use task::{
    WifiPeripherals, button_watcher, display_driver, indicator_driver, network_worker,
    orchestrator, poll_scheduler,
};

/// Firmware version - automatically populated from Cargo.toml
pub static FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Helper function to spawn tasks and unwrap, panicking if spawn fails.
/// This is acceptable during initialization as we want to fail fast if we can't spawn a task.
#[allow(clippy::unwrap_used)]
fn spawn_unwrap<S>(spawner: &Spawner, token: embassy_executor::SpawnToken<S>) {
    spawner.spawn(token).unwrap();
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Starting message box v{}", FIRMWARE_VERSION);

    let p = embassy_rp::init(Default::default());

    // OLED first, so the boot screen animates while Wi-Fi comes up.
    let i2c_bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    spawn_unwrap(&spawner, display_driver(i2c_bus));

    let controls = config::init_controls(p.PIN_16, p.PIN_17);
    spawn_unwrap(&spawner, button_watcher(controls.button));
    spawn_unwrap(&spawner, indicator_driver(controls.led));

    let wifi = WifiPeripherals {
        pwr_pin: p.PIN_23,
        cs_pin: p.PIN_25,
        pio: p.PIO0,
        dio_pin: p.PIN_24,
        clk_pin: p.PIN_29,
        dma_ch: p.DMA_CH0,
    };
    spawn_unwrap(&spawner, network_worker(spawner, wifi));

    spawn_unwrap(&spawner, orchestrator());
    spawn_unwrap(&spawner, poll_scheduler());

    info!("All tasks spawned successfully");
}
