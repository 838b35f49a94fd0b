//! Pin map, timing constants and compiled-in device settings.
//!
//! Wi-Fi credentials and API endpoints are generated at build time from
//! `device.toml` (see `build.rs`).

include!(concat!(env!("OUT_DIR"), "/config_generated.rs"));

use embassy_rp::{
    Peri,
    gpio::{Input, Level, Output, Pull},
    peripherals,
};

// GPIO pin assignments
//
//   Acknowledge button → GPIO16 (active-low, internal pull-up)
//   Unread-message LED → GPIO17
//   OLED I²C0 SDA      → GPIO4
//   OLED I²C0 SCL      → GPIO5
//
// The Wi-Fi chip pins (23/24/25/29, PIO0, DMA0) are fixed by the Pico W
// board layout.

/// Stability window for the acknowledge button. A mechanical switch
/// settles well within 20 ms.
pub const DEBOUNCE_WINDOW_MS: u64 = 20;

/// Sampling period while the button line is moving.
pub const DEBOUNCE_SAMPLE_MS: u64 = 5;

/// LED flip interval while a message is unread.
pub const LED_TOGGLE_INTERVAL_MS: u64 = 300;

/// How often the indicator task re-evaluates its schedule.
pub const INDICATOR_TICK_MS: u64 = 50;

/// Message poll spacing, enforced by the scheduler task.
pub const POLL_INTERVAL_SECS: u64 = 30;

/// Frame period of the loading-screen animation.
pub const LOADING_FRAME_MS: u64 = 100;

/// Wi-Fi join attempts at boot before giving up until the next power
/// cycle. Each poll interval still retries the network path naturally.
pub const WIFI_JOIN_ATTEMPTS: u32 = 3;

/// The user-facing controls: one button, one LED.
pub struct Controls {
    pub button: Input<'static>,
    pub led: Output<'static>,
}

/// Initialize the button and LED GPIOs.
pub fn init_controls(
    button_pin: Peri<'static, peripherals::PIN_16>,
    led_pin: Peri<'static, peripherals::PIN_17>,
) -> Controls {
    let button = Input::new(button_pin, Pull::Up);
    let led = Output::new(led_pin, Level::Low);
    Controls { button, led }
}
