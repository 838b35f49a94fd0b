//! Unread-message LED task
//! Flashes the indicator while a message is unread, holds it off otherwise

use defmt::info;
use embassy_futures::select::{Either, select};
use embassy_rp::gpio::Output;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Timer};

use pico_msgbox::blink::Blinker;

use crate::config::{INDICATOR_TICK_MS, LED_TOGGLE_INTERVAL_MS};

/// Signal carrying the desired flashing state
static FLASHING_SIGNAL: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Arm or disarm the unread indicator
pub fn set_flashing(on: bool) {
    FLASHING_SIGNAL.signal(on);
}

/// Indicator task - owns the LED output and drives the blink schedule
#[embassy_executor::task]
pub async fn indicator_driver(mut led: Output<'static>) -> ! {
    info!("Indicator task started");

    let mut blinker = Blinker::new(LED_TOGGLE_INTERVAL_MS);

    loop {
        if !blinker.is_flashing() {
            // Parked: output held off until someone arms us.
            led.set_low();
            let on = FLASHING_SIGNAL.wait().await;
            blinker.set_flashing(on);
            continue;
        }

        if blinker.tick(Instant::now().as_millis()) {
            led.set_high();
        } else {
            led.set_low();
        }

        // Re-evaluate at the tick cadence, or immediately on a mode change.
        match select(
            FLASHING_SIGNAL.wait(),
            Timer::after(Duration::from_millis(INDICATOR_TICK_MS)),
        )
        .await
        {
            Either::First(on) => blinker.set_flashing(on),
            Either::Second(()) => {}
        }
    }
}
