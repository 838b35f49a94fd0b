//! Acknowledge-button task
//! Debounces the input and sends press/release events

use defmt::info;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Timer};

use pico_msgbox::debounce::{Debouncer, Edge};

use crate::config::{DEBOUNCE_SAMPLE_MS, DEBOUNCE_WINDOW_MS};
use crate::event::{Event, send_event};

/// Button watcher task - sleeps on GPIO edges, then samples the line
/// through the stability window until it settles.
/// The button is active-low with a pull-up resistor.
#[embassy_executor::task]
pub async fn button_watcher(mut button: Input<'static>) -> ! {
    info!("Button watcher task started");

    let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW_MS);

    loop {
        // Nothing moves most of the time: let the GPIO interrupt wake us.
        button.wait_for_any_edge().await;

        loop {
            let raw = button.is_low();
            match debouncer.sample(raw, Instant::now().as_millis()) {
                Some(Edge::Pressed) => {
                    info!("Button pressed");
                    send_event(Event::ButtonPressed).await;
                }
                Some(Edge::Released) => {
                    info!("Button released");
                    send_event(Event::ButtonReleased).await;
                }
                None => {}
            }
            if debouncer.settled(Instant::now().as_millis()) {
                break;
            }
            Timer::after(Duration::from_millis(DEBOUNCE_SAMPLE_MS)).await;
        }
    }
}
