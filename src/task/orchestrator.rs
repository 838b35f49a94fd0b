//! Orchestrator task
//! Applies events to the shared state and steers the other tasks

use defmt::info;
use embassy_time::{Duration, Timer};

use pico_msgbox::inbox::Ack;

use crate::config::POLL_INTERVAL_SECS;
use crate::event::{Event, receive_event, send_event};
use crate::state::get_state;
use crate::task::display::signal_redraw;
use crate::task::indicator::set_flashing;
use crate::task::network::{signal_poll, signal_receipt};

/// Main orchestrator task - coordinates application flow based on events
#[embassy_executor::task]
pub async fn orchestrator() -> ! {
    info!("Orchestrator task started");

    loop {
        let event = receive_event().await;

        match event {
            Event::ButtonPressed => {
                let ack = {
                    let mut state = get_state().await;
                    state.button_held = true;
                    state.inbox.acknowledge()
                };
                match ack {
                    Ack::SendReceipt => {
                        info!("Message acknowledged - stopping indicator");
                        set_flashing(false);
                        signal_receipt();
                    }
                    Ack::ShowError => {
                        info!("Button pressed after a failed call - showing error");
                    }
                    Ack::Nothing => {}
                }
                signal_redraw();
            }
            Event::ButtonReleased => {
                {
                    let mut state = get_state().await;
                    state.button_held = false;
                }
                signal_redraw();
            }
            Event::PollDue => {
                signal_poll();
            }
            Event::NewMessage => {
                info!("New message - arming indicator");
                set_flashing(true);
                signal_redraw();
            }
            Event::PollUnchanged | Event::PollFailed => {
                // Refresh the status icon (and error text, if held).
                signal_redraw();
            }
            Event::ReceiptDelivered | Event::ReceiptFailed => {
                // Outcome is deliberately not acted on; just leave the
                // delivery screen.
                signal_redraw();
            }
        }
    }
}

/// Poll scheduler task - fires an immediate poll at startup, then one
/// every poll interval.
#[embassy_executor::task]
pub async fn poll_scheduler() -> ! {
    info!("Poll scheduler task started");

    loop {
        send_event(Event::PollDue).await;
        Timer::after(Duration::from_secs(POLL_INTERVAL_SECS)).await;
    }
}
