//! End-to-end control-flow scenarios, driven with a fake clock against
//! the pure logic the firmware tasks wrap.

use pico_msgbox::blink::Blinker;
use pico_msgbox::debounce::{Debouncer, Edge};
use pico_msgbox::inbox::{Ack, Inbox};
use pico_msgbox::wrap::wrap;

const DEBOUNCE_MS: u64 = 20;
const LED_TOGGLE_MS: u64 = 300;

/// Hold the button down long enough to debounce, then release it.
fn press_and_release(debouncer: &mut Debouncer, at_ms: u64) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (raw, t) in [
        (true, at_ms),
        (true, at_ms + DEBOUNCE_MS),
        (false, at_ms + 100),
        (false, at_ms + 100 + DEBOUNCE_MS),
    ] {
        edges.extend(debouncer.sample(raw, t));
    }
    edges
}

#[test]
fn first_message_flashes_until_acknowledged() {
    let mut inbox = Inbox::new();
    let mut blinker = Blinker::new(LED_TOGGLE_MS);
    let mut debouncer = Debouncer::new(DEBOUNCE_MS);

    // Boot: nothing to show, call state is good.
    assert_eq!(inbox.visible_text(false), "");
    assert!(inbox.api_success);

    // First poll returns "Hello": message screen with checkmark, LED
    // starts flashing.
    assert!(inbox.record_message("Hello"));
    blinker.set_flashing(inbox.led_flashing);
    assert_eq!(inbox.visible_text(false), "Hello");
    assert!(inbox.api_success);

    // The LED toggles at the 300 ms cadence.
    assert!(blinker.tick(1_000));
    assert!(blinker.tick(1_200)); // unchanged inside the interval
    assert!(!blinker.tick(1_300));
    assert!(blinker.tick(1_600));

    // User presses the button: flashing stops, a read receipt goes out,
    // the screen keeps showing "Hello".
    let edges = press_and_release(&mut debouncer, 2_000);
    assert_eq!(edges, vec![Edge::Pressed, Edge::Released]);
    assert_eq!(inbox.acknowledge(), Ack::SendReceipt);
    blinker.set_flashing(inbox.led_flashing);
    assert!(!blinker.tick(2_100));
    assert!(!blinker.tick(9_000));
    assert_eq!(inbox.visible_text(false), "Hello");
}

#[test]
fn failed_poll_surfaces_error_on_press() {
    let mut inbox = Inbox::new();

    inbox.record_message("Hello");
    inbox.acknowledge();

    // Next poll comes back HTTP 500.
    inbox.record_error("API error: 500");
    assert!(!inbox.api_success);

    // Not flashing, so a held press shows the error instead of the
    // message; releasing goes back to the message.
    assert_eq!(inbox.acknowledge(), Ack::ShowError);
    assert_eq!(inbox.visible_text(true), "API error: 500");
    assert_eq!(inbox.visible_text(false), "Hello");
}

#[test]
fn unchanged_poll_does_not_restart_the_indicator() {
    let mut inbox = Inbox::new();
    let mut blinker = Blinker::new(LED_TOGGLE_MS);

    assert!(inbox.record_message("Hello"));
    blinker.set_flashing(inbox.led_flashing);
    assert_eq!(inbox.acknowledge(), Ack::SendReceipt);
    blinker.set_flashing(inbox.led_flashing);

    // The service keeps returning the same body every 30 s.
    assert!(!inbox.record_message("Hello"));
    assert!(!inbox.led_flashing);
    assert!(!blinker.tick(60_000));
}

#[test]
fn bounced_press_does_not_acknowledge() {
    let mut inbox = Inbox::new();
    let mut debouncer = Debouncer::new(DEBOUNCE_MS);

    inbox.record_message("Hello");

    // A 10 ms spike of contact noise: no accepted edge, message stays
    // unread.
    assert_eq!(debouncer.sample(true, 0), None);
    assert_eq!(debouncer.sample(false, 10), None);
    assert_eq!(debouncer.sample(false, 100), None);
    assert!(!debouncer.is_pressed());
    assert!(inbox.led_flashing);
}

#[test]
fn recovery_after_error_resumes_normal_flow() {
    let mut inbox = Inbox::new();

    inbox.record_error("Connection error");
    assert_eq!(inbox.acknowledge(), Ack::ShowError);

    // The next interval's poll succeeds with fresh text.
    assert!(inbox.record_message("Back online"));
    assert!(inbox.api_success);
    assert!(inbox.led_flashing);
    assert_eq!(inbox.visible_text(true), "Back online");
}

#[test]
fn rendered_message_wraps_to_display_columns() {
    let mut inbox = Inbox::new();
    inbox.record_message("meet me at the usual place at seven tonight");

    let lines = wrap::<16>(inbox.visible_text(false), 20);
    assert_eq!(
        lines.as_slice(),
        &["meet me at the", "usual place at", "seven tonight"]
    );
    for line in &lines {
        assert!(line.chars().count() <= 20);
    }
}
