//! Event system for inter-task communication

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Maximum number of events that can be queued
const EVENT_QUEUE_SIZE: usize = 10;

/// Events that can be sent between tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Event {
    /// Acknowledge button went down (debounced)
    ButtonPressed,
    /// Acknowledge button came back up (debounced)
    ButtonReleased,
    /// Poll interval elapsed - time to ask the service for messages
    PollDue,
    /// Poll succeeded and the body differs from the stored message
    NewMessage,
    /// Poll succeeded with the same body as before
    PollUnchanged,
    /// Poll failed - the error is recorded in the inbox
    PollFailed,
    /// Read receipt was delivered
    ReceiptDelivered,
    /// Read receipt failed - logged, outcome otherwise discarded
    ReceiptFailed,
}

/// Global event channel for inter-task communication
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_SIZE> =
    Channel::new();

/// Send an event to the event channel (async)
pub async fn send_event(event: Event) {
    EVENT_CHANNEL.sender().send(event).await;
}

/// Receive an event from the event channel (blocking)
pub async fn receive_event() -> Event {
    EVENT_CHANNEL.receiver().receive().await
}
