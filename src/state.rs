//! Global state management
//! Provides thread-safe access to shared state across tasks

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use heapless::String;

use pico_msgbox::inbox::{Inbox, MESSAGE_CAPACITY};

/// Shared application state
pub struct AppState {
    /// Message text, error text and the unread/success flags.
    pub inbox: Inbox,
    /// Debounced button level, true while held down.
    pub button_held: bool,
    /// While set, the display shows the loading screen with this status
    /// line (Wi-Fi bring-up at boot, read-receipt delivery later).
    pub busy: Option<&'static str>,
}

impl AppState {
    pub const fn new() -> Self {
        Self {
            inbox: Inbox::new(),
            button_held: false,
            busy: Some("Connecting to Wi-Fi"),
        }
    }
}

/// Global application state, protected by mutex
pub static APP_STATE: Mutex<CriticalSectionRawMutex, AppState> =
    Mutex::new(AppState::new());

/// Get a reference to the global application state
pub async fn get_state()
-> embassy_sync::mutex::MutexGuard<'static, CriticalSectionRawMutex, AppState> {
    APP_STATE.lock().await
}

/// What the display should draw right now.
pub enum Screen {
    Busy { status: &'static str },
    Message { body: String<MESSAGE_CAPACITY>, ok: bool },
}

/// Copy out everything the renderer needs, so the lock is not held
/// across the I²C transfer.
pub async fn snapshot() -> Screen {
    let state = get_state().await;
    if let Some(status) = state.busy {
        Screen::Busy { status }
    } else {
        let mut body = String::new();
        let _ = body.push_str(state.inbox.visible_text(state.button_held));
        Screen::Message {
            body,
            ok: state.inbox.api_success,
        }
    }
}
