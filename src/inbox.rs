//! Message state: the latest fetched text, the last error, and the two
//! flags the control flow hangs off.

use heapless::String;

/// Longest message body kept; anything longer is clipped.
pub const MESSAGE_CAPACITY: usize = 256;

/// Longest stored error description.
pub const ERROR_CAPACITY: usize = 96;

/// Outcome of a debounced button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// Nothing to do.
    Nothing,
    /// The unread indicator was armed: stop it and notify the service.
    SendReceipt,
    /// The last call failed: surface the error while the button is held.
    ShowError,
}

/// All mutable device state outside the hardware tasks.
///
/// Errors are never cleared, only overwritten; the message is replaced
/// wholesale on each successful poll that brings new text.
pub struct Inbox {
    current: String<MESSAGE_CAPACITY>,
    error: String<ERROR_CAPACITY>,
    pub api_success: bool,
    pub led_flashing: bool,
}

impl Inbox {
    pub const fn new() -> Self {
        Self {
            current: String::new(),
            error: String::new(),
            api_success: true,
            led_flashing: false,
        }
    }

    pub fn message(&self) -> &str {
        self.current.as_str()
    }

    pub fn error_text(&self) -> &str {
        self.error.as_str()
    }

    /// Store a successfully polled body. Returns `true` when the text
    /// differs from the stored message, which also arms the unread
    /// indicator; an identical body changes nothing.
    pub fn record_message(&mut self, text: &str) -> bool {
        self.api_success = true;
        let clipped = clip(text, MESSAGE_CAPACITY);
        if clipped == self.current.as_str() {
            return false;
        }
        self.current.clear();
        let _ = self.current.push_str(clipped);
        self.led_flashing = true;
        true
    }

    /// Record a failed poll or Wi-Fi attempt.
    pub fn record_error(&mut self, text: &str) {
        self.api_success = false;
        self.error.clear();
        let _ = self.error.push_str(clip(text, ERROR_CAPACITY));
    }

    /// Apply a debounced press edge and report what it triggers.
    pub fn acknowledge(&mut self) -> Ack {
        if self.led_flashing {
            self.led_flashing = false;
            Ack::SendReceipt
        } else if !self.api_success {
            Ack::ShowError
        } else {
            Ack::Nothing
        }
    }

    /// Body text to render. Flashing always shows the message; a held
    /// button after a failed call shows the error; otherwise the message.
    pub fn visible_text(&self, button_held: bool) -> &str {
        if self.led_flashing {
            self.current.as_str()
        } else if button_held && !self.api_success {
            self.error.as_str()
        } else {
            self.current.as_str()
        }
    }
}

impl Default for Inbox {
    fn default() -> Self {
        Self::new()
    }
}

/// Longest prefix of `text` that fits `max` bytes, on a char boundary.
pub fn clip(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
