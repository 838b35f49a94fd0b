//! Blink schedule for the unread-message LED.

/// Toggle policy for the indicator output.
///
/// While flashing, the level flips whenever at least `interval_ms` has
/// elapsed since the previous flip. While not flashing, every tick
/// forces the level off, not just the transition.
pub struct Blinker {
    interval_ms: u64,
    flashing: bool,
    lit: bool,
    last_toggle_ms: u64,
}

impl Blinker {
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            flashing: false,
            lit: false,
            last_toggle_ms: 0,
        }
    }

    /// Arm or disarm flashing. Disarming drops the level immediately.
    pub fn set_flashing(&mut self, on: bool) {
        self.flashing = on;
        if !on {
            self.lit = false;
        }
    }

    pub fn is_flashing(&self) -> bool {
        self.flashing
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Advance the schedule and return the output level to drive.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.flashing {
            if now_ms.saturating_sub(self.last_toggle_ms) >= self.interval_ms {
                self.last_toggle_ms = now_ms;
                self.lit = !self.lit;
            }
        } else {
            self.lit = false;
        }
        self.lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: u64 = 300;

    #[test]
    fn off_while_not_flashing() {
        let mut b = Blinker::new(INTERVAL);
        assert!(!b.tick(0));
        assert!(!b.tick(1000));
    }

    #[test]
    fn toggles_no_faster_than_interval() {
        let mut b = Blinker::new(INTERVAL);
        b.set_flashing(true);
        assert!(b.tick(1000)); // first toggle lights up
        assert!(b.tick(1100)); // within the interval, unchanged
        assert!(b.tick(1299));
        assert!(!b.tick(1300)); // interval elapsed, toggles off
        assert!(!b.tick(1500));
        assert!(b.tick(1600));
    }

    #[test]
    fn disarm_forces_off_on_next_tick() {
        let mut b = Blinker::new(INTERVAL);
        b.set_flashing(true);
        assert!(b.tick(1000));
        b.set_flashing(false);
        assert!(!b.is_lit());
        assert!(!b.tick(1001));
        // Stays off no matter how much time passes.
        assert!(!b.tick(5000));
    }

    #[test]
    fn rearming_resumes_promptly() {
        let mut b = Blinker::new(INTERVAL);
        b.set_flashing(true);
        b.tick(1000);
        b.set_flashing(false);
        b.tick(1001);
        b.set_flashing(true);
        assert!(b.tick(2000));
    }
}
