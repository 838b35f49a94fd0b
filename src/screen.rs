//! Layout of the two screens on the 128x64 panel.
//!
//! Both screens share a black background and a one-pixel white border.
//! The loading screen orbits a filled square around a circle; the text
//! screen shows a status icon in the top-right corner and the wrapped
//! body text.

use libm::{cosf, sinf};

pub const WIDTH: i32 = 128;
pub const HEIGHT: i32 = 64;

/// Columns available for the wrapped body text.
pub const WRAP_COLUMNS: usize = 20;

/// First body line position; subsequent lines step down by
/// [`LINE_SPACING`].
pub const TEXT_ORIGIN: (i32, i32) = (10, 20);
pub const LINE_SPACING: i32 = 10;

/// Rows below the first are drawn anyway and clip off the panel; this
/// just bounds the wrap buffer.
pub const MAX_BODY_LINES: usize = 16;

/// Status line on the loading screen.
pub const STATUS_TEXT_POS: (i32, i32) = (10, HEIGHT - 10);

pub const SPINNER_CENTER: (i32, i32) = (WIDTH / 2, 20);
pub const SPINNER_RADIUS: i32 = 15;
pub const SPINNER_SQUARE: i32 = 8;
pub const SPINNER_STEP_DEG: u16 = 10;

/// A line segment, endpoint to endpoint.
pub type Segment = ((i32, i32), (i32, i32));

/// Two-segment checkmark in the top-right corner.
pub const CHECK_SEGMENTS: [Segment; 2] = [
    ((WIDTH - 15, 5), (WIDTH - 10, 10)),
    ((WIDTH - 10, 10), (WIDTH - 5, 5)),
];

/// Two crossing diagonals for the failure icon.
pub const CROSS_SEGMENTS: [Segment; 2] = [
    ((WIDTH - 15, 5), (WIDTH - 5, 15)),
    ((WIDTH - 15, 15), (WIDTH - 5, 5)),
];

/// Phase of the loading animation, stepped once per rendered frame.
pub struct Spinner {
    angle: u16,
}

impl Spinner {
    pub const fn new() -> Self {
        Self { angle: 0 }
    }

    /// Current phase in degrees, [0, 360).
    pub fn angle(&self) -> u16 {
        self.angle
    }

    /// Step to the next frame, wrapping after a full revolution.
    pub fn advance(&mut self) {
        self.angle = (self.angle + SPINNER_STEP_DEG) % 360;
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-left corner of the orbiting square at the given phase.
///
/// The square's center rides the spinner circle, so its origin orbits at
/// `radius - square/2` from the circle center, truncated toward zero.
pub fn spinner_square_origin(angle_deg: u16) -> (i32, i32) {
    let rad = (angle_deg as f32).to_radians();
    let orbit = (SPINNER_RADIUS - SPINNER_SQUARE / 2) as f32;
    let x = SPINNER_CENTER.0 as f32 + orbit * cosf(rad);
    let y = SPINNER_CENTER.1 as f32 + orbit * sinf(rad);
    (x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_revolution_in_36_frames() {
        let mut spinner = Spinner::new();
        let start = spinner.angle();
        for _ in 0..36 {
            spinner.advance();
        }
        assert_eq!(spinner.angle(), start);
    }

    #[test]
    fn angle_stays_in_range() {
        let mut spinner = Spinner::new();
        for _ in 0..100 {
            spinner.advance();
            assert!(spinner.angle() < 360);
        }
    }

    #[test]
    fn square_starts_right_of_center() {
        // cos(0) = 1, sin(0) = 0: origin sits orbit-radius right of the
        // circle center.
        assert_eq!(spinner_square_origin(0), (64 + 11, 20));
    }

    #[test]
    fn square_never_leaves_the_orbit_box() {
        for step in 0..36u16 {
            let (x, y) = spinner_square_origin(step * 10);
            assert!((x - SPINNER_CENTER.0).abs() <= 11);
            assert!((y - SPINNER_CENTER.1).abs() <= 11);
        }
    }

    #[test]
    fn icons_sit_in_the_top_right_corner() {
        for ((x0, y0), (x1, y1)) in CHECK_SEGMENTS.iter().chain(&CROSS_SEGMENTS) {
            for (x, y) in [(x0, y0), (x1, y1)] {
                assert!(*x >= WIDTH - 15 && *x < WIDTH);
                assert!(*y >= 0 && *y < 20);
            }
        }
    }
}
