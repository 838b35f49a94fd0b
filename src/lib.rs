//! Control logic for the Pico W message box.
//!
//! Everything in here is pure and host-testable: debouncing, the LED
//! blink schedule, the message/flag state, word wrapping and the screen
//! geometry. The firmware binary (`main.rs`, behind the `embedded`
//! feature) wires these into embassy tasks and real peripherals.

#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod debounce;
pub mod inbox;
pub mod screen;
pub mod wrap;
