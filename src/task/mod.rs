//! Task modules
//! Contains all background tasks for the application

pub mod buttons;
pub mod display;
pub mod indicator;
pub mod network;
pub mod orchestrator;

// Re-export commonly used items
pub use buttons::button_watcher;
pub use display::display_driver;
pub use indicator::indicator_driver;
pub use network::{WifiPeripherals, network_worker};
pub use orchestrator::{orchestrator, poll_scheduler};
