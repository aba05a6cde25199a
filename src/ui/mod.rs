//! User interface subsystem - SSD1309 OLED operating screen.
//!
//! The operations engine talks to the display only through the
//! [`panel::StatusPanel`] trait; `screen` implements it on the real
//! hardware and adds the readouts (tip temperature, power) that the
//! main loop updates directly.

pub mod panel;
pub mod screen;

pub use panel::StatusPanel;
