//! Keypad subsystem - matrix scanning, debouncing, and the shared
//! key queue.
//!
//! ## Components
//!
//! - **keymap**: the key alphabet and 4x4 layout
//! - **matrix**: per-key debounce filters for the raw contact bitmap
//! - **queue**: bounded FIFO with the key-repeat limiter
//! - **task**: Embassy scan task bridging GPIO to the shared queue

pub mod keymap;
pub mod matrix;
pub mod queue;
pub mod task;

pub use keymap::{KeyCode, KEY_LAYOUT};
pub use matrix::MatrixDebouncer;
pub use queue::RepeatQueue;
