//! Test-only library interface for ironpad.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required): the key map, the
//! repeat-filtered key queue, the matrix debouncer, and the keypad
//! operations engine.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;

// Internal module paths for the actual implementations
#[path = "keypad/keymap.rs"]
mod keypad_keymap_impl;
#[path = "keypad/matrix.rs"]
mod keypad_matrix_impl;
#[path = "keypad/queue.rs"]
mod keypad_queue_impl;

#[path = "ops/engine.rs"]
mod ops_engine_impl;
#[path = "ops/presets.rs"]
mod ops_presets_impl;
#[path = "ops/settings.rs"]
mod ops_settings_impl;

#[path = "ui/panel.rs"]
mod ui_panel_impl;

// ═══════════════════════════════════════════════════════════════════════════
// Public facade (matches the embedded module tree)
// ═══════════════════════════════════════════════════════════════════════════

pub mod keypad {
    pub use crate::keypad_keymap_impl::*;
    pub use crate::keypad_matrix_impl::*;
    pub use crate::keypad_queue_impl::*;
}

pub mod ops {
    pub use crate::ops_engine_impl::*;
    pub use crate::ops_presets_impl::*;
    pub use crate::ops_settings_impl::*;
}

pub mod ui {
    pub mod panel {
        pub use crate::ui_panel_impl::*;
    }

    pub use panel::StatusPanel;
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
