//! Matrix scan debouncing.
//!
//! The scan task sweeps the 4x4 matrix once per tick and hands the
//! raw contact bitmap to [`MatrixDebouncer::update`]. A key state
//! change is accepted only after [`KEY_DEBOUNCE_SCANS`] consecutive
//! sweeps agree; every key that is debounced-pressed is then reported
//! on every sweep, so a held key keeps feeding the repeat filter and
//! auto-repeats at the filter's cadence. Simultaneous presses resolve
//! in row-major layout order.

use heapless::Vec;

use crate::config::{KEYPAD_COLS, KEYPAD_ROWS, KEY_DEBOUNCE_SCANS};
use crate::keypad::{KeyCode, KEY_LAYOUT};

const KEY_COUNT: usize = KEYPAD_ROWS * KEYPAD_COLS;

#[derive(Clone, Copy)]
struct KeyFilter {
    /// Debounced contact state.
    stable: bool,
    /// Most recent raw reading.
    raw: bool,
    /// Consecutive sweeps the raw reading has held.
    held: u8,
}

impl KeyFilter {
    const IDLE: KeyFilter = KeyFilter {
        stable: false,
        raw: false,
        held: 0,
    };
}

/// Per-key debounce filters for the whole matrix.
pub struct MatrixDebouncer {
    keys: [KeyFilter; KEY_COUNT],
}

impl MatrixDebouncer {
    pub const fn new() -> Self {
        Self {
            keys: [KeyFilter::IDLE; KEY_COUNT],
        }
    }

    /// Feed one full matrix sweep.
    ///
    /// Bit `row * 4 + col` of `contacts` is the raw reading for that
    /// matrix position. Returns every key that is debounced-pressed
    /// after this sweep, in row-major order. A held key is reported
    /// again on each sweep; the repeat filter downstream decides when
    /// it becomes a new event. Releases produce no key codes.
    pub fn update(&mut self, contacts: u16) -> Vec<KeyCode, KEY_COUNT> {
        let mut pressed = Vec::new();
        for (i, key) in self.keys.iter_mut().enumerate() {
            let raw = contacts & (1 << i) != 0;
            if raw != key.raw {
                key.raw = raw;
                key.held = 1;
            } else if key.held < KEY_DEBOUNCE_SCANS {
                key.held += 1;
            }
            if key.held >= KEY_DEBOUNCE_SCANS {
                key.stable = key.raw;
            }
            if key.stable {
                let code = KEY_LAYOUT[i / KEYPAD_COLS][i % KEYPAD_COLS];
                // capacity covers the whole matrix held at once
                let _ = pressed.push(code);
            }
        }
        pressed
    }
}

impl Default for MatrixDebouncer {
    fn default() -> Self {
        Self::new()
    }
}
