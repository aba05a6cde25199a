//! Key codes and the physical 4x4 key layout.
//!
//! Layout (row-major, as wired on the front panel):
//! ```text
//!   1 2 3 A
//!   4 5 6 B
//!   7 8 9 C
//!   * 0 # D
//! ```
//!
//! A [`KeyCode`] is one resolved character from the fixed alphabet
//! `{0-9, A-D, *, #}`. The scanner produces them; the operations
//! engine consumes them.

use crate::config::{KEYPAD_COLS, KEYPAD_ROWS};

/// One resolved keypad character.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(u8);

impl KeyCode {
    /// Validate an ASCII byte against the keypad alphabet.
    pub const fn from_ascii(c: u8) -> Option<Self> {
        match c {
            b'0'..=b'9' | b'A'..=b'D' | b'*' | b'#' => Some(KeyCode(c)),
            _ => None,
        }
    }

    /// Raw ASCII value of the key.
    pub const fn as_ascii(self) -> u8 {
        self.0
    }

    /// Numeric value if this key is a decimal digit.
    pub const fn digit(self) -> Option<u8> {
        match self.0 {
            b'0'..=b'9' => Some(self.0 - b'0'),
            _ => None,
        }
    }

    /// Preset slot index if this key is a preset letter
    /// ('A' = 0 .. 'D' = 3).
    pub const fn preset_index(self) -> Option<usize> {
        match self.0 {
            b'A'..=b'D' => Some((self.0 - b'A') as usize),
            _ => None,
        }
    }
}

/// Key assignment per (row, col) matrix position.
pub const KEY_LAYOUT: [[KeyCode; KEYPAD_COLS]; KEYPAD_ROWS] = [
    [KeyCode(b'1'), KeyCode(b'2'), KeyCode(b'3'), KeyCode(b'A')],
    [KeyCode(b'4'), KeyCode(b'5'), KeyCode(b'6'), KeyCode(b'B')],
    [KeyCode(b'7'), KeyCode(b'8'), KeyCode(b'9'), KeyCode(b'C')],
    [KeyCode(b'*'), KeyCode(b'0'), KeyCode(b'#'), KeyCode(b'D')],
];
