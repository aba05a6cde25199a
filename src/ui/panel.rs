//! Display call surface used by the operations engine.
//!
//! The engine never draws; it pushes configuration changes through
//! this trait and finishes with [`StatusPanel::refresh`] to commit
//! them. The embedded build implements it on the SSD1309 screen
//! (`ui::screen`); host tests implement it with a recording stub.

use heapless::String;

use crate::ops::TempScale;

/// Character width of the set-temperature field.
pub const TEMP_FIELD_WIDTH: usize = 3;

/// Sink for configuration-driven display updates.
pub trait StatusPanel {
    /// Show the active preset letter, or blank it for manual control.
    fn show_preset(&mut self, letter: Option<char>);

    /// Show the target temperature in the fixed 3-digit field.
    fn show_set_temp(&mut self, temp: u32);

    /// Show the temperature scale tag ('C' / 'F').
    fn show_scale(&mut self, scale: TempScale);

    /// Flip between the heating and cooling indicators.
    fn show_heating(&mut self, heating: bool);

    /// Commit pending display changes.
    fn refresh(&mut self);
}

/// Render a value into a left-blank-padded fixed window,
/// e.g. `13` → `" 13"`. Values wider than the window are rejected
/// and the caller skips the draw.
pub fn fixed_field(value: u32) -> Option<String<TEMP_FIELD_WIDTH>> {
    let mut buf = [b' '; TEMP_FIELD_WIDTH];
    let mut v = value;
    let mut i = TEMP_FIELD_WIDTH;
    loop {
        if i == 0 {
            // out of window
            return None;
        }
        i -= 1;
        buf[i] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    let mut field = String::new();
    for b in buf {
        let _ = field.push(b as char);
    }
    Some(field)
}
