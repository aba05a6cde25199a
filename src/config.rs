//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and firmware
//! defaults live here so they can be tuned in one place.

// Keypad matrix

/// Number of keypad rows (driven outputs).
pub const KEYPAD_ROWS: usize = 4;

/// Number of keypad columns (read inputs).
pub const KEYPAD_COLS: usize = 4;

/// Keypad scan period (ms). One matrix sweep per tick.
pub const KEY_SCAN_PERIOD_MS: u32 = 20;

/// Consecutive identical scans required before a key state change
/// is accepted (roughly 4 * 20 ms = 80 ms of settling).
pub const KEY_DEBOUNCE_SCANS: u8 = 4;

// Key queue / repeat filter

/// Fixed capacity of the key FIFO. Overflow silently drops new keys.
pub const KEY_QUEUE_LEN: usize = 16;

/// Period added to the repeat timer on each queue tick (ms).
/// Matches the scan period since the scan task drives the tick.
pub const KEY_TICK_PERIOD_MS: u32 = KEY_SCAN_PERIOD_MS;

/// Key-repeat delay (ms). A held or rapidly repeated key is
/// re-accepted only once this much time has elapsed.
pub const KEY_REPEAT_TIMEOUT_MS: u32 = 200;

// Foreground operations loop

/// Sleep increment between queue drain attempts (ms).
pub const OPS_POLL_SLEEP_MS: u64 = 100;

/// Length of one foreground poll window (ms). The main loop drains
/// keys for this long before refreshing the live readouts.
pub const OPS_POLL_WINDOW_MS: u64 = 1000;

// Firmware defaults and limits

/// Target tip temperature at power-on.
pub const IRON_START_TEMP: u32 = 300;

/// Upper bound for any displayed or set temperature.
pub const IRON_MAX_TEMP: u32 = 800;

/// Full-scale heater power (W), used by the power readout.
pub const IRON_MAX_WATT: u32 = 200;

/// Default delay before auto-sleep (seconds).
pub const SLEEP_DELAY_DEFAULT_SECS: u32 = 300;

/// Number of named temperature presets ('A' through 'D').
pub const MAX_TEMP_PRESETS: usize = 4;

/// Maximum digits collected by the numeric-entry grammars.
pub const ENTRY_DIGIT_MAX: usize = 3;

// GPIO pin assignments (200W-JBC Ver 3.1 carrier, RP2040 Pico)
//
// These are logical names; actual `embassy_rp::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Keypad row 0..3   → GP2..GP5
//   Keypad col 0..3   → GP6..GP9
//   Display SPI SCK   → GP18 (default SPI0)
//   Display SPI MOSI  → GP19
//   Display SPI CS    → GP17
//   Display D/C       → GP20
//   Display RESET     → GP28
//   Tip thermocouple  → GP26 (ADC0)
//   Heater current    → GP27 (ADC1)

/// SPI clock for the SSD1309 display (Hz).
pub const DISPLAY_SPI_HZ: u32 = 4_000_000;
