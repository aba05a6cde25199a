//! Live operating configuration.
//!
//! One instance is owned by the operations engine for the life of the
//! process; every write funnels through the engine's key grammars.
//! Other subsystems (heater control, sleep logic) only read.

use crate::config::{IRON_START_TEMP, SLEEP_DELAY_DEFAULT_SECS};

/// Temperature scale selection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TempScale {
    Celsius,
    Fahrenheit,
}

impl TempScale {
    /// Single-character tag used on the display ('C' / 'F').
    pub const fn as_char(self) -> char {
        match self {
            TempScale::Celsius => 'C',
            TempScale::Fahrenheit => 'F',
        }
    }
}

/// Process-wide operating parameters.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OpsConfig {
    target_temp: u32,
    scale: TempScale,
    is_woken: bool,
    sleep_delay_secs: u32,
}

impl OpsConfig {
    /// Firmware power-on defaults.
    pub const fn new() -> Self {
        Self {
            target_temp: IRON_START_TEMP,
            scale: TempScale::Celsius,
            is_woken: true,
            sleep_delay_secs: SLEEP_DELAY_DEFAULT_SECS,
        }
    }

    /// Current target tip temperature.
    pub fn target_temp(&self) -> u32 {
        self.target_temp
    }

    /// Current temperature scale.
    pub fn scale(&self) -> TempScale {
        self.scale
    }

    /// Wake status; true means running and heating.
    pub fn is_woken(&self) -> bool {
        self.is_woken
    }

    /// Delay before auto-sleep (seconds).
    pub fn sleep_delay_secs(&self) -> u32 {
        self.sleep_delay_secs
    }

    pub(crate) fn set_target_temp(&mut self, temp: u32) {
        self.target_temp = temp;
    }

    pub(crate) fn set_scale(&mut self, scale: TempScale) {
        self.scale = scale;
    }

    pub(crate) fn set_woken(&mut self, woken: bool) {
        self.is_woken = woken;
    }

    pub(crate) fn set_sleep_delay_secs(&mut self, secs: u32) {
        self.sleep_delay_secs = secs;
    }
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self::new()
    }
}
