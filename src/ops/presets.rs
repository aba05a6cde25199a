//! Named temperature presets ('A' through 'D').
//!
//! A preset starts out unset, becomes valid when its numeric-entry
//! grammar commits, and can be explicitly cleared again. Recalling an
//! unset preset is a no-op at the engine level.

use crate::config::MAX_TEMP_PRESETS;

/// One stored preset slot.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) struct TempPreset {
    is_valid: bool,
    set_temp: u32,
}

impl TempPreset {
    const UNSET: TempPreset = TempPreset {
        is_valid: false,
        set_temp: 0,
    };
}

/// The four preset slots, indexed by letter ('A' = 0).
pub struct PresetBank {
    slots: [TempPreset; MAX_TEMP_PRESETS],
}

impl PresetBank {
    /// All slots unset.
    pub const fn new() -> Self {
        Self {
            slots: [TempPreset::UNSET; MAX_TEMP_PRESETS],
        }
    }

    /// Re-initialize every slot to unset/zero.
    pub fn reset(&mut self) {
        self.slots = [TempPreset::UNSET; MAX_TEMP_PRESETS];
    }

    /// Stored temperature for a slot, if the slot has been set.
    pub fn get(&self, index: usize) -> Option<u32> {
        let slot = self.slots.get(index)?;
        slot.is_valid.then_some(slot.set_temp)
    }

    pub(crate) fn set(&mut self, index: usize, temp: u32) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.is_valid = true;
            slot.set_temp = temp;
        }
    }

    pub(crate) fn clear(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.is_valid = false;
        }
    }
}

impl Default for PresetBank {
    fn default() -> Self {
        Self::new()
    }
}
