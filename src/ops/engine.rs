//! Keypad operations engine.
//!
//! Decodes the drained key stream as a set of chained-state command
//! grammars. Each key offered to [`OpsEngine::advance`] either starts
//! a command, advances the pending one, or completes it. Regardless
//! of outcome the chain eventually lands back at idle and the next
//! key is examined fresh.
//!
//! State tree:
//! ```text
//! ? +--> '#' +--> [A,B,C,D] +--> dig[0..3],'#' --> set preset <letter>,<value>
//!   |        |              |
//!   |        |              +--> '*' (cancel, or clear preset if no digits)
//!   |        |
//!   |        +--> 1 --> [C,D] --> set scale, C := Celsius, D := Fahrenheit
//!   |        |
//!   |        +--> 2 --> +--> dig[0..3],'#' --> set sleep delay <value> [sec]
//!   |                   |
//!   |                   +--> '*' (cancel, or reset to default if no digits)
//!   |
//!   +--> [A,B,C,D] --> select preset, ignored if unset
//!   |
//!   +--> '*' --> toggle manual sleep/wake
//!   |
//!   +--> 1/4/7 --> lower target temp by 1/10/50
//!   +--> 2/5/8 --> raise target temp by 1/10/50
//! ```

use heapless::Vec;

use crate::config::{ENTRY_DIGIT_MAX, IRON_MAX_TEMP, SLEEP_DELAY_DEFAULT_SECS};
use crate::keypad::KeyCode;
use crate::ops::{OpsConfig, PresetBank, TempScale};
use crate::ui::panel::StatusPanel;

/// Digits collected so far by a numeric-entry grammar.
type Digits = Vec<u8, ENTRY_DIGIT_MAX>;

/// An in-progress multi-key command and its partial data.
#[derive(Clone, Debug)]
enum OpState {
    /// '#' seen; waiting for the menu selector.
    Menu,
    /// '#' '1' seen; waiting for the scale letter.
    ScaleSelect,
    /// '#' letter seen; collecting preset digits.
    PresetEntry { slot: usize, digits: Digits },
    /// '#' '2' seen; collecting sleep-delay digits.
    SleepDelayEntry { digits: Digits },
}

/// Driver-facing outcome of feeding one key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepResult {
    /// Key consumed; the engine stepped or stayed idle on purpose.
    Ok,
    /// No dispatcher claimed the key. The driver should call
    /// [`OpsEngine::reset_to_idle`].
    NeedsReset,
}

/// Outcome of offering a key to one initial dispatcher.
enum Claim {
    /// Dispatcher does not recognize the key; try the next one.
    /// The idle dispatcher claims the whole alphabet, so today this
    /// only matters once further dispatch tables exist.
    #[allow(dead_code)]
    Pass,
    /// Key consumed; carries the continuation (`None` = back to idle).
    Accepted(Option<OpState>),
}

/// Chained-state decoder plus the configuration it guards.
///
/// Single-context by design: the foreground loop is the only caller,
/// so no locking is needed here.
pub struct OpsEngine<P: StatusPanel> {
    panel: P,
    config: OpsConfig,
    presets: PresetBank,
    pending: Option<OpState>,
}

impl<P: StatusPanel> OpsEngine<P> {
    pub fn new(panel: P) -> Self {
        Self {
            panel,
            config: OpsConfig::new(),
            presets: PresetBank::new(),
            pending: None,
        }
    }

    /// Reset to idle, clear all presets, and push the default
    /// configuration to the display.
    pub fn initialize(&mut self) {
        self.pending = None;
        self.presets.reset();
        self.panel.show_set_temp(self.config.target_temp());
        self.panel.show_scale(self.config.scale());
        self.panel.show_heating(self.config.is_woken());
        self.panel.refresh();
    }

    /// Abandon any pending command. Callable at any time; the driver
    /// uses it after [`StepResult::NeedsReset`].
    pub fn reset_to_idle(&mut self) {
        self.pending = None;
    }

    /// Feed one key from the drained queue.
    pub fn advance(&mut self, key: KeyCode) -> StepResult {
        if let Some(state) = self.pending.take() {
            self.pending = self.step(state, key);
            return StepResult::Ok;
        }
        // initial dispatchers, tried in priority order; currently only
        // the idle/menu dispatcher exists
        let dispatchers: &[fn(&mut Self, KeyCode) -> Claim] = &[Self::dispatch_idle];
        for dispatch in dispatchers {
            if let Claim::Accepted(next) = dispatch(self, key) {
                self.pending = next;
                return StepResult::Ok;
            }
        }
        StepResult::NeedsReset
    }

    // Accessors (side-effect-free reads)

    /// Current target tip temperature.
    pub fn target_temp(&self) -> u32 {
        self.config.target_temp()
    }

    /// Current temperature scale.
    pub fn scale(&self) -> TempScale {
        self.config.scale()
    }

    /// Wake status; true means running and heating.
    pub fn is_woken(&self) -> bool {
        self.config.is_woken()
    }

    /// Delay before auto-sleep (seconds).
    pub fn sleep_delay_secs(&self) -> u32 {
        self.config.sleep_delay_secs()
    }

    /// Stored temperature of a preset slot, if set.
    pub fn preset(&self, index: usize) -> Option<u32> {
        self.presets.get(index)
    }

    /// Full configuration snapshot.
    pub fn ops_config(&self) -> &OpsConfig {
        &self.config
    }

    /// Access the display sink (used by host tests to inspect a
    /// recording panel).
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Mutable access to the display sink, for readouts that do not
    /// belong to the key grammars (tip temperature, heater power).
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    // State stepping

    fn step(&mut self, state: OpState, key: KeyCode) -> Option<OpState> {
        match state {
            OpState::Menu => self.step_menu(key),
            OpState::ScaleSelect => {
                self.apply_scale(key);
                None
            }
            OpState::PresetEntry { slot, digits } => self.step_preset_entry(slot, digits, key),
            OpState::SleepDelayEntry { digits } => self.step_sleep_entry(digits, key),
        }
    }

    fn step_menu(&mut self, key: KeyCode) -> Option<OpState> {
        match key.as_ascii() {
            b'1' => Some(OpState::ScaleSelect),
            b'2' => Some(OpState::SleepDelayEntry {
                digits: Digits::new(),
            }),
            b'A'..=b'D' => key.preset_index().map(|slot| OpState::PresetEntry {
                slot,
                digits: Digits::new(),
            }),
            // '*' or anything else: menu cancelled
            _ => None,
        }
    }

    fn apply_scale(&mut self, key: KeyCode) {
        match key.as_ascii() {
            b'C' => self.config.set_scale(TempScale::Celsius),
            b'D' => self.config.set_scale(TempScale::Fahrenheit),
            // invalid key: scale keeps its value, chain still ends
            _ => {}
        }
        #[cfg(feature = "defmt")]
        defmt::info!("scale set to {}", self.config.scale());
        self.panel.show_scale(self.config.scale());
        self.panel.refresh();
    }

    fn step_preset_entry(&mut self, slot: usize, mut digits: Digits, key: KeyCode) -> Option<OpState> {
        if let Some(d) = key.digit() {
            // window full: extra digits are dropped, entry keeps waiting
            let _ = digits.push(d);
            return Some(OpState::PresetEntry { slot, digits });
        }
        match key.as_ascii() {
            b'#' => {
                let temp = decode_digits(&digits);
                self.presets.set(slot, temp);
                #[cfg(feature = "defmt")]
                defmt::info!("preset {} set to {}", preset_letter(slot), temp);
                None
            }
            b'*' => {
                if digits.is_empty() {
                    self.presets.clear(slot);
                    #[cfg(feature = "defmt")]
                    defmt::info!("preset {} cleared", preset_letter(slot));
                }
                // digits collected: cancelled without commit
                None
            }
            _ => Some(OpState::PresetEntry { slot, digits }),
        }
    }

    fn step_sleep_entry(&mut self, mut digits: Digits, key: KeyCode) -> Option<OpState> {
        if let Some(d) = key.digit() {
            let _ = digits.push(d);
            return Some(OpState::SleepDelayEntry { digits });
        }
        match key.as_ascii() {
            b'#' => {
                let secs = decode_digits(&digits);
                self.config.set_sleep_delay_secs(secs);
                #[cfg(feature = "defmt")]
                defmt::info!("sleep delay set to {} s", secs);
                None
            }
            b'*' => {
                if digits.is_empty() {
                    self.config.set_sleep_delay_secs(SLEEP_DELAY_DEFAULT_SECS);
                    #[cfg(feature = "defmt")]
                    defmt::info!("sleep delay reset to default");
                }
                None
            }
            _ => Some(OpState::SleepDelayEntry { digits }),
        }
    }

    // Idle dispatch (immediate single-key actions + menu lead-in)

    fn dispatch_idle(&mut self, key: KeyCode) -> Claim {
        match key.as_ascii() {
            b'#' => Claim::Accepted(Some(OpState::Menu)),
            b'A'..=b'D' => {
                self.select_preset(key);
                Claim::Accepted(None)
            }
            b'*' => {
                self.toggle_wake();
                Claim::Accepted(None)
            }
            b'1' => self.lower_target(1),
            b'4' => self.lower_target(10),
            b'7' => self.lower_target(50),
            b'2' => self.raise_target(1),
            b'5' => self.raise_target(10),
            b'8' => self.raise_target(50),
            // remaining digits have no idle action
            _ => Claim::Accepted(None),
        }
    }

    fn select_preset(&mut self, key: KeyCode) {
        let Some(slot) = key.preset_index() else {
            return;
        };
        if let Some(temp) = self.presets.get(slot) {
            // cache it; the target can still be changed manually
            self.config.set_target_temp(temp);
            self.panel.show_preset(Some(key.as_ascii() as char));
            self.panel.show_set_temp(temp);
            self.panel.refresh();
            #[cfg(feature = "defmt")]
            defmt::info!("preset {} selected, target {}", preset_letter(slot), temp);
        }
        // unset preset: selection ignored
    }

    fn toggle_wake(&mut self) {
        let woken = !self.config.is_woken();
        self.config.set_woken(woken);
        #[cfg(feature = "defmt")]
        defmt::info!("{}", if woken { "waking up" } else { "going to sleep" });
        self.panel.show_heating(woken);
        self.panel.refresh();
    }

    fn lower_target(&mut self, step: u32) -> Claim {
        let temp = self.config.target_temp().saturating_sub(step);
        self.set_manual_target(temp)
    }

    fn raise_target(&mut self, step: u32) -> Claim {
        let temp = (self.config.target_temp() + step).min(IRON_MAX_TEMP);
        self.set_manual_target(temp)
    }

    fn set_manual_target(&mut self, temp: u32) -> Claim {
        self.config.set_target_temp(temp);
        // temp now under manual control, blank the preset letter
        self.panel.show_preset(None);
        self.panel.show_set_temp(temp);
        self.panel.refresh();
        #[cfg(feature = "defmt")]
        defmt::info!("manual target change to {}", temp);
        Claim::Accepted(None)
    }
}

/// Decimal value of the collected digits, entry order. An empty
/// window sums to zero, so committing with no digits yields 0.
fn decode_digits(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, &d| acc * 10 + u32::from(d))
}

#[cfg(feature = "defmt")]
fn preset_letter(slot: usize) -> char {
    (b'A' + slot as u8) as char
}
