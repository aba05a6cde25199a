//! Integration tests for the ironpad host-testable pipeline:
//! matrix sweep -> debounce -> repeat queue -> operations engine.

use ironpad::config::{IRON_START_TEMP, KEY_REPEAT_TIMEOUT_MS, KEY_TICK_PERIOD_MS};
use ironpad::keypad::{KeyCode, MatrixDebouncer, RepeatQueue};
use ironpad::ops::{OpsEngine, StepResult, TempScale};
use ironpad::ui::StatusPanel;

/// Display sink that ignores everything; these tests only look at
/// the resulting configuration.
struct NullPanel;

impl StatusPanel for NullPanel {
    fn show_preset(&mut self, _letter: Option<char>) {}
    fn show_set_temp(&mut self, _temp: u32) {}
    fn show_scale(&mut self, _scale: TempScale) {}
    fn show_heating(&mut self, _heating: bool) {}
    fn refresh(&mut self) {}
}

fn key(c: u8) -> KeyCode {
    KeyCode::from_ascii(c).expect("key in alphabet")
}

/// Matrix bit position for a layout character.
fn contact_bit(c: u8) -> u16 {
    let layout = b"123A456B789C*0#D";
    let idx = layout.iter().position(|&k| k == c).expect("key on panel");
    1 << idx
}

/// Hold a set of contacts for `scans` sweeps, pushing resolved keys
/// through the debouncer into the queue, ticking the repeat filter
/// each sweep exactly like the scan task does.
fn sweep(queue: &mut RepeatQueue, debounce: &mut MatrixDebouncer, contacts: u16, scans: u32) {
    for _ in 0..scans {
        queue.tick();
        for k in debounce.update(contacts) {
            queue.push(k);
        }
    }
}

fn drain(queue: &mut RepeatQueue, engine: &mut OpsEngine<NullPanel>) {
    while let Some(k) = queue.pop() {
        if engine.advance(k) == StepResult::NeedsReset {
            engine.reset_to_idle();
        }
    }
}

#[test]
fn keyed_preset_survives_the_whole_pipeline() {
    let mut queue = RepeatQueue::new();
    let mut debounce = MatrixDebouncer::new();
    let mut engine = OpsEngine::new(NullPanel);
    engine.initialize();

    // type '#' 'A' '2' '5' '0' '#' with releases in between
    for c in [b'#', b'A', b'2', b'5', b'0', b'#'] {
        sweep(&mut queue, &mut debounce, contact_bit(c), 4);
        sweep(&mut queue, &mut debounce, 0, 4);
    }
    drain(&mut queue, &mut engine);

    assert_eq!(engine.preset(0), Some(250));

    // recall it
    sweep(&mut queue, &mut debounce, contact_bit(b'A'), 4);
    sweep(&mut queue, &mut debounce, 0, 4);
    drain(&mut queue, &mut engine);

    assert_eq!(engine.target_temp(), 250);
}

#[test]
fn held_key_autorepeats_at_the_repeat_cadence() {
    let mut queue = RepeatQueue::new();
    let mut debounce = MatrixDebouncer::new();
    let mut engine = OpsEngine::new(NullPanel);
    engine.initialize();

    // '5' held for three full repeat windows: the scanner re-reports
    // it every sweep and the repeat filter paces that into one event
    // per window, so the target ramps by one step per 200 ms
    let scans_per_window = KEY_REPEAT_TIMEOUT_MS / KEY_TICK_PERIOD_MS;
    sweep(&mut queue, &mut debounce, contact_bit(b'5'), 3 * scans_per_window);
    drain(&mut queue, &mut engine);
    assert_eq!(engine.target_temp(), IRON_START_TEMP + 30);
}

#[test]
fn rapid_retrigger_is_repeat_filtered() {
    let mut queue = RepeatQueue::new();
    let mut debounce = MatrixDebouncer::new();
    let mut engine = OpsEngine::new(NullPanel);
    engine.initialize();

    // tap '2', release, tap again right away: the second tap lands
    // inside the repeat window and is suppressed
    sweep(&mut queue, &mut debounce, contact_bit(b'2'), 4);
    sweep(&mut queue, &mut debounce, 0, 4);
    sweep(&mut queue, &mut debounce, contact_bit(b'2'), 4);
    drain(&mut queue, &mut engine);
    assert_eq!(engine.target_temp(), IRON_START_TEMP + 1);

    // keep the key down across the window boundary: the filter
    // re-accepts it as the next repeat event
    sweep(&mut queue, &mut debounce, contact_bit(b'2'), 2);
    drain(&mut queue, &mut engine);
    assert_eq!(engine.target_temp(), IRON_START_TEMP + 2);
}

#[test]
fn settings_menu_and_manual_keys_interleave_cleanly() {
    let mut queue = RepeatQueue::new();
    let mut debounce = MatrixDebouncer::new();
    let mut engine = OpsEngine::new(NullPanel);
    engine.initialize();

    // scale to Fahrenheit, sleep off for 90 s, then nudge the target
    for c in [b'#', b'1', b'D', b'#', b'2', b'9', b'0', b'#', b'8'] {
        sweep(&mut queue, &mut debounce, contact_bit(c), 4);
        sweep(&mut queue, &mut debounce, 0, 4);
        drain(&mut queue, &mut engine);
    }

    assert_eq!(engine.scale(), TempScale::Fahrenheit);
    assert_eq!(engine.sleep_delay_secs(), 90);
    assert_eq!(engine.target_temp(), IRON_START_TEMP + 50);
}
