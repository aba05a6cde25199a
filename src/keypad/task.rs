//! Embassy scan task bridging keypad GPIO to the shared key queue.
//!
//! One 4x4 sweep runs per scan tick: each row is driven high in turn
//! and the column inputs (pulled down) are sampled. The raw contact
//! bitmap goes through the debouncer and resolved presses land in the
//! shared queue.
//!
//! The queue is the only state shared with the foreground loop; every
//! access is a short critical section that disables preemption, never
//! held across an await point.

use core::cell::RefCell;

use defmt::info;
use embassy_rp::gpio::{Input, Output};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Ticker};

use crate::config::{KEYPAD_COLS, KEYPAD_ROWS, KEY_SCAN_PERIOD_MS};
use crate::keypad::{KeyCode, MatrixDebouncer, RepeatQueue};

static KEY_QUEUE: Mutex<CriticalSectionRawMutex, RefCell<RepeatQueue>> =
    Mutex::new(RefCell::new(RepeatQueue::new()));

/// Pull the oldest buffered key, if any. Foreground side of the queue.
pub fn next_key() -> Option<KeyCode> {
    KEY_QUEUE.lock(|q| q.borrow_mut().pop())
}

/// Buffered key count, without mutating the queue.
pub fn buffered_keys() -> usize {
    KEY_QUEUE.lock(|q| q.borrow().len())
}

type RowPins = [Output<'static>; KEYPAD_ROWS];
type ColPins = [Input<'static>; KEYPAD_COLS];

/// Periodic keypad scan. Ticks the repeat timer and pushes resolved
/// presses into the shared queue.
#[embassy_executor::task]
pub async fn scan_task(mut rows: RowPins, cols: ColPins) -> ! {
    info!("keypad scan task started ({} ms period)", KEY_SCAN_PERIOD_MS);

    let mut debounce = MatrixDebouncer::new();
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(KEY_SCAN_PERIOD_MS)));

    loop {
        ticker.next().await;
        KEY_QUEUE.lock(|q| q.borrow_mut().tick());
        let contacts = sweep(&mut rows, &cols);
        for key in debounce.update(contacts) {
            KEY_QUEUE.lock(|q| q.borrow_mut().push(key));
        }
    }
}

fn sweep(rows: &mut RowPins, cols: &ColPins) -> u16 {
    let mut contacts = 0u16;
    for (r, row) in rows.iter_mut().enumerate() {
        row.set_high();
        settle();
        for (c, col) in cols.iter().enumerate() {
            if col.is_high() {
                contacts |= 1 << (r * KEYPAD_COLS + c);
            }
        }
        row.set_low();
    }
    contacts
}

/// Let the row line charge the column net before sampling.
fn settle() {
    for _ in 0..30 {
        cortex_m::asm::nop();
    }
}
