//! Key FIFO with an embedded key-repeat limiter.
//!
//! The scan task pushes resolved keys in on every matrix sweep; the
//! foreground loop pops them out. The repeat limiter sits on the push
//! side: a key identical to the previous one is suppressed until the
//! repeat timer reaches [`KEY_REPEAT_TIMEOUT_MS`], which establishes
//! the repeat cadence for a held key.
//!
//! This type is pure state with no locking of its own. The embedded
//! build wraps it in a critical-section mutex (see `keypad::task`)
//! because `tick`/`push` run in the scan context while `pop` runs in
//! the foreground context.

use heapless::Deque;

use crate::config::{KEY_QUEUE_LEN, KEY_REPEAT_TIMEOUT_MS, KEY_TICK_PERIOD_MS};
use crate::keypad::KeyCode;

/// Bounded key FIFO plus repeat-filter state.
pub struct RepeatQueue {
    buf: Deque<KeyCode, KEY_QUEUE_LEN>,
    last_key: Option<KeyCode>,
    /// Repeat delay timer (ms). 0 means not running.
    repeat_timer_ms: u32,
}

impl RepeatQueue {
    /// Create an empty queue with the repeat filter idle.
    pub const fn new() -> Self {
        Self {
            buf: Deque::new(),
            last_key: None,
            repeat_timer_ms: 0,
        }
    }

    /// Advance the repeat timer by one tick period, if it is running.
    ///
    /// Call once per scan period from the scan context.
    pub fn tick(&mut self) {
        if self.repeat_timer_ms != 0 {
            self.repeat_timer_ms += KEY_TICK_PERIOD_MS;
        }
    }

    /// Offer one resolved key to the queue.
    ///
    /// A key equal to the previous one starts (or checks) the repeat
    /// timer and is dropped until the timer reaches the repeat
    /// timeout. A differing key kills any running timer and is
    /// accepted immediately. When the queue is full the key is lost;
    /// no error is reported.
    pub fn push(&mut self, key: KeyCode) {
        if self.last_key == Some(key) {
            // manage key-repeat timing
            if self.repeat_timer_ms != 0 {
                if self.repeat_timer_ms >= KEY_REPEAT_TIMEOUT_MS {
                    self.repeat_timer_ms = 0;
                }
            } else {
                self.repeat_timer_ms = KEY_TICK_PERIOD_MS;
            }
        } else {
            // different key, kill the repeat delay if running
            self.repeat_timer_ms = 0;
        }
        if self.repeat_timer_ms == 0 {
            // timeout or unique keypress, can add the key
            let _ = self.buf.push_back(key);
        }
        self.last_key = Some(key);
    }

    /// Number of buffered keys. 0 means the buffer is empty.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when no keys are buffered.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Pull the oldest key from the FIFO, if any.
    pub fn pop(&mut self) -> Option<KeyCode> {
        self.buf.pop_front()
    }
}

impl Default for RepeatQueue {
    fn default() -> Self {
        Self::new()
    }
}
