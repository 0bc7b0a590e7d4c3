//! Delayed, cancelable scheduling for debounced redraws.
//!
//! Single-threaded and deterministic: time is passed in explicitly, so the
//! engine's event loop decides when the clock advances and tests never
//! sleep.

use std::time::{Duration, Instant};

/// Default delay before a debounced vertical redraw fires.
pub const DEFAULT_REDRAW_DELAY: Duration = Duration::from_millis(100);

/// Timer queue owning at most one in-flight scheduled task.
///
/// `schedule` cancels any prior uncompleted schedule before arming the new
/// one; rapid successive calls keep deferring execution until input settles.
/// This is a debounce, not a throttle.
#[derive(Debug)]
pub struct DebounceQueue<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> DebounceQueue<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms `value` to fire at `now + delay`, superseding any pending value.
    pub fn schedule(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.delay, value));
    }

    /// Drops the pending task, returning it if one was armed.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Returns the armed value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => {
                self.pending.take().map(|(_, value)| value)
            }
            _ => None,
        }
    }
}
