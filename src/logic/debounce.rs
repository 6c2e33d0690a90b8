//! Trailing-edge debounce for query input.
//!
//! The debouncer does not own a timer. It records the value captured by the
//! latest `schedule` call and the instant it becomes due; the owning event
//! loop sleeps until [`Debouncer::deadline`] and then calls
//! [`Debouncer::fire`]. Firing therefore always happens on the task that owns
//! the session, never concurrently with other session operations.

use std::time::{Duration, Instant};

/// Coalesces a burst of scheduled values into the last one.
#[derive(Debug)]
pub struct Debouncer<T> {
    /// Quiet period required before the pending value fires.
    wait: Duration,
    /// Value captured by the latest call and the instant it becomes due.
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with a fixed wait interval.
    #[must_use]
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// What: Schedule a value, restarting the quiet period.
    ///
    /// Inputs:
    /// - `value`: Arguments captured for the eventual trigger.
    /// - `now`: Current instant.
    ///
    /// Output:
    /// - `Some(value)` when the wait is zero (run it immediately), otherwise `None`.
    ///
    /// Details:
    /// - Any previously pending value is dropped and will never fire.
    pub fn schedule(&mut self, value: T, now: Instant) -> Option<T> {
        if self.wait.is_zero() {
            self.pending = None;
            return Some(value);
        }
        self.pending = Some((value, now + self.wait));
        None
    }

    /// Instant at which the pending value becomes due, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Whether a value is waiting to fire.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// What: Take the pending value if its quiet period has elapsed.
    ///
    /// Inputs:
    /// - `now`: Current instant.
    ///
    /// Output:
    /// - `Some(value)` exactly once per burst; `None` if nothing is due yet.
    pub fn fire(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, due)) if *due <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Drop the pending value; it will never fire.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(400);

    #[test]
    /// What: A burst of calls fires once with the last value.
    ///
    /// Inputs:
    /// - Three schedules 100ms apart.
    ///
    /// Output:
    /// - Nothing fires before the quiet period after the last call; then `"abc"` fires once.
    fn burst_fires_last_value_once() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(WAIT);
        assert_eq!(d.schedule("a", t0), None);
        assert_eq!(d.schedule("ab", t0 + Duration::from_millis(100)), None);
        assert_eq!(d.schedule("abc", t0 + Duration::from_millis(200)), None);

        assert_eq!(d.fire(t0 + Duration::from_millis(500)), None);
        assert_eq!(d.deadline(), Some(t0 + Duration::from_millis(600)));
        assert_eq!(d.fire(t0 + Duration::from_millis(600)), Some("abc"));
        assert_eq!(d.fire(t0 + Duration::from_millis(900)), None);
    }

    #[test]
    /// What: Cancel drops the pending value for good.
    fn cancel_prevents_firing() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(WAIT);
        d.schedule(1, t0);
        d.cancel();
        assert!(!d.is_pending());
        assert_eq!(d.fire(t0 + WAIT * 2), None);
    }

    #[test]
    /// What: Zero wait runs immediately without coalescing.
    fn zero_wait_is_immediate() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::ZERO);
        assert_eq!(d.schedule("x", t0), Some("x"));
        assert_eq!(d.schedule("y", t0), Some("y"));
        assert_eq!(d.deadline(), None);
    }
}
