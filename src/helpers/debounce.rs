//! Trailing-edge debouncer
//!
//! Holds the most recent value pushed and releases it once the input has
//! been quiet for the configured delay. A newer push replaces the pending
//! value and restarts the wait, so the trailing call always wins.
//!
//! The debouncer never reads the clock itself; callers pass `now`, which
//! keeps it deterministic under test.

use std::time::{Duration, Instant};

/// A trailing-edge debouncer for values of type `T`
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Create a new debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Push a new value, superseding any pending one
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Whether a value is waiting to be released
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Release the pending value if the quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= self.delay);
        if ready {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Release the pending value immediately, regardless of the delay
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drop the pending value
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_until_quiet() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(200));

        debouncer.push("a", start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(100)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(200)), Some("a"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_trailing_push_supersedes() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(200));

        debouncer.push("a", start);
        debouncer.push("ab", start + Duration::from_millis(150));
        // first value's deadline has passed, but the second push restarted the wait
        assert_eq!(debouncer.poll(start + Duration::from_millis(250)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(350)), Some("ab"));
        assert_eq!(debouncer.poll(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn test_flush_and_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_secs(1));

        debouncer.push(1, start);
        assert_eq!(debouncer.flush(), Some(1));

        debouncer.push(2, start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
    }
}
