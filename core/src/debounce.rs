//! Clock-agnostic trailing-edge debouncer
//!
//! The caller supplies timestamps in milliseconds, so the same type drives the
//! browser preview (`Date.now()`) and the file watcher (`Instant`).

/// Holds the most recent value until no newer one arrived for `delay_ms`
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    due_at: u64,
    value: T,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Takes effect from the next `push`
    pub fn set_delay(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms;
    }

    /// Replace any pending value and restart the wait
    pub fn push(&mut self, now_ms: u64, value: T) {
        self.pending = Some(Pending {
            due_at: now_ms.saturating_add(self.delay_ms),
            value,
        });
    }

    /// Yield the pending value once its deadline has passed
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.due_at => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Yield the pending value regardless of its deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without yielding it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_of_burst_is_delivered() {
        let mut d = Debouncer::new(300);
        d.push(0, "a");
        d.push(100, "ab");
        d.push(250, "abc");

        assert_eq!(d.poll(400), None);
        assert_eq!(d.due_at(), Some(550));
        assert_eq!(d.poll(550), Some("abc"));
        assert_eq!(d.poll(10_000), None);
    }

    #[test]
    fn test_zero_delay_is_immediately_ready() {
        let mut d = Debouncer::new(0);
        d.push(42, 1);
        assert_eq!(d.poll(42), Some(1));
    }

    #[test]
    fn test_cancel_and_flush() {
        let mut d = Debouncer::new(50);
        d.push(0, "x");
        d.cancel();
        assert_eq!(d.due_at(), None);
        assert_eq!(d.poll(1_000), None);

        d.push(0, "y");
        assert_eq!(d.flush(), Some("y"));
        assert_eq!(d.flush(), None);
    }

    #[test]
    fn test_set_delay_applies_to_next_push() {
        let mut d = Debouncer::new(10);
        d.push(0, ());
        d.set_delay(100);
        assert_eq!(d.due_at(), Some(10));
        d.push(0, ());
        assert_eq!(d.due_at(), Some(100));
    }
}
