//! Cancellable deadlines owned by state.
//!
//! Nothing here sleeps or spawns. Owners schedule a deadline per key and the
//! event loop asks for due keys on every tick, passing the current instant in
//! so tests can drive time explicitly.

use std::time::{Duration, Instant};

/// A set of keyed deadlines. Scheduling an existing key replaces it.
#[derive(Debug, Clone)]
pub struct Timers<K> {
    entries: Vec<(K, Instant)>,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Copy + Eq> Timers<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `key` once `delay` has elapsed after `now`.
    pub fn schedule(&mut self, key: K, now: Instant, delay: Duration) {
        self.cancel(key);
        self.entries.push((key, now + delay));
    }

    /// Cancel `key`. Returns whether it was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| *k != key);
        self.entries.len() != before
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Remove and return keys whose deadline is at or before `now`,
    /// earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<K> {
        let mut due: Vec<(K, Instant)> = Vec::new();
        self.entries.retain(|&(k, at)| {
            if at <= now {
                due.push((k, at));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, at)| at);
        due.into_iter().map(|(k, _)| k).collect()
    }

    /// Earliest pending deadline, used to size the event loop's poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|&(_, at)| at).min()
    }

    /// Cancel everything.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        A,
        B,
    }

    #[test]
    fn test_due_only_after_deadline() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(Key::A, t0, Duration::from_millis(100));

        assert!(timers.take_due(t0 + Duration::from_millis(99)).is_empty());
        assert_eq!(timers.take_due(t0 + Duration::from_millis(100)), vec![Key::A]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_reschedule_replaces() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(Key::A, t0, Duration::from_millis(100));
        timers.schedule(Key::A, t0, Duration::from_millis(300));

        assert_eq!(timers.len(), 1);
        assert!(timers.take_due(t0 + Duration::from_millis(200)).is_empty());
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(Key::A, t0, Duration::from_millis(10));
        assert!(timers.is_pending(Key::A));

        assert!(timers.cancel(Key::A));
        assert!(!timers.is_pending(Key::A));
        assert!(!timers.cancel(Key::A));
        assert!(timers.take_due(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_due_in_deadline_order() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(Key::B, t0, Duration::from_millis(50));
        timers.schedule(Key::A, t0, Duration::from_millis(10));

        assert_eq!(timers.next_deadline(), Some(t0 + Duration::from_millis(10)));
        assert_eq!(
            timers.take_due(t0 + Duration::from_millis(60)),
            vec![Key::A, Key::B]
        );
    }

    #[test]
    fn test_clear_all() {
        let t0 = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(Key::A, t0, Duration::ZERO);
        timers.schedule(Key::B, t0, Duration::ZERO);
        timers.clear_all();
        assert!(timers.is_empty());
        assert_eq!(timers.next_deadline(), None);
    }
}
