//! Trailing-edge debouncer.
//!
//! Coalesces bursts of trigger events into a single action after a quiet
//! period. Each key tracks its own deadline; re-triggering a key before
//! its deadline pushes the deadline out again (cancel-and-reschedule), so
//! only the trailing edge of a burst fires.
//!
//! The debouncer is poll-driven: it never spawns timers. Callers drain
//! settled keys from their own tick, which keeps the engine free of
//! background threads and makes the quiet period testable.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// A pending entry waiting out its quiet period.
#[derive(Debug, Clone)]
struct Pending<V> {
    /// The value carried by the latest trigger.
    value: V,
    /// When the entry settles, pushed out on every re-trigger.
    deadline: Instant,
}

/// A trailing-edge debouncer keyed by `K`, carrying a `V` per key.
#[derive(Debug)]
pub struct Debouncer<K, V> {
    pending: HashMap<K, Pending<V>>,
    quiet_period: Duration,
}

impl<K, V> Debouncer<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            pending: HashMap::new(),
            quiet_period,
        }
    }

    /// Records a trigger for `key`, replacing any carried value and
    /// rescheduling its deadline.
    ///
    /// Returns `true` if the key was not already pending.
    pub fn trigger(&mut self, key: K, value: V) -> bool {
        let deadline = Instant::now() + self.quiet_period;
        self.pending.insert(key, Pending { value, deadline }).is_none()
    }

    /// Removes and returns every entry whose quiet period has elapsed.
    pub fn drain_settled(&mut self) -> Vec<(K, V)> {
        let now = Instant::now();

        let settled: Vec<K> = self
            .pending
            .iter()
            .filter(|(_, entry)| entry.deadline <= now)
            .map(|(key, _)| key.clone())
            .collect();

        settled
            .into_iter()
            .filter_map(|key| self.pending.remove(&key).map(|entry| (key, entry.value)))
            .collect()
    }

    /// Cancels a pending key without firing it.
    pub fn cancel(&mut self, key: &K) { self.pending.remove(key); }

    /// Cancels all pending keys.
    pub fn clear(&mut self) { self.pending.clear(); }

    /// Returns `true` if the key is waiting out its quiet period.
    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool { self.pending.contains_key(key) }

    /// Returns the number of pending keys.
    #[must_use]
    pub fn len(&self) -> usize { self.pending.len() }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.pending.is_empty() }
}

/// Debouncer for callers that only track keys, with no carried value.
pub type KeyDebouncer<K> = Debouncer<K, ()>;

impl<K> Debouncer<K, ()>
where
    K: Eq + Hash + Clone,
{
    /// Records a trigger for `key`.
    ///
    /// Returns `true` if the key was not already pending.
    pub fn touch(&mut self, key: K) -> bool { self.trigger(key, ()) }

    /// Removes and returns every key whose quiet period has elapsed.
    pub fn drain_settled_keys(&mut self) -> Vec<K> {
        self.drain_settled().into_iter().map(|(key, ())| key).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_trigger_reports_new_keys() {
        let mut debouncer: KeyDebouncer<&str> = Debouncer::new(Duration::from_millis(100));

        assert!(debouncer.touch("alpha"));
        assert!(!debouncer.touch("alpha"));
        assert!(debouncer.touch("beta"));
        assert_eq!(debouncer.len(), 2);
    }

    #[test]
    fn test_nothing_settles_before_quiet_period() {
        let mut debouncer: KeyDebouncer<&str> = Debouncer::new(Duration::from_secs(3600));

        debouncer.touch("alpha");
        assert!(debouncer.drain_settled_keys().is_empty());
        assert!(debouncer.is_pending(&"alpha"));
    }

    #[test]
    fn test_zero_quiet_period_settles_immediately() {
        let mut debouncer: Debouncer<&str, u32> = Debouncer::new(Duration::ZERO);

        debouncer.trigger("alpha", 1);
        debouncer.trigger("beta", 2);

        let mut settled = debouncer.drain_settled();
        settled.sort_unstable();
        assert_eq!(settled, vec![("alpha", 1), ("beta", 2)]);
        assert!(debouncer.is_empty());
    }

    #[test]
    fn test_retrigger_replaces_carried_value() {
        let mut debouncer: Debouncer<&str, u32> = Debouncer::new(Duration::ZERO);

        debouncer.trigger("alpha", 1);
        debouncer.trigger("alpha", 2);

        assert_eq!(debouncer.drain_settled(), vec![("alpha", 2)]);
    }

    #[test]
    fn test_retrigger_extends_deadline() {
        let mut debouncer: KeyDebouncer<&str> = Debouncer::new(Duration::from_millis(30));

        // Burst of triggers closer together than the quiet period
        for _ in 0..5 {
            debouncer.touch("alpha");
            thread::sleep(Duration::from_millis(5));
        }
        // The last trigger was under 30ms ago
        assert!(debouncer.drain_settled_keys().is_empty());

        thread::sleep(Duration::from_millis(40));
        assert_eq!(debouncer.drain_settled_keys(), vec!["alpha"]);
        assert!(debouncer.is_empty());
    }

    #[test]
    fn test_cancel_discards_pending_key() {
        let mut debouncer: KeyDebouncer<&str> = Debouncer::new(Duration::ZERO);

        debouncer.touch("alpha");
        debouncer.touch("beta");
        debouncer.cancel(&"alpha");

        assert_eq!(debouncer.drain_settled_keys(), vec!["beta"]);
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut debouncer: KeyDebouncer<&str> = Debouncer::new(Duration::ZERO);

        debouncer.touch("alpha");
        debouncer.touch("beta");
        debouncer.clear();

        assert!(debouncer.is_empty());
        assert!(debouncer.drain_settled_keys().is_empty());
    }
}
