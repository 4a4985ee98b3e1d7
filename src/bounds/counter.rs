// Mon Jan 19 2026 - Alex

use std::sync::atomic::{AtomicI64, Ordering};

/// Shared violation counter owned by the caller.
///
/// Workers only ever increment it. The 0 -> 1 transition is observed by
/// exactly one `record` call, which is the one allowed to emit a diagnostic.
#[derive(Debug, Default)]
pub struct WarningCounter {
    value: AtomicI64,
}

impl WarningCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one violation. Returns `true` only for the first one since the
    /// last reset.
    pub fn record(&self) -> bool {
        self.value.fetch_add(1, Ordering::SeqCst) == 0
    }

    pub fn reset(&self) {
        self.value.store(0, Ordering::SeqCst);
    }

    pub fn get(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }

    pub fn has_warned(&self) -> bool {
        self.get() != 0
    }

    pub fn into_inner(self) -> i64 {
        self.value.into_inner()
    }
}

impl From<i64> for WarningCounter {
    fn from(value: i64) -> Self {
        Self {
            value: AtomicI64::new(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_first_record_wins() {
        let counter = WarningCounter::new();
        assert!(!counter.has_warned());
        assert!(counter.record());
        assert!(!counter.record());
        assert!(!counter.record());
        assert_eq!(counter.get(), 3);

        counter.reset();
        assert_eq!(counter.get(), 0);
        assert!(counter.record());
    }

    #[test]
    fn test_preloaded_counter_never_fires() {
        let counter = WarningCounter::from(5);
        assert!(!counter.record());
        assert_eq!(counter.into_inner(), 6);
    }

    #[test]
    fn test_concurrent_single_transition() {
        let counter = WarningCounter::new();
        let firsts = (0..10_000)
            .into_par_iter()
            .filter(|_| counter.record())
            .count();

        assert_eq!(firsts, 1);
        assert_eq!(counter.get(), 10_000);
    }
}
