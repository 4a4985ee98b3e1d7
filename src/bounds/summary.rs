// Mon Jan 19 2026 - Alex

use serde::Serialize;
use std::ops::{Add, AddAssign};

/// Tally of one successful check. Partial tallies from parallel workers are
/// summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckSummary {
    pub segments_checked: usize,
    pub segments_repaired: usize,
    pub indices_checked: usize,
    pub pruned_skipped: usize,
    pub indices_repaired: usize,
}

impl CheckSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn violations(&self) -> usize {
        self.segments_repaired + self.indices_repaired
    }

    pub fn is_clean(&self) -> bool {
        self.violations() == 0
    }
}

impl Add for CheckSummary {
    type Output = CheckSummary;

    fn add(mut self, rhs: CheckSummary) -> CheckSummary {
        self += rhs;
        self
    }
}

impl AddAssign for CheckSummary {
    fn add_assign(&mut self, rhs: CheckSummary) {
        self.segments_checked += rhs.segments_checked;
        self.segments_repaired += rhs.segments_repaired;
        self.indices_checked += rhs.indices_checked;
        self.pruned_skipped += rhs.pruned_skipped;
        self.indices_repaired += rhs.indices_repaired;
    }
}
