// Mon Jan 19 2026 - Alex

use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViolationKind {
    SegmentRange,
    RowId,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::SegmentRange => write!(f, "segment range"),
            ViolationKind::RowId => write!(f, "row id"),
        }
    }
}

/// One detected out-of-bounds condition, with the values that were read
/// before any repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    SegmentRange {
        table: usize,
        batch: usize,
        start: i64,
        end: i64,
        num_indices: i64,
    },
    RowId {
        table: usize,
        batch: usize,
        element: usize,
        idx: i64,
        num_rows: i64,
    },
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::SegmentRange { .. } => ViolationKind::SegmentRange,
            Violation::RowId { .. } => ViolationKind::RowId,
        }
    }

    pub fn table(&self) -> usize {
        match self {
            Violation::SegmentRange { table, .. } | Violation::RowId { table, .. } => *table,
        }
    }

    pub fn batch(&self) -> usize {
        match self {
            Violation::SegmentRange { batch, .. } | Violation::RowId { batch, .. } => *batch,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::SegmentRange { table, batch, start, end, num_indices } => write!(
                f,
                "out of bounds segment for batch: {}, table: {}, indices_start: {}, indices_end: {}, num_indices: {}",
                batch, table, start, end, num_indices
            ),
            Violation::RowId { table, batch, element, idx, num_rows } => write!(
                f,
                "out of bounds row id for batch: {}, table: {}, bag element: {}, idx: {}, num_rows: {}",
                batch, table, element, idx, num_rows
            ),
        }
    }
}

/// Receives the single diagnostic a WARNING call is allowed to emit.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, violation: &Violation);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, violation: &Violation) {
        let repair = match violation.kind() {
            ViolationKind::SegmentRange => "Setting indices_start and indices_end within the range",
            ViolationKind::RowId => "Setting idx to zero",
        };
        log::error!("(at least one) {}. {}.", violation, repair);
    }
}

#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<Violation>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<Violation> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, violation: &Violation) {
        self.records.lock().push(violation.clone());
    }
}
