// Mon Jan 19 2026 - Alex

use crate::bounds::diagnostic::Violation;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundsError {
    #[error("Bounds check failed: {0}")]
    Violation(Violation),
    #[error("Offsets must hold at least one element when tables are present")]
    EmptyOffsets,
    #[error("Invalid bounds check mode: {0}")]
    InvalidMode(i64),
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl BoundsError {
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            BoundsError::Violation(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Violation> for BoundsError {
    fn from(violation: Violation) -> Self {
        BoundsError::Violation(violation)
    }
}
