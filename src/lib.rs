// Mon Jan 19 2026 - Alex

pub mod batch;
pub mod bounds;
pub mod config;
pub mod output;
pub mod ui;
pub mod utils;

pub use batch::{BatchError, BatchStats, JaggedBatch};
pub use bounds::{
    bounds_check_indices, BoundsCheckMode, BoundsError, BoundsValidator, CheckSummary, WarningCounter,
};
pub use config::Config;
pub use output::CheckReport;
