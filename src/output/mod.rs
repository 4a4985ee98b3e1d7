// Tue Jan 20 2026 - Alex

pub mod report;

pub use report::CheckReport;
