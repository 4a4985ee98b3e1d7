// Tue Jan 20 2026 - Alex

use crate::bounds::{BoundsCheckMode, CheckSummary, JaggedLayout, Violation};
use crate::utils::{format_duration, pluralize};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub mode: BoundsCheckMode,
    pub index_type: String,
    pub layout: JaggedLayout,
    pub summary: CheckSummary,
    pub warning_count: i64,
    pub diagnostics: Vec<Violation>,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl CheckReport {
    pub fn new(mode: BoundsCheckMode, index_type: &str, layout: JaggedLayout) -> Self {
        Self {
            mode,
            index_type: index_type.to_string(),
            layout,
            summary: CheckSummary::new(),
            warning_count: 0,
            diagnostics: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_summary(mut self, summary: CheckSummary) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_warning_count(mut self, count: i64) -> Self {
        self.warning_count = count;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Vec<Violation>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    pub fn is_clean(&self) -> bool {
        self.summary.is_clean()
    }

    pub fn format_report(&self) -> String {
        let mut output = String::new();

        output.push_str("=== Bounds Check Report ===\n");
        output.push_str(&format!("Mode: {}\n", self.mode));
        output.push_str(&format!(
            "Layout: {} x {} ({} {} indices)\n",
            pluralize(self.layout.num_tables, "table", "tables"),
            self.layout.batch_size,
            self.layout.num_indices,
            self.index_type
        ));
        output.push_str(&format!("Elapsed: {}\n", format_duration(self.elapsed)));

        output.push_str("\nSummary:\n");
        output.push_str(&format!("  Segments checked: {}\n", self.summary.segments_checked));
        output.push_str(&format!("  Segments repaired: {}\n", self.summary.segments_repaired));
        output.push_str(&format!("  Indices checked: {}\n", self.summary.indices_checked));
        output.push_str(&format!("  Pruned skipped: {}\n", self.summary.pruned_skipped));
        output.push_str(&format!("  Indices repaired: {}\n", self.summary.indices_repaired));
        if self.mode == BoundsCheckMode::Warning {
            output.push_str(&format!("  Warning counter: {}\n", self.warning_count));
        }

        if !self.diagnostics.is_empty() {
            output.push_str("\nFirst violation:\n");
            for violation in &self.diagnostics {
                output.push_str(&format!("  - [{}] {}\n", violation.kind(), violation));
            }
        }

        output
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CheckReport {
        let layout = JaggedLayout::new(1, 3, 5).unwrap();
        CheckReport::new(BoundsCheckMode::Warning, "i64", layout)
            .with_summary(CheckSummary { segments_checked: 2, segments_repaired: 1, ..Default::default() })
            .with_warning_count(1)
            .with_diagnostics(vec![Violation::SegmentRange { table: 0, batch: 0, start: 0, end: 7, num_indices: 5 }])
            .with_elapsed(Duration::from_micros(40))
    }

    #[test]
    fn test_format_report() {
        let report = sample();
        let text = report.format_report();

        assert!(!report.is_clean());
        assert!(text.contains("Mode: WARNING"));
        assert!(text.contains("1 table x 2"));
        assert!(text.contains("Segments repaired: 1"));
        assert!(text.contains("Warning counter: 1"));
        assert!(text.contains("[segment range]"));
    }

    #[test]
    fn test_to_json() {
        let value: serde_json::Value = serde_json::from_str(&sample().to_json()).unwrap();
        assert_eq!(value["mode"], "warning");
        assert_eq!(value["summary"]["segments_repaired"], 1);
        assert_eq!(value["diagnostics"][0]["kind"], "segment_range");
    }
}
