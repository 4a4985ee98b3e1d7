// Tue Jan 20 2026 - Alex

pub mod error;
pub mod stats;

pub use error::BatchError;
pub use stats::BatchStats;

use crate::bounds::{BoundsError, BoundsValidator, CheckSummary, IndexValue, JaggedLayout, WarningCounter};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// An owned jagged batch as read from or written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JaggedBatch<I> {
    pub rows_per_table: Vec<i64>,
    pub indices: Vec<I>,
    pub offsets: Vec<I>,
}

impl<I: IndexValue> JaggedBatch<I> {
    pub fn new(rows_per_table: Vec<i64>, indices: Vec<I>, offsets: Vec<I>) -> Self {
        Self {
            rows_per_table,
            indices,
            offsets,
        }
    }

    pub fn layout(&self) -> Result<JaggedLayout, BoundsError> {
        JaggedLayout::new(self.rows_per_table.len(), self.offsets.len(), self.indices.len())
    }

    pub fn check(&mut self, validator: &BoundsValidator, warning: &WarningCounter) -> Result<CheckSummary, BoundsError> {
        validator.check(&self.rows_per_table, &mut self.indices, &mut self.offsets, warning)
    }

    pub fn stats(&self) -> Result<BatchStats, BoundsError> {
        BatchStats::compute(&self.rows_per_table, &self.indices, &self.offsets)
    }
}

impl<I: IndexValue + Serialize + DeserializeOwned> JaggedBatch<I> {
    pub fn from_json_str(json: &str) -> Result<Self, BatchError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BatchError> {
        let file = File::open(path.as_ref())?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, BatchError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<(), BatchError> {
        let json = self.to_json(pretty)?;
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        writer.write_all(json.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundsCheckMode;

    const SAMPLE: &str = r#"{"rows_per_table": [3], "indices": [1, 5, -1, 2, 9], "offsets": [0, 2, 5]}"#;

    #[test]
    fn test_check_loaded_batch() {
        let mut batch: JaggedBatch<i64> = JaggedBatch::from_json_str(SAMPLE).unwrap();
        assert_eq!(batch.layout().unwrap().batch_size, 2);

        let validator = BoundsValidator::sequential(BoundsCheckMode::Ignore);
        let summary = batch.check(&validator, &WarningCounter::new()).unwrap();

        assert_eq!(summary.indices_repaired, 2);
        assert_eq!(batch.indices, vec![1, 0, -1, 2, 0]);
    }

    #[test]
    fn test_file_round_trip_keeps_repairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");

        let mut batch = JaggedBatch::new(vec![2], vec![0i32, 4], vec![0i32, 9]);
        batch
            .check(&BoundsValidator::sequential(BoundsCheckMode::Ignore), &WarningCounter::new())
            .unwrap();
        batch.to_file(&path, true).unwrap();

        let loaded: JaggedBatch<i32> = JaggedBatch::from_file(&path).unwrap();
        assert_eq!(loaded.offsets, vec![0, 2]);
        assert_eq!(loaded.indices, vec![0, 0]);
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = JaggedBatch::<i64>::from_json_str(r#"{"rows_per_table": [1]}"#).unwrap_err();
        assert!(matches!(err, BatchError::Json(_)));

        let err = JaggedBatch::<i64>::from_file("/nonexistent/batch.json").unwrap_err();
        assert!(matches!(err, BatchError::Io(_)));
    }
}
