// Tue Jan 20 2026 - Alex

use crate::bounds::{is_pruned, segment_in_bounds, BoundsError, IndexValue, JaggedLayout};
use itertools::{Itertools, MinMaxResult};
use serde::Serialize;
use std::fmt;

/// Read-only description of a batch. Segments whose offsets are out of range
/// are counted as malformed rather than measured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchStats {
    pub num_tables: usize,
    pub batch_size: usize,
    pub num_indices: usize,
    pub pruned: usize,
    pub malformed_segments: usize,
    pub min_segment_len: Option<usize>,
    pub max_segment_len: Option<usize>,
    pub mean_segment_len: f64,
}

impl BatchStats {
    pub fn compute<I: IndexValue>(
        rows_per_table: &[i64],
        indices: &[I],
        offsets: &[I],
    ) -> Result<Self, BoundsError> {
        let layout = JaggedLayout::new(rows_per_table.len(), offsets.len(), indices.len())?;
        let n = layout.num_indices_i64();

        let lengths: Vec<usize> = (0..layout.num_segments())
            .filter_map(|k| {
                let (start, end) = (offsets[k].to_i64(), offsets[k + 1].to_i64());
                segment_in_bounds(start, end, n).then(|| (end - start) as usize)
            })
            .collect();

        let (min_segment_len, max_segment_len) = match lengths.iter().copied().minmax() {
            MinMaxResult::NoElements => (None, None),
            MinMaxResult::OneElement(len) => (Some(len), Some(len)),
            MinMaxResult::MinMax(min, max) => (Some(min), Some(max)),
        };

        let mean_segment_len = if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
        };

        Ok(Self {
            num_tables: layout.num_tables,
            batch_size: layout.batch_size,
            num_indices: layout.num_indices,
            pruned: indices.iter().filter(|idx| is_pruned(idx.to_i64())).count(),
            malformed_segments: layout.num_segments() - lengths.len(),
            min_segment_len,
            max_segment_len,
            mean_segment_len,
        })
    }
}

impl fmt::Display for BatchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = |v: Option<usize>| v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());

        writeln!(f, "Tables: {}", self.num_tables)?;
        writeln!(f, "Batch size: {}", self.batch_size)?;
        writeln!(f, "Indices: {} ({} pruned)", self.num_indices, self.pruned)?;
        writeln!(f, "Malformed segments: {}", self.malformed_segments)?;
        write!(
            f,
            "Segment length: min {}, max {}, mean {:.2}",
            opt(self.min_segment_len),
            opt(self.max_segment_len),
            self.mean_segment_len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_of_clean_batch() {
        let stats = BatchStats::compute(&[3, 3], &[0i64, -1, 2, 1], &[0i64, 1, 1, 3, 4]).unwrap();

        assert_eq!(stats.num_tables, 2);
        assert_eq!(stats.batch_size, 2);
        assert_eq!(stats.pruned, 1);
        assert_eq!(stats.malformed_segments, 0);
        assert_eq!(stats.min_segment_len, Some(0));
        assert_eq!(stats.max_segment_len, Some(2));
        assert!((stats.mean_segment_len - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_count_malformed() {
        let stats = BatchStats::compute(&[3], &[1i32, 2], &[0i32, 7, 2]).unwrap();
        assert_eq!(stats.malformed_segments, 2);
        assert_eq!(stats.min_segment_len, None);
        assert!(stats.to_string().contains("min -, max -"));
    }
}
