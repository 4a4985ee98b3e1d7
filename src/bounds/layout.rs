// Mon Jan 19 2026 - Alex

use crate::bounds::error::BoundsError;
use serde::Serialize;

/// Shape of a table-major jagged batch.
///
/// Segment `t * batch_size + b` belongs to table `t`, batch element `b`, and
/// spans `offsets[k]..offsets[k + 1]`. Offsets past `num_segments + 1` are
/// never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JaggedLayout {
    pub num_tables: usize,
    pub batch_size: usize,
    pub num_indices: usize,
}

impl JaggedLayout {
    pub fn new(num_tables: usize, num_offsets: usize, num_indices: usize) -> Result<Self, BoundsError> {
        if num_tables == 0 {
            return Ok(Self {
                num_tables: 0,
                batch_size: 0,
                num_indices,
            });
        }
        if num_offsets == 0 {
            return Err(BoundsError::EmptyOffsets);
        }

        Ok(Self {
            num_tables,
            batch_size: (num_offsets - 1) / num_tables,
            num_indices,
        })
    }

    pub fn num_segments(&self) -> usize {
        self.num_tables * self.batch_size
    }

    pub fn segment(&self, table: usize, batch: usize) -> usize {
        table * self.batch_size + batch
    }

    /// Inverse of [`JaggedLayout::segment`]: `(table, batch)`.
    pub fn position(&self, segment: usize) -> (usize, usize) {
        (segment / self.batch_size, segment % self.batch_size)
    }

    pub fn num_indices_i64(&self) -> i64 {
        self.num_indices as i64
    }

    pub fn is_empty(&self) -> bool {
        self.num_segments() == 0
    }
}
