// Mon Jan 19 2026 - Alex

use crate::bounds::clamp::{clamp_segment, is_pruned, row_id_in_bounds, segment_in_bounds};
use crate::bounds::counter::WarningCounter;
use crate::bounds::diagnostic::{DiagnosticSink, LogSink, Violation};
use crate::bounds::error::BoundsError;
use crate::bounds::index::IndexValue;
use crate::bounds::layout::JaggedLayout;
use crate::bounds::mode::BoundsCheckMode;
use crate::bounds::summary::CheckSummary;
use crate::config::Config;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// Validates and, depending on the mode, repairs a jagged batch in place
/// before it is used to index embedding tables.
pub struct BoundsValidator {
    mode: BoundsCheckMode,
    parallel: bool,
    parallel_min_indices: usize,
    pool: Option<ThreadPool>,
    sink: Arc<dyn DiagnosticSink>,
}

impl BoundsValidator {
    pub fn new(config: &Config) -> Result<Self, BoundsError> {
        let pool = match config.threads {
            Some(threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("bounds-check-{}", i))
                    .build()
                    .map_err(|e| BoundsError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            mode: config.mode,
            parallel: config.parallel,
            parallel_min_indices: config.parallel_min_indices,
            pool,
            sink: Arc::new(LogSink),
        })
    }

    /// Single-threaded validator that logs its diagnostic.
    pub fn sequential(mode: BoundsCheckMode) -> Self {
        Self {
            mode,
            parallel: false,
            parallel_min_indices: usize::MAX,
            pool: None,
            sink: Arc::new(LogSink),
        }
    }

    pub fn with_mode(mut self, mode: BoundsCheckMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_parallel_min_indices(mut self, min: usize) -> Self {
        self.parallel_min_indices = min;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn mode(&self) -> BoundsCheckMode {
        self.mode
    }

    fn uses_parallel(&self, layout: &JaggedLayout) -> bool {
        self.parallel && layout.num_segments() > 1 && layout.num_indices >= self.parallel_min_indices
    }

    /// Checks every segment of the batch.
    ///
    /// On success `offsets` describes non-overlapping segments inside
    /// `indices` and every non-pruned id lies inside its table. Under FATAL
    /// the first violation found is returned and the buffers must not be
    /// used.
    pub fn check<I: IndexValue>(
        &self,
        rows_per_table: &[i64],
        indices: &mut [I],
        offsets: &mut [I],
        warning: &WarningCounter,
    ) -> Result<CheckSummary, BoundsError> {
        if self.mode == BoundsCheckMode::Warning {
            warning.reset();
        }

        let layout = JaggedLayout::new(rows_per_table.len(), offsets.len(), indices.len())?;
        if layout.is_empty() {
            return Ok(CheckSummary::new());
        }

        let parallel = self.uses_parallel(&layout);
        log::debug!(
            "Bounds check ({}, {}): {} tables x {} batch, {} {} indices",
            self.mode,
            if parallel { "parallel" } else { "sequential" },
            layout.num_tables,
            layout.batch_size,
            layout.num_indices,
            I::TYPE_NAME
        );

        let pass = Pass {
            mode: self.mode,
            warning,
            sink: self.sink.as_ref(),
        };

        let summary = if parallel {
            match &self.pool {
                Some(pool) => pool.install(|| pass.run_parallel(&layout, rows_per_table, indices, offsets)),
                None => pass.run_parallel(&layout, rows_per_table, indices, offsets),
            }
        } else {
            pass.run_sequential(&layout, rows_per_table, indices, offsets)
        }?;

        if !summary.is_clean() {
            log::debug!(
                "Repaired {} segments and {} indices",
                summary.segments_repaired,
                summary.indices_repaired
            );
        }

        Ok(summary)
    }
}

/// State shared by every segment of one call.
struct Pass<'a> {
    mode: BoundsCheckMode,
    warning: &'a WarningCounter,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Pass<'a> {
    fn report(&self, violation: Violation) -> Result<(), BoundsError> {
        match self.mode {
            BoundsCheckMode::Fatal => Err(BoundsError::Violation(violation)),
            BoundsCheckMode::Warning => {
                if self.warning.record() {
                    self.sink.emit(&violation);
                }
                Ok(())
            }
            BoundsCheckMode::Ignore => Ok(()),
        }
    }

    /// Checks one offset pair, writing the clamped pair back when it is out
    /// of range. Returns the bounds the element pass should walk.
    fn check_segment<I: IndexValue>(
        &self,
        layout: &JaggedLayout,
        table: usize,
        batch: usize,
        offsets: &mut [I],
        summary: &mut CheckSummary,
    ) -> Result<(usize, usize), BoundsError> {
        let k = layout.segment(table, batch);
        let num_indices = layout.num_indices_i64();
        let mut start = offsets[k].to_i64();
        let mut end = offsets[k + 1].to_i64();
        summary.segments_checked += 1;

        if !segment_in_bounds(start, end, num_indices) {
            self.report(Violation::SegmentRange {
                table,
                batch,
                start,
                end,
                num_indices,
            })?;

            let (s, e) = clamp_segment(start, end, num_indices);
            start = s;
            end = e;
            offsets[k] = I::from_i64_saturating(start);
            offsets[k + 1] = I::from_i64_saturating(end);
            summary.segments_repaired += 1;
        }

        Ok((start as usize, end as usize))
    }

    fn check_rows<I: IndexValue>(
        &self,
        table: usize,
        batch: usize,
        num_rows: i64,
        rows: &mut [I],
    ) -> Result<CheckSummary, BoundsError> {
        let mut summary = CheckSummary::new();

        for (element, slot) in rows.iter_mut().enumerate() {
            let idx = slot.to_i64();
            summary.indices_checked += 1;
            if is_pruned(idx) {
                summary.pruned_skipped += 1;
                continue;
            }
            if !row_id_in_bounds(idx, num_rows) {
                self.report(Violation::RowId {
                    table,
                    batch,
                    element,
                    idx,
                    num_rows,
                })?;
                *slot = I::ZERO;
                summary.indices_repaired += 1;
            }
        }

        Ok(summary)
    }

    fn run_sequential<I: IndexValue>(
        &self,
        layout: &JaggedLayout,
        rows_per_table: &[i64],
        indices: &mut [I],
        offsets: &mut [I],
    ) -> Result<CheckSummary, BoundsError> {
        let mut summary = CheckSummary::new();

        for (table, &num_rows) in rows_per_table.iter().enumerate() {
            for batch in 0..layout.batch_size {
                let (start, end) = self.check_segment(layout, table, batch, offsets, &mut summary)?;
                summary += self.check_rows(table, batch, num_rows, &mut indices[start..end])?;
            }
        }

        Ok(summary)
    }

    /// Offsets are walked in order first, so that each segment sees the
    /// boundary its predecessor may have rewritten. That leaves them sorted
    /// inside `indices`, which lets the element pass run on disjoint slices.
    fn run_parallel<I: IndexValue>(
        &self,
        layout: &JaggedLayout,
        rows_per_table: &[i64],
        indices: &mut [I],
        offsets: &mut [I],
    ) -> Result<CheckSummary, BoundsError> {
        let mut summary = CheckSummary::new();
        let mut bounds = Vec::with_capacity(layout.num_segments());

        for table in 0..layout.num_tables {
            for batch in 0..layout.batch_size {
                bounds.push(self.check_segment(layout, table, batch, offsets, &mut summary)?);
            }
        }

        let rows = split_segments(indices, &bounds)
            .into_par_iter()
            .map(|(k, rows)| {
                let (table, batch) = layout.position(k);
                self.check_rows(table, batch, rows_per_table[table], rows)
            })
            .try_reduce(CheckSummary::new, |a, b| Ok(a + b))?;

        Ok(summary + rows)
    }
}

/// Splits `indices` into the non-empty segments named by `bounds`, which must
/// be sorted and non-overlapping.
fn split_segments<'a, I>(indices: &'a mut [I], bounds: &[(usize, usize)]) -> Vec<(usize, &'a mut [I])> {
    let mut rest = indices;
    let mut consumed = 0;
    let mut units = Vec::with_capacity(bounds.len());

    for (k, &(start, end)) in bounds.iter().enumerate() {
        debug_assert!(consumed <= start && start <= end);
        if start == end {
            continue;
        }
        let tail = std::mem::take(&mut rest);
        let (_, tail) = tail.split_at_mut(start - consumed);
        let (rows, tail) = tail.split_at_mut(end - start);
        rest = tail;
        consumed = end;
        units.push((k, rows));
    }

    units
}
