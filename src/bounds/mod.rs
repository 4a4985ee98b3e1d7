// Mon Jan 19 2026 - Alex

pub mod clamp;
pub mod counter;
pub mod diagnostic;
pub mod error;
pub mod index;
pub mod layout;
pub mod mode;
pub mod summary;
pub mod validator;

pub use clamp::{clamp_segment, is_pruned, row_id_in_bounds, segment_in_bounds, PRUNED_ROW};
pub use counter::WarningCounter;
pub use diagnostic::{CollectingSink, DiagnosticSink, LogSink, Violation, ViolationKind};
pub use error::BoundsError;
pub use index::IndexValue;
pub use layout::JaggedLayout;
pub use mode::BoundsCheckMode;
pub use summary::CheckSummary;
pub use validator::BoundsValidator;

/// Checks `indices`/`offsets` against `rows_per_table` on the calling thread.
///
/// Offsets are table-major: segment `t * B + b` spans
/// `offsets[t * B + b]..offsets[t * B + b + 1]` with
/// `B = (offsets.len() - 1) / rows_per_table.len()`. Under WARNING the counter
/// is zeroed first and ends holding the number of violations; at most one
/// diagnostic is logged.
pub fn bounds_check_indices<I: IndexValue>(
    rows_per_table: &[i64],
    indices: &mut [I],
    offsets: &mut [I],
    mode: BoundsCheckMode,
    warning: &WarningCounter,
) -> Result<(), BoundsError> {
    BoundsValidator::sequential(mode)
        .check(rows_per_table, indices, offsets, warning)
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_check_indices_modes() {
        let rows = [3i64];
        let warning = WarningCounter::new();

        let mut offsets = vec![0i64, 2, 5];
        let mut indices = vec![1i64, 5, -1, 2, 9];
        bounds_check_indices(&rows, &mut indices, &mut offsets, BoundsCheckMode::Ignore, &warning).unwrap();
        assert_eq!(indices, vec![1, 0, -1, 2, 0]);
        assert_eq!(offsets, vec![0, 2, 5]);

        let mut offsets = vec![0i64, 7, 5];
        let mut indices = vec![1i64, 2, -1, 2, 0];
        bounds_check_indices(&rows, &mut indices, &mut offsets, BoundsCheckMode::Warning, &warning).unwrap();
        assert_eq!(offsets, vec![0, 5, 5]);
        assert!(warning.has_warned());

        let mut offsets = vec![0i64, 7, 5];
        let result = bounds_check_indices(&rows, &mut indices, &mut offsets, BoundsCheckMode::Fatal, &warning);
        assert!(matches!(result, Err(BoundsError::Violation(_))));
    }

    #[test]
    fn test_integer_mode_argument() {
        let mode = BoundsCheckMode::try_from(2).unwrap();
        let mut offsets = vec![0i32, 1];
        let mut indices = vec![-7i32];
        bounds_check_indices(&[1], &mut indices, &mut offsets, mode, &WarningCounter::new()).unwrap();
        assert_eq!(indices, vec![0]);
    }
}
