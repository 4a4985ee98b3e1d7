// Mon Jan 19 2026 - Alex

//! Integer range checks and repairs shared by every mode.

/// `-1` marks a row pruned upstream. It is never a lookup.
pub const PRUNED_ROW: i64 = -1;

pub fn segment_in_bounds(start: i64, end: i64, num_indices: i64) -> bool {
    start >= 0 && start <= end && end <= num_indices
}

/// Pulls `start` into `[0, num_indices]` and then `end` into
/// `[start', num_indices]`, so the result is always a valid, possibly empty,
/// segment.
pub fn clamp_segment(start: i64, end: i64, num_indices: i64) -> (i64, i64) {
    let num_indices = num_indices.max(0);
    let start = start.clamp(0, num_indices);
    let end = end.clamp(start, num_indices);
    (start, end)
}

pub fn is_pruned(idx: i64) -> bool {
    idx == PRUNED_ROW
}

pub fn row_id_in_bounds(idx: i64, num_rows: i64) -> bool {
    idx >= 0 && idx < num_rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_in_bounds() {
        assert!(segment_in_bounds(0, 0, 0));
        assert!(segment_in_bounds(0, 5, 5));
        assert!(segment_in_bounds(2, 2, 5));
        assert!(!segment_in_bounds(-1, 2, 5));
        assert!(!segment_in_bounds(3, 2, 5));
        assert!(!segment_in_bounds(0, 6, 5));
        assert!(!segment_in_bounds(7, 5, 5));
    }

    #[test]
    fn test_clamp_segment() {
        assert_eq!(clamp_segment(7, 5, 5), (5, 5));
        assert_eq!(clamp_segment(-3, 2, 5), (0, 2));
        assert_eq!(clamp_segment(1, 100, 5), (1, 5));
        assert_eq!(clamp_segment(4, 1, 5), (4, 4));
        assert_eq!(clamp_segment(-2, -1, 5), (0, 0));
        assert_eq!(clamp_segment(2, 3, 5), (2, 3));
    }

    #[test]
    fn test_clamp_segment_always_valid() {
        for start in -3..9 {
            for end in -3..9 {
                let (s, e) = clamp_segment(start, end, 5);
                assert!(segment_in_bounds(s, e, 5), "({}, {}) -> ({}, {})", start, end, s, e);
            }
        }
    }

    #[test]
    fn test_row_id_checks() {
        assert!(is_pruned(-1));
        assert!(!is_pruned(-2));
        assert!(row_id_in_bounds(0, 3));
        assert!(row_id_in_bounds(2, 3));
        assert!(!row_id_in_bounds(3, 3));
        assert!(!row_id_in_bounds(-2, 3));
        assert!(!row_id_in_bounds(0, 0));
    }
}
