// Mon Jan 19 2026 - Alex

use std::fmt::{Debug, Display};

/// Integer element type usable for indices and offsets.
///
/// Offsets and indices always share one element type. All arithmetic is done
/// after widening to `i64`; values written back are already clamped into
/// `[0, indices.len()]` so narrowing only saturates on buffers longer than the
/// type can address.
pub trait IndexValue: Copy + Send + Sync + PartialEq + Debug + Display + 'static {
    const SENTINEL: Self;
    const ZERO: Self;
    const TYPE_NAME: &'static str;

    fn to_i64(self) -> i64;

    fn from_i64_saturating(value: i64) -> Self;
}

impl IndexValue for i64 {
    const SENTINEL: Self = -1;
    const ZERO: Self = 0;
    const TYPE_NAME: &'static str = "i64";

    fn to_i64(self) -> i64 {
        self
    }

    fn from_i64_saturating(value: i64) -> Self {
        value
    }
}

impl IndexValue for i32 {
    const SENTINEL: Self = -1;
    const ZERO: Self = 0;
    const TYPE_NAME: &'static str = "i32";

    fn to_i64(self) -> i64 {
        self as i64
    }

    fn from_i64_saturating(value: i64) -> Self {
        value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32_narrowing_saturates() {
        assert_eq!(i32::from_i64_saturating(7), 7);
        assert_eq!(i32::from_i64_saturating(i64::MAX), i32::MAX);
        assert_eq!(i32::from_i64_saturating(i64::MIN), i32::MIN);
        assert_eq!((-1i32).to_i64(), -1);
    }
}
