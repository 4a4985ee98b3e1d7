// Tue Jan 20 2026 - Alex

pub mod logging;

pub use logging::LoggingUtils;

use std::time::{Duration, Instant};

pub fn measure_time<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs_f64();

    if total_secs < 0.001 {
        format!("{}µs", duration.as_micros())
    } else if total_secs < 1.0 {
        format!("{:.2}ms", total_secs * 1000.0)
    } else {
        format!("{:.2}s", total_secs)
    }
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(40)), "40µs");
        assert_eq!(format_duration(Duration::from_millis(12)), "12.00ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "table", "tables"), "1 table");
        assert_eq!(pluralize(0, "table", "tables"), "0 tables");
    }

    #[test]
    fn test_measure_time() {
        let (value, elapsed) = measure_time(|| 7);
        assert_eq!(value, 7);
        assert!(elapsed < Duration::from_secs(5));
    }
}
