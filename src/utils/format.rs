// src/utils/format.rs
use std::time::Duration;

// Format a generation duration for display, keeping the raw nanoseconds visible
pub fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();

    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{} ns ({:.1} µs)", nanos, nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{} ns ({:.1} ms)", nanos, nanos as f64 / 1_000_000.0)
    } else {
        format!("{} ns ({:.2} s)", nanos, elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_uses_nanoseconds() {
        assert_eq!(format_elapsed(Duration::from_nanos(750)), "750 ns");
        assert_eq!(format_elapsed(Duration::from_nanos(12_500)), "12500 ns (12.5 µs)");
        assert_eq!(format_elapsed(Duration::from_millis(3)), "3000000 ns (3.0 ms)");
    }
}
