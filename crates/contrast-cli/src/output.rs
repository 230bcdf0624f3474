//! CLI output formatting.

use std::fmt::Debug;
use std::time::Duration;

/// Seconds with 8 decimal places; non-finite times render as `inf`.
#[must_use]
pub fn format_seconds(secs: f64) -> String {
    if secs.is_finite() {
        format!("{secs:.8}")
    } else {
        "inf".to_string()
    }
}

/// Speed-up line body: `"2.50x faster"` or `"N/A"`.
#[must_use]
pub fn format_speedup(ratio: Option<f64>) -> String {
    match ratio {
        Some(ratio) => format!("{ratio:.2}x faster"),
        None => "N/A".to_string(),
    }
}

/// Bracketed list rendering, e.g. `[0, 1, 1, 2]` or `["ALICE", "EVE"]`.
#[must_use]
pub fn format_list<T: Debug>(items: &[T]) -> String {
    format!("{items:?}")
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}
