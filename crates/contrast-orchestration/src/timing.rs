//! Wall-clock timing harness.

use std::time::{Duration, Instant};

use contrast_core::strategy::{FibError, FibStrategy};

use crate::interfaces::TimingSample;

/// Run `f` once and return its value together with the elapsed time.
pub fn time_call<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    tracing::trace!(label, ?elapsed, "timed call");
    (value, elapsed)
}

/// Time one strategy call.
///
/// A `TooDeep` refusal becomes the sample's outcome instead of an error, so
/// a comparison always yields one sample per strategy.
pub fn time_strategy(strategy: &dyn FibStrategy, n: u64) -> TimingSample {
    let (result, elapsed) = time_call(strategy.name(), || strategy.compute(n));
    if let Err(FibError::TooDeep { limit, .. }) = &result {
        tracing::debug!(strategy = strategy.name(), n, limit, "too deep");
    }
    TimingSample {
        label: strategy.name().to_string(),
        n,
        outcome: result.into(),
        elapsed,
    }
}

/// How many times faster `fast_secs` is than `slow_secs`.
///
/// `None` when either time is zero or not finite, which the presenters
/// render as "N/A".
#[must_use]
pub fn speedup(slow_secs: f64, fast_secs: f64) -> Option<f64> {
    if fast_secs > 0.0 && fast_secs.is_finite() && slow_secs > 0.0 && slow_secs.is_finite() {
        Some(slow_secs / fast_secs)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contrast_core::iterative::IterativeFibonacci;
    use contrast_core::recursive::RecursiveFibonacci;

    use crate::interfaces::Outcome;

    #[test]
    fn time_call_returns_value() {
        let (value, elapsed) = time_call("answer", || 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn time_call_measures_sleep() {
        let ((), elapsed) =
            time_call("sleep", || std::thread::sleep(Duration::from_millis(5)));
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn time_strategy_value() {
        let sample = time_strategy(&IterativeFibonacci::new(), 20);
        assert_eq!(sample.label, "Iterative");
        assert_eq!(sample.n, 20);
        assert_eq!(sample.outcome, Outcome::Value { value: 6765 });
        assert!(sample.seconds().is_finite());
    }

    #[test]
    fn time_strategy_too_deep_is_caught() {
        let sample = time_strategy(&RecursiveFibonacci::with_limit(30), 35);
        assert_eq!(sample.outcome, Outcome::TooDeep { n: 35, limit: 30 });
        assert!(sample.seconds().is_infinite());
    }

    #[test]
    fn time_strategy_overflow_is_failed() {
        let sample = time_strategy(&IterativeFibonacci::new(), 94);
        assert!(matches!(sample.outcome, Outcome::Failed { .. }));
        assert!(sample.seconds().is_infinite());
    }

    #[test]
    fn speedup_ratio() {
        assert_eq!(speedup(2.0, 0.5), Some(4.0));
        assert_eq!(speedup(0.5, 2.0), Some(0.25));
    }

    #[test]
    fn speedup_zero_time_is_unavailable() {
        assert_eq!(speedup(1.0, 0.0), None);
        assert_eq!(speedup(0.0, 1.0), None);
    }

    #[test]
    fn speedup_infinite_is_unavailable() {
        assert_eq!(speedup(f64::INFINITY, 1.0), None);
        assert_eq!(speedup(1.0, f64::INFINITY), None);
    }
}
