//! Naive recursive Fibonacci.
//!
//! Evaluates the recurrence directly with no caching, so the call count is
//! exponential in n. An explicit input-size guard replaces any attempt to
//! survive stack exhaustion: inputs above the limit are refused with
//! `FibError::TooDeep`.

use crate::constants::DEFAULT_RECURSION_LIMIT;
use crate::strategy::{ensure_representable, FibError, FibStrategy};

/// Compute F(n) by direct recursion, guarded by the default recursion limit.
pub fn fibonacci_recursive(n: u64) -> Result<u64, FibError> {
    RecursiveFibonacci::new().compute(n)
}

/// Naive recursive strategy.
pub struct RecursiveFibonacci {
    limit: u64,
}

impl RecursiveFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_RECURSION_LIMIT)
    }

    /// Create a strategy that refuses any n above `limit`.
    #[must_use]
    pub fn with_limit(limit: u64) -> Self {
        Self { limit }
    }

    /// The largest n this strategy accepts.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    fn naive(n: u64) -> u64 {
        if n <= 1 {
            return n;
        }
        Self::naive(n - 1) + Self::naive(n - 2)
    }
}

impl Default for RecursiveFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl FibStrategy for RecursiveFibonacci {
    fn compute(&self, n: u64) -> Result<u64, FibError> {
        if n > self.limit {
            tracing::warn!(n, limit = self.limit, "recursive strategy refused input");
            return Err(FibError::TooDeep {
                n,
                limit: self.limit,
            });
        }
        ensure_representable(n)?;
        Ok(Self::naive(n))
    }

    fn name(&self) -> &str {
        "Recursive"
    }

    fn complexity(&self) -> &'static str {
        "O(2^n) - exponential time, very slow"
    }

    fn max_input(&self) -> Option<u64> {
        Some(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci_recursive(0), Ok(0));
        assert_eq!(fibonacci_recursive(1), Ok(1));
        assert_eq!(fibonacci_recursive(2), Ok(1));
    }

    #[test]
    fn known_values() {
        assert_eq!(fibonacci_recursive(10), Ok(55));
        assert_eq!(fibonacci_recursive(20), Ok(6765));
    }

    #[test]
    fn default_limit_accepted() {
        assert_eq!(fibonacci_recursive(DEFAULT_RECURSION_LIMIT), Ok(832_040));
    }

    #[test]
    fn above_limit_is_too_deep() {
        let strategy = RecursiveFibonacci::with_limit(15);
        assert_eq!(
            strategy.compute(16),
            Err(FibError::TooDeep { n: 16, limit: 15 })
        );
        assert_eq!(strategy.compute(15), Ok(610));
    }

    #[test]
    fn large_limit_still_rejects_overflow() {
        let strategy = RecursiveFibonacci::with_limit(u64::MAX);
        assert!(matches!(
            strategy.compute(94),
            Err(FibError::Overflow { n: 94, .. })
        ));
    }

    #[test]
    fn name_and_limit() {
        let strategy = RecursiveFibonacci::default();
        assert_eq!(strategy.name(), "Recursive");
        assert_eq!(strategy.limit(), DEFAULT_RECURSION_LIMIT);
        assert_eq!(strategy.max_input(), Some(DEFAULT_RECURSION_LIMIT));
    }
}
