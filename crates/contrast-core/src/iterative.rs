//! Iterative Fibonacci, the reference implementation.

use crate::strategy::{ensure_representable, FibError, FibStrategy};

/// Compute F(n) by accumulating the pair (F(k-1), F(k)) for k = 2..=n.
///
/// Linear time, constant extra space.
///
/// # Example
/// ```
/// assert_eq!(contrast_core::fibonacci_iterative(10), Ok(55));
/// ```
pub fn fibonacci_iterative(n: u64) -> Result<u64, FibError> {
    ensure_representable(n)?;
    if n <= 1 {
        return Ok(n);
    }

    let (mut a, mut b) = (0u64, 1u64);
    for _ in 2..=n {
        (a, b) = (b, a + b);
    }
    Ok(b)
}

/// Iterative strategy.
pub struct IterativeFibonacci;

impl IterativeFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for IterativeFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl FibStrategy for IterativeFibonacci {
    fn compute(&self, n: u64) -> Result<u64, FibError> {
        fibonacci_iterative(n)
    }

    fn name(&self) -> &str {
        "Iterative"
    }

    fn complexity(&self) -> &'static str {
        "O(n) - linear time, good for most cases"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci_iterative(0), Ok(0));
        assert_eq!(fibonacci_iterative(1), Ok(1));
    }

    #[test]
    fn known_values() {
        let expected: [u64; 21] = [
            0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181,
            6765,
        ];
        for (n, want) in (0u64..).zip(expected) {
            assert_eq!(fibonacci_iterative(n), Ok(want), "F({n}) should be {want}");
        }
    }

    #[test]
    fn largest_u64_term() {
        assert_eq!(fibonacci_iterative(93), Ok(12_200_160_415_121_876_738));
    }

    #[test]
    fn overflow_rejected() {
        assert_eq!(
            fibonacci_iterative(94),
            Err(FibError::Overflow { n: 94, max: 93 })
        );
    }

    #[test]
    fn strategy_name() {
        assert_eq!(IterativeFibonacci::new().name(), "Iterative");
        assert_eq!(IterativeFibonacci.compute(35), Ok(9_227_465));
    }
}
