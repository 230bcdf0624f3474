//! # contrast-core
//!
//! Core library for the naive-vs-idiomatic comparison demos.
//! Implements the record filters, four interchangeable Fibonacci strategies,
//! an owned memoization cache, and lazy sequence iterators.

pub mod constants;
pub mod iterative;
pub mod iterator;
pub mod memoized;
pub mod options;
pub mod records;
pub mod recursive;
pub mod registry;
pub mod strategy;

// Re-exports
pub use constants::{
    exit_codes, DEFAULT_BOUND, DEFAULT_GRADE_THRESHOLD, DEFAULT_LARGE_N, DEFAULT_RECURSION_LIMIT,
    DEFAULT_SEQUENCE_LEN, DEFAULT_SMALL_N, MAX_FIB_U64,
};
pub use iterative::{fibonacci_iterative, IterativeFibonacci};
pub use iterator::{
    fibonacci_generator, fibonacci_sequence, BoundedFibIterator, FibIterator, SequenceFibonacci,
};
pub use memoized::{fibonacci_memoized, CacheStats, MemoCache, MemoizedFibonacci};
pub use options::DemoOptions;
pub use records::{
    load_roster, sample_roster, top_names_iter, top_names_loop, Record, RosterError,
};
pub use recursive::{fibonacci_recursive, RecursiveFibonacci};
pub use registry::{DefaultFactory, StrategyFactory};
pub use strategy::{FibError, FibStrategy};

/// Compute F(n) with the iterative reference strategy.
///
/// This is a convenience function for simple use cases. To compare
/// strategies, go through the `FibStrategy` trait instead.
///
/// # Example
/// ```
/// assert_eq!(contrast_core::fibonacci(10), Ok(55));
/// assert_eq!(contrast_core::fibonacci(0), Ok(0));
/// ```
pub fn fibonacci(n: u64) -> Result<u64, FibError> {
    fibonacci_iterative(n)
}
