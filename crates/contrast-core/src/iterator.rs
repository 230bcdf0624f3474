//! Lazy Fibonacci iterators.
//!
//! Each call to `FibIterator::new` or `fibonacci_generator` starts a fresh
//! sequence at F(0); no state is shared between iterators.

use std::iter::FusedIterator;

use crate::constants::MAX_FIB_U64;
use crate::strategy::{ensure_representable, FibError, FibStrategy};

/// Lazy iterator over the Fibonacci sequence starting from F(0).
///
/// The sequence is unbounded in principle; in `u64` it ends after F(93).
///
/// # Example
/// ```
/// use contrast_core::iterator::FibIterator;
/// let fibs: Vec<u64> = FibIterator::new().take(7).collect();
/// assert_eq!(fibs, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct FibIterator {
    current: Option<u64>,
    next: Option<u64>,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current?;
        let following = self.next.and_then(|next| value.checked_add(next));
        self.current = self.next;
        self.next = following;
        Some(value)
    }
}

impl FusedIterator for FibIterator {}

/// Iterator yielding Fibonacci values while they stay `<= bound`.
#[derive(Debug, Clone)]
pub struct BoundedFibIterator {
    inner: FibIterator,
    bound: u64,
    done: bool,
}

impl BoundedFibIterator {
    #[must_use]
    pub fn new(bound: u64) -> Self {
        Self {
            inner: FibIterator::new(),
            bound,
            done: false,
        }
    }

    #[must_use]
    pub fn bound(&self) -> u64 {
        self.bound
    }
}

impl Iterator for BoundedFibIterator {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(value) if value <= self.bound => Some(value),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

impl FusedIterator for BoundedFibIterator {}

/// Fibonacci values up to and including `bound`.
///
/// # Example
/// ```
/// let values: Vec<u64> = contrast_core::fibonacci_generator(10).collect();
/// assert_eq!(values, [0, 1, 1, 2, 3, 5, 8]);
/// ```
#[must_use]
pub fn fibonacci_generator(bound: u64) -> BoundedFibIterator {
    BoundedFibIterator::new(bound)
}

/// The first `count` Fibonacci numbers, F(0) through F(count - 1).
#[allow(clippy::cast_possible_truncation)]
pub fn fibonacci_sequence(count: usize) -> Result<Vec<u64>, FibError> {
    let max_count = MAX_FIB_U64 as usize + 1;
    if count > max_count {
        return Err(FibError::Overflow {
            n: (count - 1) as u64,
            max: MAX_FIB_U64,
        });
    }
    Ok(FibIterator::new().take(count).collect())
}

/// Strategy computing F(n) as the n-th element of a fresh lazy sequence.
pub struct SequenceFibonacci;

impl SequenceFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequenceFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl FibStrategy for SequenceFibonacci {
    fn compute(&self, n: u64) -> Result<u64, FibError> {
        ensure_representable(n)?;
        let index = usize::try_from(n).map_err(|_| FibError::Overflow {
            n,
            max: MAX_FIB_U64,
        })?;
        FibIterator::new().nth(index).ok_or(FibError::Overflow {
            n,
            max: MAX_FIB_U64,
        })
    }

    fn name(&self) -> &str {
        "Sequence"
    }

    fn complexity(&self) -> &'static str {
        "O(n) - memory efficient, produces the sequence on demand"
    }
}
