//! Memoized recursive Fibonacci with an explicitly owned cache.
//!
//! `MemoCache` maps n to F(n) and records hit/miss counts so a cold run can
//! be told apart from a warm one. `MemoizedFibonacci` owns a cache behind a
//! `parking_lot::Mutex`; `reset` clears it between timed comparisons.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::Serialize;

use crate::strategy::{ensure_representable, FibError, FibStrategy};

/// Snapshot of a cache's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of cached values.
    pub entries: usize,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to evaluate the recurrence.
    pub misses: u64,
}

/// Cache of computed Fibonacci values keyed by n.
///
/// F(0) and F(1) are base cases and never stored.
#[derive(Debug, Default)]
pub struct MemoCache {
    values: HashMap<u64, u64>,
    hits: u64,
    misses: u64,
}

impl MemoCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate F(n) through the cache, filling it on the way.
    ///
    /// Callers must keep n within u64 range; see `fibonacci_memoized`.
    pub fn fib(&mut self, n: u64) -> u64 {
        if n <= 1 {
            return n;
        }
        if let Some(&value) = self.values.get(&n) {
            self.hits += 1;
            return value;
        }
        self.misses += 1;
        let value = self.fib(n - 1) + self.fib(n - 2);
        self.values.insert(n, value);
        value
    }

    /// Cached F(n), if present.
    #[must_use]
    pub fn get(&self, n: u64) -> Option<u64> {
        self.values.get(&n).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop every cached value and zero the counters.
    pub fn clear(&mut self) {
        tracing::debug!(entries = self.values.len(), "clearing memo cache");
        self.values.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.values.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Compute F(n) using the given cache.
pub fn fibonacci_memoized(n: u64, cache: &mut MemoCache) -> Result<u64, FibError> {
    ensure_representable(n)?;
    Ok(cache.fib(n))
}

/// Memoized recursive strategy owning its cache.
pub struct MemoizedFibonacci {
    cache: Mutex<MemoCache>,
}

impl MemoizedFibonacci {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(MemoCache::new()),
        }
    }

    /// Current cache counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }

    /// Empty the cache so the next call re-executes the recurrence.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

impl Default for MemoizedFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl FibStrategy for MemoizedFibonacci {
    fn compute(&self, n: u64) -> Result<u64, FibError> {
        fibonacci_memoized(n, &mut self.cache.lock())
    }

    fn name(&self) -> &str {
        "Memoized"
    }

    fn complexity(&self) -> &'static str {
        "O(n) - cached results, excellent for repeated calls"
    }

    fn reset(&self) {
        self.clear_cache();
    }
}
