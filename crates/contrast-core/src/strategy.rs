//! Strategy trait and error type shared by every Fibonacci implementation.
//!
//! `FibStrategy` is the trait consumed by orchestration. Each strategy is a
//! `Send + Sync` object so the registry can hand out shared `Arc`s; any
//! internal state (the memo cache) lives behind a lock and is reset through
//! `reset`.

use crate::constants::MAX_FIB_U64;

/// Error type for Fibonacci strategies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The input exceeds the recursion guard of a recursive strategy.
    #[error("recursion too deep: n = {n} exceeds the limit of {limit}")]
    TooDeep { n: u64, limit: u64 },

    /// F(n) does not fit in a u64.
    #[error("F({n}) overflows u64 (largest supported index is {max})")]
    Overflow { n: u64, max: u64 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different strategies don't match.
    #[error("result mismatch between strategies")]
    Mismatch,
}

/// A way of computing F(n).
pub trait FibStrategy: Send + Sync {
    /// Compute F(n).
    fn compute(&self, n: u64) -> Result<u64, FibError>;

    /// Display name of this strategy.
    fn name(&self) -> &str;

    /// One-line complexity summary shown after a comparison.
    fn complexity(&self) -> &'static str;

    /// Largest n this strategy accepts, when it is guarded more tightly than
    /// the u64 range.
    fn max_input(&self) -> Option<u64> {
        None
    }

    /// Drop any state carried between calls. Stateless strategies ignore this.
    fn reset(&self) {}
}

/// Reject indices whose value would overflow a u64.
pub(crate) fn ensure_representable(n: u64) -> Result<(), FibError> {
    if n > MAX_FIB_U64 {
        tracing::warn!(n, max = MAX_FIB_U64, "index out of u64 range");
        return Err(FibError::Overflow {
            n,
            max: MAX_FIB_U64,
        });
    }
    Ok(())
}
