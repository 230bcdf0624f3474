//! Constants for the demo defaults and strategy guards.

/// Default grade threshold for the filter demo (inclusive).
pub const DEFAULT_GRADE_THRESHOLD: i32 = 80;

/// Largest n the naive recursive strategy accepts by default.
///
/// The call count grows as roughly 1.6^n, so anything much beyond this
/// takes seconds to minutes.
pub const DEFAULT_RECURSION_LIMIT: u64 = 30;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Input size of the comparison that includes the recursive strategy.
pub const DEFAULT_SMALL_N: u64 = 20;

/// Input size of the comparison that skips the recursive strategy.
pub const DEFAULT_LARGE_N: u64 = 35;

/// Upper bound for the bounded generator demo.
pub const DEFAULT_BOUND: u64 = 100;

/// Number of terms printed by the sequence demo.
pub const DEFAULT_SEQUENCE_LEN: usize = 15;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_sizes_are_ordered() {
        assert!(DEFAULT_SMALL_N <= DEFAULT_RECURSION_LIMIT);
        assert!(DEFAULT_LARGE_N > DEFAULT_RECURSION_LIMIT);
        assert!(DEFAULT_LARGE_N <= MAX_FIB_U64);
    }

    #[test]
    fn exit_codes_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_MISMATCH,
            exit_codes::ERROR_CONFIG,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
