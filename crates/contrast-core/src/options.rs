//! Demo run options.

use crate::constants::{
    DEFAULT_BOUND, DEFAULT_GRADE_THRESHOLD, DEFAULT_LARGE_N, DEFAULT_RECURSION_LIMIT,
    DEFAULT_SEQUENCE_LEN, DEFAULT_SMALL_N, MAX_FIB_U64,
};
use crate::strategy::FibError;

/// Index used for the "F(n) using different methods" preview.
pub const PREVIEW_N: u64 = 10;

/// Options for a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    /// Inclusive grade threshold for the filter demo.
    pub threshold: i32,
    /// Index for the preview that runs every strategy untimed.
    pub preview_n: u64,
    /// Index for the comparison that includes the recursive strategy.
    pub small_n: u64,
    /// Index for the comparison that skips the recursive strategy.
    pub large_n: u64,
    /// Guard for the recursive strategy.
    pub recursion_limit: u64,
    /// Upper bound for the bounded generator.
    pub bound: u64,
    /// Number of terms for the sequence listing.
    pub sequence_len: usize,
    /// Run the recursive strategy in the large comparison too.
    pub include_recursive: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_GRADE_THRESHOLD,
            preview_n: PREVIEW_N,
            small_n: DEFAULT_SMALL_N,
            large_n: DEFAULT_LARGE_N,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            bound: DEFAULT_BOUND,
            sequence_len: DEFAULT_SEQUENCE_LEN,
            include_recursive: false,
        }
    }
}

impl DemoOptions {
    /// Check that every index stays within u64 range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn validate(&self) -> Result<(), FibError> {
        for (label, n) in [
            ("preview n", self.preview_n),
            ("small n", self.small_n),
            ("large n", self.large_n),
            ("recursion limit", self.recursion_limit),
        ] {
            if n > MAX_FIB_U64 {
                return Err(FibError::Config(format!(
                    "{label} must be at most {MAX_FIB_U64}, got {n}"
                )));
            }
        }
        if self.sequence_len > MAX_FIB_U64 as usize + 1 {
            return Err(FibError::Config(format!(
                "sequence length must be at most {}, got {}",
                MAX_FIB_U64 + 1,
                self.sequence_len
            )));
        }
        Ok(())
    }
}
