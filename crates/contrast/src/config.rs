//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use contrast_core::constants::{
    DEFAULT_BOUND, DEFAULT_GRADE_THRESHOLD, DEFAULT_LARGE_N, DEFAULT_RECURSION_LIMIT,
    DEFAULT_SEQUENCE_LEN, DEFAULT_SMALL_N,
};
use contrast_core::options::{DemoOptions, PREVIEW_N};

/// Which demo to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Filter-transform demo only.
    Filter,
    /// Fibonacci demo only.
    Fibonacci,
    /// Both demos.
    All,
}

impl Section {
    #[must_use]
    pub fn includes_filter(self) -> bool {
        matches!(self, Self::Filter | Self::All)
    }

    #[must_use]
    pub fn includes_fibonacci(self) -> bool {
        matches!(self, Self::Fibonacci | Self::All)
    }
}

/// Contrast — compare naive and idiomatic filter and Fibonacci implementations.
#[derive(Parser, Debug)]
#[command(name = "contrast", version, about)]
pub struct AppConfig {
    /// Demo section to run.
    #[arg(long, value_enum, default_value_t = Section::All, env = "CONTRAST_SECTION")]
    pub section: Section,

    /// Inclusive grade threshold for the filter demo.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_GRADE_THRESHOLD,
        env = "CONTRAST_THRESHOLD",
        allow_negative_numbers = true
    )]
    pub threshold: i32,

    /// JSON roster file to filter instead of the built-in records.
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Fibonacci index for the comparison that includes naive recursion.
    #[arg(long, default_value_t = DEFAULT_SMALL_N, env = "CONTRAST_SMALL_N")]
    pub small_n: u64,

    /// Fibonacci index for the larger comparison.
    #[arg(long, default_value_t = DEFAULT_LARGE_N, env = "CONTRAST_LARGE_N")]
    pub large_n: u64,

    /// Largest n the recursive strategy accepts.
    #[arg(long, default_value_t = DEFAULT_RECURSION_LIMIT)]
    pub recursion_limit: u64,

    /// Upper bound for the bounded generator listing.
    #[arg(long, default_value_t = DEFAULT_BOUND)]
    pub bound: u64,

    /// Number of terms in the sequence listing.
    #[arg(long, default_value_t = DEFAULT_SEQUENCE_LEN)]
    pub count: usize,

    /// Also run the recursive strategy in the larger comparison.
    #[arg(long)]
    pub include_recursive: bool,

    /// Strategies to run: recursive, iterative, memoized, sequence, a
    /// comma-separated list, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Print the whole run as JSON.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (only output results).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output and debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Demo options derived from the flags.
    #[must_use]
    pub fn demo_options(&self) -> DemoOptions {
        DemoOptions {
            threshold: self.threshold,
            preview_n: PREVIEW_N,
            small_n: self.small_n,
            large_n: self.large_n,
            recursion_limit: self.recursion_limit,
            bound: self.bound,
            sequence_len: self.count,
            include_recursive: self.include_recursive,
        }
    }

    /// Minimum log level for the subscriber.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}
