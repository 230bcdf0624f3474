//! Orchestration interfaces and report types.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use contrast_core::strategy::FibError;

/// Trait for presenting demo results to the user.
pub trait ResultPresenter {
    /// Present the filter-transform demo.
    fn present_filter(&self, report: &FilterReport);

    /// Present the Fibonacci demo, comparisons included.
    fn present_fibonacci(&self, report: &FibonacciReport);

    /// Present one timed comparison.
    fn present_comparison(&self, report: &ComparisonReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// What a timed strategy call produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// F(n) was computed.
    Value { value: u64 },
    /// The recursion guard refused the input.
    TooDeep { n: u64, limit: u64 },
    /// Any other strategy error.
    Failed { message: String },
}

impl Outcome {
    /// The computed value, if any.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        match self {
            Self::Value { value } => Some(*value),
            _ => None,
        }
    }
}

impl From<Result<u64, FibError>> for Outcome {
    fn from(result: Result<u64, FibError>) -> Self {
        match result {
            Ok(value) => Self::Value { value },
            Err(FibError::TooDeep { n, limit }) => Self::TooDeep { n, limit },
            Err(e) => Self::Failed {
                message: e.to_string(),
            },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value { value } => write!(f, "{value}"),
            Self::TooDeep { n, limit } => {
                write!(f, "too deep! (n = {n} exceeds recursion limit {limit})")
            }
            Self::Failed { message } => write!(f, "error: {message}"),
        }
    }
}

/// One timed strategy call.
#[derive(Debug, Clone, Serialize)]
pub struct TimingSample {
    /// Strategy name.
    pub label: String,
    /// Fibonacci index.
    pub n: u64,
    /// Result of the call.
    pub outcome: Outcome,
    /// Measured wall-clock duration.
    #[serde(rename = "seconds", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl TimingSample {
    /// Elapsed seconds, or infinity when the call produced no value.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        match self.outcome {
            Outcome::Value { .. } => self.elapsed.as_secs_f64(),
            _ => f64::INFINITY,
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<u64> {
        self.outcome.value()
    }

    #[must_use]
    pub fn is_too_deep(&self) -> bool {
        matches!(self.outcome, Outcome::TooDeep { .. })
    }
}

/// "`faster` is `ratio`x faster than `slower`".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedComparison {
    pub faster: String,
    pub slower: String,
    pub ratio: f64,
}

impl fmt::Display for SpeedComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {:.1}x faster than {}",
            self.faster, self.ratio, self.slower
        )
    }
}

/// Result of the filter-transform demo.
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    /// Inclusive grade threshold.
    pub threshold: i32,
    /// Number of input records.
    pub record_count: usize,
    /// Names produced by the explicit loop.
    pub loop_result: Vec<String>,
    /// Names produced by the iterator chain.
    pub iter_result: Vec<String>,
    #[serde(rename = "loop_seconds", serialize_with = "serialize_secs")]
    pub loop_time: Duration,
    #[serde(rename = "iter_seconds", serialize_with = "serialize_secs")]
    pub iter_time: Duration,
    /// Loop time divided by iterator time; `None` when not measurable.
    pub speedup: Option<f64>,
}

impl FilterReport {
    #[must_use]
    pub fn results_match(&self) -> bool {
        self.loop_result == self.iter_result
    }
}

/// Timed run of several strategies at one n.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Fibonacci index.
    pub n: u64,
    /// One sample per strategy that ran, in run order.
    pub samples: Vec<TimingSample>,
    /// Strategies left out because their guard is below n.
    pub skipped: Vec<String>,
    /// Pairwise speed ratios against the reference strategy.
    pub comparisons: Vec<SpeedComparison>,
}

impl ComparisonReport {
    /// Sample for the named strategy.
    #[must_use]
    pub fn sample(&self, label: &str) -> Option<&TimingSample> {
        self.samples.iter().find(|s| s.label == label)
    }
}

/// Untimed F(n) from one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewEntry {
    pub label: String,
    pub outcome: Outcome,
}

/// Complexity note for one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryLine {
    pub name: String,
    pub complexity: String,
}

/// Result of the Fibonacci demo.
#[derive(Debug, Clone, Serialize)]
pub struct FibonacciReport {
    /// Index of the untimed preview.
    pub preview_n: u64,
    /// F(preview_n) from every strategy.
    pub preview: Vec<PreviewEntry>,
    /// First `preview_n` terms.
    pub sequence_preview: Vec<u64>,
    /// First `sequence_len` terms.
    pub sequence: Vec<u64>,
    /// Upper bound for the bounded generator.
    pub bound: u64,
    /// Terms up to `bound`.
    pub bounded: Vec<u64>,
    /// Comparison including the guarded strategies.
    pub small: ComparisonReport,
    /// Comparison at the larger n.
    pub large: ComparisonReport,
    pub summary: Vec<SummaryLine>,
}

/// Everything a run produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DemoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fibonacci: Option<FibonacciReport>,
}
