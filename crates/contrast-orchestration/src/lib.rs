//! # contrast-orchestration
//!
//! Timing harness, strategy selection, cross-validation, and the demo runs
//! that feed a `ResultPresenter`.

pub mod interfaces;
pub mod orchestrator;
pub mod strategy_selection;
pub mod timing;

pub use interfaces::{
    ComparisonReport, DemoReport, FibonacciReport, FilterReport, Outcome, ResultPresenter,
    SpeedComparison, TimingSample,
};
pub use orchestrator::{
    analyze_comparison_results, head_to_head, reset_strategies, run_comparison,
    run_fibonacci_demo, run_filter_demo,
};
pub use timing::{speedup, time_call, time_strategy};
