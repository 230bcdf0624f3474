//! Core orchestration: demo runs, comparisons, and result analysis.
//!
//! Everything here runs on the calling thread, one strategy at a time, so
//! timings never overlap.

use std::sync::Arc;

use contrast_core::iterator::{fibonacci_generator, fibonacci_sequence};
use contrast_core::options::DemoOptions;
use contrast_core::records::{top_names_iter, top_names_loop, Record};
use contrast_core::strategy::{FibError, FibStrategy};

use crate::interfaces::{
    ComparisonReport, FibonacciReport, FilterReport, Outcome, PreviewEntry, SpeedComparison,
    SummaryLine, TimingSample,
};
use crate::timing::{speedup, time_call, time_strategy};

/// Time both filter implementations on the same records.
pub fn run_filter_demo(records: &[Record], threshold: i32) -> FilterReport {
    let (loop_result, loop_time) =
        time_call("normal way", || top_names_loop(records, threshold));
    let (iter_result, iter_time) =
        time_call("optimal way", || top_names_iter(records, threshold));
    tracing::debug!(
        threshold,
        records = records.len(),
        matched = iter_result.len(),
        "filter demo finished"
    );
    FilterReport {
        threshold,
        record_count: records.len(),
        speedup: speedup(loop_time.as_secs_f64(), iter_time.as_secs_f64()),
        loop_result,
        iter_result,
        loop_time,
        iter_time,
    }
}

/// Clear any state strategies carry between calls.
pub fn reset_strategies(strategies: &[Arc<dyn FibStrategy>]) {
    for strategy in strategies {
        strategy.reset();
    }
    tracing::debug!(count = strategies.len(), "strategies reset");
}

/// Time every strategy at `n`, in order, and compare each against the
/// strategy named `reference` (or the first one when it did not run).
pub fn run_comparison(
    strategies: &[Arc<dyn FibStrategy>],
    n: u64,
    reference: Option<&str>,
) -> ComparisonReport {
    let samples: Vec<TimingSample> = strategies
        .iter()
        .map(|strategy| time_strategy(strategy.as_ref(), n))
        .collect();

    let reference = reference
        .and_then(|name| samples.iter().find(|s| s.label == name))
        .or_else(|| samples.first());

    let comparisons = match reference {
        Some(reference) => samples
            .iter()
            .filter(|s| s.label != reference.label)
            .filter_map(|s| head_to_head(reference, s))
            .collect(),
        None => Vec::new(),
    };

    ComparisonReport {
        n,
        samples,
        skipped: Vec::new(),
        comparisons,
    }
}

/// Orient two samples so the faster one comes first.
///
/// `None` unless both produced a value in a measurable, non-zero time.
pub fn head_to_head(a: &TimingSample, b: &TimingSample) -> Option<SpeedComparison> {
    if a.value().is_none() || b.value().is_none() {
        return None;
    }
    let ratio = speedup(a.seconds(), b.seconds())?;
    let (faster, slower, ratio) = if ratio > 1.0 {
        (b, a, ratio)
    } else {
        (a, b, 1.0 / ratio)
    };
    Some(SpeedComparison {
        faster: faster.label.clone(),
        slower: slower.label.clone(),
        ratio,
    })
}

/// Check that every successful sample agrees on the value.
pub fn analyze_comparison_results(samples: &[TimingSample]) -> Result<(), FibError> {
    let mut values = samples.iter().filter_map(|s| s.value().map(|v| (s, v)));
    let Some((first, expected)) = values.next() else {
        return Ok(());
    };
    for (sample, value) in values {
        if value != expected {
            tracing::warn!(
                n = sample.n,
                reference = %first.label,
                strategy = %sample.label,
                expected,
                got = value,
                "strategies disagree"
            );
            return Err(FibError::Mismatch);
        }
    }
    Ok(())
}

/// Run the whole Fibonacci demo.
///
/// Caches are reset before each timed comparison and once more at the end,
/// so both comparisons start cold and nothing leaks into a later run.
pub fn run_fibonacci_demo(
    strategies: &[Arc<dyn FibStrategy>],
    opts: &DemoOptions,
) -> Result<FibonacciReport, FibError> {
    opts.validate()?;

    let preview = strategies
        .iter()
        .map(|strategy| PreviewEntry {
            label: strategy.name().to_string(),
            outcome: Outcome::from(strategy.compute(opts.preview_n)),
        })
        .collect();
    let preview_len = usize::try_from(opts.preview_n)
        .map_err(|_| FibError::Config(format!("preview n {} is too large", opts.preview_n)))?;
    let sequence_preview = fibonacci_sequence(preview_len)?;
    let sequence = fibonacci_sequence(opts.sequence_len)?;
    let bounded: Vec<u64> = fibonacci_generator(opts.bound).collect();

    // Guarded strategies (naive recursion) serve as the baseline at small n.
    let slow_reference = strategies
        .iter()
        .find(|s| s.max_input().is_some())
        .map(|s| s.name().to_string());

    reset_strategies(strategies);
    let small = run_comparison(strategies, opts.small_n, slow_reference.as_deref());
    analyze_comparison_results(&small.samples)?;

    reset_strategies(strategies);
    let (runnable, skipped): (Vec<_>, Vec<_>) = strategies.iter().cloned().partition(|s| {
        opts.include_recursive || s.max_input().map_or(true, |limit| opts.large_n <= limit)
    });
    let mut large = run_comparison(&runnable, opts.large_n, None);
    large.skipped = skipped.iter().map(|s| s.name().to_string()).collect();
    analyze_comparison_results(&large.samples)?;

    reset_strategies(strategies);

    let summary = strategies
        .iter()
        .map(|s| SummaryLine {
            name: s.name().to_string(),
            complexity: s.complexity().to_string(),
        })
        .collect();

    Ok(FibonacciReport {
        preview_n: opts.preview_n,
        preview,
        sequence_preview,
        sequence,
        bound: opts.bound,
        bounded,
        small,
        large,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use contrast_core::memoized::MemoizedFibonacci;
    use contrast_core::records::sample_roster;
    use contrast_core::registry::{DefaultFactory, StrategyFactory};

    fn sample(label: &str, value: Option<u64>, millis: u64) -> TimingSample {
        TimingSample {
            label: label.into(),
            n: 20,
            outcome: match value {
                Some(value) => Outcome::Value { value },
                None => Outcome::TooDeep { n: 20, limit: 10 },
            },
            elapsed: Duration::from_millis(millis),
        }
    }

    fn all_strategies(factory: &DefaultFactory) -> Vec<Arc<dyn FibStrategy>> {
        factory
            .available()
            .into_iter()
            .map(|name| factory.get(name).unwrap())
            .collect()
    }

    /// Always returns the wrong answer.
    struct Broken;

    impl FibStrategy for Broken {
        fn compute(&self, n: u64) -> Result<u64, FibError> {
            Ok(n + 1_000)
        }
        fn name(&self) -> &str {
            "Broken"
        }
        fn complexity(&self) -> &'static str {
            "O(1) - wrong"
        }
    }

    #[test]
    fn filter_demo_default_scenario() {
        let report = run_filter_demo(&sample_roster(), 80);
        assert_eq!(report.loop_result, ["ALICE", "CHARLIE", "EVE", "GRACE"]);
        assert!(report.results_match());
        assert_eq!(report.record_count, 7);
        assert_eq!(report.threshold, 80);
    }

    #[test]
    fn head_to_head_orients_winner() {
        let slow = sample("Recursive", Some(6765), 100);
        let fast = sample("Iterative", Some(6765), 1);
        let cmp = head_to_head(&slow, &fast).unwrap();
        assert_eq!(cmp.faster, "Iterative");
        assert_eq!(cmp.slower, "Recursive");
        assert!((cmp.ratio - 100.0).abs() < 1e-9);

        let cmp = head_to_head(&fast, &slow).unwrap();
        assert_eq!(cmp.faster, "Iterative");
        assert!((cmp.ratio - 100.0).abs() < 1e-9);
    }

    #[test]
    fn head_to_head_zero_time_unavailable() {
        let a = sample("Iterative", Some(1), 0);
        let b = sample("Memoized", Some(1), 5);
        assert!(head_to_head(&a, &b).is_none());
        assert!(head_to_head(&b, &a).is_none());
    }

    #[test]
    fn head_to_head_too_deep_unavailable() {
        let a = sample("Recursive", None, 5);
        let b = sample("Iterative", Some(1), 5);
        assert!(head_to_head(&a, &b).is_none());
    }

    #[test]
    fn analyze_matching_results() {
        let samples = vec![
            sample("A", Some(55), 1),
            sample("B", Some(55), 2),
            sample("C", None, 3),
        ];
        assert!(analyze_comparison_results(&samples).is_ok());
    }

    #[test]
    fn analyze_mismatching_results() {
        let samples = vec![sample("A", Some(55), 1), sample("B", Some(56), 2)];
        assert_eq!(
            analyze_comparison_results(&samples),
            Err(FibError::Mismatch)
        );
    }

    #[test]
    fn analyze_no_values_is_ok() {
        assert!(analyze_comparison_results(&[]).is_ok());
        assert!(analyze_comparison_results(&[sample("A", None, 1)]).is_ok());
    }

    #[test]
    fn comparison_times_every_strategy() {
        let factory = DefaultFactory::new();
        let strategies = all_strategies(&factory);
        let report = run_comparison(&strategies, 20, Some("Recursive"));
        assert_eq!(report.samples.len(), 4);
        for s in &report.samples {
            assert_eq!(s.value(), Some(6765), "{} disagrees", s.label);
        }
        assert!(report
            .comparisons
            .iter()
            .all(|c| c.faster == "Recursive" || c.slower == "Recursive"));
    }

    #[test]
    fn comparison_records_too_deep() {
        let factory = DefaultFactory::new();
        let strategies = all_strategies(&factory);
        let report = run_comparison(&strategies, 35, None);
        let recursive = report.sample("Recursive").unwrap();
        assert!(recursive.is_too_deep());
        assert!(report
            .comparisons
            .iter()
            .all(|c| c.faster != "Recursive" && c.slower != "Recursive"));
    }

    #[test]
    fn fibonacci_demo_defaults() {
        let factory = DefaultFactory::new();
        let strategies = all_strategies(&factory);
        let report = run_fibonacci_demo(&strategies, &DemoOptions::default()).unwrap();

        assert_eq!(report.preview.len(), 4);
        assert!(report
            .preview
            .iter()
            .all(|p| p.outcome == Outcome::Value { value: 55 }));
        assert_eq!(report.sequence_preview, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(report.sequence.len(), 15);
        assert_eq!(report.bounded, [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);

        assert_eq!(report.small.n, 20);
        assert_eq!(report.small.samples.len(), 4);
        assert_eq!(report.large.n, 35);
        assert_eq!(report.large.skipped, ["Recursive"]);
        assert!(report.large.sample("Recursive").is_none());
        assert_eq!(
            report.large.sample("Memoized").and_then(TimingSample::value),
            Some(9_227_465)
        );
        assert_eq!(report.summary.len(), 4);
    }

    #[test]
    fn fibonacci_demo_include_recursive_reports_too_deep() {
        let factory = DefaultFactory::new();
        let strategies = all_strategies(&factory);
        let opts = DemoOptions {
            include_recursive: true,
            ..Default::default()
        };
        let report = run_fibonacci_demo(&strategies, &opts).unwrap();
        assert!(report.large.skipped.is_empty());
        assert!(report.large.sample("Recursive").unwrap().is_too_deep());
    }

    #[test]
    fn fibonacci_demo_leaves_cache_cold() {
        let memoized = Arc::new(MemoizedFibonacci::new());
        let strategies = vec![Arc::clone(&memoized) as Arc<dyn FibStrategy>];
        run_fibonacci_demo(&strategies, &DemoOptions::default()).unwrap();
        assert_eq!(memoized.stats().entries, 0);
    }

    #[test]
    fn fibonacci_demo_detects_mismatch() {
        let strategies = vec![
            Arc::new(contrast_core::iterative::IterativeFibonacci::new()) as Arc<dyn FibStrategy>,
            Arc::new(Broken),
        ];
        assert_eq!(
            run_fibonacci_demo(&strategies, &DemoOptions::default()).unwrap_err(),
            FibError::Mismatch
        );
    }

    #[test]
    fn fibonacci_demo_rejects_invalid_options() {
        let factory = DefaultFactory::new();
        let strategies = all_strategies(&factory);
        let opts = DemoOptions {
            small_n: 200,
            ..Default::default()
        };
        assert!(matches!(
            run_fibonacci_demo(&strategies, &opts),
            Err(FibError::Config(_))
        ));
    }
}
