//! CLI result presenter.

use contrast_orchestration::interfaces::{
    ComparisonReport, FibonacciReport, FilterReport, ResultPresenter, TimingSample,
};

use crate::output::{format_duration, format_list, format_seconds, format_speedup};
use crate::ui::{print_error, print_header, print_note, rule};

/// Width of the strategy label column.
const LABEL_WIDTH: usize = 12;

/// Width of the rule around the closing summary.
const SUMMARY_RULE_WIDTH: usize = 60;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub(crate) fn filter_lines(&self, report: &FilterReport) -> Vec<String> {
        if self.quiet {
            return vec![format_list(&report.iter_result)];
        }
        let mut lines = vec![
            format!("Normal way result: {}", format_list(&report.loop_result)),
            format!(
                "Normal way time: {} seconds",
                format_seconds(report.loop_time.as_secs_f64())
            ),
            format!("Optimal way result: {}", format_list(&report.iter_result)),
            format!(
                "Optimal way time: {} seconds",
                format_seconds(report.iter_time.as_secs_f64())
            ),
            format!("Speed improvement: {}", format_speedup(report.speedup)),
        ];
        if self.verbose {
            lines.push(format!(
                "Threshold: {} ({} of {} records selected)",
                report.threshold,
                report.iter_result.len(),
                report.record_count
            ));
        }
        lines
    }

    fn sample_line(&self, sample: &TimingSample) -> String {
        let label = &sample.label;
        match sample.value() {
            Some(value) if self.quiet => format!("F({}) = {value}", sample.n),
            Some(value) => {
                let mut line = format!(
                    "{label:<LABEL_WIDTH$}: {value} (Time: {} seconds)",
                    format_seconds(sample.seconds())
                );
                if self.verbose {
                    line.push_str(&format!(" [{}]", format_duration(sample.elapsed)));
                }
                line
            }
            None => format!("{label:<LABEL_WIDTH$}: {}", sample.outcome),
        }
    }

    pub(crate) fn comparison_lines(&self, report: &ComparisonReport) -> Vec<String> {
        if self.quiet {
            return report
                .samples
                .iter()
                .find(|s| s.value().is_some())
                .map(|s| self.sample_line(s))
                .into_iter()
                .collect();
        }

        let mut lines = vec![format!("Performance comparison for Fibonacci({}):", report.n)];
        lines.extend(report.samples.iter().map(|s| self.sample_line(s)));
        for name in &report.skipped {
            lines.push(format!(
                "{name} skipped for n={} (would be too slow)",
                report.n
            ));
        }

        lines.push(String::new());
        lines.push(format!("Speed comparison for n={}:", report.n));
        if report.comparisons.is_empty() {
            lines.push("N/A".to_string());
        } else {
            lines.extend(report.comparisons.iter().map(ToString::to_string));
        }
        lines
    }

    pub(crate) fn fibonacci_lines(&self, report: &FibonacciReport) -> Vec<String> {
        if self.quiet {
            return vec![
                format_list(&report.sequence),
                format_list(&report.bounded),
            ];
        }

        let mut lines = vec![format!(
            "Fibonacci({}) using different methods:",
            report.preview_n
        )];
        for entry in &report.preview {
            lines.push(format!("{:<LABEL_WIDTH$}: {}", entry.label, entry.outcome));
        }
        lines.push(format!(
            "{:<LABEL_WIDTH$}: {}",
            "First terms",
            format_list(&report.sequence_preview)
        ));
        lines.push(String::new());
        lines.push(format!(
            "First {} Fibonacci numbers using a lazy iterator:",
            report.sequence.len()
        ));
        lines.push(format_list(&report.sequence));
        lines.push(String::new());
        lines.push(format!("Fibonacci numbers up to {}:", report.bound));
        lines.push(format_list(&report.bounded));
        lines
    }

    pub(crate) fn summary_lines(&self, report: &FibonacciReport) -> Vec<String> {
        let mut lines = vec![
            rule(SUMMARY_RULE_WIDTH),
            "FIBONACCI ALGORITHM COMPARISON:".to_string(),
        ];
        lines.extend(
            report
                .summary
                .iter()
                .map(|line| format!("• {}: {}", line.name, line.complexity)),
        );
        lines.push(rule(SUMMARY_RULE_WIDTH));
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_filter(&self, report: &FilterReport) {
        if !self.quiet {
            print_header("FILTERING AND TRANSFORMING DATA");
        }
        for line in self.filter_lines(report) {
            println!("{line}");
        }
        if !self.quiet {
            println!();
        }
    }

    fn present_fibonacci(&self, report: &FibonacciReport) {
        if !self.quiet {
            print_header("FIBONACCI SEQUENCE GENERATION");
        }
        for line in self.fibonacci_lines(report) {
            println!("{line}");
        }

        for comparison in [&report.small, &report.large] {
            if !self.quiet {
                println!();
            }
            self.present_comparison(comparison);
        }

        if !self.quiet {
            println!();
            for line in self.summary_lines(report) {
                print_note(&line);
            }
        }
    }

    fn present_comparison(&self, report: &ComparisonReport) {
        for line in self.comparison_lines(report) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
