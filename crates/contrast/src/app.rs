//! Application entry point and dispatch.

use anyhow::{Context, Result};

use contrast_cli::presenter::CLIResultPresenter;
use contrast_core::records::{load_roster, sample_roster, Record};
use contrast_core::registry::DefaultFactory;
use contrast_core::strategy::FibError;
use contrast_orchestration::interfaces::{DemoReport, ResultPresenter};
use contrast_orchestration::orchestrator::{run_fibonacci_demo, run_filter_demo};
use contrast_orchestration::strategy_selection::get_strategies_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        contrast_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let report = build_report(config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    present(&presenter, &report);
    Ok(())
}

/// Run every requested demo and collect the results.
pub fn build_report(config: &AppConfig) -> Result<DemoReport> {
    let opts = config.demo_options();
    opts.validate()?;

    let mut report = DemoReport::default();

    if config.section.includes_filter() {
        let records = load_records(config)?;
        let filter = run_filter_demo(&records, opts.threshold);
        if !filter.results_match() {
            return Err(FibError::Mismatch).context("filter implementations disagree");
        }
        report.filter = Some(filter);
    }

    if config.section.includes_fibonacci() {
        let factory = DefaultFactory::with_recursion_limit(opts.recursion_limit);
        let strategies = get_strategies_to_run(&config.algo, &factory)?;
        tracing::debug!(count = strategies.len(), "strategies selected");
        report.fibonacci = Some(run_fibonacci_demo(&strategies, &opts)?);
    }

    Ok(report)
}

/// Hand every section of the report to the presenter.
pub fn present(presenter: &dyn ResultPresenter, report: &DemoReport) {
    if let Some(filter) = &report.filter {
        presenter.present_filter(filter);
    }
    if let Some(fibonacci) = &report.fibonacci {
        presenter.present_fibonacci(fibonacci);
    }
}

fn load_records(config: &AppConfig) -> Result<Vec<Record>> {
    match &config.roster {
        Some(path) => load_roster(path)
            .with_context(|| format!("failed to load roster from {}", path.display())),
        None => Ok(sample_roster()),
    }
}
