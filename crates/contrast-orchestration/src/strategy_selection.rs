//! Strategy selection logic.

use std::sync::Arc;

use contrast_core::registry::StrategyFactory;
use contrast_core::strategy::{FibError, FibStrategy};

/// Get strategies to run based on a selection string.
///
/// Accepts `all`, a single name, or a comma-separated list of names.
pub fn get_strategies_to_run(
    algo: &str,
    factory: &dyn StrategyFactory,
) -> Result<Vec<Arc<dyn FibStrategy>>, FibError> {
    if algo.trim() == "all" {
        return factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect();
    }

    let mut strategies: Vec<Arc<dyn FibStrategy>> = Vec::new();
    for name in algo.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let strategy = factory.get(name)?;
        if !strategies.iter().any(|s| Arc::ptr_eq(s, &strategy)) {
            strategies.push(strategy);
        }
    }

    if strategies.is_empty() {
        return Err(FibError::Config("no strategy selected".into()));
    }
    Ok(strategies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contrast_core::registry::DefaultFactory;

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let strategies = get_strategies_to_run("all", &factory).unwrap();
        assert_eq!(strategies.len(), 4);
        assert_eq!(strategies[0].name(), "Recursive");
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let strategies = get_strategies_to_run("memoized", &factory).unwrap();
        assert_eq!(strategies.len(), 1);
        assert_eq!(strategies[0].name(), "Memoized");
    }

    #[test]
    fn select_list_dedups() {
        let factory = DefaultFactory::new();
        let strategies =
            get_strategies_to_run("iterative, memoized,iterative", &factory).unwrap();
        let names: Vec<&str> = strategies.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Iterative", "Memoized"]);
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            get_strategies_to_run("iterative,unknown", &factory),
            Err(FibError::Config(_))
        ));
    }

    #[test]
    fn select_empty() {
        let factory = DefaultFactory::new();
        assert!(get_strategies_to_run(" , ", &factory).is_err());
    }
}
