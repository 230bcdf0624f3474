//! Strategy factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::constants::DEFAULT_RECURSION_LIMIT;
use crate::iterative::IterativeFibonacci;
use crate::iterator::SequenceFibonacci;
use crate::memoized::MemoizedFibonacci;
use crate::recursive::RecursiveFibonacci;
use crate::strategy::{FibError, FibStrategy};

/// Factory trait for creating strategies.
pub trait StrategyFactory: Send + Sync {
    /// Get or create a strategy by name.
    fn get(&self, name: &str) -> Result<Arc<dyn FibStrategy>, FibError>;

    /// List all available strategy names, in presentation order.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// A cached strategy is shared by every caller, so the memoized strategy's
/// cache persists until someone calls `reset` on it.
pub struct DefaultFactory {
    recursion_limit: u64,
    cache: RwLock<HashMap<String, Arc<dyn FibStrategy>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_recursion_limit(DEFAULT_RECURSION_LIMIT)
    }

    /// Create a factory whose recursive strategy uses the given guard.
    #[must_use]
    pub fn with_recursion_limit(recursion_limit: u64) -> Self {
        Self {
            recursion_limit,
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_strategy(&self, name: &str) -> Result<Arc<dyn FibStrategy>, FibError> {
        let strategy: Arc<dyn FibStrategy> = match name {
            "recursive" => Arc::new(RecursiveFibonacci::with_limit(self.recursion_limit)),
            "iterative" => Arc::new(IterativeFibonacci::new()),
            "memoized" => Arc::new(MemoizedFibonacci::new()),
            "sequence" => Arc::new(SequenceFibonacci::new()),
            _ => return Err(FibError::Config(format!("unknown strategy: {name}"))),
        };
        tracing::debug!(name, "created strategy");
        Ok(strategy)
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn FibStrategy>, FibError> {
        // Check cache first
        if let Some(strategy) = self.cache.read().get(name) {
            return Ok(Arc::clone(strategy));
        }

        let strategy = self.create_strategy(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&strategy));
        Ok(strategy)
    }

    fn available(&self) -> Vec<&str> {
        vec!["recursive", "iterative", "memoized", "sequence"]
    }
}
