//! Calculator factory.

use std::sync::Arc;

use crate::calculator::{Calculator, FibError};
use crate::policy::{BigCalculator, Checked64, OverflowPolicy, Wrapping32, Wrapping64};

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get a calculator by policy name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available policy names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory backed by the built-in overflow policies.
#[derive(Debug, Default)]
pub struct DefaultFactory;

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Create the calculator for a parsed policy.
    #[must_use]
    pub fn create(policy: OverflowPolicy) -> Arc<dyn Calculator> {
        match policy {
            OverflowPolicy::Wrap32 => Arc::new(Wrapping32),
            OverflowPolicy::Wrap64 => Arc::new(Wrapping64),
            OverflowPolicy::Checked => Arc::new(Checked64),
            OverflowPolicy::Big => Arc::new(BigCalculator),
        }
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let policy: OverflowPolicy = name.parse()?;
        tracing::debug!(policy = %policy, "resolved Fibonacci calculator");
        Ok(Self::create(policy))
    }

    fn available(&self) -> Vec<&str> {
        OverflowPolicy::ALL.iter().map(|p| p.name()).collect()
    }
}
