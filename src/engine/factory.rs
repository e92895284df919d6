// ============================================================================
// Evaluator Factory
// Creates evaluators with validated configuration
// ============================================================================

use crate::domain::CalculusConfig;
use crate::engine::Evaluator;
use crate::interfaces::{EventHandler, LoggingEventHandler, NoOpEventHandler};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an evaluator from configuration
///
/// # Arguments
/// * `config` - Conversion and batching configuration
/// * `event_handler` - Event handler for evaluation outcomes
///
/// # Returns
/// * `Result<Evaluator, String>` - Configured evaluator or validation error
///
/// # Example
/// ```
/// use omega_epsilon::prelude::*;
/// use std::sync::Arc;
///
/// let evaluator = create_from_config(CalculusConfig::default(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(evaluator.evaluate(&Operation::multiply(OMEGA, EPSILON)).unwrap(), Value::one());
/// ```
pub fn create_from_config(
    config: CalculusConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Evaluator, String> {
    config.validate()?;
    Ok(Evaluator::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating evaluators with fluent API
///
/// # Example
/// ```
/// use omega_epsilon::prelude::*;
///
/// let evaluator = EvaluatorBuilder::new()
///     .with_max_denominator(1000)
///     .with_worker_threads(2)
///     .with_logging()
///     .build()
///     .unwrap();
/// assert_eq!(evaluator.config().max_denominator, 1000);
/// ```
pub struct EvaluatorBuilder {
    config: CalculusConfig,
    event_handler: Option<Arc<dyn EventHandler>>,
}

impl EvaluatorBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: CalculusConfig::default(),
            event_handler: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: CalculusConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the float approximation bound
    pub fn with_max_denominator(mut self, max_denominator: u64) -> Self {
        self.config.max_denominator = max_denominator;
        self
    }

    /// Set the number of batch worker threads
    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.config.worker_threads = worker_threads;
        self
    }

    /// Set the batch size at which evaluation goes parallel
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.config.parallel_threshold = parallel_threshold;
        self
    }

    /// Report outcomes to a custom handler
    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = Some(event_handler);
        self
    }

    /// Report outcomes through `tracing`
    pub fn with_logging(self) -> Self {
        self.with_event_handler(Arc::new(LoggingEventHandler))
    }

    /// Build the evaluator, discarding events unless a handler was set
    pub fn build(self) -> Result<Evaluator, String> {
        let handler = self
            .event_handler
            .unwrap_or_else(|| Arc::new(NoOpEventHandler));
        create_from_config(self.config, handler)
    }
}

impl Default for EvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
