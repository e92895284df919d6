// ============================================================================
// Calculus Configuration
// Conversion precision and batch evaluation settings
// ============================================================================

use crate::numeric::DEFAULT_MAX_DENOMINATOR;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of worker threads for batch evaluation
pub const DEFAULT_WORKER_THREADS: usize = 4;

/// Batches smaller than this are evaluated on the calling thread
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Settings shared by conversion and the evaluator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculusConfig {
    /// Largest denominator allowed when a float is approximated by a rational
    pub max_denominator: u64,

    /// Number of threads used by batch evaluation
    pub worker_threads: usize,

    /// Minimum batch size before work is spread over threads
    pub parallel_threshold: usize,
}

impl Default for CalculusConfig {
    fn default() -> Self {
        Self {
            max_denominator: DEFAULT_MAX_DENOMINATOR,
            worker_threads: DEFAULT_WORKER_THREADS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl CalculusConfig {
    /// Builder method: Set the float approximation bound
    pub fn with_max_denominator(mut self, max_denominator: u64) -> Self {
        self.max_denominator = max_denominator;
        self
    }

    /// Builder method: Set the number of batch worker threads
    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    /// Builder method: Set the batch size at which evaluation goes parallel
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_denominator == 0 {
            return Err("Maximum denominator must be at least 1".to_string());
        }

        if self.worker_threads == 0 {
            return Err("Worker thread count must be at least 1".to_string());
        }

        if self.parallel_threshold == 0 {
            return Err("Parallel threshold must be at least 1".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculusConfig {
    /// Everything on the calling thread
    pub fn single_threaded() -> Self {
        Self::default().with_worker_threads(1)
    }

    /// Float conversion limited to small denominators (≤ 1000)
    /// - Useful when inputs come from rounded measurements
    pub fn coarse() -> Self {
        Self::default().with_max_denominator(1000)
    }
}
