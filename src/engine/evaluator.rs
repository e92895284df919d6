// ============================================================================
// Evaluator
// Evaluates operations, reports outcomes and fans batches out over threads
// ============================================================================

use crate::domain::{BinaryOp, CalculusConfig, Operation, Value};
use crate::interfaces::{EvaluationEvent, EventHandler};
use crate::numeric::CalculusResult;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Evaluates [`Operation`]s and reports each outcome to an event handler.
///
/// Values are immutable and every rule is a pure function, so independent
/// operations in a batch are evaluated on scoped worker threads without any
/// coordination beyond collecting results in input order.
pub struct Evaluator {
    /// Conversion and batching settings
    config: CalculusConfig,

    /// Event handler for processing outcomes
    event_handler: Arc<dyn EventHandler>,

    /// Number of operations evaluated so far
    evaluated: AtomicU64,
}

impl Evaluator {
    /// Create a new evaluator
    pub fn new(config: CalculusConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
            evaluated: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &CalculusConfig {
        &self.config
    }

    /// Total number of operations evaluated, failures included
    pub fn evaluated_count(&self) -> u64 {
        self.evaluated.load(Ordering::Acquire)
    }

    /// Evaluate a single operation
    pub fn evaluate(&self, operation: &Operation) -> CalculusResult<Value> {
        let (outcome, event) = self.run(operation);
        self.event_handler.on_event(event);
        outcome
    }

    /// Evaluate independent operations, preserving input order in the output.
    ///
    /// Events are delivered through [`EventHandler::on_events`], one call per
    /// chunk, in input order within each chunk.
    pub fn evaluate_batch(&self, operations: &[Operation]) -> Vec<CalculusResult<Value>> {
        let workers = self.config.worker_threads.max(1);
        if workers == 1 || operations.len() < self.config.parallel_threshold {
            return self.evaluate_chunk(operations);
        }

        let chunk_size = operations.len().div_ceil(workers);
        tracing::debug!(
            operations = operations.len(),
            workers,
            chunk_size,
            "evaluating batch in parallel"
        );

        let scoped = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = operations
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move |_| self.evaluate_chunk(chunk)))
                .collect();

            let mut results = Vec::with_capacity(operations.len());
            for handle in handles {
                match handle.join() {
                    Ok(chunk_results) => results.extend(chunk_results),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
            results
        });

        match scoped {
            Ok(results) => results,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }

    fn evaluate_chunk(&self, operations: &[Operation]) -> Vec<CalculusResult<Value>> {
        let mut outcomes = Vec::with_capacity(operations.len());
        let mut events = Vec::with_capacity(operations.len());
        for operation in operations {
            let (outcome, event) = self.run(operation);
            outcomes.push(outcome);
            events.push(event);
        }
        if !events.is_empty() {
            self.event_handler.on_events(events);
        }
        outcomes
    }

    /// Compute one outcome and the event describing it
    fn run(&self, operation: &Operation) -> (CalculusResult<Value>, EvaluationEvent) {
        let outcome = compute(operation);
        self.evaluated.fetch_add(1, Ordering::AcqRel);

        let event = match &outcome {
            Ok(result) => EvaluationEvent::Evaluated {
                operation: operation.clone(),
                result: result.clone(),
                timestamp: Utc::now(),
            },
            Err(error) => EvaluationEvent::Failed {
                operation: operation.clone(),
                error: error.clone(),
                timestamp: Utc::now(),
            },
        };
        (outcome, event)
    }

    /// Convert a float with this evaluator's denominator bound
    pub fn convert_f64(&self, value: f64) -> CalculusResult<Value> {
        Value::from_f64_with(value, &self.config)
    }
}

fn compute(operation: &Operation) -> CalculusResult<Value> {
    match operation {
        Operation::Negate(value) => Ok(value.negate()),
        Operation::Reciprocal(value) => value.reciprocal(),
        Operation::Binary { op, lhs, rhs } => Ok(match op {
            BinaryOp::Add => lhs.add(rhs),
            BinaryOp::Subtract => lhs.subtract(rhs),
            BinaryOp::Multiply => lhs.multiply(rhs),
            BinaryOp::Divide => lhs.divide(rhs),
        }),
        Operation::Power { base, exponent } => base.pow(*exponent),
    }
}
