// ============================================================================
// Event Handler Interface
// Defines the contract for observing evaluation outcomes
// ============================================================================

use crate::domain::{Operation, Value};
use crate::numeric::CalculusError;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by the evaluator
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum EvaluationEvent {
    /// Operation produced a value
    Evaluated {
        operation: Operation,
        result: Value,
        timestamp: DateTime<Utc>,
    },

    /// Operation hit one of the fallible paths
    Failed {
        operation: Operation,
        error: CalculusError,
        timestamp: DateTime<Utc>,
    },
}

impl EvaluationEvent {
    pub fn operation(&self) -> &Operation {
        match self {
            EvaluationEvent::Evaluated { operation, .. } => operation,
            EvaluationEvent::Failed { operation, .. } => operation,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, EvaluationEvent::Failed { .. })
    }
}

/// Event handler trait for processing evaluator events
/// Implementations can handle logging, auditing, collection, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an evaluation event
    fn on_event(&self, event: EvaluationEvent);

    /// Handle the events of one batch chunk, in input order
    fn on_events(&self, events: Vec<EvaluationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: EvaluationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: EvaluationEvent) {
        match &event {
            EvaluationEvent::Evaluated {
                operation, result, ..
            } => tracing::debug!(%operation, %result, "evaluated"),
            EvaluationEvent::Failed {
                operation, error, ..
            } => tracing::warn!(%operation, %error, "evaluation failed"),
        }
    }
}
