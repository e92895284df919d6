// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod operation_table;

pub use event_handler::{EvaluationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
pub use operation_table::OperationTable;
