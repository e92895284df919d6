// ============================================================================
// Domain Models Module
// The value domain, its text encoding, operations and configuration
// ============================================================================

pub mod config;
pub mod operation;
pub mod text;
pub mod value;

pub use config::CalculusConfig;
pub use operation::{BinaryOp, Operation};
pub use text::{convert, ToValue};
pub use value::{Coefficient, Exponent, Level, Value, Variant, EPSILON, OMEGA, ONE, ZERO};
