// ============================================================================
// Operation Table Interface
// Defines the contract for per-variant binary operation rules
// ============================================================================

use crate::domain::Value;

/// Rule table for one binary operation.
/// Implementations: Addition, Multiplication, Division
///
/// A table answers for a left operand against a right operand. Each left
/// variant lists the right variants it has a rule for; when it has none the
/// dispatch engine may ask the right operand's table instead (see
/// [`OperationTable::delegates`]).
pub trait OperationTable: Send + Sync {
    /// Operation name for logging and error reporting
    fn name(&self) -> &'static str;

    /// The rule `lhs` defines against `rhs`, or `None` when `lhs` has no
    /// rule for that right-hand variant
    fn rule(&self, lhs: &Value, rhs: &Value) -> Option<Value>;

    /// Whether a missing rule may be answered by the right operand's table
    /// with the operands swapped. Only sound for operations whose results
    /// are meant to commute.
    fn delegates(&self) -> bool {
        true
    }
}
