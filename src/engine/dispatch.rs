// ============================================================================
// Dispatch Engine
// Resolves a binary operation between two arbitrary variants
// ============================================================================

use crate::domain::Value;
use crate::interfaces::OperationTable;
use crate::numeric::{CalculusError, CalculusResult};

/// Resolve `lhs ∘ rhs` against a rule table.
///
/// 1. The left operand's rule for the right operand's variant.
/// 2. Failing that, and if the table delegates, the right operand's rule for
///    the left operand's variant.
///
/// # Errors
/// Returns `UnsupportedOperation` when neither side has a rule. With the
/// shipped tables this never happens; the totality tests assert it.
pub fn resolve<T>(table: &T, lhs: &Value, rhs: &Value) -> CalculusResult<Value>
where
    T: OperationTable + ?Sized,
{
    if let Some(result) = table.rule(lhs, rhs) {
        return Ok(result);
    }

    if table.delegates() {
        if let Some(result) = table.rule(rhs, lhs) {
            tracing::trace!(
                operation = table.name(),
                lhs = %lhs.variant(),
                rhs = %rhs.variant(),
                "rule answered by right operand"
            );
            return Ok(result);
        }
    }

    Err(CalculusError::UnsupportedOperation {
        operation: table.name(),
        lhs: lhs.variant(),
        rhs: rhs.variant(),
    })
}

/// Total form of [`resolve`] used by the public arithmetic.
pub fn apply<T>(table: &T, lhs: &Value, rhs: &Value) -> Value
where
    T: OperationTable + ?Sized,
{
    match resolve(table, lhs, rhs) {
        Ok(result) => result,
        Err(err) => unreachable!("operation tables are total: {}", err),
    }
}
