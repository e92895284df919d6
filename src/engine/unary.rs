// ============================================================================
// Unary Rules
// Negation and reciprocal
// ============================================================================

use crate::domain::Value;
use crate::numeric::{CalculusError, CalculusResult};

/// Negation. Only rationals change sign; every other variant is
/// direction-free and negates to itself.
pub fn negate(value: &Value) -> Value {
    match value {
        Value::Rational(r) => Value::rational(-r.value()),
        Value::Zero
        | Value::Omega
        | Value::Epsilon
        | Value::ScaledOmega(_)
        | Value::PowerOmega(_)
        | Value::InfinityLevel(_) => value.clone(),
    }
}

/// Reciprocal.
///
/// Unlike `1 / 0 = Ω`, the reciprocal of Zero is undefined.
///
/// # Errors
/// Returns `ReciprocalUndefined` for Zero.
pub fn reciprocal(value: &Value) -> CalculusResult<Value> {
    match value {
        Value::Zero => Err(CalculusError::ReciprocalUndefined),
        Value::Rational(r) => Ok(Value::Rational(r.recip())),
        Value::Omega => Ok(Value::Epsilon),
        Value::Epsilon => Ok(Value::Omega),
        // ε/c, and ε over any non-ε divisor is Zero
        Value::ScaledOmega(_) | Value::PowerOmega(_) | Value::InfinityLevel(_) => Ok(Value::Zero),
    }
}
