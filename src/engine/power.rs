// ============================================================================
// Exponentiation
// Integer powers built from multiplication and reciprocal
// ============================================================================

use super::dispatch;
use super::multiplication::Multiplication;
use super::unary::reciprocal;
use crate::domain::Value;
use crate::numeric::{CalculusError, CalculusResult};
use num_traits::ToPrimitive;

/// `base^exponent`.
///
/// Non-negative exponents give the product of `exponent` copies of `base`
/// starting from the identity, so every `x^0` is `Rational(1)`, Zero
/// included. Negative exponents take the reciprocal of the positive power.
///
/// # Errors
/// Returns `ReciprocalUndefined` for a negative power of a value whose
/// positive power is Zero.
pub fn power(base: &Value, exponent: i64) -> CalculusResult<Value> {
    let result = positive_power(base, exponent.unsigned_abs());
    if exponent < 0 {
        reciprocal(&result)
    } else {
        Ok(result)
    }
}

/// `base^k` for `k ≥ 0`, in closed form where the product has one.
fn positive_power(base: &Value, k: u64) -> Value {
    if k == 0 {
        return Value::one();
    }
    match base {
        Value::Omega => Value::omega_power(k),
        Value::PowerOmega(n) => Value::omega_power(n.get().saturating_mul(k)),
        Value::InfinityLevel(a) => Value::level(a.get().saturating_mul(k)),
        Value::Rational(r) => match usize::try_from(k) {
            Ok(k) => Value::rational(num_traits::pow(r.value().clone(), k)),
            Err(_) => repeated_product(base, k),
        },
        Value::Zero | Value::Epsilon | Value::ScaledOmega(_) => repeated_product(base, k),
    }
}

/// Multiply `base` into the identity `k` times, stopping once the product
/// stops changing.
fn repeated_product(base: &Value, k: u64) -> Value {
    let mut result = Value::one();
    for _ in 0..k {
        let next = dispatch::apply(&Multiplication, &result, base);
        if next == result {
            break;
        }
        result = next;
    }
    result
}

/// Power with a calculus value as exponent.
///
/// # Errors
/// Returns `InvalidExponent` unless the exponent is Zero or an integral
/// Rational that fits in `i64`.
pub fn power_by_value(base: &Value, exponent: &Value) -> CalculusResult<Value> {
    let k = match exponent {
        Value::Zero => 0,
        Value::Rational(r) if r.value().is_integer() => r
            .value()
            .to_integer()
            .to_i64()
            .ok_or_else(|| invalid_exponent(exponent))?,
        _ => return Err(invalid_exponent(exponent)),
    };
    power(base, k)
}

/// Power with a float exponent, which must be integral.
///
/// # Errors
/// Returns `InvalidExponent` for fractional, non-finite or out-of-range exponents.
pub fn power_f64(base: &Value, exponent: f64) -> CalculusResult<Value> {
    if !exponent.is_finite() || exponent.fract() != 0.0 {
        return Err(CalculusError::InvalidExponent {
            exponent: exponent.to_string(),
        });
    }
    let k = exponent.to_i64().ok_or_else(|| CalculusError::InvalidExponent {
        exponent: exponent.to_string(),
    })?;
    power(base, k)
}

fn invalid_exponent(exponent: &Value) -> CalculusError {
    CalculusError::InvalidExponent {
        exponent: exponent.to_string(),
    }
}
