// ============================================================================
// Division Table
// Total division: every ordered pair has an explicit rule
// ============================================================================

use super::dispatch;
use super::multiplication::Multiplication;
use super::unary::reciprocal;
use crate::domain::Value;
use crate::interfaces::OperationTable;

/// Division rules.
///
/// Natural inverse pairs divide to 1 (`Ω/Ω`, `ε/ε`, equal coefficients,
/// equal exponents, equal levels), except `0/0 = 0`. Every other numerator
/// over Zero is Ω. Coefficients divide as coefficients (`cΩ/dΩ = (c/d)·Ω`),
/// powers of Ω by exponent difference with differences ≤ 1 collapsing to Ω,
/// and ε divided by anything but ε or Zero is Zero.
///
/// Division is not commutative, so the table never delegates to the right
/// operand and every left variant covers every right variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct Division;

impl OperationTable for Division {
    fn name(&self) -> &'static str {
        "divide"
    }

    fn delegates(&self) -> bool {
        false
    }

    fn rule(&self, lhs: &Value, rhs: &Value) -> Option<Value> {
        if rhs.is_zero() {
            return Some(if lhs.is_zero() { Value::Zero } else { Value::Omega });
        }

        let quotient = match lhs {
            Value::Zero => Value::Zero,
            Value::Rational(r) => match rhs {
                Value::Rational(s) => Value::rational(r.value() / s.value()),
                Value::Zero
                | Value::Omega
                | Value::Epsilon
                | Value::ScaledOmega(_)
                | Value::PowerOmega(_)
                | Value::InfinityLevel(_) => rational_over(lhs, rhs),
            },
            Value::Omega => match rhs {
                Value::Omega => Value::one(),
                Value::Epsilon => Value::omega_power(2),
                Value::Rational(r) => Value::omega_times(r.recip().into_inner()),
                Value::ScaledOmega(c) => Value::rational(c.value().recip()),
                Value::PowerOmega(n) => omega_quotient(1, n.get()),
                Value::InfinityLevel(_) => Value::Zero,
                Value::Zero => Value::Omega,
            },
            Value::Epsilon => match rhs {
                Value::Epsilon => Value::one(),
                Value::Zero => Value::Omega,
                Value::Rational(_)
                | Value::Omega
                | Value::ScaledOmega(_)
                | Value::PowerOmega(_)
                | Value::InfinityLevel(_) => Value::Zero,
            },
            Value::ScaledOmega(c) => match rhs {
                // cΩ / ε = cΩ · Ω
                Value::Epsilon => dispatch::apply(&Multiplication, lhs, &Value::Omega),
                Value::ScaledOmega(d) if c == d => Value::one(),
                Value::ScaledOmega(d) => Value::omega_times(c.value() / d.value()),
                Value::Rational(r) => Value::omega_times(c.value() / r.value()),
                Value::Omega => Value::rational(c.value().clone()),
                Value::PowerOmega(_) => lhs.clone(),
                Value::InfinityLevel(_) => Value::Zero,
                Value::Zero => Value::Omega,
            },
            Value::PowerOmega(n) => match rhs {
                Value::PowerOmega(m) => omega_quotient(n.get(), m.get()),
                Value::Epsilon => Value::omega_power(n.get().saturating_add(1)),
                Value::Omega => omega_quotient(n.get(), 1),
                // Ω² / cΩ = (1/c)·Ω
                Value::ScaledOmega(c) if n.get() == 2 => Value::omega_times(c.value().recip()),
                Value::ScaledOmega(_) => omega_quotient(n.get(), 1),
                Value::Rational(_) => lhs.clone(),
                Value::InfinityLevel(_) => Value::Zero,
                Value::Zero => Value::Omega,
            },
            Value::InfinityLevel(a) => match rhs {
                Value::InfinityLevel(b) if a == b => Value::one(),
                Value::InfinityLevel(b) if a > b => Value::level(a.get() - b.get()),
                Value::InfinityLevel(_) => Value::Zero,
                Value::Rational(_)
                | Value::Omega
                | Value::Epsilon
                | Value::ScaledOmega(_)
                | Value::PowerOmega(_) => lhs.clone(),
                Value::Zero => Value::Omega,
            },
        };
        Some(quotient)
    }
}

/// `r / x = r · (1/x)` for every non-rational, non-zero divisor.
fn rational_over(lhs: &Value, rhs: &Value) -> Value {
    match reciprocal(rhs) {
        Ok(inverse) => dispatch::apply(&Multiplication, lhs, &inverse),
        Err(_) => Value::Omega,
    }
}

/// `Ωᵃ / Ωᵇ`: 1 for equal exponents, `Ω^(a−b)` when the difference exceeds
/// 1, otherwise Ω.
fn omega_quotient(numerator: u64, denominator: u64) -> Value {
    if numerator == denominator {
        Value::one()
    } else if numerator > denominator && numerator - denominator > 1 {
        Value::omega_power(numerator - denominator)
    } else {
        Value::Omega
    }
}
