// ============================================================================
// Multiplication Table
// Absorption and scaling model
// ============================================================================

use crate::domain::Value;
use crate::interfaces::OperationTable;

/// Multiplication rules.
///
/// Zero absorbs everything on its right, `Ω·ε = 1`, Ω and its powers add
/// exponents, and rationals scale Ω coefficients. Against an infinity level
/// the left operand of the Ω family is kept, so `Ω·∞ₙ = Ω` while `∞ₙ·Ω = ∞ₙ`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplication;

impl OperationTable for Multiplication {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn rule(&self, lhs: &Value, rhs: &Value) -> Option<Value> {
        match lhs {
            Value::Zero => Some(Value::Zero),
            Value::Omega => omega_times(rhs),
            Value::Epsilon => epsilon_times(rhs),
            Value::ScaledOmega(c) => match rhs {
                Value::Epsilon => Some(Value::rational(c.value().clone())),
                Value::Rational(r) => Some(Value::omega_times(c.value() * r.value())),
                Value::Zero => Some(Value::Zero),
                Value::Omega
                | Value::ScaledOmega(_)
                | Value::PowerOmega(_)
                | Value::InfinityLevel(_) => Some(lhs.clone()),
            },
            Value::PowerOmega(n) => match rhs {
                Value::Zero => Some(Value::Zero),
                Value::Epsilon => Some(Value::omega_power(n.get() - 1)),
                Value::Omega => Some(Value::omega_power(n.get().saturating_add(1))),
                Value::PowerOmega(m) => Some(Value::omega_power(n.get().saturating_add(m.get()))),
                // Commute to the ScaledOmega rule
                Value::ScaledOmega(_) => self.rule(rhs, lhs),
                Value::Rational(_) | Value::InfinityLevel(_) => Some(lhs.clone()),
            },
            Value::Rational(r) => match rhs {
                Value::Rational(s) => Some(Value::rational(r.value() * s.value())),
                Value::Zero => Some(Value::Zero),
                Value::Omega => Some(Value::omega_times(r.value().clone())),
                Value::ScaledOmega(c) => Some(Value::omega_times(r.value() * c.value())),
                Value::Epsilon | Value::PowerOmega(_) | Value::InfinityLevel(_) => None,
            },
            Value::InfinityLevel(a) => match rhs {
                Value::InfinityLevel(b) => Some(Value::level(a.get().saturating_add(b.get()))),
                Value::Zero
                | Value::Rational(_)
                | Value::Omega
                | Value::Epsilon
                | Value::ScaledOmega(_)
                | Value::PowerOmega(_) => Some(lhs.clone()),
            },
        }
    }
}

fn omega_times(rhs: &Value) -> Option<Value> {
    match rhs {
        Value::Epsilon => Some(Value::one()),
        Value::Zero => Some(Value::Zero),
        Value::Rational(r) => Some(Value::omega_times(r.value().clone())),
        Value::ScaledOmega(_) => Some(rhs.clone()),
        Value::Omega => Some(Value::omega_power(2)),
        Value::PowerOmega(n) => Some(Value::omega_power(n.get().saturating_add(1))),
        Value::InfinityLevel(_) => Some(Value::Omega),
    }
}

fn epsilon_times(rhs: &Value) -> Option<Value> {
    match rhs {
        Value::Omega => Some(Value::one()),
        Value::Zero => Some(Value::Zero),
        Value::Epsilon => Some(Value::Epsilon),
        Value::ScaledOmega(c) => Some(Value::rational(c.value().clone())),
        Value::Rational(_) => Some(Value::Epsilon),
        // Ω² · ε = Ω, Ωⁿ · ε = Ωⁿ⁻¹
        Value::PowerOmega(n) => Some(Value::omega_power(n.get() - 1)),
        Value::InfinityLevel(_) => Some(Value::Epsilon),
    }
}
