// ============================================================================
// Addition Table
// Dominance model: the larger-magnitude variant wins, ties merge
// ============================================================================

use crate::domain::Value;
use crate::interfaces::OperationTable;

/// Addition rules.
///
/// | left          | rule                                                        |
/// |---------------|-------------------------------------------------------------|
/// | Zero          | identity: `0 + x = x`                                       |
/// | Omega         | absolute dominance: `Ω + x = Ω`                             |
/// | Epsilon       | absorbed by anything non-infinitesimal, `ε + 0 = ε + ε = ε` |
/// | ScaledOmega   | equal coefficient or Zero keeps self, anything else is Ω    |
/// | PowerOmega    | the larger exponent wins, any other operand keeps self     |
/// | Rational      | exact sum against Rational, identity against Zero           |
/// | InfinityLevel | the higher level wins, any other operand keeps self        |
///
/// Rational leaves the remaining right-hand variants to the other operand's
/// table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Addition;

impl OperationTable for Addition {
    fn name(&self) -> &'static str {
        "add"
    }

    fn rule(&self, lhs: &Value, rhs: &Value) -> Option<Value> {
        match lhs {
            Value::Zero => Some(rhs.clone()),
            Value::Omega => Some(Value::Omega),
            Value::Epsilon => epsilon_plus(rhs),
            Value::ScaledOmega(c) => match rhs {
                Value::ScaledOmega(d) if c == d => Some(lhs.clone()),
                Value::Zero => Some(lhs.clone()),
                Value::ScaledOmega(_)
                | Value::Rational(_)
                | Value::Omega
                | Value::Epsilon
                | Value::PowerOmega(_)
                | Value::InfinityLevel(_) => Some(Value::Omega),
            },
            Value::PowerOmega(n) => match rhs {
                Value::PowerOmega(m) if m > n => Some(rhs.clone()),
                Value::PowerOmega(_)
                | Value::Zero
                | Value::Rational(_)
                | Value::Omega
                | Value::Epsilon
                | Value::ScaledOmega(_)
                | Value::InfinityLevel(_) => Some(lhs.clone()),
            },
            Value::Rational(r) => match rhs {
                Value::Rational(s) => Some(Value::rational(r.value() + s.value())),
                Value::Zero => Some(lhs.clone()),
                Value::Omega
                | Value::Epsilon
                | Value::ScaledOmega(_)
                | Value::PowerOmega(_)
                | Value::InfinityLevel(_) => None,
            },
            Value::InfinityLevel(a) => match rhs {
                Value::InfinityLevel(b) if b > a => Some(rhs.clone()),
                Value::InfinityLevel(_)
                | Value::Zero
                | Value::Rational(_)
                | Value::Omega
                | Value::Epsilon
                | Value::ScaledOmega(_)
                | Value::PowerOmega(_) => Some(lhs.clone()),
            },
        }
    }
}

fn epsilon_plus(rhs: &Value) -> Option<Value> {
    match rhs {
        Value::Omega
        | Value::Rational(_)
        | Value::ScaledOmega(_)
        | Value::PowerOmega(_)
        | Value::InfinityLevel(_) => Some(rhs.clone()),
        Value::Zero | Value::Epsilon => Some(Value::Epsilon),
    }
}
