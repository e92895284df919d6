// ============================================================================
// Operation Domain Model
// A single pending computation over calculus values
// ============================================================================

use super::value::Value;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary operators handled by the dispatch engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "·",
            BinaryOp::Divide => "/",
        }
    }
}

/// A computation waiting to be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Negate(Value),
    Reciprocal(Value),
    Binary { op: BinaryOp, lhs: Value, rhs: Value },
    Power { base: Value, exponent: i64 },
}

impl Operation {
    pub fn add(lhs: Value, rhs: Value) -> Self {
        Operation::Binary {
            op: BinaryOp::Add,
            lhs,
            rhs,
        }
    }

    pub fn subtract(lhs: Value, rhs: Value) -> Self {
        Operation::Binary {
            op: BinaryOp::Subtract,
            lhs,
            rhs,
        }
    }

    pub fn multiply(lhs: Value, rhs: Value) -> Self {
        Operation::Binary {
            op: BinaryOp::Multiply,
            lhs,
            rhs,
        }
    }

    pub fn divide(lhs: Value, rhs: Value) -> Self {
        Operation::Binary {
            op: BinaryOp::Divide,
            lhs,
            rhs,
        }
    }

    pub fn power(base: Value, exponent: i64) -> Self {
        Operation::Power { base, exponent }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Negate(_) => "negate",
            Operation::Reciprocal(_) => "reciprocal",
            Operation::Binary { op, .. } => match op {
                BinaryOp::Add => "add",
                BinaryOp::Subtract => "subtract",
                BinaryOp::Multiply => "multiply",
                BinaryOp::Divide => "divide",
            },
            Operation::Power { .. } => "power",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Negate(v) => write!(f, "-({})", v),
            Operation::Reciprocal(v) => write!(f, "1/({})", v),
            Operation::Binary { op, lhs, rhs } => write!(f, "{} {} {}", lhs, op.symbol(), rhs),
            Operation::Power { base, exponent } => write!(f, "({})^{}", base, exponent),
        }
    }
}
