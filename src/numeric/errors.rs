// ============================================================================
// Calculus Errors
// Error types for construction, conversion, reciprocal and exponentiation
// ============================================================================

use crate::domain::Variant;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Errors raised by the Ωε-calculus.
///
/// Binary arithmetic never produces one of these; only construction,
/// reciprocal, conversion and exponentiation have a failure path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CalculusError {
    /// A variant was built from a payload that violates its invariant
    InvalidConstruction {
        variant: Variant,
        reason: &'static str,
    },
    /// Reciprocal of Zero
    ReciprocalUndefined,
    /// Textual or numeric input that matches no recognized shape
    Conversion { input: String, reason: &'static str },
    /// Non-integer exponent handed to the power operation
    InvalidExponent { exponent: String },
    /// Neither operand's table defines a rule for the pair
    UnsupportedOperation {
        operation: &'static str,
        lhs: Variant,
        rhs: Variant,
    },
}

impl CalculusError {
    pub(crate) fn conversion(input: impl Into<String>, reason: &'static str) -> Self {
        CalculusError::Conversion {
            input: input.into(),
            reason,
        }
    }
}

impl fmt::Display for CalculusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculusError::InvalidConstruction { variant, reason } => {
                write!(f, "invalid {}: {}", variant, reason)
            },
            CalculusError::ReciprocalUndefined => {
                write!(f, "reciprocal undefined: 0 has no reciprocal (use 1 / 0 → Ω)")
            },
            CalculusError::Conversion { input, reason } => {
                write!(f, "cannot convert {:?}: {}", input, reason)
            },
            CalculusError::InvalidExponent { exponent } => {
                write!(f, "invalid exponent {}: exponent must be an integer", exponent)
            },
            CalculusError::UnsupportedOperation { operation, lhs, rhs } => write!(
                f,
                "unsupported operation: no {} rule for {} and {}",
                operation, lhs, rhs
            ),
        }
    }
}

impl std::error::Error for CalculusError {}

/// Result type alias for calculus operations
pub type CalculusResult<T> = Result<T, CalculusError>;
