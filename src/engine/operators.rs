// ============================================================================
// Named Operations
// The per-value operation contract and its operator sugar
// ============================================================================

use super::addition::Addition;
use super::dispatch;
use super::division::Division;
use super::multiplication::Multiplication;
use super::{power, unary};
use crate::domain::Value;
use crate::numeric::CalculusResult;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl Value {
    /// `-self`.
    pub fn negate(&self) -> Value {
        unary::negate(self)
    }

    /// `self + rhs`. Total.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, rhs: &Value) -> Value {
        dispatch::apply(&Addition, self, rhs)
    }

    /// `self + (-rhs)`. Total.
    pub fn subtract(&self, rhs: &Value) -> Value {
        self.add(&rhs.negate())
    }

    /// `self · rhs`. Total.
    pub fn multiply(&self, rhs: &Value) -> Value {
        dispatch::apply(&Multiplication, self, rhs)
    }

    /// `self / rhs`. Total, including division by Zero.
    pub fn divide(&self, rhs: &Value) -> Value {
        dispatch::apply(&Division, self, rhs)
    }

    /// `1 / self`.
    ///
    /// # Errors
    /// Returns `ReciprocalUndefined` for Zero.
    pub fn reciprocal(&self) -> CalculusResult<Value> {
        unary::reciprocal(self)
    }

    /// `self^exponent` for an integer exponent.
    ///
    /// # Errors
    /// Returns `ReciprocalUndefined` for a negative power of Zero.
    pub fn pow(&self, exponent: i64) -> CalculusResult<Value> {
        power::power(self, exponent)
    }

    /// `self^exponent` where the exponent is itself a calculus value.
    ///
    /// # Errors
    /// Returns `InvalidExponent` unless the exponent is an integer.
    pub fn pow_value(&self, exponent: &Value) -> CalculusResult<Value> {
        power::power_by_value(self, exponent)
    }

    /// `self^exponent` for a float exponent that must be integral.
    ///
    /// # Errors
    /// Returns `InvalidExponent` for non-integer exponents.
    pub fn powf(&self, exponent: f64) -> CalculusResult<Value> {
        power::power_f64(self, exponent)
    }
}

// ============================================================================
// Operator Sugar
// ============================================================================
//
// Implemented on references only, each forwarding to the named operation,
// so `a.add(&b)` keeps resolving to the inherent method.

impl Neg for &Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        self.negate()
    }
}

impl Add for &Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: &Value) -> Value {
        Value::add(self, rhs)
    }
}

impl Sub for &Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: &Value) -> Value {
        self.subtract(rhs)
    }
}

impl Mul for &Value {
    type Output = Value;

    #[inline]
    fn mul(self, rhs: &Value) -> Value {
        self.multiply(rhs)
    }
}

impl Div for &Value {
    type Output = Value;

    #[inline]
    fn div(self, rhs: &Value) -> Value {
        self.divide(rhs)
    }
}
