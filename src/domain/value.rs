// ============================================================================
// Value Domain
// The seven closed variants of the Ωε-calculus
// ============================================================================

use crate::numeric::{CalculusError, CalculusResult, Rational};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Variant Tag
// ============================================================================

/// Tag identifying which of the seven variants a value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    Zero,
    Rational,
    Omega,
    Epsilon,
    ScaledOmega,
    PowerOmega,
    InfinityLevel,
}

impl Variant {
    /// Every tag, in declaration order.
    pub const ALL: [Variant; 7] = [
        Variant::Zero,
        Variant::Rational,
        Variant::Omega,
        Variant::Epsilon,
        Variant::ScaledOmega,
        Variant::PowerOmega,
        Variant::InfinityLevel,
    ];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Zero => "Zero",
            Variant::Rational => "Rational",
            Variant::Omega => "Omega",
            Variant::Epsilon => "Epsilon",
            Variant::ScaledOmega => "ScaledOmega",
            Variant::PowerOmega => "PowerOmega",
            Variant::InfinityLevel => "InfinityLevel",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Variant Payloads
// ============================================================================

/// Coefficient of a scaled Ω. Never 0 and never 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coefficient(BigRational);

impl Coefficient {
    #[inline]
    pub fn value(&self) -> &BigRational {
        &self.0
    }
}

/// Exponent of a power of Ω. Always ≥ 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Exponent(u64);

impl Exponent {
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Tier in the hierarchy of infinities. Always ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(u64);

impl Level {
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

// ============================================================================
// Value
// ============================================================================

/// A value of the Ωε-calculus.
///
/// Values are immutable; every operation returns a fresh value. Equality and
/// hashing are structural over (variant tag, comparison key), so two equal
/// values are interchangeable whichever computation produced them, and
/// different variants are never equal.
///
/// Payload invariants are enforced by the constructors:
/// - `Rational` is never 0 (zero collapses to [`Value::Zero`])
/// - `ScaledOmega` coefficient is neither 0 (rejected) nor 1 (collapses to Ω)
/// - `PowerOmega` exponent is ≥ 2
/// - `InfinityLevel` level is ≥ 1
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum Value {
    /// Additive identity
    Zero,
    /// Exact non-zero rational
    Rational(Rational),
    /// Canonical infinite unit Ω
    Omega,
    /// Canonical infinitesimal unit ε = 1/Ω
    Epsilon,
    /// c·Ω
    ScaledOmega(Coefficient),
    /// Ωⁿ
    PowerOmega(Exponent),
    /// ∞ₙ
    InfinityLevel(Level),
}

/// 0
pub const ZERO: Value = Value::Zero;

/// Ω
pub const OMEGA: Value = Value::Omega;

/// ε
pub const EPSILON: Value = Value::Epsilon;

/// The rational 1, built once per process.
pub static ONE: LazyLock<Value> = LazyLock::new(Value::one);

impl Value {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The multiplicative identity, `Rational(1)`.
    #[inline]
    pub fn one() -> Self {
        Value::Rational(Rational::one())
    }

    /// Exact rational. Zero collapses to [`Value::Zero`].
    pub fn rational(value: BigRational) -> Self {
        match Rational::new(value) {
            Some(r) => Value::Rational(r),
            None => Value::Zero,
        }
    }

    /// Exact integer. Zero collapses to [`Value::Zero`].
    pub fn integer(value: i64) -> Self {
        Self::rational(BigRational::from_integer(BigInt::from(value)))
    }

    /// `c·Ω`.
    ///
    /// A coefficient of 1 collapses to [`Value::Omega`].
    ///
    /// # Errors
    /// Returns `InvalidConstruction` if the coefficient is 0.
    pub fn scaled_omega(coefficient: BigRational) -> CalculusResult<Self> {
        if coefficient.is_zero() {
            return Err(CalculusError::InvalidConstruction {
                variant: Variant::ScaledOmega,
                reason: "coefficient cannot be zero",
            });
        }
        Ok(Self::omega_times(coefficient))
    }

    /// `Ωⁿ`.
    ///
    /// # Errors
    /// Returns `InvalidConstruction` if the exponent is below 2.
    pub fn power_omega(exponent: u64) -> CalculusResult<Self> {
        if exponent < 2 {
            return Err(CalculusError::InvalidConstruction {
                variant: Variant::PowerOmega,
                reason: "exponent must be ≥ 2",
            });
        }
        Ok(Value::PowerOmega(Exponent(exponent)))
    }

    /// `∞ₙ`.
    ///
    /// # Errors
    /// Returns `InvalidConstruction` if the level is 0.
    pub fn infinity_level(level: u64) -> CalculusResult<Self> {
        if level < 1 {
            return Err(CalculusError::InvalidConstruction {
                variant: Variant::InfinityLevel,
                reason: "level must be ≥ 1",
            });
        }
        Ok(Value::InfinityLevel(Level(level)))
    }

    // Total builders for the operation tables. Each normalizes the edge
    // payloads instead of failing, so table arms never need a fallible path.

    /// `c·Ω` normalized: 0 → Zero, 1 → Ω.
    pub(crate) fn omega_times(coefficient: BigRational) -> Self {
        if coefficient.is_zero() {
            Value::Zero
        } else if coefficient.is_one() {
            Value::Omega
        } else {
            Value::ScaledOmega(Coefficient(coefficient))
        }
    }

    /// `Ωⁿ` normalized: 0 → 1, 1 → Ω.
    pub(crate) fn omega_power(exponent: u64) -> Self {
        match exponent {
            0 => Value::one(),
            1 => Value::Omega,
            n => Value::PowerOmega(Exponent(n)),
        }
    }

    /// `∞ₙ` with the level clamped to 1.
    pub(crate) fn level(level: u64) -> Self {
        Value::InfinityLevel(Level(level.max(1)))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The variant tag.
    pub fn variant(&self) -> Variant {
        match self {
            Value::Zero => Variant::Zero,
            Value::Rational(_) => Variant::Rational,
            Value::Omega => Variant::Omega,
            Value::Epsilon => Variant::Epsilon,
            Value::ScaledOmega(_) => Variant::ScaledOmega,
            Value::PowerOmega(_) => Variant::PowerOmega,
            Value::InfinityLevel(_) => Variant::InfinityLevel,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, Value::Zero)
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        matches!(self, Value::Rational(r) if r.is_one())
    }

    /// True for every variant that is not a finite rational or zero.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(
            self,
            Value::Omega | Value::ScaledOmega(_) | Value::PowerOmega(_) | Value::InfinityLevel(_)
        )
    }

    /// The exact rational for `Zero` and `Rational`, `None` otherwise.
    pub fn as_rational(&self) -> Option<BigRational> {
        match self {
            Value::Zero => Some(BigRational::zero()),
            Value::Rational(r) => Some(r.value().clone()),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from numbers
// ============================================================================

impl From<BigRational> for Value {
    fn from(value: BigRational) -> Self {
        Value::rational(value)
    }
}

impl From<Rational> for Value {
    fn from(value: Rational) -> Self {
        Value::Rational(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::rational(BigRational::from_integer(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::integer(i64::from(value))
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Only infinity levels are ordered, by level. Any other pair of distinct
/// values, including two values of the same non-level variant, is unordered.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::InfinityLevel(a), Value::InfinityLevel(b)) => Some(a.cmp(b)),
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.variant(), self)
    }
}

// ============================================================================
// Tests
// ============================================================================
