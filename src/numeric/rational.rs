// ============================================================================
// Exact Rationals
// Non-zero rational scalar, literal parsing and float approximation
// ============================================================================

use super::errors::{CalculusError, CalculusResult};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Default denominator bound used when approximating floats.
pub const DEFAULT_MAX_DENOMINATOR: u64 = 1_000_000;

/// A non-zero exact rational number.
///
/// Zero is not a `Rational`: the calculus gives it its own variant, so any
/// arithmetic that lands on 0 is normalized there by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(BigRational);

impl Rational {
    /// Wrap a rational, returning `None` for zero.
    #[inline]
    pub fn new(value: BigRational) -> Option<Self> {
        if value.is_zero() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The multiplicative identity.
    #[inline]
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Borrow the underlying rational.
    #[inline]
    pub fn value(&self) -> &BigRational {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> BigRational {
        self.0
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Multiplicative inverse. Always defined since the value is non-zero.
    #[inline]
    pub fn recip(&self) -> Self {
        Self(self.0.recip())
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Literal Parsing
// ============================================================================

/// Parse a rational literal exactly.
///
/// Accepted shapes:
/// - integers of any size: `"42"`, `"-7"`
/// - fractions: `"3/2"`, `"-10 / 4"` (the denominator is unsigned and non-zero)
/// - decimals and scientific notation: `"1.25"`, `"-3e-4"`
pub fn parse_rational(text: &str) -> CalculusResult<BigRational> {
    let s = text.trim();
    if s.is_empty() {
        return Err(CalculusError::conversion(text, "empty rational literal"));
    }

    if let Some((numer, denom)) = s.split_once('/') {
        let numer = numer.trim();
        let denom = denom.trim();
        if !denom.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(CalculusError::conversion(text, "malformed denominator"));
        }
        let numer = BigInt::from_str(numer)
            .map_err(|_| CalculusError::conversion(text, "malformed numerator"))?;
        let denom = BigInt::from_str(denom)
            .map_err(|_| CalculusError::conversion(text, "malformed denominator"))?;
        if denom.is_zero() {
            return Err(CalculusError::conversion(text, "zero denominator"));
        }
        return Ok(BigRational::new(numer, denom));
    }

    if let Ok(integer) = BigInt::from_str(s) {
        return Ok(BigRational::from_integer(integer));
    }

    let decimal = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| CalculusError::conversion(text, "not a rational literal"))?;
    Ok(decimal_to_rational(decimal))
}

/// Exact conversion of a `Decimal` (mantissa × 10^-scale).
pub fn decimal_to_rational(decimal: Decimal) -> BigRational {
    let denom = num_traits::pow(BigInt::from(10u8), decimal.scale() as usize);
    BigRational::new(BigInt::from(decimal.mantissa()), denom)
}

// ============================================================================
// Float Approximation
// ============================================================================

/// Convert a float to the closest rational with denominator ≤ `max_denominator`.
///
/// The float's exact binary value is taken first, then reduced with a
/// continued-fraction best approximation. A bound of 0 is treated as 1.
pub fn rational_from_f64(value: f64, max_denominator: u64) -> CalculusResult<BigRational> {
    let exact = BigRational::from_float(value)
        .ok_or_else(|| CalculusError::conversion(value.to_string(), "float is not finite"))?;
    Ok(limit_denominator(&exact, max_denominator))
}

/// Closest rational to `value` whose denominator does not exceed `max_denominator`.
pub fn limit_denominator(value: &BigRational, max_denominator: u64) -> BigRational {
    let max_den = BigInt::from(max_denominator.max(1));
    if value.denom() <= &max_den {
        return value.clone();
    }

    let target = value.abs();
    let (mut n, mut d) = (target.numer().clone(), target.denom().clone());
    let (mut p0, mut q0, mut p1, mut q1) =
        (BigInt::zero(), BigInt::one(), BigInt::one(), BigInt::zero());

    loop {
        let a = &n / &d;
        let q2 = &q0 + &a * &q1;
        if q2 > max_den {
            break;
        }
        let p2 = &p0 + &a * &p1;
        let r = &n - &a * &d;
        (p0, q0, p1, q1) = (p1, q1, p2, q2);
        (n, d) = (d, r);
    }

    let k = (&max_den - &q0) / &q1;
    let semiconvergent = BigRational::new(&p0 + &k * &p1, &q0 + &k * &q1);
    let convergent = BigRational::new(p1, q1);

    let closest = if (&convergent - &target).abs() <= (&semiconvergent - &target).abs() {
        convergent
    } else {
        semiconvergent
    };

    if value.is_negative() {
        -closest
    } else {
        closest
    }
}

// ============================================================================
// Tests
// ============================================================================
