// ============================================================================
// Canonical Text Encoding
// Rendering, parsing and conversion into the value domain
// ============================================================================

use super::config::CalculusConfig;
use super::value::Value;
use crate::numeric::{
    parse_rational, rational_from_f64, CalculusError, CalculusResult, Rational,
    DEFAULT_MAX_DENOMINATOR,
};
use num_bigint::BigInt;
use num_rational::BigRational;
use std::fmt;
use std::str::FromStr;

const OMEGA_SYMBOL: char = 'Ω';
const EPSILON_SYMBOL: &str = "ε";
const LEVEL_PREFIX: &str = "∞_";
const SCALE_DOT: char = '·';

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for Value {
    /// Canonical text.
    ///
    /// `0`, `Ω`, `ε`, `3/2·Ω`, `Ω²`, `Ω³`, `Ω^7`, `-5/4`, `∞_3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Zero => f.write_str("0"),
            Value::Rational(r) => write!(f, "{}", r),
            Value::Omega => write!(f, "{}", OMEGA_SYMBOL),
            Value::Epsilon => f.write_str(EPSILON_SYMBOL),
            Value::ScaledOmega(c) => write!(f, "{}{}{}", c.value(), SCALE_DOT, OMEGA_SYMBOL),
            Value::PowerOmega(n) => match n.get() {
                2 => write!(f, "{}²", OMEGA_SYMBOL),
                3 => write!(f, "{}³", OMEGA_SYMBOL),
                n => write!(f, "{}^{}", OMEGA_SYMBOL, n),
            },
            Value::InfinityLevel(level) => write!(f, "{}{}", LEVEL_PREFIX, level.get()),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

impl FromStr for Value {
    type Err = CalculusError;

    /// Parse any canonical rendering, plus bare coefficients such as `2Ω`
    /// and rational literals accepted by [`parse_rational`].
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let s = text.trim();
        match s {
            "" => return Err(CalculusError::conversion(text, "empty input")),
            "0" => return Ok(Value::Zero),
            "Ω" => return Ok(Value::Omega),
            "ε" => return Ok(Value::Epsilon),
            _ => {},
        }

        if let Some(level) = s.strip_prefix(LEVEL_PREFIX) {
            let level: u64 = level
                .trim()
                .parse()
                .map_err(|_| CalculusError::conversion(text, "malformed infinity level"))?;
            return Value::infinity_level(level);
        }

        if let Some(power) = s.strip_prefix(OMEGA_SYMBOL) {
            return parse_power(text, power.trim());
        }

        if let Some(coefficient) = s.strip_suffix(OMEGA_SYMBOL) {
            let coefficient = coefficient.trim_end().trim_end_matches(SCALE_DOT).trim();
            if coefficient.is_empty() {
                return Ok(Value::Omega);
            }
            return Value::scaled_omega(parse_rational(coefficient)?);
        }

        if s.contains(OMEGA_SYMBOL) || s.contains(EPSILON_SYMBOL) || s.contains('∞') {
            return Err(CalculusError::conversion(text, "unrecognized symbolic form"));
        }

        parse_rational(s).map(Value::rational)
    }
}

/// The part after a leading `Ω`: `²`, `³` or `^n`.
fn parse_power(text: &str, suffix: &str) -> CalculusResult<Value> {
    let exponent = match suffix {
        "²" => 2,
        "³" => 3,
        _ => suffix
            .strip_prefix('^')
            .and_then(|n| n.trim().parse::<u64>().ok())
            .ok_or_else(|| CalculusError::conversion(text, "malformed power of Ω"))?,
    };
    Value::power_omega(exponent)
}

impl From<Value> for String {
    fn from(value: Value) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Value {
    type Error = CalculusError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

// ============================================================================
// Conversion
// ============================================================================

/// Anything that can be turned into a [`Value`].
pub trait ToValue {
    /// Convert, failing with `Conversion` on unrecognized input.
    fn to_value(&self) -> CalculusResult<Value>;
}

impl ToValue for Value {
    fn to_value(&self) -> CalculusResult<Value> {
        Ok(self.clone())
    }
}

impl ToValue for BigRational {
    fn to_value(&self) -> CalculusResult<Value> {
        Ok(Value::rational(self.clone()))
    }
}

impl ToValue for Rational {
    fn to_value(&self) -> CalculusResult<Value> {
        Ok(Value::Rational(self.clone()))
    }
}

impl ToValue for BigInt {
    fn to_value(&self) -> CalculusResult<Value> {
        Ok(Value::from(self.clone()))
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> CalculusResult<Value> {
        Ok(Value::integer(*self))
    }
}

impl ToValue for i32 {
    fn to_value(&self) -> CalculusResult<Value> {
        Ok(Value::integer(i64::from(*self)))
    }
}

/// Floats are approximated with [`DEFAULT_MAX_DENOMINATOR`].
impl ToValue for f64 {
    fn to_value(&self) -> CalculusResult<Value> {
        Value::from_f64(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> CalculusResult<Value> {
        self.parse()
    }
}

impl ToValue for String {
    fn to_value(&self) -> CalculusResult<Value> {
        self.parse()
    }
}

/// Convert an existing value, rational, integer, float or text into a [`Value`].
///
/// # Example
/// ```
/// use omega_epsilon::prelude::*;
///
/// assert_eq!(convert("Ω").unwrap(), OMEGA);
/// assert_eq!(convert(&5i64).unwrap(), Value::integer(5));
/// assert_eq!(convert(&0.5f64).unwrap(), convert("1/2").unwrap());
/// ```
pub fn convert<T: ToValue + ?Sized>(input: &T) -> CalculusResult<Value> {
    input.to_value()
}

impl Value {
    /// Float approximated to the nearest rational with denominator ≤ 1 000 000.
    ///
    /// # Errors
    /// Returns `Conversion` for NaN and infinities.
    pub fn from_f64(value: f64) -> CalculusResult<Self> {
        rational_from_f64(value, DEFAULT_MAX_DENOMINATOR).map(Value::rational)
    }

    /// Float approximated with the configured denominator bound.
    pub fn from_f64_with(value: f64, config: &CalculusConfig) -> CalculusResult<Self> {
        rational_from_f64(value, config.max_denominator).map(Value::rational)
    }
}

// ============================================================================
// Tests
// ============================================================================
