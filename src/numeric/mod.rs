// ============================================================================
// Numeric Module
// Exact scalar arithmetic underpinning the Ωε-calculus
// ============================================================================
//
// This module provides:
// - Rational: non-zero exact rational backed by num-rational's BigRational
// - parse_rational / rational_from_f64: exact literal parsing and bounded
//   float approximation
// - CalculusError: error kinds for every fallible operation
//
// Design principles:
// - No floating-point arithmetic past the conversion boundary
// - Fallible operations return Result (no panics on user input)

mod errors;
mod rational;

pub use errors::{CalculusError, CalculusResult};
pub use rational::{
    decimal_to_rational, limit_denominator, parse_rational, rational_from_f64, Rational,
    DEFAULT_MAX_DENOMINATOR,
};
