// ============================================================================
// Engine Module
// Rule tables, dispatch and evaluation for the Ωε-calculus
// ============================================================================

mod addition;
mod division;
mod evaluator;
mod multiplication;
mod operators;
mod power;
mod unary;

pub mod dispatch;
pub mod factory;

pub use addition::Addition;
pub use dispatch::{apply, resolve};
pub use division::Division;
pub use evaluator::Evaluator;
pub use factory::{create_from_config, EvaluatorBuilder};
pub use multiplication::Multiplication;
pub use power::{power, power_by_value, power_f64};
pub use unary::{negate, reciprocal};
