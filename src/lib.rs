// ============================================================================
// Ωε-Calculus Library
// A closed algebra of zero, rationals, infinities and infinitesimals
// ============================================================================

//! # Ωε-Calculus
//!
//! Exact arithmetic over seven closed variants: Zero, Rational, Ω, ε,
//! scaled Ω (`c·Ω`), powers of Ω (`Ωⁿ`) and infinity levels (`∞ₙ`).
//!
//! ## Features
//!
//! - **Total arithmetic**: add, subtract, multiply and divide never fail,
//!   `1 / 0 = Ω` and `Ω · ε = 1`
//! - **Rule-table dispatch** with left-operand priority and right-operand fallback
//! - **Exact rationals** backed by `num-rational`, with bounded float conversion
//! - **Canonical text** that round-trips through `Display` and `FromStr`
//! - **Batch evaluation** over scoped worker threads with event reporting
//!
//! ## Example
//!
//! ```rust
//! use omega_epsilon::prelude::*;
//!
//! let one = Value::one();
//! assert_eq!(one.divide(&ZERO), OMEGA);
//! assert_eq!(EPSILON.multiply(&OMEGA), one);
//!
//! // Scaling by Ω and back is lossless
//! let x = convert("7/3").unwrap();
//! assert_eq!(x.multiply(&OMEGA).multiply(&EPSILON), x);
//!
//! // Canonical text
//! let power = OMEGA.pow(3).unwrap();
//! assert_eq!(power.to_string(), "Ω³");
//! assert_eq!("Ω³".parse::<Value>().unwrap(), power);
//!
//! // Evaluate through an evaluator that reports outcomes
//! let evaluator = EvaluatorBuilder::new().build().unwrap();
//! let result = evaluator.evaluate(&Operation::subtract(Value::integer(2), EPSILON));
//! assert_eq!(result, Ok(Value::integer(2)));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

#[cfg(test)]
mod proptests;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        convert, BinaryOp, CalculusConfig, Operation, ToValue, Value, Variant, EPSILON, OMEGA,
        ONE, ZERO,
    };
    pub use crate::engine::{
        create_from_config, Addition, Division, Evaluator, EvaluatorBuilder, Multiplication,
    };
    pub use crate::interfaces::{
        EvaluationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, OperationTable,
    };
    pub use crate::numeric::{CalculusError, CalculusResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Collector {
        events: Mutex<Vec<EvaluationEvent>>,
    }

    impl EventHandler for Collector {
        fn on_event(&self, event: EvaluationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_end_to_end_evaluation() {
        let collector = Arc::new(Collector::default());
        let evaluator = EvaluatorBuilder::new()
            .with_worker_threads(2)
            .with_parallel_threshold(2)
            .with_event_handler(collector.clone())
            .build()
            .unwrap();

        let parse = |text: &str| convert(text).unwrap();
        let operations = vec![
            Operation::divide(parse("1"), parse("0")),
            Operation::multiply(parse("ε"), parse("Ω")),
            Operation::multiply(parse("3/2·Ω"), parse("ε")),
            Operation::multiply(parse("ε"), parse("Ω³")),
            Operation::add(parse("∞_2"), parse("∞_5")),
            Operation::Reciprocal(parse("0")),
        ];
        let results = evaluator.evaluate_batch(&operations);

        let rendered: Vec<String> = results
            .iter()
            .map(|r| match r {
                Ok(value) => value.to_string(),
                Err(err) => err.to_string(),
            })
            .collect();
        assert_eq!(rendered[0], "Ω");
        assert_eq!(rendered[1], "1");
        assert_eq!(rendered[2], "3/2");
        assert_eq!(rendered[3], "Ω²");
        assert_eq!(rendered[4], "∞_5");
        assert_eq!(results[5], Err(CalculusError::ReciprocalUndefined));

        let events = collector.events.lock().unwrap();
        assert_eq!(events.len(), operations.len());
        assert_eq!(events.iter().filter(|e| e.is_failure()).count(), 1);
    }

    #[test]
    fn test_conversion_entry_points_agree() {
        assert_eq!(convert(&ZERO).unwrap(), ZERO);
        assert_eq!(convert(&5i64).unwrap(), Value::integer(5));
        assert_eq!(convert("5").unwrap(), Value::integer(5));
        assert_eq!(convert(&0.5f64).unwrap(), convert("1/2").unwrap());
        assert_eq!(convert("Ω").unwrap(), OMEGA);
        assert_eq!(convert("1Ω").unwrap(), OMEGA);
        assert!(matches!(
            convert("banana"),
            Err(CalculusError::Conversion { .. })
        ));
    }

    #[test]
    fn test_construction_errors_surface() {
        let zero_coefficient = Value::scaled_omega(num_rational::BigRational::from_integer(0.into()));
        assert!(matches!(
            zero_coefficient,
            Err(CalculusError::InvalidConstruction { variant: Variant::ScaledOmega, .. })
        ));
        assert!(Value::power_omega(1).is_err());
        assert!(Value::infinity_level(0).is_err());
        assert!(convert("∞_0").is_err());
    }

    #[test]
    fn test_shared_constants_are_interchangeable() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| ONE.clone()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Value::one());
        }
        assert_eq!(*ONE, Value::integer(1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_canonical_text() {
        let value = Value::scaled_omega(num_rational::BigRational::new(3.into(), 2.into())).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"3/2·Ω\"");
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let operation = Operation::multiply(OMEGA, EPSILON);
        let json = serde_json::to_string(&operation).unwrap();
        let back: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, operation);

        assert!(serde_json::from_str::<Value>("\"Ω^1\"").is_err());
    }
}
