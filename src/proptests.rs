//! Property-based tests for the closed algebra.

use crate::domain::{Value, EPSILON, OMEGA, ZERO};
use crate::engine::{resolve, Addition, Division, Multiplication};
use crate::interfaces::OperationTable;
use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn denominator() -> impl Strategy<Value = i64> {
    1i64..500i64
}

fn rational_value() -> impl Strategy<Value = Value> {
    (small_int(), denominator()).prop_map(|(n, d)| Value::rational(ratio(n, d)))
}

// Every variant, with payloads spread over their legal ranges
fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(ZERO),
        rational_value(),
        Just(OMEGA),
        Just(EPSILON),
        (non_zero_int(), denominator())
            .prop_map(|(n, d)| Value::scaled_omega(ratio(n, d)).unwrap()),
        (2u64..40).prop_map(|n| Value::power_omega(n).unwrap()),
        (1u64..40).prop_map(|n| Value::infinity_level(n).unwrap()),
    ]
}

fn hash_of(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    // Totality and identities

    #[test]
    fn binary_operations_are_total(a in any_value(), b in any_value()) {
        let tables: [&dyn OperationTable; 3] = [&Addition, &Multiplication, &Division];
        for table in tables {
            prop_assert!(resolve(table, &a, &b).is_ok(), "{} {:?} {:?}", table.name(), a, b);
        }
        let _ = a.subtract(&b);
    }

    #[test]
    fn additive_identity(a in any_value()) {
        prop_assert_eq!(a.add(&ZERO), a.clone());
        prop_assert_eq!(ZERO.add(&a), a);
    }

    #[test]
    fn multiplicative_identity(a in any_value()) {
        prop_assert_eq!(a.multiply(&Value::one()), a);
    }

    #[test]
    fn zero_absorbs_from_the_left(a in any_value()) {
        prop_assert_eq!(ZERO.multiply(&a), ZERO);
        prop_assert_eq!(ZERO.divide(&a), ZERO);
    }

    #[test]
    fn self_division_is_one(a in any_value()) {
        prop_assume!(!a.is_zero());
        prop_assert_eq!(a.divide(&a), Value::one());
    }

    #[test]
    fn negation_is_an_involution(a in any_value()) {
        prop_assert_eq!(a.negate().negate(), a);
    }

    #[test]
    fn subtracting_self_from_rationals_gives_zero(a in rational_value()) {
        prop_assert_eq!(a.subtract(&a), ZERO);
    }

    // Agreement with exact rational arithmetic

    #[test]
    fn rationals_agree_with_bigrational(
        n1 in small_int(), d1 in denominator(),
        n2 in non_zero_int(), d2 in denominator(),
    ) {
        let (p, q) = (ratio(n1, d1), ratio(n2, d2));
        let (a, b) = (Value::rational(p.clone()), Value::rational(q.clone()));
        prop_assert_eq!(a.add(&b), Value::rational(&p + &q));
        prop_assert_eq!(a.subtract(&b), Value::rational(&p - &q));
        prop_assert_eq!(a.multiply(&b), Value::rational(&p * &q));
        prop_assert_eq!(a.divide(&b), Value::rational(&p / &q));
    }

    #[test]
    fn rational_reciprocal_pairs_to_one(n in non_zero_int(), d in denominator()) {
        let r = Value::rational(ratio(n, d));
        prop_assert_eq!(r.reciprocal().unwrap().multiply(&r), Value::one());
    }

    #[test]
    fn scaling_by_omega_is_reversible(n in non_zero_int(), d in denominator()) {
        let r = Value::rational(ratio(n, d));
        prop_assert_eq!(r.multiply(&OMEGA).multiply(&EPSILON), r);
    }

    // Text encoding

    #[test]
    fn canonical_text_round_trips(a in any_value()) {
        let text = a.to_string();
        let parsed: Value = text.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), text);
        prop_assert_eq!(parsed, a);
    }

    #[test]
    fn equal_values_hash_equally(a in any_value()) {
        let parsed: Value = a.to_string().parse().unwrap();
        prop_assert_eq!(hash_of(&parsed), hash_of(&a));
    }

    #[test]
    fn distinct_variants_never_compare_equal(a in any_value(), b in any_value()) {
        if a.variant() != b.variant() {
            prop_assert_ne!(a, b);
        }
    }

    // Exponentiation

    #[test]
    fn zeroth_and_first_powers(a in any_value()) {
        prop_assert_eq!(a.pow(0).unwrap(), Value::one());
        prop_assert_eq!(a.pow(1).unwrap(), a);
    }

    #[test]
    fn omega_powers_track_exponents(n in 2u64..60) {
        let expected = Value::power_omega(n).unwrap();
        prop_assert_eq!(OMEGA.pow(n as i64).unwrap(), expected.clone());
        prop_assert_eq!(EPSILON.multiply(&expected), OMEGA.pow(n as i64 - 1).unwrap());
    }

    // Infinity levels

    #[test]
    fn infinity_levels_order_by_level(a in 1u64..1000, b in 1u64..1000) {
        let (x, y) = (Value::infinity_level(a).unwrap(), Value::infinity_level(b).unwrap());
        prop_assert_eq!(x < y, a < b);
        prop_assert_eq!(x.add(&y), Value::infinity_level(a.max(b)).unwrap());
        prop_assert_eq!(x.multiply(&y), Value::infinity_level(a + b).unwrap());
    }

    #[test]
    fn only_infinity_levels_are_ordered(a in any_value(), b in any_value()) {
        let ordered = a.partial_cmp(&b).is_some();
        let both_levels = matches!((&a, &b), (Value::InfinityLevel(_), Value::InfinityLevel(_)));
        prop_assert_eq!(ordered, both_levels || a == b);
    }
}

#[test]
fn testable_scenarios() {
    let one = Value::one();
    assert_eq!(one.divide(&ZERO), OMEGA);
    assert_eq!(EPSILON.multiply(&OMEGA), one);
    assert_eq!(ZERO.multiply(&OMEGA), ZERO);
    assert_eq!(OMEGA.multiply(&OMEGA), Value::power_omega(2).unwrap());
    assert_eq!(
        EPSILON.multiply(&Value::power_omega(3).unwrap()),
        Value::power_omega(2).unwrap()
    );
    assert_eq!(
        Value::scaled_omega(ratio(3, 2)).unwrap().multiply(&EPSILON),
        Value::rational(ratio(3, 2))
    );
    assert_eq!(ZERO.divide(&ZERO), ZERO);
    assert_eq!(ZERO.pow(0).unwrap(), one);
    assert_eq!(
        Value::infinity_level(2)
            .unwrap()
            .add(&Value::infinity_level(5).unwrap()),
        Value::infinity_level(5).unwrap()
    );
    assert_eq!(
        Value::infinity_level(2)
            .unwrap()
            .multiply(&Value::infinity_level(3).unwrap()),
        Value::infinity_level(5).unwrap()
    );
}
