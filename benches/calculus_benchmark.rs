// ============================================================================
// Ωε-Calculus Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Dispatch - Single binary operations, direct rule vs. right-operand fallback
// 2. Exponentiation - Repeated multiplication for growing exponents
// 3. Text - Canonical rendering and parsing
// 4. Batch Evaluation - Sequential vs. scoped-thread evaluation
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use num_rational::BigRational;
use omega_epsilon::prelude::*;
use std::hint::black_box;

fn representatives() -> Vec<(&'static str, Value)> {
    vec![
        ("zero", ZERO),
        ("rational", Value::rational(BigRational::new(BigInt::from(22), BigInt::from(7)))),
        ("omega", OMEGA),
        ("epsilon", EPSILON),
        (
            "scaled_omega",
            Value::scaled_omega(BigRational::new(BigInt::from(3), BigInt::from(2))).unwrap(),
        ),
        ("power_omega", Value::power_omega(5).unwrap()),
        ("infinity_level", Value::infinity_level(3).unwrap()),
    ]
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn benchmark_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let rhs = Value::rational(BigRational::new(BigInt::from(5), BigInt::from(3)));

    for (name, lhs) in representatives() {
        group.bench_with_input(BenchmarkId::new("add", name), &lhs, |b, lhs| {
            b.iter(|| black_box(lhs.add(black_box(&rhs))));
        });
        group.bench_with_input(BenchmarkId::new("multiply", name), &lhs, |b, lhs| {
            b.iter(|| black_box(lhs.multiply(black_box(&rhs))));
        });
        group.bench_with_input(BenchmarkId::new("divide", name), &lhs, |b, lhs| {
            b.iter(|| black_box(lhs.divide(black_box(&rhs))));
        });
    }

    // Rational + Ω has no left rule and is answered by Ω's table
    group.bench_function("fallback_rational_plus_omega", |b| {
        b.iter(|| black_box(rhs.add(black_box(&OMEGA))));
    });

    group.finish();
}

// ============================================================================
// Exponentiation Benchmarks
// ============================================================================

fn benchmark_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("power");
    let two_thirds = Value::rational(BigRational::new(BigInt::from(2), BigInt::from(3)));

    for exponent in [2i64, 16, 128].iter() {
        group.bench_with_input(BenchmarkId::new("omega", exponent), exponent, |b, &k| {
            b.iter(|| black_box(OMEGA.pow(k)));
        });
        group.bench_with_input(BenchmarkId::new("rational", exponent), exponent, |b, &k| {
            b.iter(|| black_box(two_thirds.pow(-k)));
        });
    }

    group.finish();
}

// ============================================================================
// Text Benchmarks
// ============================================================================

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for (name, value) in representatives() {
        let text = value.to_string();
        group.bench_with_input(BenchmarkId::new("render", name), &value, |b, value| {
            b.iter(|| black_box(value.to_string()));
        });
        group.bench_with_input(BenchmarkId::new("parse", name), &text, |b, text| {
            b.iter(|| black_box(text.parse::<Value>()));
        });
    }

    group.bench_function("convert_f64_pi", |b| {
        b.iter(|| black_box(convert(black_box(&std::f64::consts::PI))));
    });

    group.finish();
}

// ============================================================================
// Batch Evaluation Benchmarks
// ============================================================================

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_evaluation");

    for batch_size in [100usize, 1000, 10000].iter() {
        let operations: Vec<Operation> = (0..*batch_size)
            .map(|i| {
                let lhs = Value::integer(i as i64 + 1);
                match i % 4 {
                    0 => Operation::multiply(lhs, OMEGA),
                    1 => Operation::divide(lhs, ZERO),
                    2 => Operation::add(lhs, EPSILON),
                    _ => Operation::power(lhs, 3),
                }
            })
            .collect();

        let sequential = EvaluatorBuilder::new()
            .with_config(CalculusConfig::single_threaded())
            .build()
            .unwrap();
        let parallel = EvaluatorBuilder::new()
            .with_worker_threads(4)
            .with_parallel_threshold(64)
            .build()
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("sequential", batch_size),
            &operations,
            |b, ops| {
                b.iter(|| black_box(sequential.evaluate_batch(ops)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", batch_size),
            &operations,
            |b, ops| {
                b.iter(|| black_box(parallel.evaluate_batch(ops)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_dispatch,
    benchmark_power,
    benchmark_text,
    benchmark_batch
);

criterion_main!(benches);
