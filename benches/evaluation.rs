use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::{build_operator_tree, DefaultNumericTypes};
use reckon_rs::ast::{Evaluator, Parser};
use reckon_rs::Context;

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let evaluator = Evaluator::with_builtins();
    let mut context = Context::new();

    let expr = "2 + 3";
    let parsed = Parser::parse_expression(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("parsed_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_expression(black_box(expr), &mut context))
    });

    group.bench_function("preparsed_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(&parsed), &mut context))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0) + black_box(3.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let evaluator = Evaluator::with_builtins();
    let mut context = Context::new();

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let parsed = Parser::parse_expression(expr).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("parsed_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate_expression(black_box(expr), &mut context))
    });

    group.bench_function("preparsed_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(&parsed), &mut context))
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_complex_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark builtin function calls and constants
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Call Evaluation");

    let evaluator = Evaluator::with_builtins();
    let mut context = Context::new();

    let expr = "sqrt(16) + sin(pi / 6) * max(1, 2, 3)";
    let parsed = Parser::parse_expression(expr).unwrap();

    group.bench_function("parsed_function_call", |b| {
        b.iter(|| evaluator.evaluate_expression(black_box(expr), &mut context))
    });

    group.bench_function("preparsed_function_call", |b| {
        b.iter(|| evaluator.evaluate(black_box(&parsed), &mut context))
    });

    group.bench_function("meval_function_call", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark a full session statement, including the parse cache and history
fn benchmark_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("Session Evaluation");

    group.bench_function("fresh_session", |b| {
        b.iter(|| reckon_rs::evaluate_expression(black_box("x = 2^10 % 7")))
    });

    group.bench_function("cached_session", |b| {
        b.iter_batched_ref(
            reckon_rs::Calculator::new,
            |calculator| {
                for _ in 0..64 {
                    let _ = calculator.evaluate(black_box("x = 2^10 % 7"));
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_function_calls,
    benchmark_session,
);
criterion_main!(benches);
