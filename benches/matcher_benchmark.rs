//! Matcher benchmark: fuzzy filtering over growing line sets.
//!
//! Target: interactive latency (one recompute per keystroke) for a few
//! thousand candidate lines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linepick::MatchGateway;

fn candidate_lines(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!("src/module_{i}/handler_{:04}.rs", i * 7 % 9973))
        .collect()
}

fn bench_identity_pass(c: &mut Criterion) {
    let gateway = MatchGateway::new();
    let lines = candidate_lines(1000);

    c.bench_function("match_empty_query_1000", |b| {
        b.iter(|| gateway.matches(lines.iter().map(String::as_str), black_box("")))
    });
}

fn bench_fuzzy_query(c: &mut Criterion) {
    let gateway = MatchGateway::new();
    let mut group = c.benchmark_group("match_fuzzy");

    for n in [100, 1000, 5000] {
        let lines = candidate_lines(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &lines, |b, lines| {
            b.iter(|| gateway.matches(lines.iter().map(String::as_str), black_box("handler")))
        });
    }

    group.finish();
}

fn bench_no_match_query(c: &mut Criterion) {
    let gateway = MatchGateway::new();
    let lines = candidate_lines(1000);

    c.bench_function("match_zero_hits_1000", |b| {
        b.iter(|| gateway.matches(lines.iter().map(String::as_str), black_box("zzzzzz")))
    });
}

criterion_group!(
    benches,
    bench_identity_pass,
    bench_fuzzy_query,
    bench_no_match_query,
);
criterion_main!(benches);
