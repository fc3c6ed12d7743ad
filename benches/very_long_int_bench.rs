//! Benchmarks for multiplication, division and decimal conversion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use very_long_int::VeryLongInt;

/// Builds a decimal string of `len` characters with no leading zero.
fn decimal_string(len: usize) -> String {
    (0..len)
        .map(|i| char::from(b'1' + (i * 7 % 9) as u8))
        .collect()
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");

    for len in [50, 200, 1000] {
        let a = VeryLongInt::from(decimal_string(len));
        let b = VeryLongInt::from(decimal_string(len / 2 + 1));

        group.bench_with_input(BenchmarkId::new("schoolbook", len), &len, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b))
        });
    }

    group.finish();
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div");

    for len in [50, 200] {
        let a = VeryLongInt::from(decimal_string(len));
        let b = VeryLongInt::from(decimal_string(len / 3 + 1));

        group.bench_with_input(BenchmarkId::new("binary_search", len), &len, |bench, _| {
            bench.iter(|| black_box(&a) / black_box(&b))
        });
    }

    group.finish();
}

fn bench_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal");

    for len in [100, 1000] {
        let s = decimal_string(len);
        let a = VeryLongInt::from(s.as_str());

        group.bench_with_input(BenchmarkId::new("parse", len), &s, |bench, s| {
            bench.iter(|| VeryLongInt::from(black_box(s.as_str())))
        });
        group.bench_with_input(BenchmarkId::new("to_string", len), &a, |bench, a| {
            bench.iter(|| black_box(a).to_string())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul, bench_div, bench_decimal);
criterion_main!(benches);
