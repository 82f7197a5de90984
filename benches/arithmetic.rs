//! Criterion benchmarks for the hot arithmetic paths: addition,
//! subtraction, multiplication, division, and parsing/formatting a
//! moderately large decimal.

use arbitrary_decimal::{BigDecimal, RoundingMode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::str::FromStr;

fn base() -> BigDecimal {
    BigDecimal::from_str("2.01").unwrap()
}

fn pi() -> BigDecimal {
    BigDecimal::from_str("3.1415926535897932384626433832").unwrap()
}

fn bench_add(c: &mut Criterion) {
    let a = base();
    let b = pi();
    c.bench_function("add", |bencher| bencher.iter(|| black_box(a.checked_add(&b).unwrap())));
}

fn bench_sub(c: &mut Criterion) {
    let a = base();
    let b = pi();
    c.bench_function("sub", |bencher| bencher.iter(|| black_box(a.checked_sub(&b).unwrap())));
}

fn bench_mul(c: &mut Criterion) {
    let a = base();
    let b = pi();
    c.bench_function("mul", |bencher| bencher.iter(|| black_box(a.checked_multiply(&b).unwrap())));
}

fn bench_div(c: &mut Criterion) {
    let a = base();
    let b = pi();
    c.bench_function("div", |bencher| {
        bencher.iter(|| black_box(a.checked_divide(&b, RoundingMode::HalfUp).unwrap()))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_pi", |bencher| bencher.iter(|| black_box(BigDecimal::from_str("3.1415926535897932384626433832").unwrap())));
}

fn bench_to_string(c: &mut Criterion) {
    let a = pi();
    c.bench_function("to_string_pi", |bencher| bencher.iter(|| black_box(a.to_string())));
}

fn bench_large_power_of_ten_scale(c: &mut Criterion) {
    let a = BigDecimal::from_str("1.000001").unwrap();
    c.bench_function("set_scale_enlarge_1000", |bencher| bencher.iter(|| black_box(a.set_scale(1000).unwrap())));
}

criterion_group!(benches, bench_add, bench_sub, bench_mul, bench_div, bench_parse, bench_to_string, bench_large_power_of_ten_scale);
criterion_main!(benches);
