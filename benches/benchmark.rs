use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;
use woodall::reference::naive_is_woodall;
use woodall::*;

fn bench_small(c: &mut Criterion) {
    let z = BigInt::from(7516192767u64);

    c.bench_function("is_woodall W_28", |b| b.iter(|| is_woodall(black_box(&z))));
    c.bench_function("naive_is_woodall W_28", |b| {
        b.iter(|| naive_is_woodall(black_box(&z)))
    });
    c.bench_function("is_woodall_u64 W_28", |b| {
        b.iter(|| is_woodall_u64(black_box(7516192767u64)))
    });
}

fn bench_large(c: &mut Criterion) {
    let w = BigInt::from(woodall_number(1000).unwrap());

    c.bench_function("is_woodall W_1000", |b| b.iter(|| is_woodall(black_box(&w))));
    c.bench_function("is_woodall W_1000 + 1", |b| {
        let n = &w + 1;
        b.iter(|| is_woodall(black_box(&n)))
    });
}

fn bench_verify_range(c: &mut Criterion) {
    c.bench_function("verify_range 0..=10000", |b| {
        b.iter(|| verify_range(black_box(0), black_box(10_000)))
    });
}

criterion_group!(benches, bench_small, bench_large, bench_verify_range);
criterion_main!(benches);
