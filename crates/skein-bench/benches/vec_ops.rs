//! Criterion micro-benchmarks for container push, insert, and remove.
//!
//! `push_1000` measures amortized append cost across ten capacity
//! doublings; `insert_front`/`remove_front` measure the worst-case
//! full shift; `boundary_churn` measures interleaved push/pop exactly
//! at a capacity boundary, where a shrink-on-remove policy would
//! thrash (this container deliberately never shrinks).

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use skein_bench::{bench_ref, filled};
use skein_vec::RefVec;

fn bench_push(c: &mut Criterion) {
    c.bench_function("push_1000", |b| {
        b.iter(|| {
            let mut v = RefVec::new();
            for i in 0..1000 {
                v.push(bench_ref(black_box(i)));
            }
            black_box(v.len())
        });
    });
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("insert_front_256", |b| {
        b.iter(|| {
            let mut v = RefVec::new();
            for i in 0..256 {
                v.insert(0, bench_ref(black_box(i))).unwrap();
            }
            black_box(v.len())
        });
    });
}

fn bench_remove_front(c: &mut Criterion) {
    c.bench_function("remove_front_256", |b| {
        b.iter_batched(
            || filled(256),
            |mut v| {
                while !v.is_empty() {
                    black_box(v.remove(0).unwrap());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_boundary_churn(c: &mut Criterion) {
    c.bench_function("boundary_churn_1024", |b| {
        b.iter_batched(
            || filled(1024),
            |mut v| {
                for i in 0..1024 {
                    v.push(bench_ref(black_box(i)));
                    black_box(v.pop().unwrap());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_push,
    bench_insert_front,
    bench_remove_front,
    bench_boundary_churn
);
criterion_main!(benches);
