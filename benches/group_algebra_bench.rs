//! Benchmarks for group algebra multiplication.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use envelope::prelude::*;

/// The sum of all group elements with coefficients `1, 2, 3, ...`.
fn dense_element(algebra: &GroupAlgebra<PermutationGroup, Z>) -> Combination<Permutation, Z> {
    algebra
        .group()
        .sorted_elements()
        .iter()
        .enumerate()
        .map(|(i, g)| (g.clone(), Z::from(i as i64 + 1)))
        .collect()
}

fn bench_symmetric_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("symmetric_group_algebra_mul");

    for n in [3usize, 4, 5] {
        let algebra = GroupAlgebra::<_, Z>::new(Arc::new(PermutationGroup::symmetric(n)));
        let x = dense_element(&algebra);

        group.bench_with_input(BenchmarkId::new("dense", n), &n, |b, _| {
            b.iter(|| black_box(algebra.multiply(&x, &x)));
        });
    }

    group.finish();
}

fn bench_group_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("permutation_group_closure");

    for n in [4usize, 5, 6] {
        group.bench_with_input(BenchmarkId::new("symmetric", n), &n, |b, &n| {
            b.iter(|| black_box(PermutationGroup::symmetric(n)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_symmetric_groups, bench_group_closure);
criterion_main!(benches);
