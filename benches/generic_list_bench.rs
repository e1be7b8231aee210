//! Benchmark for GenericList vs standard LinkedList.
//!
//! Compares glist's GenericList against Rust's standard LinkedList for
//! building, positional access and positional insert/delete.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glist::GenericList;
use std::collections::LinkedList;
use std::hint::black_box;

// =============================================================================
// build Benchmark
// =============================================================================

fn benchmark_build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("build");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("GenericList_collect", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let list: GenericList<i32> = (0..size).map(black_box).collect();
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedList_push_back", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = LinkedList::new();
                    for index in 0..size {
                        list.push_back(black_box(index));
                    }
                    black_box(list)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// element_at Benchmark
// =============================================================================

fn benchmark_element_at(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("element_at");

    for size in [100, 1000, 10000] {
        let generic_list: GenericList<i32> = (0..size).collect();
        let standard_list: LinkedList<i32> = (0..size).collect();
        let middle = usize::try_from(size / 2).unwrap_or(0);

        group.bench_with_input(
            BenchmarkId::new("GenericList_get", size),
            &middle,
            |bencher, &middle| {
                bencher.iter(|| black_box(generic_list.get(black_box(middle))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedList_iter_nth", size),
            &middle,
            |bencher, &middle| {
                bencher.iter(|| black_box(standard_list.iter().nth(black_box(middle))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// insert/delete Benchmark
// =============================================================================

fn benchmark_insert_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert_delete_middle");

    for size in [100, 1000, 10000] {
        let middle = isize::try_from(size / 2).unwrap_or(0);

        group.bench_with_input(
            BenchmarkId::new("GenericList", size),
            &middle,
            |bencher, &middle| {
                let mut list: GenericList<i32> = (0..size).collect();
                bencher.iter(|| {
                    list.insert_at(black_box(middle), -1).unwrap_or(());
                    black_box(list.delete_at(black_box(middle)).ok())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in [100, 1000, 10000] {
        let generic_list: GenericList<i64> = (0..size).collect();
        let standard_list: LinkedList<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("GenericList_for_each", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sum = 0;
                let _ = generic_list.for_each(|value, _| sum += value);
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("LinkedList_iter", size), &size, |bencher, _| {
            bencher.iter(|| black_box(standard_list.iter().sum::<i64>()));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_build,
    benchmark_element_at,
    benchmark_insert_delete,
    benchmark_iteration
);

criterion_main!(benches);
