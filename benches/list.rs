//! Benchmarks for the list operations.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sentinel_list::List;
use std::iter::FromIterator;

const LEN: usize = 10_000;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    group.throughput(Throughput::Elements(LEN as u64));

    group.bench_function("push_back/pop_front", |b| {
        let mut list = List::new();
        b.iter(|| {
            for i in 0..LEN as u64 {
                list.push_back(i);
            }
            while let Ok(elt) = list.pop_front() {
                black_box(elt);
            }
        });
    });

    group.bench_function("push_front/pop_back", |b| {
        let mut list = List::new();
        b.iter(|| {
            for i in 0..LEN as u64 {
                list.push_front(i);
            }
            while let Ok(elt) = list.pop_back() {
                black_box(elt);
            }
        });
    });

    group.finish();
}

fn bench_cursor_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_edit");
    group.throughput(Throughput::Elements(LEN as u64));

    // Insert in front of every element, then erase the inserted ones.
    group.bench_function("insert/erase", |b| {
        let mut list = List::from_iter(0..LEN as u64);
        b.iter(|| {
            let mut cursor = list.cursor_start_mut();
            while !cursor.is_end() {
                cursor.insert(0);
                cursor.move_next();
                cursor.move_next();
            }
            cursor.move_to_start();
            while !cursor.is_end() {
                black_box(cursor.erase().ok());
                cursor.move_next();
            }
        });
    });

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    group.throughput(Throughput::Elements(LEN as u64));

    group.bench_function("every_third", |b| {
        b.iter(|| {
            let mut list = List::from_iter((0..LEN as u64).map(|i| i % 3));
            black_box(list.remove(&0))
        });
    });

    group.finish();
}

fn bench_clone_eq(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_eq");
    group.throughput(Throughput::Elements(LEN as u64));

    let list = List::from_iter(0..LEN as u64);

    group.bench_function("clone", |b| {
        b.iter(|| black_box(list.clone()));
    });

    group.bench_function("clone_from", |b| {
        let mut target = List::from_iter(0..LEN as u64 / 2);
        b.iter(|| {
            target.clone_from(black_box(&list));
            target.len()
        });
    });

    let other = list.clone();
    group.bench_function("eq", |b| {
        b.iter(|| black_box(&list) == black_box(&other));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_cursor_edit,
    bench_remove,
    bench_clone_eq
);
criterion_main!(benches);
