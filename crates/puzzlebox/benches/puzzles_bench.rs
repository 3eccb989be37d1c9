//! Criterion benchmarks for the ID search and the joltage fan-out.
//!
//! - ids: closed-form sum vs. enumerating halves over wide ranges.
//! - joltage: 1 worker vs. available parallelism on 10k banks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use puzzlebox::ids::IdRange;
use puzzlebox::joltage::{total_joltage, JoltageCfg};
use puzzlebox::rand::{draw_banks, ReplayToken};

fn bench_ids(c: &mut Criterion) {
    let mut group = c.benchmark_group("ids");
    for &(first, last) in &[(11u64, 9_999), (1_000, 99_999_999), (10, 999_999_999_999)] {
        let r = IdRange::new(first, last).unwrap();
        let label = format!("{first}-{last}");
        group.bench_with_input(BenchmarkId::new("closed_form", &label), &r, |b, r| {
            b.iter(|| r.duplicated_half_sum())
        });
        if last <= 99_999_999 {
            group.bench_with_input(BenchmarkId::new("enumerate", &label), &r, |b, r| {
                b.iter(|| r.duplicated_halves().map(u128::from).sum::<u128>())
            });
        }
    }
    group.finish();
}

fn bench_joltage(c: &mut Criterion) {
    let mut group = c.benchmark_group("joltage");
    let banks = draw_banks(10_000, 100, false, ReplayToken { seed: 5, index: 0 });
    let refs: Vec<&str> = banks.iter().map(String::as_str).collect();
    for workers in [1, JoltageCfg::default().workers] {
        group.bench_with_input(BenchmarkId::new("total", workers), &refs, |b, refs| {
            b.iter(|| total_joltage(refs, JoltageCfg { workers }).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ids, bench_joltage);
criterion_main!(benches);
