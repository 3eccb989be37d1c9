//! Criterion benchmarks for the dial reducer.
//! Sizes: n in {100, 1_000, 10_000, 100_000} commands.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use puzzlebox::dial::{Dial, DialCfg};
use puzzlebox::input::parse_commands;
use puzzlebox::rand::{draw_commands, CommandCfg, MagnitudeDist, ReplayToken};

fn bench_dial(c: &mut Criterion) {
    let mut group = c.benchmark_group("dial");
    let dial = Dial::new(DialCfg::default()).unwrap();
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        let cfg = CommandCfg {
            len: n,
            ..CommandCfg::default()
        };
        let cmds = draw_commands(cfg, ReplayToken { seed: 43, index: 0 });
        group.bench_with_input(BenchmarkId::new("process", n), &cmds, |b, cmds| {
            b.iter(|| dial.process(cmds).unwrap())
        });

        // Magnitude size must not matter: whole turns are credited in O(1).
        let huge = CommandCfg {
            len: n,
            magnitude: MagnitudeDist::Uniform {
                min: 1 << 40,
                max: 1 << 50,
            },
            whole_turn_frac: 0.0,
            ..CommandCfg::default()
        };
        let big_cmds = draw_commands(huge, ReplayToken { seed: 44, index: 0 });
        group.bench_with_input(BenchmarkId::new("process_huge", n), &big_cmds, |b, cmds| {
            b.iter(|| dial.process(cmds).unwrap())
        });

        let text: String = cmds.iter().map(|c| format!("{c}\n")).collect();
        group.bench_with_input(BenchmarkId::new("parse", n), &text, |b, text| {
            b.iter(|| parse_commands(text).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dial);
criterion_main!(benches);
