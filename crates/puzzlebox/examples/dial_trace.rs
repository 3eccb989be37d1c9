//! Print every dial state for a replayable random command sequence.
//!
//! Purpose
//! - Eyeball the hit/pass bookkeeping on a short run, including whole-turn
//!   commands, without preparing an input file.
//!
//! Usage: `cargo run -p puzzlebox --example dial_trace -- [seed] [len]`

use puzzlebox::dial::{Dial, DialCfg};
use puzzlebox::rand::{draw_commands, CommandCfg, MagnitudeDist, ReplayToken};

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let len = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);

    let cfg = CommandCfg {
        len,
        magnitude: MagnitudeDist::Uniform { min: 0, max: 250 },
        whole_turn_frac: 0.2,
        ..CommandCfg::default()
    };
    let cmds = draw_commands(cfg, ReplayToken { seed, index: 0 });
    let dial = Dial::new(DialCfg::default()).expect("default dial config is valid");
    let states = dial.trace(&cmds).expect("counters fit in u64");

    println!("start  pos={:>3}", states[0].position);
    for (cmd, s) in cmds.iter().zip(&states[1..]) {
        println!(
            "{:>6} pos={:>3} hits={:>3} passes={:>3}",
            cmd.to_string(),
            s.position,
            s.tally.hits,
            s.tally.passes
        );
    }
    let last = states[states.len() - 1].tally;
    let total = last.total().expect("part 2 fits in u64");
    println!("part 1 = {}, part 2 = {}", last.hits, total);
}
