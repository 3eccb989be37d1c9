//! Reproducible random puzzle inputs (dial commands, battery banks).
//!
//! Purpose
//! - Feed benches and randomized tests with inputs that can be replayed from a
//!   `(seed, index)` token, so a failing draw is reported and rerun exactly.
//!
//! Model
//! - Commands: direction is a fair coin; magnitude follows `MagnitudeDist`,
//!   with an optional share of whole-turn multiples to hit the zero-start cases.
//! - Banks: uniform digits, optionally excluding `0`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::dial::{Command, Direction};

/// Magnitude distribution.
#[derive(Clone, Copy, Debug)]
pub enum MagnitudeDist {
    Fixed(u64),
    Uniform { min: u64, max: u64 },
}

impl MagnitudeDist {
    fn sample<R: Rng>(&self, rng: &mut R) -> u64 {
        match *self {
            MagnitudeDist::Fixed(m) => m,
            MagnitudeDist::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Command sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CommandCfg {
    pub len: usize,
    pub magnitude: MagnitudeDist,
    /// Probability of replacing a draw with `k * modulus` for `k` in `1..=4`. Clamped to [0, 1].
    pub whole_turn_frac: f64,
    pub modulus: u64,
}

impl Default for CommandCfg {
    fn default() -> Self {
        Self {
            len: 1_000,
            magnitude: MagnitudeDist::Uniform { min: 0, max: 999 },
            whole_turn_frac: 0.05,
            modulus: crate::cfg::DEFAULT_MODULUS,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a command sequence.
pub fn draw_commands(cfg: CommandCfg, tok: ReplayToken) -> Vec<Command> {
    let mut rng = tok.to_std_rng();
    let p = cfg.whole_turn_frac.clamp(0.0, 1.0);
    (0..cfg.len)
        .map(|_| {
            let direction = if rng.gen::<bool>() {
                Direction::Left
            } else {
                Direction::Right
            };
            let magnitude = if cfg.modulus > 0 && rng.gen::<f64>() < p {
                cfg.modulus.saturating_mul(rng.gen_range(1..=4))
            } else {
                cfg.magnitude.sample(&mut rng)
            };
            Command::new(direction, magnitude)
        })
        .collect()
}

/// Draw `count` banks of `len` digits each (`len` is raised to 2).
pub fn draw_banks(count: usize, len: usize, allow_zero: bool, tok: ReplayToken) -> Vec<String> {
    let mut rng = tok.to_std_rng();
    let lo = if allow_zero { 0u8 } else { 1 };
    let len = len.max(2);
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| char::from(b'0' + rng.gen_range(lo..=9)))
                .collect()
        })
        .collect()
}
