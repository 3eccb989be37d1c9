//! Puzzle solvers for line-oriented text inputs.
//!
//! - `dial`: circular dial simulator (hits on and passes through 0).
//! - `ids`: duplicated-half identifiers inside integer ranges.
//! - `joltage`: largest two-digit joltage per battery bank, fanned out over threads.
//! - `input`: text normalization and the dial command adapter.
//! - `rand`: replayable random inputs for benches and tests.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; `api`
//!   collects the names the CLI and benches use.

pub mod api;
pub mod cfg;
pub mod dial;
pub mod ids;
pub mod input;
pub mod joltage;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dial::{Command, Dial, DialCfg, DialError, Direction, Tally};
