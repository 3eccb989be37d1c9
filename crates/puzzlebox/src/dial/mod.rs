//! Circular dial simulator.
//!
//! Purpose
//! - Apply an ordered sequence of `L`/`R` rotations to a dial with positions
//!   `0..modulus` and count how often it points at 0: once per command that
//!   lands on 0 (hits) and once per crossing that does not end the command
//!   (passes).
//!
//! Model
//! - `DialState::step` is a pure transition; `Dial::process` folds it over the
//!   sequence. Large magnitudes are split into whole turns plus a remainder, so
//!   a run is O(n) regardless of magnitudes.
//! - The sequence is inherently ordered; do not parallelize across commands.
//!
//! Code cross-refs: `crate::input::parse_commands`, `crate::rand::draw_commands`

mod reduce;
mod types;

pub use reduce::{process, Dial, DialState, Tally};
pub use types::{Command, DialCfg, DialError, Direction};
