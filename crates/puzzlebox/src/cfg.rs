//! Puzzle defaults.
//!
//! The dial values are those of the observed puzzle; callers override them
//! through `DialCfg` (the CLI exposes `--modulus` and `--start`).

/// Positions on the dial (`0..=99`).
pub const DEFAULT_MODULUS: u64 = 100;
/// Where the dial points before the first rotation.
pub const DEFAULT_START: u64 = 50;
