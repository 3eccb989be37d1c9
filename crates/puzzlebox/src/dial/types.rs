//! Basic dial types: direction, rotation command, configuration, errors.
//!
//! - `Direction`: closed two-variant enum (`L`/`R` tokens).
//! - `Command`: one parsed rotation `<direction><magnitude>`.
//! - `DialCfg`: modulus and start position, validated by `Dial::new`.
//! - `DialError`: everything that aborts a run.
//!
//! Code cross-refs: `reduce::{DialState, Dial, Tally}`, `crate::input`

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cfg::{DEFAULT_MODULUS, DEFAULT_START};

/// Rotation direction. Left moves toward lower numbers, Right toward higher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn token(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    #[inline]
    pub fn from_token(c: char) -> Option<Self> {
        match c {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// A single rotation, e.g. `L68` or `R1000`. Immutable once parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Command {
    pub direction: Direction,
    pub magnitude: u64,
}

impl Command {
    #[inline]
    pub fn new(direction: Direction, magnitude: u64) -> Self {
        Self {
            direction,
            magnitude,
        }
    }
    #[inline]
    pub fn left(magnitude: u64) -> Self {
        Self::new(Direction::Left, magnitude)
    }
    #[inline]
    pub fn right(magnitude: u64) -> Self {
        Self::new(Direction::Right, magnitude)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.token(), self.magnitude)
    }
}

impl FromStr for Command {
    type Err = DialError;

    /// Parses a single line without line-number context (reported as line 1).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::input::parse_command(1, s)
    }
}

/// Dial configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialCfg {
    /// Number of positions on the dial (`0..modulus`).
    pub modulus: u64,
    /// Initial position, must lie in `[0, modulus)`.
    pub start: u64,
}

impl Default for DialCfg {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            start: DEFAULT_START,
        }
    }
}

impl DialCfg {
    pub fn validate(&self) -> Result<(), DialError> {
        if self.modulus == 0 || self.start >= self.modulus {
            return Err(DialError::InvalidConfiguration {
                modulus: self.modulus,
                start: self.start,
            });
        }
        Ok(())
    }
}

/// Errors raised while parsing or running a command sequence. All are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialError {
    #[error("line {line}: malformed command {text:?}")]
    MalformedCommand { line: usize, text: String },
    #[error("line {line}: unrecognized direction {token:?} (expected 'L' or 'R')")]
    UnrecognizedDirection { line: usize, token: char },
    #[error("invalid dial configuration: modulus {modulus}, start {start}")]
    InvalidConfiguration { modulus: u64, start: u64 },
    #[error("dial counter overflowed u64")]
    CounterOverflow,
}
