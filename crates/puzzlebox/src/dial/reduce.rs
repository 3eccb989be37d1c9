//! The dial reducer: `(position, hits, passes) × Command → (position', hits', passes')`.
//!
//! Each command is decomposed into whole revolutions plus a remainder. Whole
//! revolutions are credited in O(1) without unrolling; only the remainder moves
//! the position. Commands must be applied strictly in order.

use super::types::{Command, DialCfg, DialError, Direction};

/// Hits and passes accumulated over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Commands after which the dial rests exactly on 0.
    pub hits: u64,
    /// Crossings of 0 that were not the final landing of their command.
    pub passes: u64,
}

impl Tally {
    /// Part-two answer: every time the dial pointed at 0.
    #[inline]
    pub fn total(&self) -> Result<u64, DialError> {
        add(self.hits, self.passes)
    }
}

/// Immutable dial state between two commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialState {
    pub position: u64,
    pub tally: Tally,
}

impl DialState {
    #[inline]
    pub fn at(position: u64) -> Self {
        Self {
            position,
            tally: Tally::default(),
        }
    }

    /// Apply one command. Pure: `self` is left untouched.
    ///
    /// A state off the dial (`position >= modulus`, or `modulus == 0`) is
    /// rejected as `InvalidConfiguration`.
    pub fn step(self, cmd: Command, modulus: u64) -> Result<Self, DialError> {
        if modulus == 0 || self.position >= modulus {
            return Err(DialError::InvalidConfiguration {
                modulus,
                start: self.position,
            });
        }
        if cmd.magnitude == 0 {
            return Ok(self);
        }
        let full_turns = cmd.magnitude / modulus;
        let remainder = cmd.magnitude % modulus;
        let Tally {
            mut hits,
            mut passes,
        } = self.tally;

        if self.position == 0 && remainder == 0 {
            // Only whole turns from 0: the first return is the landing, the rest are passes.
            hits = add(hits, 1)?;
            passes = add(passes, full_turns - 1)?;
        } else {
            passes = add(passes, full_turns)?;
        }

        if remainder == 0 {
            return Ok(Self {
                position: self.position,
                tally: Tally { hits, passes },
            });
        }

        let position = rotate(self.position, cmd.direction, remainder, modulus);
        let wrapped = match cmd.direction {
            Direction::Left => position > self.position,
            Direction::Right => position < self.position,
        };
        if position == 0 {
            hits = add(hits, 1)?;
        } else if wrapped && self.position != 0 {
            passes = add(passes, 1)?;
        }

        Ok(Self {
            position,
            tally: Tally { hits, passes },
        })
    }
}

#[inline]
fn add(counter: u64, by: u64) -> Result<u64, DialError> {
    counter.checked_add(by).ok_or(DialError::CounterOverflow)
}

/// Move `position` by `remainder < modulus` clicks, staying in `[0, modulus)`.
/// Written without intermediate sums so that moduli near `u64::MAX` cannot overflow.
#[inline]
fn rotate(position: u64, direction: Direction, remainder: u64, modulus: u64) -> u64 {
    match direction {
        Direction::Left => {
            if remainder <= position {
                position - remainder
            } else {
                modulus - (remainder - position)
            }
        }
        Direction::Right => {
            let room = modulus - position;
            if remainder >= room {
                remainder - room
            } else {
                position + remainder
            }
        }
    }
}

/// Validated dial simulator. Holds only the configuration; every `process`
/// call starts a fresh run from `cfg.start`.
#[derive(Clone, Copy, Debug)]
pub struct Dial {
    cfg: DialCfg,
}

impl Dial {
    /// Refuses `modulus == 0` and `start >= modulus` instead of clamping.
    pub fn new(cfg: DialCfg) -> Result<Self, DialError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    #[inline]
    pub fn cfg(&self) -> DialCfg {
        self.cfg
    }

    #[inline]
    pub fn initial_state(&self) -> DialState {
        DialState::at(self.cfg.start)
    }

    /// Fold the whole sequence. Aborts on the first error.
    pub fn process(&self, commands: &[Command]) -> Result<Tally, DialError> {
        self.run(commands).map(|s| s.tally)
    }

    /// Like `process` but returns the final state (position included).
    pub fn run(&self, commands: &[Command]) -> Result<DialState, DialError> {
        commands
            .iter()
            .try_fold(self.initial_state(), |state, &cmd| {
                state.step(cmd, self.cfg.modulus)
            })
    }

    /// Every intermediate state, starting with the initial one (`commands.len() + 1` entries).
    pub fn trace(&self, commands: &[Command]) -> Result<Vec<DialState>, DialError> {
        let mut states = Vec::with_capacity(commands.len() + 1);
        let mut state = self.initial_state();
        states.push(state);
        for &cmd in commands {
            state = state.step(cmd, self.cfg.modulus)?;
            states.push(state);
        }
        Ok(states)
    }
}

/// `process(commands, modulus, start) -> (hits, hits + passes)`.
pub fn process(commands: &[Command], modulus: u64, start: u64) -> Result<(u64, u64), DialError> {
    let tally = Dial::new(DialCfg { modulus, start })?.process(commands)?;
    Ok((tally.hits, tally.total()?))
}
