//! Curated internal API (UNSTABLE).
//!
//! One entry point per puzzle, taking raw input text. Prefer these from the
//! CLI and benches; the modules stay available for finer-grained use.

pub use crate::dial::{process, Command, Dial, DialCfg, DialError, DialState, Direction, Tally};
pub use crate::ids::{parse_ranges, sum_duplicated_halves, IdRange, IdsError};
pub use crate::input::{normalize, parse_commands};
pub use crate::joltage::{max_joltage, total_joltage, JoltageCfg, JoltageError};

/// Part 1 and part 2 of the dial puzzle: `(hits, hits + passes)`.
pub fn solve_dial(text: &str, cfg: DialCfg) -> Result<(u64, u64), DialError> {
    let dial = Dial::new(cfg)?;
    let tally = dial.process(&parse_commands(text)?)?;
    Ok((tally.hits, tally.total()?))
}

/// Sum of all duplicated-half IDs in the listed ranges.
pub fn solve_ids(text: &str) -> Result<u128, IdsError> {
    Ok(sum_duplicated_halves(&parse_ranges(text)?))
}

/// Sum of the largest joltage of every bank (one bank per line).
pub fn solve_joltage(text: &str, cfg: JoltageCfg) -> Result<u64, JoltageError> {
    total_joltage(&normalize(text), cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_entry_point() {
        let text = "L68\r\nL30\r\nR48\r\nL5\r\nR60\r\nL55\r\nL1\r\nL99\r\nR14\r\nL82\r\n";
        assert_eq!(solve_dial(text, DialCfg::default()).unwrap(), (3, 6));
        assert!(matches!(
            solve_dial(text, DialCfg { modulus: 0, start: 0 }),
            Err(DialError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            solve_dial("L1\nT2\n", DialCfg::default()),
            Err(DialError::UnrecognizedDirection { line: 2, .. })
        ));
    }

    #[test]
    fn part_two_overflow_is_an_error() {
        let text = "R18446744073709551615\n".repeat(100);
        assert_eq!(
            solve_dial(&text, DialCfg::default()),
            Err(DialError::CounterOverflow)
        );
    }

    #[test]
    fn configuration_is_checked_before_parsing() {
        assert!(matches!(
            solve_dial("garbage", DialCfg { modulus: 10, start: 10 }),
            Err(DialError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn ids_and_joltage_entry_points() {
        assert_eq!(solve_ids("11-22,95-115\n").unwrap(), 11 + 22 + 99);
        assert_eq!(
            solve_joltage("987654321111111\n811111111111119\n\n", JoltageCfg { workers: 2 })
                .unwrap(),
            98 + 89
        );
    }
}
