//! Battery banks: largest two-digit joltage per line, summed over all lines.
//!
//! A bank is a line of digits. Turning on the batteries at positions `i < j`
//! yields the joltage `10 * d[i] + d[j]`; each bank contributes its maximum.
//!
//! Banks are independent, so `total_joltage` splits them into contiguous
//! chunks on scoped worker threads and sums the partial results.

use std::panic;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoltageError {
    #[error("line {line}: bank needs at least two batteries, got {len}")]
    TooShort { line: usize, len: usize },
    #[error("line {line}, column {column}: expected a digit, got {found:?}")]
    NonDigit {
        line: usize,
        column: usize,
        found: char,
    },
}

/// Fan-out configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoltageCfg {
    /// Worker threads; `0` is treated as `1`.
    pub workers: usize,
}

impl Default for JoltageCfg {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}

fn bank_joltage(line: usize, bank: &str) -> Result<u32, JoltageError> {
    if let Some((i, found)) = bank.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(JoltageError::NonDigit {
            line,
            column: bank[..i].chars().count() + 1,
            found,
        });
    }
    let digits = bank.as_bytes();
    let n = digits.len();
    if n < 2 {
        return Err(JoltageError::TooShort { line, len: n });
    }
    // Single pass. The last battery can only ever be the trailing digit; a new
    // leading digit resets the trailing one since it must come afterwards.
    let mut lead = 0u8;
    let mut trail = 0u8;
    for (idx, &b) in digits.iter().enumerate() {
        let d = b - b'0';
        if idx == 0 || (d > lead && idx < n - 1) {
            lead = d;
            trail = 0;
        } else if d > trail {
            trail = d;
        }
    }
    Ok(u32::from(lead) * 10 + u32::from(trail))
}

/// Largest joltage of a single bank.
pub fn max_joltage(bank: &str) -> Result<u32, JoltageError> {
    bank_joltage(1, bank)
}

fn chunk_total(offset: usize, banks: &[&str]) -> Result<u64, JoltageError> {
    banks.iter().enumerate().try_fold(0u64, |acc, (i, bank)| {
        Ok(acc + u64::from(bank_joltage(offset + i + 1, bank)?))
    })
}

/// Sum of `max_joltage` over all banks. On failure, reports the earliest bad line.
pub fn total_joltage(banks: &[&str], cfg: JoltageCfg) -> Result<u64, JoltageError> {
    let workers = cfg.workers.max(1);
    if workers == 1 || banks.len() < 2 {
        return chunk_total(0, banks);
    }
    let chunk = banks.len().div_ceil(workers);

    std::thread::scope(|scope| -> Result<u64, JoltageError> {
        let handles: Vec<_> = banks
            .chunks(chunk)
            .enumerate()
            .map(|(k, part)| scope.spawn(move || chunk_total(k * chunk, part)))
            .collect();

        // Joined in chunk order, so the first error seen is the earliest line.
        let mut total = 0u64;
        for handle in handles {
            let part = handle.join().unwrap_or_else(|p| panic::resume_unwind(p))?;
            total += part;
        }
        Ok(total)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const EXAMPLE: [&str; 4] = [
        "987654321111111",
        "811111111111119",
        "234234234234278",
        "818181911112111",
    ];

    fn brute(bank: &str) -> u32 {
        let d: Vec<u32> = bank.bytes().map(|b| u32::from(b - b'0')).collect();
        let mut best = 0;
        for i in 0..d.len() {
            for j in i + 1..d.len() {
                best = best.max(10 * d[i] + d[j]);
            }
        }
        best
    }

    #[test]
    fn puzzle_example() {
        let each: Vec<u32> = EXAMPLE.iter().map(|b| max_joltage(b).unwrap()).collect();
        assert_eq!(each, vec![98, 89, 78, 92]);
        assert_eq!(total_joltage(&EXAMPLE, JoltageCfg { workers: 3 }).unwrap(), 357);
    }

    #[test]
    fn last_battery_only_trails() {
        assert_eq!(max_joltage("19").unwrap(), 19);
        assert_eq!(max_joltage("91").unwrap(), 91);
        assert_eq!(max_joltage("00").unwrap(), 0);
        assert_eq!(max_joltage("109").unwrap(), 19);
    }

    #[test]
    fn single_pass_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let len = rng.gen_range(2..30);
            let bank: String = (0..len)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect();
            assert_eq!(max_joltage(&bank).unwrap(), brute(&bank), "{bank}");
        }
    }

    #[test]
    fn worker_count_does_not_change_total() {
        let mut rng = StdRng::seed_from_u64(11);
        let banks: Vec<String> = (0..97)
            .map(|_| {
                (0..rng.gen_range(2..40))
                    .map(|_| char::from(b'1' + rng.gen_range(0..9u8)))
                    .collect()
            })
            .collect();
        let refs: Vec<&str> = banks.iter().map(String::as_str).collect();
        let expected: u64 = refs.iter().map(|b| u64::from(brute(b))).sum();
        for workers in [0, 1, 2, 5, 16, 200] {
            assert_eq!(total_joltage(&refs, JoltageCfg { workers }).unwrap(), expected);
        }
        assert_eq!(total_joltage(&[], JoltageCfg::default()).unwrap(), 0);
    }

    #[test]
    fn errors_report_earliest_line() {
        let banks = ["12", "34", "5", "56", "7x"];
        for workers in [1, 2, 5] {
            assert_eq!(
                total_joltage(&banks, JoltageCfg { workers }),
                Err(JoltageError::TooShort { line: 3, len: 1 })
            );
        }
        assert_eq!(
            max_joltage("12a4"),
            Err(JoltageError::NonDigit {
                line: 1,
                column: 3,
                found: 'a'
            })
        );
        assert!(matches!(max_joltage(""), Err(JoltageError::TooShort { len: 0, .. })));
    }
}
