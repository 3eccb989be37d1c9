//! Duplicated-half identifiers inside integer ranges.
//!
//! An ID is duplicated-half when its decimal form is a block of digits written
//! twice: `55`, `6464`, `123123`. Such IDs with `2k` digits are exactly
//! `h * (10^k + 1)` for `h` in `[10^(k-1), 10^k)`, so a range is searched by
//! bounding `h` per digit length instead of scanning every ID.
//!
//! Input: comma-separated `first-last` pairs (inclusive, decimal), e.g.
//! `11-22,95-115`. Whitespace and newlines around pairs are ignored.

use thiserror::Error;

/// Half-lengths to consider: `u64` has at most 20 decimal digits.
const MAX_HALF_DIGITS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdsError {
    #[error("range #{index}: expected 'first-last', got {text:?}")]
    MalformedRange { index: usize, text: String },
    #[error("range {first}-{last} is inverted")]
    InvertedRange { first: u64, last: u64 },
}

/// Inclusive ID range `[first, last]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdRange {
    pub first: u64,
    pub last: u64,
}

impl IdRange {
    pub fn new(first: u64, last: u64) -> Result<Self, IdsError> {
        if first > last {
            return Err(IdsError::InvertedRange { first, last });
        }
        Ok(Self { first, last })
    }

    /// Bounds `(multiplier, lo, hi)` on the half `h` for IDs with `2k` digits, if any fall in range.
    fn half_bounds(&self, k: u32) -> Option<(u128, u128, u128)> {
        let base = 10u128.pow(k);
        let mult = base + 1;
        let lo = (base / 10).max(u128::from(self.first).div_ceil(mult));
        let hi = (base - 1).min(u128::from(self.last) / mult);
        (lo <= hi).then_some((mult, lo, hi))
    }

    /// Duplicated-half IDs in ascending order.
    pub fn duplicated_halves(&self) -> impl Iterator<Item = u64> + '_ {
        (1..=MAX_HALF_DIGITS)
            .filter_map(move |k| self.half_bounds(k))
            .flat_map(|(mult, lo, hi)| (lo..=hi).map(move |h| (h * mult) as u64))
    }

    /// Sum of `duplicated_halves`, in closed form (arithmetic series per digit length).
    pub fn duplicated_half_sum(&self) -> u128 {
        (1..=MAX_HALF_DIGITS)
            .filter_map(|k| self.half_bounds(k))
            .map(|(mult, lo, hi)| mult * (lo + hi) * (hi - lo + 1) / 2)
            .sum()
    }
}

/// True if the decimal form of `id` is some digit block repeated twice.
pub fn is_duplicated_half(id: u64) -> bool {
    let s = id.to_string();
    let n = s.len();
    n % 2 == 0 && s[..n / 2] == s[n / 2..]
}

fn parse_id(index: usize, text: &str, raw: &str) -> Result<u64, IdsError> {
    let malformed = || IdsError::MalformedRange {
        index,
        text: raw.to_string(),
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    text.parse().map_err(|_| malformed())
}

/// Parse `first-last[,first-last...]`. Indices in errors are 1-based.
pub fn parse_ranges(text: &str) -> Result<Vec<IdRange>, IdsError> {
    text.trim()
        .split(',')
        .enumerate()
        .map(|(i, raw)| {
            let index = i + 1;
            let piece = raw.trim();
            let (a, b) = piece
                .split_once('-')
                .ok_or_else(|| IdsError::MalformedRange {
                    index,
                    text: piece.to_string(),
                })?;
            IdRange::new(parse_id(index, a, piece)?, parse_id(index, b, piece)?)
        })
        .collect()
}

/// Part-one answer: sum of all duplicated-half IDs over all ranges.
pub fn sum_duplicated_halves(ranges: &[IdRange]) -> u128 {
    ranges.iter().map(IdRange::duplicated_half_sum).sum()
}
