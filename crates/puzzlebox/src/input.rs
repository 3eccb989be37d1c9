//! Line-oriented input normalization and the dial command adapter.
//!
//! - `normalize`: CRLF → LF, drop trailing blank lines.
//! - `parse_command` / `parse_commands`: `<L|R><decimal>` lines into `Command`s.
//!
//! Line numbers in errors are 1-based and refer to the normalized text, which
//! match the input file because normalization never removes interior lines.

use crate::dial::{Command, DialError, Direction};

/// Split `text` into lines, tolerating CRLF endings and trailing blank lines.
/// Interior blank lines are preserved so that parsers can reject them.
pub fn normalize(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    lines
}

/// Parse a single command line. `line_no` is only used for error reporting.
pub fn parse_command(line_no: usize, line: &str) -> Result<Command, DialError> {
    let malformed = || DialError::MalformedCommand {
        line: line_no,
        text: line.to_string(),
    };
    let mut chars = line.chars();
    let token = chars.next().ok_or_else(malformed)?;
    let direction = Direction::from_token(token).ok_or(DialError::UnrecognizedDirection {
        line: line_no,
        token,
    })?;
    let digits = chars.as_str();
    // `u64::from_str` accepts a leading '+'; magnitudes are plain digit runs.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let magnitude = digits.parse::<u64>().map_err(|_| malformed())?;
    Ok(Command::new(direction, magnitude))
}

/// Parse a whole input. The first bad line aborts with its error.
pub fn parse_commands(text: &str) -> Result<Vec<Command>, DialError> {
    normalize(text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| parse_command(i + 1, line))
        .collect()
}
