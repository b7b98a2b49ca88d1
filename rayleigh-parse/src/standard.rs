//! Reader for standard (whitespace separated) frame files.

use crate::{Error, Result};
use rayleigh_core::Hit;

const FIELDS_PER_HIT: usize = 3;

/// Reads every non-blank line as one `x y c` hit.
///
/// Fields may be separated by any mix of spaces and tabs. Blank lines are
/// skipped; any other line without exactly three integer fields aborts the
/// whole read.
///
/// # Errors
/// Returns [`Error::FieldCount`], [`Error::InvalidInteger`] or
/// [`Error::InvalidHit`] for the first offending line.
pub fn read_hits(text: &str) -> Result<Vec<Hit>> {
    let mut hits = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != FIELDS_PER_HIT {
            return Err(Error::FieldCount {
                line: line_no,
                found: fields.len(),
            });
        }

        let x = parse_field(line_no, fields[0])?;
        let y = parse_field(line_no, fields[1])?;
        let c = parse_field(line_no, fields[2])?;
        let hit =
            Hit::try_new(x, y, c).map_err(|source| Error::InvalidHit { line: line_no, source })?;
        hits.push(hit);
    }

    Ok(hits)
}

fn parse_field(line: usize, token: &str) -> Result<i64> {
    token.parse().map_err(|_| Error::InvalidInteger {
        line,
        token: token.to_string(),
    })
}
