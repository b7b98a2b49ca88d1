//! Reader for calibration frame files.
//!
//! Calibration output is a sequence of frames. Each frame starts with a
//! header line beginning with `Frame` and is followed by lines holding zero
//! or more bracketed hit tuples:
//!
//! ```text
//! Frame 1 (1336049775.586539 s, 0.03 s)
//! [6, 0, 200] [7, 0, 61]
//! [44, 0, 119]
//!
//! Frame 2 (1336049775.7117825 s, 0.03 s)
//! [54, 0, 108]
//! ```
//!
//! Splitting on header lines leaves a leading segment for any text before
//! the first header. At most one empty segment is discarded: the leading
//! one if it is blank, otherwise a blank trailing one. Every other segment
//! becomes a frame, including empty ones.
//!
//! Any bracket opening on a number or a minus sign starts a hit tuple and
//! must hold a valid integer tuple. Other bracketed text, such as `[X,Y,C]`,
//! is ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::format::FRAME_MARKER;
use crate::{Error, Result};
use rayleigh_core::{Frame, Hit};

/// Bracket opening on a number, up to the closing bracket or end of line.
static HIT_TUPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\s*-?[0-9][^\]]*(?:\]|$)").expect("hit tuple pattern is valid")
});

/// Lines between two frame headers, tagged with 1-based line numbers.
#[derive(Debug, Default)]
struct Segment<'a> {
    lines: Vec<(usize, &'a str)>,
}

impl Segment<'_> {
    fn is_blank(&self) -> bool {
        self.lines.iter().all(|(_, line)| line.trim().is_empty())
    }
}

fn is_frame_header(line: &str) -> bool {
    line.trim_start().starts_with(FRAME_MARKER)
}

fn split_segments(text: &str) -> Vec<Segment<'_>> {
    // Text before the first header
    let mut segments = vec![Segment::default()];

    for (index, line) in text.lines().enumerate() {
        if is_frame_header(line) {
            segments.push(Segment::default());
        } else if let Some(current) = segments.last_mut() {
            current.lines.push((index + 1, line));
        }
    }

    if segments.first().is_some_and(Segment::is_blank) {
        segments.remove(0);
    } else if segments.len() > 1 && segments.last().is_some_and(Segment::is_blank) {
        segments.pop();
    }

    segments
}

fn parse_tuple(line: usize, tuple: &str) -> Result<Hit> {
    if !tuple.ends_with(']') {
        return Err(Error::UnclosedTuple {
            line,
            tuple: tuple.trim_end().to_string(),
        });
    }

    let values: Vec<i64> = serde_json::from_str(tuple).map_err(|source| Error::MalformedTuple {
        line,
        tuple: tuple.to_string(),
        source,
    })?;

    // Elements past the third carry no meaning downstream
    match values.as_slice() {
        [x, y, c, ..] => {
            Hit::try_new(*x, *y, *c).map_err(|source| Error::InvalidHit { line, source })
        }
        _ => Err(Error::TupleArity {
            line,
            tuple: tuple.to_string(),
            arity: values.len(),
        }),
    }
}

fn read_segment(segment: &Segment<'_>) -> Result<Frame> {
    let mut hits = Vec::new();
    for &(line, text) in &segment.lines {
        for tuple in HIT_TUPLE.find_iter(text) {
            hits.push(parse_tuple(line, tuple.as_str())?);
        }
    }
    Ok(Frame::new(hits))
}

/// Reads calibration text into frames, keeping frame boundaries.
///
/// # Errors
/// Returns [`Error::MalformedTuple`], [`Error::UnclosedTuple`],
/// [`Error::TupleArity`] or [`Error::InvalidHit`] for the first tuple that
/// cannot become a hit.
pub fn read_frames(text: &str) -> Result<Vec<Frame>> {
    split_segments(text).iter().map(read_segment).collect()
}

/// Reads calibration text into one flat sequence of hits.
///
/// # Errors
/// Same as [`read_frames`].
pub fn read_hits(text: &str) -> Result<Vec<Hit>> {
    Ok(read_frames(text)?
        .into_iter()
        .flat_map(Frame::into_hits)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_FRAMES: &str = "Frame 1 (...)\n[6, 0, 200] [7, 0, 61]\n[44, 0, 119]\n\nFrame 2 (...)\n[54, 0, 108]";

    fn triples(frame: &Frame) -> Vec<(u16, u16, i64)> {
        frame.iter().map(|&h| h.into()).collect()
    }

    #[test]
    fn test_frames_keep_boundaries() {
        let frames = read_frames(TWO_FRAMES).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(triples(&frames[0]), vec![(6, 0, 200), (7, 0, 61), (44, 0, 119)]);
        assert_eq!(triples(&frames[1]), vec![(54, 0, 108)]);
    }

    #[test]
    fn test_flat_hits() {
        let hits = read_hits(TWO_FRAMES).unwrap();
        assert_eq!(
            hits,
            vec![
                Hit::new(6, 0, 200),
                Hit::new(7, 0, 61),
                Hit::new(44, 0, 119),
                Hit::new(54, 0, 108),
            ]
        );
    }

    #[test]
    fn test_many_tuples_per_line() {
        let text = "Frame 1\n[208, 0, 82] [209, 0, 117] [209, 1, 127] [208, 1, 2]\n";
        let hits = read_hits(text).unwrap();
        assert_eq!(hits.len(), 4);
        assert_eq!(hits[3], Hit::new(208, 1, 2));
    }

    #[test]
    fn test_empty_middle_frame_is_kept() {
        let text = "Frame 1\n[1, 1, 1]\nFrame 2\n\n\nFrame 3\n[3, 3, 3]\n";
        let frames = read_frames(text).unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames[1].is_empty());
    }

    #[test]
    fn test_only_one_artifact_removed() {
        // Blank leading segment goes; the empty last frame stays
        let text = "Frame 1\n[1, 1, 1]\nFrame 2\n";
        let frames = read_frames(text).unwrap();
        assert_eq!(frames.len(), 2);
        assert!(frames[1].is_empty());

        // Text before the first header is kept, so the blank tail goes instead
        let text = "acquisition log\nFrame 1\n[1, 1, 1]\nFrame 2\n";
        let frames = read_frames(text).unwrap();
        assert_eq!(frames.len(), 2);
        assert!(frames[0].is_empty());
        assert_eq!(frames[1].len(), 1);
    }

    #[test]
    fn test_indented_headers() {
        let text = "\n        Frame 1: Frame 1 (1336049775.586539 s, 0.03 s) \n        [6, 0, 200]\n";
        let frames = read_frames(text).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(triples(&frames[0]), vec![(6, 0, 200)]);
    }

    #[test]
    fn test_non_numeric_brackets_ignored() {
        let text = "Frame 1\nType=i16 [X,Y,C] [5, 6, 7]\n";
        let hits = read_hits(text).unwrap();
        assert_eq!(hits, vec![Hit::new(5, 6, 7)]);
    }

    #[test]
    fn test_leading_zero_is_malformed() {
        let err = read_hits("Frame 1\n[1, 2, 3]\n[007, 2, 3]\n").unwrap_err();
        assert!(matches!(err, Error::MalformedTuple { line: 3, .. }));
    }

    #[test]
    fn test_decimal_value_is_malformed() {
        let err = read_hits("Frame 1\n[6, 0, 2.5]\n[7, 0, 61]\n").unwrap_err();
        assert!(matches!(err, Error::MalformedTuple { line: 2, .. }));
    }

    #[test]
    fn test_exponent_value_is_malformed() {
        let err = read_hits("Frame 1\n[6, 0, 1e3]\n").unwrap_err();
        assert!(matches!(err, Error::MalformedTuple { line: 2, .. }));
    }

    #[test]
    fn test_unclosed_tuple_is_fatal() {
        let err = read_hits("Frame 1\n[6, 0, 200\n[7, 0, 61]\n").unwrap_err();
        match err {
            Error::UnclosedTuple { line, tuple } => {
                assert_eq!(line, 2);
                assert_eq!(tuple, "[6, 0, 200");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unclosed_tuple_before_another() {
        let err = read_hits("Frame 1\n[6, 0, 200 [7, 0, 61]\n").unwrap_err();
        assert!(matches!(err, Error::MalformedTuple { line: 2, .. }));
    }

    #[test]
    fn test_short_tuple_is_fatal() {
        let err = read_hits("Frame 1\n[4, 5]\n").unwrap_err();
        assert!(matches!(err, Error::TupleArity { line: 2, arity: 2, .. }));
    }

    #[test]
    fn test_long_tuple_uses_first_three() {
        let hits = read_hits("Frame 1\n[4, 5, 6, 99]\n").unwrap();
        assert_eq!(hits, vec![Hit::new(4, 5, 6)]);
    }

    #[test]
    fn test_negative_coordinate_is_fatal() {
        let err = read_hits("Frame 1\n[-4, 5, 6]\n").unwrap_err();
        assert!(matches!(err, Error::InvalidHit { line: 2, .. }));
    }

    #[test]
    fn test_header_without_hits() {
        assert_eq!(read_frames("Frame 1\n").unwrap(), vec![Frame::default()]);
        assert!(read_frames("   \n").unwrap().is_empty());
    }
}
