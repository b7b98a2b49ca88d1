//! Frame assembly: format dispatch and JSON interchange.

use serde::Serialize;

use crate::format::FrameFormat;
use crate::{calibration, standard, Result};
use rayleigh_core::{Dataset, Frame, Hit, Layout};

/// Parses frame text into a flat sequence of hits.
///
/// # Errors
/// Returns the first parse error of the reader selected for `text`.
pub fn parse_hits(text: &str) -> Result<Vec<Hit>> {
    match FrameFormat::detect(text) {
        FrameFormat::Standard => standard::read_hits(text),
        FrameFormat::Calibration => calibration::read_hits(text),
    }
}

/// Parses frame text into frames.
///
/// Standard data has no frame headers, so the whole file becomes a single
/// frame.
///
/// # Errors
/// Returns the first parse error of the reader selected for `text`.
pub fn parse_frames(text: &str) -> Result<Vec<Frame>> {
    match FrameFormat::detect(text) {
        FrameFormat::Standard => Ok(vec![Frame::new(standard::read_hits(text)?)]),
        FrameFormat::Calibration => calibration::read_frames(text),
    }
}

/// Converts the contents of one input file into a dataset of the requested
/// layout.
///
/// # Errors
/// Returns the first parse error of the reader selected for `text`.
pub fn convert(text: &str, layout: Layout) -> Result<Dataset> {
    match layout {
        Layout::Flat => parse_hits(text).map(Dataset::Hits),
        Layout::Framed => parse_frames(text).map(Dataset::Frames),
    }
}

/// Serializes a dataset (or a collection of datasets) as JSON with
/// two-space indentation.
///
/// # Errors
/// Returns [`crate::Error::Json`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Reads interchange JSON back into a dataset.
///
/// The text is read as a flat hit array first and as framed otherwise, so
/// an empty array is always [`Dataset::Hits`]. An empty frame list written
/// as `[]` therefore reads back flat.
///
/// # Errors
/// Returns [`crate::Error::Json`] if the text is not a flat or framed
/// hit array.
pub fn from_json(json: &str) -> Result<Dataset> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD: &str = "77 56  28\n7   57  61\n7   58  74";
    const CALIBRATION: &str =
        "Frame 1 (...)\n[6, 0, 200] [7, 0, 61]\n[44, 0, 119]\n\nFrame 2 (...)\n[54, 0, 108]";

    #[test]
    fn test_standard_framed_is_single_frame() {
        let frames = parse_frames(STANDARD).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 3);
    }

    #[test]
    fn test_convert_respects_layout() {
        let flat = convert(CALIBRATION, Layout::Flat).unwrap();
        assert_eq!(flat.layout(), Layout::Flat);
        assert_eq!(flat.hit_count(), 4);

        let framed = convert(CALIBRATION, Layout::Framed).unwrap();
        assert_eq!(framed.layout(), Layout::Framed);
        assert_eq!(framed.frame_count(), 2);
    }

    #[test]
    fn test_json_uses_two_space_indent() {
        let data = convert("1 2 3", Layout::Flat).unwrap();
        let json = to_json(&data).unwrap();
        assert_eq!(json, "[\n  [\n    1,\n    2,\n    3\n  ]\n]");
    }

    #[test]
    fn test_from_json_roundtrip() {
        for layout in [Layout::Flat, Layout::Framed] {
            let data = convert(CALIBRATION, layout).unwrap();
            let back = from_json(&to_json(&data).unwrap()).unwrap();
            assert_eq!(back, data);
        }
    }

    #[test]
    fn test_from_json_rejects_non_hits() {
        assert!(from_json("{\"x\": 1}").is_err());
        assert!(from_json("[[1, 2]]").is_err());
    }

    #[test]
    fn test_from_json_empty_array_is_flat() {
        let json = to_json(&Dataset::Frames(Vec::new())).unwrap();
        assert_eq!(from_json(&json).unwrap(), Dataset::Hits(Vec::new()));
        assert_eq!(from_json("[[]]").unwrap(), Dataset::Frames(vec![Frame::default()]));
    }
}
