//! Input format detection.

use std::fmt;

/// Marker that only calibration files contain.
pub(crate) const FRAME_MARKER: &str = "Frame";

/// Raw text formats written by the acquisition software.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameFormat {
    /// Whitespace separated `x y c` rows, one hit per line.
    Standard,
    /// `Frame` header lines followed by bracketed `[x, y, c]` tuples.
    Calibration,
}

impl FrameFormat {
    /// Classifies raw file content.
    ///
    /// Content is calibration data iff it contains the literal `Frame`
    /// anywhere; everything else is standard data.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains(FRAME_MARKER) {
            Self::Calibration
        } else {
            Self::Standard
        }
    }

    /// Returns true for calibration data.
    #[must_use]
    pub fn is_calibration(self) -> bool {
        self == Self::Calibration
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Calibration => f.write_str("calibration"),
        }
    }
}
