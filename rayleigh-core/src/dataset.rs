//! Dataset shapes produced by a conversion.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::hit::Hit;

/// Shape a caller expects from a conversion.
///
/// The input format never changes the shape; it only selects the reader
/// that populates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    /// All hits of a file in one flat sequence.
    #[default]
    Flat,
    /// Hits grouped by frame.
    Framed,
}

/// Converted contents of one input file.
///
/// Serializes as a bare JSON array in either shape: `[[x, y, c], ...]`
/// for [`Dataset::Hits`] and `[[[x, y, c], ...], ...]` for
/// [`Dataset::Frames`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Dataset {
    /// Flat sequence of hits.
    Hits(Vec<Hit>),
    /// Sequence of frames.
    Frames(Vec<Frame>),
}

impl Dataset {
    /// Returns the layout of this dataset.
    #[must_use]
    pub fn layout(&self) -> Layout {
        match self {
            Self::Hits(_) => Layout::Flat,
            Self::Frames(_) => Layout::Framed,
        }
    }

    /// Total number of hits.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        match self {
            Self::Hits(hits) => hits.len(),
            Self::Frames(frames) => frames.iter().map(Frame::len).sum(),
        }
    }

    /// Number of frames; a flat dataset counts as a single frame.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        match self {
            Self::Hits(_) => 1,
            Self::Frames(frames) => frames.len(),
        }
    }

    /// Iterates over every hit in source order.
    pub fn iter_hits(&self) -> Box<dyn Iterator<Item = &Hit> + '_> {
        match self {
            Self::Hits(hits) => Box::new(hits.iter()),
            Self::Frames(frames) => Box::new(frames.iter().flat_map(Frame::iter)),
        }
    }

    /// Consumes the dataset, discarding frame boundaries.
    #[must_use]
    pub fn into_hits(self) -> Vec<Hit> {
        match self {
            Self::Hits(hits) => hits,
            Self::Frames(frames) => frames.into_iter().flat_map(Frame::into_hits).collect(),
        }
    }
}

impl From<Vec<Hit>> for Dataset {
    fn from(hits: Vec<Hit>) -> Self {
        Self::Hits(hits)
    }
}

impl From<Vec<Frame>> for Dataset {
    fn from(frames: Vec<Frame>) -> Self {
        Self::Frames(frames)
    }
}
