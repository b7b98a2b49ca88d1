//! Frames: ordered groups of hits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hit::Hit;

/// An ordered sequence of hits from one acquisition frame.
///
/// Hits keep the order in which they appeared in the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Frame {
    hits: Vec<Hit>,
}

impl Frame {
    /// Creates a frame from hits in source order.
    #[must_use]
    pub fn new(hits: Vec<Hit>) -> Self {
        Self { hits }
    }

    /// Returns the hits of this frame.
    #[must_use]
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Number of hits in the frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Returns true if the frame holds no hits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Iterates over the hits in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Hit> {
        self.hits.iter()
    }

    /// Consumes the frame, returning its hits.
    #[must_use]
    pub fn into_hits(self) -> Vec<Hit> {
        self.hits
    }
}

impl From<Vec<Hit>> for Frame {
    fn from(hits: Vec<Hit>) -> Self {
        Self::new(hits)
    }
}

impl FromIterator<Hit> for Frame {
    fn from_iter<I: IntoIterator<Item = Hit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Frame {
    type Item = Hit;
    type IntoIter = std::vec::IntoIter<Hit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a Hit;
    type IntoIter = std::slice::Iter<'a, Hit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}
