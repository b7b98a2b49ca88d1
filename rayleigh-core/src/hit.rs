//! Hit type for pixel detector frame data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Sensor width in pixels.
pub const SENSOR_WIDTH: u16 = 256;

/// Sensor height in pixels.
pub const SENSOR_HEIGHT: u16 = 256;

/// A single detector event.
///
/// Serializes as the three-element array `[x, y, c]` used by the
/// interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "(u16, u16, i64)", into = "(u16, u16, i64)")
)]
pub struct Hit {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
    /// Intensity / count value.
    pub c: i64,
}

impl Hit {
    /// Creates a new hit.
    #[inline]
    #[must_use]
    pub fn new(x: u16, y: u16, c: i64) -> Self {
        Self { x, y, c }
    }

    /// Creates a hit from raw parsed integers.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCoordinate`] if either coordinate is negative
    /// or does not fit in a `u16`.
    pub fn try_new(x: i64, y: i64, c: i64) -> Result<Self> {
        let invalid = || Error::InvalidCoordinate { x, y };
        let px = u16::try_from(x).map_err(|_| invalid())?;
        let py = u16::try_from(y).map_err(|_| invalid())?;
        Ok(Self::new(px, py, c))
    }

    /// Returns true if the hit falls inside the 256x256 sensor.
    #[inline]
    #[must_use]
    pub fn is_on_sensor(&self) -> bool {
        self.x < SENSOR_WIDTH && self.y < SENSOR_HEIGHT
    }
}

impl From<(u16, u16, i64)> for Hit {
    #[inline]
    fn from((x, y, c): (u16, u16, i64)) -> Self {
        Self::new(x, y, c)
    }
}

impl From<Hit> for (u16, u16, i64) {
    #[inline]
    fn from(hit: Hit) -> Self {
        (hit.x, hit.y, hit.c)
    }
}
