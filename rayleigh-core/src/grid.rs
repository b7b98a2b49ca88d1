//! Sensor-sized hit grid.

use ndarray::Array2;

use crate::hit::{Hit, SENSOR_HEIGHT, SENSOR_WIDTH};
use crate::{Error, Result};

/// A 256x256 array of intensities indexed by `[x, y]`.
///
/// Each inserted hit sets its pixel to the hit's value; a later hit on the
/// same pixel replaces the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct HitGrid {
    values: Array2<i64>,
}

impl Default for HitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl HitGrid {
    /// Creates an all-zero grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Array2::zeros((usize::from(SENSOR_WIDTH), usize::from(SENSOR_HEIGHT))),
        }
    }

    /// Builds a grid from hits.
    ///
    /// # Errors
    /// Returns [`Error::OutOfSensor`] for the first hit outside the sensor.
    pub fn from_hits<'a, I>(hits: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Hit>,
    {
        let mut grid = Self::new();
        for hit in hits {
            grid.insert(hit)?;
        }
        Ok(grid)
    }

    /// Writes a hit into the grid.
    ///
    /// # Errors
    /// Returns [`Error::OutOfSensor`] if the hit is outside the sensor.
    pub fn insert(&mut self, hit: &Hit) -> Result<()> {
        if !hit.is_on_sensor() {
            return Err(Error::OutOfSensor {
                x: hit.x,
                y: hit.y,
                width: SENSOR_WIDTH,
                height: SENSOR_HEIGHT,
            });
        }
        self.values[[usize::from(hit.x), usize::from(hit.y)]] = hit.c;
        Ok(())
    }

    /// Value at a pixel, or `None` outside the sensor.
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<i64> {
        self.values
            .get((usize::from(x), usize::from(y)))
            .copied()
    }

    /// Number of pixels holding a non-zero value.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.values.iter().filter(|&&v| v != 0).count()
    }

    /// Largest pixel value.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.values.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all pixel values.
    ///
    /// Summed as `i128`, which holds the total of a full sensor of `i64`
    /// values.
    #[must_use]
    pub fn total(&self) -> i128 {
        self.values.iter().map(|&v| i128::from(v)).sum()
    }

    /// Borrows the underlying array.
    #[must_use]
    pub fn as_array(&self) -> &Array2<i64> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserts_at_coordinates() {
        let hits = [Hit::new(1, 2, 3), Hit::new(4, 5, 6), Hit::new(7, 8, 9)];
        let grid = HitGrid::from_hits(&hits).unwrap();

        let values: Vec<i64> = hits.iter().filter_map(|h| grid.get(h.x, h.y)).collect();
        assert_eq!(values, vec![3, 6, 9]);
        assert_eq!(grid.get(2, 1), Some(0));
        assert_eq!(grid.occupied(), 3);
        assert_eq!(grid.max(), 9);
        assert_eq!(grid.total(), 18);
    }

    #[test]
    fn test_later_hit_replaces_pixel() {
        let hits = [Hit::new(10, 10, 5), Hit::new(10, 10, 42)];
        let grid = HitGrid::from_hits(&hits).unwrap();
        assert_eq!(grid.get(10, 10), Some(42));
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn test_total_past_i64_range() {
        let hits = [Hit::new(1, 1, i64::MAX), Hit::new(2, 2, 1)];
        let grid = HitGrid::from_hits(&hits).unwrap();
        assert_eq!(grid.total(), i128::from(i64::MAX) + 1);
        assert_eq!(grid.max(), i64::MAX);

        let hits = [Hit::new(0, 0, i64::MIN), Hit::new(0, 1, i64::MIN)];
        let low = HitGrid::from_hits(&hits).unwrap();
        assert_eq!(low.total(), 2 * i128::from(i64::MIN));
    }

    #[test]
    fn test_rejects_off_sensor_hit() {
        let err = HitGrid::from_hits(&[Hit::new(256, 3, 1)]).unwrap_err();
        assert!(matches!(err, Error::OutOfSensor { x: 256, y: 3, .. }));
    }

    #[test]
    fn test_shape() {
        let grid = HitGrid::new();
        assert_eq!(grid.as_array().dim(), (256, 256));
        assert_eq!(grid.get(256, 0), None);
        assert_eq!(grid.max(), 0);
    }
}
