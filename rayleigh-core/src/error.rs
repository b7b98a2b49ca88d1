//! Error types for rayleigh-core.

use thiserror::Error;

/// Result type alias for rayleigh-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Coordinate that does not fit an unsigned 16-bit pixel index.
    #[error("invalid pixel coordinate: ({x}, {y})")]
    InvalidCoordinate { x: i64, y: i64 },

    /// Hit lies outside the sensor grid.
    #[error("hit ({x}, {y}) lies outside the {width}x{height} sensor")]
    OutOfSensor {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },
}
