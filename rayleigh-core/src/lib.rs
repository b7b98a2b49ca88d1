//! rayleigh-core: Core types for TimePix frame conversion.
//!
//! This crate provides the value types shared by the parser and the
//! I/O layer: single detector hits, frames of hits, the two dataset
//! shapes produced by a conversion, and a sensor-sized hit grid.
//!

pub mod dataset;
pub mod error;
pub mod frame;
pub mod grid;
pub mod hit;

pub use dataset::{Dataset, Layout};
pub use error::{Error, Result};
pub use frame::Frame;
pub use grid::HitGrid;
pub use hit::{Hit, SENSOR_HEIGHT, SENSOR_WIDTH};
