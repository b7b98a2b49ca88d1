//! rayleigh-parse: Readers for TimePix frame text files.
//!
//! Two raw formats are recognised:
//!
//! - **standard**: one `x y c` hit per line, separated by spaces or tabs
//! - **calibration**: `Frame` header lines, each followed by lines of
//!   bracketed `[x, y, c]` tuples
//!
//! [`FrameFormat::detect`] classifies the text first; the matching reader
//! then fills the shape the caller asked for ([`parse_hits`],
//! [`parse_frames`] or [`convert`] with a [`Layout`]). Readers never log
//! and abort on the first malformed line or tuple.
//!
//! ```
//! use rayleigh_parse::{convert, to_json, Layout};
//!
//! let data = convert("77 56 28\n7 57 61", Layout::Flat).unwrap();
//! assert_eq!(data.hit_count(), 2);
//! assert!(to_json(&data).unwrap().starts_with("[\n  ["));
//! ```

mod assemble;
pub mod calibration;
mod error;
mod format;
pub mod standard;

pub use assemble::{convert, from_json, parse_frames, parse_hits, to_json};
pub use error::{Error, Result};
pub use format::FrameFormat;

// Re-export core types for convenience
pub use rayleigh_core::{Dataset, Frame, Hit, Layout};
