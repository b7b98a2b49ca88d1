//! I/O error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

/// I/O error types.
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file could not be converted.
    #[error("failed to convert {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: rayleigh_parse::Error,
    },

    /// Serialization or format error not tied to an input file.
    #[error("format error: {0}")]
    Format(#[from] rayleigh_parse::Error),

    /// Batch input without a frame number before its extension.
    #[error("no frame number before {extension:?} in {}", path.display())]
    FrameNumber { path: PathBuf, extension: String },

    /// Batch input whose frame number does not fit in a `u64`.
    #[error("frame number {digits} in {} is too large", path.display())]
    FrameNumberRange { path: PathBuf, digits: String },

    /// Batch input whose file name is not valid UTF-8.
    #[error("file name is not valid UTF-8: {}", .0.display())]
    NonUtf8Name(PathBuf),

    /// Input path is neither a regular file nor a directory.
    #[error("not a file or directory: {}", .0.display())]
    UnrecognizedInput(PathBuf),

    /// Single-file conversion without a destination.
    #[error("an output path is required to convert {}", .0.display())]
    MissingOutput(PathBuf),

    /// Invalid batch configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file is not valid JSON.
    #[error("configuration error: {0}")]
    ConfigJson(#[from] serde_json::Error),
}
