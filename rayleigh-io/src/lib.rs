//! rayleigh-io: File conversion for TimePix frame files.
//!
//! This crate wires the parsers in `rayleigh-parse` to the file system:
//! reading frame files, writing interchange JSON to explicit paths, and
//! converting whole directories in frame-number order.
//!

pub mod batch;
mod config;
mod error;
mod reader;
mod writer;

use std::path::{Path, PathBuf};

use log::info;

pub use batch::{run_batch, BatchEntry, BatchSummary};
pub use config::BatchConfig;
pub use error::{Error, Result};
pub use reader::{read_dataset, FrameFileReader};
pub use writer::{write_json, DatasetWriter};

/// Kind of path given as conversion input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A single frame file.
    File,
    /// A directory of frame files.
    Directory,
}

impl InputKind {
    /// Classifies an input path.
    ///
    /// # Errors
    /// Returns [`Error::UnrecognizedInput`] if the path is neither a
    /// directory nor a regular file (including when it does not exist).
    pub fn of(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Ok(Self::Directory)
        } else if path.is_file() {
            Ok(Self::File)
        } else {
            Err(Error::UnrecognizedInput(path.to_path_buf()))
        }
    }
}

/// Outcome of [`convert_input`].
#[derive(Debug, Clone)]
pub enum Conversion {
    /// A single file was converted.
    File {
        /// Written JSON file.
        output: PathBuf,
        /// Hits in the dataset.
        hit_count: usize,
        /// Frames in the dataset.
        frame_count: usize,
    },
    /// A directory was converted.
    Batch(BatchSummary),
}

/// Converts a file or a directory.
///
/// A file is converted to `output`, which is required. A directory is
/// converted with [`run_batch`], with `output` replacing the configured
/// output directory when given.
///
/// # Errors
/// Returns [`Error::UnrecognizedInput`], [`Error::MissingOutput`] or any
/// conversion error.
pub fn convert_input(
    input: &Path,
    output: Option<&Path>,
    config: &BatchConfig,
) -> Result<Conversion> {
    match InputKind::of(input)? {
        InputKind::Directory => run_batch(input, output, config).map(Conversion::Batch),
        InputKind::File => {
            let output = output.ok_or_else(|| Error::MissingOutput(input.to_path_buf()))?;
            let dataset = read_dataset(input, config.layout)?;
            write_json(output, &dataset)?;
            info!(
                "converted {} to {} ({} hits)",
                input.display(),
                output.display(),
                dataset.hit_count()
            );
            Ok(Conversion::File {
                output: output.to_path_buf(),
                hit_count: dataset.hit_count(),
                frame_count: dataset.frame_count(),
            })
        }
    }
}
