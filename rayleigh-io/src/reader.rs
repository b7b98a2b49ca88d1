//! Frame file readers.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::{Error, Result};
use rayleigh_core::{Dataset, Frame, Hit, Layout};
use rayleigh_parse::FrameFormat;

/// A frame text file held in memory.
///
/// The file is read once on [`open`](Self::open); parsing happens on each
/// `read_*` call and never touches the file again.
#[derive(Debug, Clone)]
pub struct FrameFileReader {
    text: String,
    path: PathBuf,
}

impl FrameFileReader {
    /// Opens and reads a frame file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = fs::read_to_string(&path)?;
        debug!("read {} bytes from {}", text.len(), path.display());
        Ok(Self { text, path })
    }

    /// Path the file was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Detected format of the file.
    #[must_use]
    pub fn format(&self) -> FrameFormat {
        FrameFormat::detect(&self.text)
    }

    /// Parses the file into a flat sequence of hits.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] with the file path on malformed content.
    pub fn read_hits(&self) -> Result<Vec<Hit>> {
        rayleigh_parse::parse_hits(&self.text).map_err(|source| self.parse_error(source))
    }

    /// Parses the file into frames.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] with the file path on malformed content.
    pub fn read_frames(&self) -> Result<Vec<Frame>> {
        rayleigh_parse::parse_frames(&self.text).map_err(|source| self.parse_error(source))
    }

    /// Parses the file into a dataset of the given layout.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] with the file path on malformed content.
    pub fn read(&self, layout: Layout) -> Result<Dataset> {
        rayleigh_parse::convert(&self.text, layout).map_err(|source| self.parse_error(source))
    }

    fn parse_error(&self, source: rayleigh_parse::Error) -> Error {
        Error::Parse {
            path: self.path.clone(),
            source,
        }
    }
}

/// Reads and converts one frame file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_dataset<P: AsRef<Path>>(path: P, layout: Layout) -> Result<Dataset> {
    let reader = FrameFileReader::open(path)?;
    let dataset = reader.read(layout)?;
    debug!(
        "{}: {} data, {} hit(s)",
        reader.path().display(),
        reader.format(),
        dataset.hit_count()
    );
    Ok(dataset)
}
