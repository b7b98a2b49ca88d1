//! JSON writers for converted datasets.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::Result;

/// Writer for interchange JSON output.
///
/// Output is always written to an explicit file; there is no console mode.
pub struct DatasetWriter {
    writer: BufWriter<File>,
}

impl DatasetWriter {
    /// Creates (or truncates) the output file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        Ok(Self { writer })
    }

    /// Writes a dataset, or a collection of datasets, as pretty JSON.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn write<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<usize> {
        let json = rayleigh_parse::to_json(value)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(json.len() + 1)
    }
}

/// Writes a value to `path` as pretty JSON.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let bytes = DatasetWriter::create(path)?.write(value)?;
    debug!("wrote {} bytes to {}", bytes, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayleigh_core::{Dataset, Frame, Hit};
    use tempfile::NamedTempFile;

    #[test]
    fn test_written_file_parses_back() {
        let file = NamedTempFile::new().unwrap();
        let data = Dataset::Frames(vec![
            Frame::new(vec![Hit::new(6, 0, 200), Hit::new(7, 0, 61)]),
            Frame::new(vec![Hit::new(54, 0, 108)]),
        ]);

        write_json(file.path(), &data).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(rayleigh_parse::from_json(&content).unwrap(), data);
        assert!(content.starts_with("[\n  [\n    [\n      6,"));
    }

    #[test]
    fn test_write_reports_bytes() {
        let file = NamedTempFile::new().unwrap();
        let mut writer = DatasetWriter::create(file.path()).unwrap();
        let bytes = writer.write(&[Hit::new(1, 2, 3)]).unwrap();

        let data = std::fs::read(file.path()).unwrap();
        assert_eq!(data.len(), bytes);
    }
}
