//! Batch conversion configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};
use rayleigh_core::Layout;

/// Configuration for directory (batch) conversion.
///
/// Every field has a default, so a JSON file only needs the values it
/// changes:
///
/// ```
/// use rayleigh_io::BatchConfig;
///
/// let config = BatchConfig::from_json(r#"{ "extension": ".dat" }"#).unwrap();
/// assert_eq!(config.extension, ".dat");
/// assert_eq!(config.aggregate_name, "frames.json");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Extension of candidate input files, including the leading dot.
    pub extension: String,
    /// Name of the output directory created inside the input directory.
    pub output_dir: String,
    /// File name of the aggregate of all converted files.
    pub aggregate_name: String,
    /// Shape of every converted dataset.
    pub layout: Layout,
    /// Convert files in parallel.
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            extension: ".txt".to_string(),
            output_dir: "output".to_string(),
            aggregate_name: "frames.json".to_string(),
            layout: Layout::Flat,
            parallel: true,
        }
    }
}

impl BatchConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the text is not valid JSON or fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that file names and the extension are usable.
    ///
    /// # Errors
    /// Returns [`Error::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.extension.len() < 2 || !self.extension.starts_with('.') {
            return Err(Error::Config(format!(
                "extension {:?} must be a dot followed by at least one character",
                self.extension
            )));
        }
        for (field, name) in [
            ("output_dir", &self.output_dir),
            ("aggregate_name", &self.aggregate_name),
        ] {
            if name.is_empty() || name.contains(|c: char| c == '/' || c == '\\') {
                return Err(Error::Config(format!(
                    "{field} {name:?} must be a plain file name"
                )));
            }
        }
        Ok(())
    }

    /// Sets the candidate file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets the output directory name.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Sets the dataset layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets whether files are converted in parallel.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.extension, ".txt");
        assert_eq!(config.output_dir, "output");
        assert_eq!(config.aggregate_name, "frames.json");
        assert_eq!(config.layout, Layout::Flat);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BatchConfig::new()
            .with_extension(".dat")
            .with_output_dir("json")
            .with_layout(Layout::Framed)
            .with_parallel(false);

        assert_eq!(config.extension, ".dat");
        assert_eq!(config.output_dir, "json");
        assert_eq!(config.layout, Layout::Framed);
        assert!(!config.parallel);
    }

    #[test]
    fn test_json_partial_config() {
        let config = BatchConfig::from_json(r#"{ "layout": "framed", "parallel": false }"#)
            .expect("Should parse partial config");

        assert_eq!(config.layout, Layout::Framed);
        assert!(!config.parallel);
        assert_eq!(config.extension, ".txt"); // Default
    }

    #[test]
    fn test_json_empty_config() {
        let config = BatchConfig::from_json("{}").unwrap();
        assert_eq!(config, BatchConfig::default());
    }

    #[test]
    fn test_invalid_extension_rejected() {
        let err = BatchConfig::from_json(r#"{ "extension": "txt" }"#).unwrap_err();
        assert!(err.to_string().contains("extension"), "{err}");
        assert!(BatchConfig::from_json(r#"{ "extension": "." }"#).is_err());
    }

    #[test]
    fn test_nested_output_dir_rejected() {
        let result = BatchConfig::from_json(r#"{ "output_dir": "a/b" }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_unknown_layout_rejected() {
        let result = BatchConfig::from_json(r#"{ "layout": "grouped" }"#);
        assert!(matches!(result, Err(Error::ConfigJson(_))));
    }
}
