//! Directory (batch) conversion.
//!
//! A batch converts every candidate file directly inside one directory:
//!
//! 1. Discover regular files whose name ends with the configured extension
//! 2. Derive each file's frame number from the digits before the extension
//!    and sort ascending by it
//! 3. Convert every file (in parallel when configured)
//! 4. Write `<output_dir>/<stem>.json` per file and the aggregate of all
//!    datasets, in frame-number order
//!
//! Nothing is written unless every file converts.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rayon::prelude::*;

use crate::config::BatchConfig;
use crate::reader::read_dataset;
use crate::writer::write_json;
use crate::{Error, Result};
use rayleigh_core::Dataset;

/// One planned file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// Input file.
    pub source: PathBuf,
    /// Ordering key taken from the file name.
    pub frame_number: u64,
    /// Per-file JSON output.
    pub output: PathBuf,
}

/// Result of a completed batch.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Converted files in frame-number order.
    pub entries: Vec<BatchEntry>,
    /// Aggregate output file.
    pub aggregate: PathBuf,
    /// Total hits over all files.
    pub hit_count: usize,
}

/// Extracts the frame number of a batch input.
///
/// The frame number is the run of ASCII digits immediately preceding
/// `extension`: `run_d10.txt` has frame number 10.
///
/// # Errors
/// Returns [`Error::FrameNumber`] if the name does not end with the
/// extension or has no digits right before it, [`Error::FrameNumberRange`]
/// if the digits overflow a `u64` and [`Error::NonUtf8Name`] if the name is
/// not UTF-8.
pub fn frame_number(path: &Path, extension: &str) -> Result<u64> {
    let missing = || Error::FrameNumber {
        path: path.to_path_buf(),
        extension: extension.to_string(),
    };

    let name = path
        .file_name()
        .ok_or_else(missing)?
        .to_str()
        .ok_or_else(|| Error::NonUtf8Name(path.to_path_buf()))?;
    let stem = name.strip_suffix(extension).ok_or_else(missing)?;
    let digits = &stem[stem.trim_end_matches(|c: char| c.is_ascii_digit()).len()..];
    if digits.is_empty() {
        return Err(missing());
    }
    digits.parse().map_err(|_| Error::FrameNumberRange {
        path: path.to_path_buf(),
        digits: digits.to_string(),
    })
}

/// Lists regular files directly inside `dir` whose name ends with
/// `extension`, sorted by name.
///
/// Names are compared as raw bytes, so files with non-UTF-8 names are
/// still listed.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn discover_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let extension = extension.as_bytes();
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path.file_name().is_some_and(|name| {
            let name = name.as_encoded_bytes();
            name.len() > extension.len() && name.ends_with(extension)
        });
        if matches && path.is_file() {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

fn output_path(source: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let stem = name.strip_suffix(extension).unwrap_or(name);
    output_dir.join(format!("{stem}.json"))
}

fn resolve_output_dir(dir: &Path, output_dir: Option<&Path>, config: &BatchConfig) -> PathBuf {
    output_dir.map_or_else(|| dir.join(&config.output_dir), Path::to_path_buf)
}

/// Plans a batch without converting anything.
///
/// `output_dir` overrides `<dir>/<config.output_dir>`.
///
/// # Errors
/// Returns an error if the directory cannot be read or any candidate has
/// no frame number.
pub fn plan_batch(
    dir: &Path,
    output_dir: Option<&Path>,
    config: &BatchConfig,
) -> Result<Vec<BatchEntry>> {
    let output_dir = resolve_output_dir(dir, output_dir, config);

    let mut entries = discover_inputs(dir, &config.extension)?
        .into_iter()
        .map(|source| {
            let frame_number = frame_number(&source, &config.extension)?;
            let output = output_path(&source, &output_dir, &config.extension);
            Ok(BatchEntry {
                source,
                frame_number,
                output,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable: equal frame numbers keep name order
    entries.sort_by_key(|entry| entry.frame_number);
    Ok(entries)
}

/// Converts every candidate file in `dir` and writes the per-file and
/// aggregate outputs.
///
/// # Errors
/// Returns the first planning, conversion or write error. Conversion errors
/// abort the batch before any output is written.
pub fn run_batch(
    dir: &Path,
    output_dir: Option<&Path>,
    config: &BatchConfig,
) -> Result<BatchSummary> {
    let entries = plan_batch(dir, output_dir, config)?;
    info!(
        "converting {} file(s) from {}",
        entries.len(),
        dir.display()
    );

    let datasets: Vec<Dataset> = if config.parallel {
        entries
            .par_iter()
            .map(|entry| read_dataset(&entry.source, config.layout))
            .collect::<Result<_>>()?
    } else {
        entries
            .iter()
            .map(|entry| read_dataset(&entry.source, config.layout))
            .collect::<Result<_>>()?
    };

    let output_dir = resolve_output_dir(dir, output_dir, config);
    fs::create_dir_all(&output_dir)?;

    for (entry, dataset) in entries.iter().zip(&datasets) {
        debug!(
            "frame {}: {} -> {}",
            entry.frame_number,
            entry.source.display(),
            entry.output.display()
        );
        write_json(&entry.output, dataset)?;
    }

    let aggregate = output_dir.join(&config.aggregate_name);
    write_json(&aggregate, &datasets)?;

    let hit_count = datasets.iter().map(Dataset::hit_count).sum();
    info!(
        "wrote {} file(s) and {} ({} hits)",
        entries.len(),
        aggregate.display(),
        hit_count
    );

    Ok(BatchSummary {
        entries,
        aggregate,
        hit_count,
    })
}
