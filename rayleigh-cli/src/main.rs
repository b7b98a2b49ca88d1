//! Rayleigh CLI
//!
//! Converts TimePix frame files (standard or calibration text) to JSON.
#![allow(clippy::uninlined_format_args)]

use clap::{Parser, Subcommand};

use rayleigh_core::{HitGrid, Layout};
use rayleigh_io::{convert_input, BatchConfig, Conversion, FrameFileReader};
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    RayleighIo(#[from] rayleigh_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] rayleigh_core::Error),
}

/// Perform operations on frame data from TimePix chips.
#[derive(Parser)]
#[command(name = "rayleigh")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a frame file, or a directory of frame files, to JSON
    Convert {
        /// File or directory to be converted
        input: PathBuf,

        /// Output file (single file) or output directory (directory input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep frame boundaries instead of a flat list of hits
        #[arg(long)]
        framed: bool,

        /// Extension of files to convert in a directory (e.g. ".txt")
        #[arg(long)]
        extension: Option<String>,

        /// Batch configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Convert directory files one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Show information about a frame file
    Info {
        /// Input frame file
        input: PathBuf,

        /// Count frames instead of treating the file as one frame
        #[arg(long)]
        framed: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            framed,
            extension,
            config,
            sequential,
        } => {
            let mut batch_config = match config {
                Some(path) => BatchConfig::from_file(path)?,
                None => BatchConfig::default(),
            };
            if framed {
                batch_config = batch_config.with_layout(Layout::Framed);
            }
            if let Some(extension) = extension {
                batch_config = batch_config.with_extension(extension);
                batch_config.validate()?;
            }
            if sequential {
                batch_config = batch_config.with_parallel(false);
            }
            log::debug!("configuration: {:?}", batch_config);

            let start = Instant::now();
            let conversion = convert_input(&input, output.as_deref(), &batch_config)?;
            let elapsed = start.elapsed();

            match conversion {
                Conversion::File {
                    output,
                    hit_count,
                    frame_count,
                } => {
                    println!(
                        "Converted {} in {:.2}s",
                        input.display(),
                        elapsed.as_secs_f64()
                    );
                    println!("Output: {}", output.display());
                    println!("Hits: {}", hit_count);
                    if batch_config.layout == Layout::Framed {
                        println!("Frames: {}", frame_count);
                    }
                }
                Conversion::Batch(summary) => {
                    println!(
                        "Converted {} files in {:.2}s",
                        summary.entries.len(),
                        elapsed.as_secs_f64()
                    );
                    println!("Aggregate: {}", summary.aggregate.display());
                    println!("Total hits: {}", summary.hit_count);
                }
            }
        }

        Commands::Info { input, framed } => {
            let reader = FrameFileReader::open(&input)?;
            let layout = if framed { Layout::Framed } else { Layout::Flat };
            let dataset = reader.read(layout)?;

            println!("File: {}", input.display());
            println!("Format: {}", reader.format());
            println!("Hits: {}", dataset.hit_count());
            if framed {
                println!("Frames: {}", dataset.frame_count());
            }

            let hits: Vec<_> = dataset.iter_hits().copied().collect();
            if let (Some(min_x), Some(max_x)) = (
                hits.iter().map(|h| h.x).min(),
                hits.iter().map(|h| h.x).max(),
            ) {
                let min_y = hits.iter().map(|h| h.y).min().unwrap_or_default();
                let max_y = hits.iter().map(|h| h.y).max().unwrap_or_default();
                println!("X range: {} - {}", min_x, max_x);
                println!("Y range: {} - {}", min_y, max_y);

                let grid = HitGrid::from_hits(&hits)?;
                println!("Occupied pixels: {}", grid.occupied());
                println!("Max intensity: {}", grid.max());
                println!("Total intensity: {}", grid.total());
            }
        }
    }

    Ok(())
}
