//! Command-line interface definitions and helpers.

use crate::batch::BatchOptions;
use crate::transform::TransformOptions;
use clap::Parser;
use std::path::PathBuf;

/// Convert a directory of images into GameView block-graphic string literals
#[derive(Parser, Debug)]
#[command(name = "blockgraphify")]
#[command(version, about = "Convert images to block-graphic Java string literals", long_about = None)]
pub struct Args {
    /// Directory containing the images to convert (overrides config)
    pub input_dir: Option<PathBuf>,

    /// Directory the generated .java files are written to (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Downsample factor: 1 keeps every pixel, N keeps every Nth
    #[arg(short, long, default_value = "4", value_parser = parse_block_size)]
    pub block_size: u32,

    /// Convert to grayscale before matching
    #[arg(long)]
    pub grayscale: bool,

    /// Invert colors (for graphics drawn on a white canvas)
    #[arg(long)]
    pub invert: bool,

    /// Strip the background border and indentation
    #[arg(long)]
    pub borderless: bool,

    /// Path to the config file (default: blockgraphify.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Batch options derived from the flags.
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            transform: TransformOptions {
                grayscale: self.grayscale,
                invert: self.invert,
                block_size: self.block_size,
            },
            borderless: self.borderless,
        }
    }
}

/// Parse and validate block size (1-20)
pub fn parse_block_size(s: &str) -> Result<u32, String> {
    let size: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(1..=20).contains(&size) {
        return Err(format!("Block size must be between 1 and 20, got {}", size));
    }
    Ok(size)
}
