//! blockgraphify CLI - convert image directories to block-graphic literals.

use blockgraphify::batch::convert_directory;
use blockgraphify::cli::Args;
use blockgraphify::config::Config;
use blockgraphify::output::{write_batch, write_palette_dump};
use blockgraphify::palette::Palette;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;

    let input_dir = args
        .input_dir
        .clone()
        .or_else(|| config.input_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let output_dir = args
        .output
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    // Built once, read-only for the rest of the run.
    let palette = Palette::gameview_with(&config.palette_entries());
    let options = args.batch_options();

    let literals = convert_directory(&input_dir, &palette, &options)?;
    if literals.is_empty() {
        println!(
            "No supported images found in '{}'; nothing written.",
            input_dir.display()
        );
        return Ok(());
    }

    let colors_path = write_palette_dump(&output_dir, &palette)?;
    let output_path = write_batch(&output_dir, &literals, &options)?;

    println!(
        "Converted {} image(s); wrote '{}' and '{}'.",
        literals.len(),
        output_path.display(),
        colors_path.display()
    );
    Ok(())
}
