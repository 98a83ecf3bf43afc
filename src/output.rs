//! Output file naming and writing.
//!
//! Batch results land in `output*.java` with a suffix per active mode flag
//! and a counter to avoid clobbering earlier runs; the custom palette dump
//! goes to `colors.java` alongside it.

use crate::batch::BatchOptions;
use crate::literal::{palette_dump, Literal};
use crate::palette::Palette;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// First non-existing `output*.java` path in `dir`.
///
/// The base name carries one suffix per active mode flag (`output_bw_negative
/// _borderless.java` with all three); a numeric counter is appended until the
/// name is free.
pub fn output_filename(dir: &Path, options: &BatchOptions) -> PathBuf {
    let mut base = String::from("output");
    if options.transform.grayscale {
        base.push_str("_bw");
    }
    if options.transform.invert {
        base.push_str("_negative");
    }
    if options.borderless {
        base.push_str("_borderless");
    }

    let mut counter = 0u32;
    loop {
        let filename = if counter == 0 {
            format!("{base}.java")
        } else {
            format!("{base}{counter}.java")
        };
        let path = dir.join(filename);
        if !path.is_file() {
            return path;
        }
        counter += 1;
    }
}

/// Write the batch's literal declarations, one per line with a blank line
/// between, to a collision-free `output*.java` in `dir`. Returns the path
/// written.
pub fn write_batch(
    dir: &Path,
    literals: &[Literal],
    options: &BatchOptions,
) -> Result<PathBuf, OutputError> {
    ensure_dir(dir)?;
    let path = output_filename(dir, options);

    let mut content = String::new();
    for literal in literals {
        content.push_str(&literal.render());
        content.push_str("\n\n");
    }

    fs::write(&path, content).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {} literals to '{}'", literals.len(), path.display());
    Ok(path)
}

/// Write the custom palette dump to `colors.java` in `dir`. Returns the
/// path written.
pub fn write_palette_dump(dir: &Path, palette: &Palette) -> Result<PathBuf, OutputError> {
    ensure_dir(dir)?;
    let path = dir.join("colors.java");
    fs::write(&path, palette_dump(palette)).map_err(|source| OutputError::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote palette dump to '{}'", path.display());
    Ok(path)
}

fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    if !dir.is_dir() {
        log::info!("output directory '{}' does not exist, creating it", dir.display());
        fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
