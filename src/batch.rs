//! Directory batch conversion: one literal per supported image file.
//!
//! Files are processed independently; a file that fails to decode or convert
//! is logged and skipped without aborting the batch. The palette is built
//! once by the caller and shared read-only across all files.

use crate::encode::BlockGraphic;
use crate::literal::{escape, Literal, NameAllocator};
use crate::palette::Palette;
use crate::transform::{transform, TransformError, TransformOptions};
use crate::trim::{background_code, trim, TrimError};
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions accepted by the batch converter, matched
/// case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Options for one batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub transform: TransformOptions,
    /// Trim the background border after encoding.
    pub borderless: bool,
}

/// Directory-level failures. Per-file failures are logged and skipped.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failures converting a single file.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Trim(#[from] TrimError),
}

/// Whether a path has one of the supported image extensions.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Convert one image file to escaped block-graphic text.
///
/// Pipeline: decode as RGB, transform (downsample / grayscale / invert),
/// encode through the palette, optionally trim the background border,
/// escape for embedding in a Java literal.
pub fn convert_file(
    path: &Path,
    palette: &Palette,
    options: &BatchOptions,
) -> Result<String, ConvertError> {
    let image = image::open(path)?.to_rgb8();
    let image = transform(&image, &options.transform)?;
    let graphic = BlockGraphic::encode(&image, palette);
    let text = graphic.render();
    let text = if options.borderless {
        trim(&text, background_code(options.transform.invert))?
    } else {
        text
    };
    Ok(escape(&text))
}

/// Convert every supported image in `dir` to a named literal.
///
/// A missing directory is created and yields an empty batch. Files are
/// processed in lexicographic filename order so output is deterministic.
pub fn convert_directory(
    dir: &Path,
    palette: &Palette,
    options: &BatchOptions,
) -> Result<Vec<Literal>, BatchError> {
    if !dir.is_dir() {
        log::info!("input directory '{}' does not exist, creating it", dir.display());
        fs::create_dir_all(dir).map_err(|source| BatchError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let entries = fs::read_dir(dir).map_err(|source| BatchError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported(path))
        .collect();
    files.sort();

    let mut names = NameAllocator::new();
    let mut literals = Vec::with_capacity(files.len());
    for path in &files {
        match convert_file(path, palette, options) {
            Ok(content) => {
                let stem = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or_default();
                let name = names.allocate(stem);
                log::info!("converted '{}' as {}", path.display(), name);
                literals.push(Literal { name, content });
            }
            Err(err) => {
                log::warn!("skipping '{}': {}", path.display(), err);
            }
        }
    }

    Ok(literals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported_extensions() {
        assert!(is_supported(Path::new("a.png")));
        assert!(is_supported(Path::new("a.jpg")));
        assert!(is_supported(Path::new("a.jpeg")));
        assert!(is_supported(Path::new("a.bmp")));
        assert!(is_supported(Path::new("a.gif")));
        assert!(is_supported(Path::new("a.PNG")));
        assert!(!is_supported(Path::new("a.tiff")));
        assert!(!is_supported(Path::new("png")));
        assert!(!is_supported(Path::new("a")));
    }
}
