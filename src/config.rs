//! Configuration file handling for blockgraphify.
//!
//! Loads configuration from `blockgraphify.toml` in the working directory or
//! a custom path. The file carries default input/output directories and
//! optional custom palette entries:
//!
//! ```toml
//! input_dir = "sprites"
//! output_dir = "generated"
//!
//! [[palette.custom]]
//! code = "A"
//! rgb = [40, 40, 40]
//! ```

use crate::palette::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input_dir: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct PaletteConfig {
    /// Extra custom palette entries, merged after the built-in custom set.
    #[serde(default)]
    pub custom: Vec<CustomColor>,
}

/// One configured palette entry.
#[derive(Debug, Deserialize)]
pub struct CustomColor {
    pub code: char,
    pub rgb: [u8; 3],
}

impl CustomColor {
    pub fn entry(&self) -> (Color, char) {
        (Color::new(self.rgb[0], self.rgb[1], self.rgb[2]), self.code)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(config)
    }

    /// Palette entries contributed by the config, in file order.
    pub fn palette_entries(&self) -> Vec<(Color, char)> {
        self.palette.custom.iter().map(CustomColor::entry).collect()
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    PathBuf::from("blockgraphify.toml")
}
