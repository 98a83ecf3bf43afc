//! blockgraphify library crate.
//!
//! Converts raster images into a compact textual "block graphic": one
//! character per pixel, chosen as the closest color in the GameView palette,
//! one line per image row. Graphics can be downsampled, grayscaled,
//! inverted, and border-trimmed, and are emitted as Java string-constant
//! declarations for the downstream renderer.
//!
//! Pipeline per file: decode → [`transform`] → [`encode`] → [`trim`]
//! (optional) → escape → named literal. [`batch`] orchestrates a directory,
//! [`output`] writes the collected declarations and the custom palette dump.

pub mod batch;
pub mod cli;
pub mod config;
pub mod encode;
pub mod literal;
pub mod output;
pub mod palette;
pub mod transform;
pub mod trim;

pub use batch::{convert_directory, BatchOptions};
pub use encode::BlockGraphic;
pub use palette::{Color, Palette};
