//! Image transforms applied before encoding.
//!
//! Three independent steps: nearest-neighbor downsampling by an integer
//! factor, grayscale conversion, and color inversion. Grayscale uses the
//! ITU-R BT.601 luminance formula with integer math. Inversion is applied
//! to the already-grayscaled result when both flags are set.

use image::{imageops, Rgb, RgbImage};

/// Transform flags plus the downsample factor.
#[derive(Debug, Clone, Copy)]
pub struct TransformOptions {
    /// Convert to grayscale (luminance broadcast to all three channels).
    pub grayscale: bool,
    /// Replace each channel value v with 255 - v.
    pub invert: bool,
    /// Downsample factor; 1 keeps every pixel.
    pub block_size: u32,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            grayscale: false,
            invert: false,
            block_size: 1,
        }
    }
}

/// Errors reported before any pixel work begins.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("block size must be at least 1")]
    ZeroBlockSize,

    #[error("block size {block_size} exceeds image dimensions {width}x{height}")]
    BlockSizeTooLarge {
        block_size: u32,
        width: u32,
        height: u32,
    },
}

/// ITU-R BT.601 luminance: Y = 0.299*R + 0.587*G + 0.114*B.
///
/// Integer math with coefficients scaled by 1000.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Apply downsampling, grayscale, and inversion per `options`.
///
/// Downsampling resizes to `(width / f, height / f)` with nearest-neighbor
/// sampling (no blending). A factor that floors either dimension to zero is
/// a configuration error.
pub fn transform(
    image: &RgbImage,
    options: &TransformOptions,
) -> Result<RgbImage, TransformError> {
    if options.block_size == 0 {
        return Err(TransformError::ZeroBlockSize);
    }

    let (width, height) = image.dimensions();
    let out_width = width / options.block_size;
    let out_height = height / options.block_size;
    if out_width == 0 || out_height == 0 {
        return Err(TransformError::BlockSizeTooLarge {
            block_size: options.block_size,
            width,
            height,
        });
    }

    let mut image = if options.block_size > 1 {
        imageops::resize(image, out_width, out_height, imageops::FilterType::Nearest)
    } else {
        image.clone()
    };

    if options.grayscale {
        for pixel in image.pixels_mut() {
            let gray = luminance(pixel[0], pixel[1], pixel[2]);
            *pixel = Rgb([gray, gray, gray]);
        }
    }

    // Inversion runs after grayscale so both flags compose as
    // 255 - luminance, not luminance of the inverted channels.
    if options.invert {
        for pixel in image.pixels_mut() {
            *pixel = Rgb([255 - pixel[0], 255 - pixel[1], 255 - pixel[2]]);
        }
    }

    Ok(image)
}
