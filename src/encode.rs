//! Block graphic grid and per-pixel encoding.
//!
//! A block graphic is a rectangular grid of palette codes, one per pixel.
//! The grid is an explicit value; serialization to newline-joined text is a
//! separate step ([`BlockGraphic::render`]), keeping the data model decoupled
//! from the wire format.

use crate::palette::{Color, Palette};
use image::RgbImage;
use std::fmt;

/// Rectangular grid of palette character codes.
///
/// Invariant: all rows have identical length (the image width after any
/// downsampling); the grid has at least one row for a non-empty image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGraphic {
    rows: Vec<String>,
}

impl BlockGraphic {
    /// Encode every pixel of `image` through the palette's nearest-color
    /// search, top-to-bottom, left-to-right.
    pub fn encode(image: &RgbImage, palette: &Palette) -> Self {
        let mut rows = Vec::with_capacity(image.height() as usize);
        for y in 0..image.height() {
            let mut row = String::with_capacity(image.width() as usize);
            for x in 0..image.width() {
                let pixel = image.get_pixel(x, y);
                row.push(palette.closest(Color::new(pixel[0], pixel[1], pixel[2])));
            }
            rows.push(row);
        }
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Serialize the grid as newline-joined rows.
    pub fn render(&self) -> String {
        self.rows.join("\n")
    }
}

impl fmt::Display for BlockGraphic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_encode_dimensions() {
        let img = RgbImage::from_pixel(5, 3, Rgb([0, 0, 0]));
        let graphic = BlockGraphic::encode(&img, &Palette::gameview());
        assert_eq!(graphic.width(), 5);
        assert_eq!(graphic.height(), 3);
        assert!(graphic.rows().iter().all(|row| row.len() == 5));
    }

    #[test]
    fn test_encode_checkerboard() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([255, 255, 255]));
        img.put_pixel(0, 1, Rgb([255, 255, 255]));
        img.put_pixel(1, 1, Rgb([0, 0, 0]));

        let graphic = BlockGraphic::encode(&img, &Palette::gameview());
        assert_eq!(graphic.render(), "LW\nWL");
    }

    #[test]
    fn test_display_matches_render() {
        let img = RgbImage::from_pixel(2, 1, Rgb([255, 0, 0]));
        let graphic = BlockGraphic::encode(&img, &Palette::gameview());
        assert_eq!(graphic.to_string(), graphic.render());
    }
}
