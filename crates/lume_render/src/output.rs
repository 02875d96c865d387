//! Frame buffer and image output.
//!
//! The renderer accumulates linear radiance into a [`Film`]; writing it
//! out applies gamma 2.0 and the 8-bit channel mapping, either as ASCII
//! PPM ("P3") or through the image crate for formats like PNG.

use std::io::Write;
use std::path::Path;

use lume_math::Color;
use thiserror::Error;

/// Errors that can occur while writing rendered images.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for image output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear colour to 8-bit RGB.
///
/// Channels are gamma corrected, clamped to [0, 0.999], and scaled by
/// 256, so a full channel maps to 255 and values out of range saturate.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (256.0 * linear_to_gamma(color.x).clamp(0.0, 0.999)) as u8;
    let g = (256.0 * linear_to_gamma(color.y).clamp(0.0, 0.999)) as u8;
    let b = (256.0 * linear_to_gamma(color.z).clamp(0.0, 0.999)) as u8;
    [r, g, b]
}

/// Row-major buffer of linear radiance, row 0 at the top of the image.
pub struct Film {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Film {
    /// Create a film filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Write the film as an ASCII PPM ("P3") stream, one pixel per line.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> OutputResult<()> {
        writeln!(out, "P3\n{} {}\n255", self.width, self.height)?;
        for color in &self.pixels {
            let [r, g, b] = color_to_rgb8(*color);
            writeln!(out, "{} {} {}", r, g, b)?;
        }
        Ok(())
    }

    /// Save through the image crate; the format follows the extension.
    pub fn save(&self, path: &Path) -> OutputResult<()> {
        let img = image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb8(self.get(x, y)))
        });
        img.save(path)?;
        Ok(())
    }
}
