//! Pixel buffer and image output.
//!
//! The canvas keeps linear `Colour` values and converts them to 8-bit RGB
//! only when producing an `image::RgbImage`, a plain-text PPM or a file.

use std::io::Write;
use std::path::Path;

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, ImageEncoder, Rgb, RgbImage};

use crate::colour::Colour;

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("pixel ({x}, {y}) lies outside a {width}x{height} canvas")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    pub fn write_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), CanvasError> {
        let index = self.index(x, y)?;
        self.pixels[index] = colour;
        Ok(())
    }

    pub fn pixel_at(&self, x: u32, y: u32) -> Result<Colour, CanvasError> {
        Ok(self.pixels[self.index(x, y)?])
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, CanvasError> {
        if !self.contains(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            Rgb(self.pixels[y as usize * self.width as usize + x as usize].to_rgb8())
        })
    }

    /// Writes the canvas as a plain-text (P3) PPM with maxval 255.
    pub fn write_ppm<W: Write>(&self, writer: W) -> Result<(), CanvasError> {
        let img = self.to_image();
        PnmEncoder::new(writer)
            .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Ascii))
            .write_image(img.as_raw(), self.width, self.height, ColorType::Rgb8)?;
        Ok(())
    }

    /// Saves to `path`, the format is picked from the extension (`.ppm`, `.png`).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        tracing::info!(path = %path.display(), width = self.width, height = self.height, "canvas saved");
        Ok(())
    }
}
