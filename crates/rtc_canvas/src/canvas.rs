//! Pixel canvas.

use crate::color::Color;
use anyhow::{Context, Result, bail};

/// A two-dimensional grid of colored pixels stored row by row.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a canvas of the given size with every pixel black.
    ///
    /// # Errors
    /// Returns an error if the pixel count overflows or the pixel buffer
    /// cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let Some(pixel_count) = width.checked_mul(height) else {
            bail!("Canvas size {width}x{height} has too many pixels");
        };

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(pixel_count)
            .with_context(|| format!("Could not allocate {width}x{height} canvas"))?;
        pixels.resize(pixel_count, Color::black());

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixels in row-major order, starting at the top left.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Whether `(x, y)` addresses a pixel on this canvas.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the color of the pixel at `(x, y)`, or [`None`] if the
    /// coordinates are outside the canvas.
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<Color> {
        self.contains(x, y)
            .then(|| self.pixels[self.linear_index(x, y)])
    }

    /// Sets the color of the pixel at `(x, y)`.
    ///
    /// # Errors
    /// Returns an error if the coordinates are outside the canvas.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        if !self.contains(x, y) {
            bail!(
                "Pixel ({x}, {y}) is outside the {}x{} canvas",
                self.width,
                self.height
            );
        }
        let idx = self.linear_index(x, y);
        self.pixels[idx] = color;
        Ok(())
    }

    fn linear_index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }
}
