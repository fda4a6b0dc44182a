//! Serialization of canvases to the plain-text PPM (`P3`) image format.

use crate::canvas::Canvas;
use anyhow::{Context, Result};
use std::{fmt, io::Write};

/// The largest channel value in the serialized image.
pub const MAX_CHANNEL_VALUE: u8 = 255;

/// Formats a canvas as a PPM image when displayed.
#[derive(Clone, Copy, Debug)]
pub struct Ppm<'a>(&'a Canvas);

impl Canvas {
    /// Returns a [`Display`](fmt::Display) adapter producing the PPM
    /// serialization of the canvas.
    pub fn ppm(&self) -> Ppm<'_> {
        Ppm(self)
    }

    /// Serializes the canvas as a PPM image with one `R G B` line per pixel,
    /// in row-major order.
    pub fn to_ppm(&self) -> String {
        self.ppm().to_string()
    }

    /// Writes the PPM serialization of the canvas to the given writer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_ppm(&self, writer: &mut impl Write) -> Result<()> {
        log::debug!(
            "Writing {}x{} canvas as PPM",
            self.width(),
            self.height()
        );

        write!(writer, "{}", self.ppm()).context("Failed to write PPM image")?;

        writer.flush().context("Failed to flush PPM output")
    }
}

impl fmt::Display for Ppm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canvas = self.0;
        writeln!(f, "P3")?;
        writeln!(f, "{} {}", canvas.width(), canvas.height())?;
        writeln!(f, "{MAX_CHANNEL_VALUE}")?;

        for pixel in canvas.pixels() {
            writeln!(
                f,
                "{} {} {}",
                scale_channel(pixel.r()),
                scale_channel(pixel.g()),
                scale_channel(pixel.b())
            )?;
        }
        Ok(())
    }
}

/// Converts a color channel to the `0..=255` range, clamping values outside
/// `[0, 1]` and rounding half away from zero.
pub fn scale_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * f64::from(MAX_CHANNEL_VALUE)).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use std::io;

    #[test]
    fn ppm_starts_with_header() {
        let ppm = Canvas::new(5, 3).unwrap().to_ppm();
        assert!(ppm.starts_with("P3\n5 3\n255\n"));
    }

    #[test]
    fn ppm_pixel_data_is_clamped_and_scaled() {
        let mut canvas = Canvas::new(5, 3).unwrap();
        canvas
            .write_pixel(0, 0, Color::new(1.5, 0.0, 0.0))
            .unwrap();
        canvas
            .write_pixel(2, 1, Color::new(0.0, 0.5, 0.0))
            .unwrap();
        canvas
            .write_pixel(4, 2, Color::new(-0.5, 0.0, 1.0))
            .unwrap();

        let ppm = canvas.to_ppm();
        let pixel_data = ppm.strip_prefix("P3\n5 3\n255\n").unwrap();
        let lines: Vec<_> = pixel_data.lines().collect();

        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "255 0 0");
        assert_eq!(lines[7], "0 128 0");
        assert_eq!(lines[14], "0 0 255");
        assert!(
            lines
                .iter()
                .enumerate()
                .filter(|(idx, _)| ![0, 7, 14].contains(idx))
                .all(|(_, line)| *line == "0 0 0")
        );
    }

    #[test]
    fn ppm_ends_with_newline() {
        assert!(Canvas::new(2, 2).unwrap().to_ppm().ends_with('\n'));
    }

    #[test]
    fn ppm_of_empty_canvas_is_only_header() {
        assert_eq!(Canvas::new(0, 0).unwrap().to_ppm(), "P3\n0 0\n255\n");
    }

    #[test]
    fn written_ppm_matches_string_serialization() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas
            .write_pixel(1, 0, Color::new(0.2, 0.4, 0.6))
            .unwrap();

        let mut buffer = Vec::new();
        canvas.write_ppm(&mut buffer).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), canvas.to_ppm());
    }

    #[test]
    fn failing_writer_gives_error() {
        struct FailingWriter;

        impl io::Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let canvas = Canvas::new(2, 2).unwrap();
        assert!(canvas.write_ppm(&mut FailingWriter).is_err());
    }

    #[test]
    fn displaying_ppm_adapter_matches_string_serialization() {
        let canvas = Canvas::new(2, 1).unwrap();
        assert_eq!(format!("{}", canvas.ppm()), "P3\n2 1\n255\n0 0 0\n0 0 0\n");
    }

    #[test]
    fn scaling_channel_clamps_and_rounds() {
        assert_eq!(scale_channel(-1.0), 0);
        assert_eq!(scale_channel(0.0), 0);
        assert_eq!(scale_channel(0.5), 128);
        assert_eq!(scale_channel(1.0), 255);
        assert_eq!(scale_channel(7.0), 255);
    }

    #[test]
    fn alpha_is_not_written() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas
            .write_pixel(0, 0, Color::with_alpha(1.0, 1.0, 1.0, 0.0))
            .unwrap();
        assert_eq!(canvas.to_ppm(), "P3\n1 1\n255\n255 255 255\n");
    }
}
