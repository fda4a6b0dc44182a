//! Colors and a pixel canvas that can be written as a PPM image.

pub mod canvas;
pub mod color;
pub mod ppm;

pub use canvas::Canvas;
pub use color::Color;
