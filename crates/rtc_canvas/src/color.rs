//! RGBA colors.

use anyhow::{Result, bail};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use rtc_math::{Tuple, TupleArithmetic};
use std::ops::Mul;

/// A color with red, green, blue and alpha channels.
///
/// Channels are nominally in `[0, 1]`, but intermediate results may fall
/// outside that range. Arithmetic acts on all four channels, so adding two
/// opaque colors gives an alpha of 2. Colors can be added, subtracted,
/// scaled and blended with [`Color::hadamard`], but not divided.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    a: f64,
}

impl Color {
    /// Creates an opaque color with the given red, green and blue channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self::with_alpha(r, g, b, 1.0)
    }

    #[inline]
    pub const fn with_alpha(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub const fn g(&self) -> f64 {
        self.g
    }

    #[inline]
    pub const fn b(&self) -> f64 {
        self.b
    }

    #[inline]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// The channels as an array `[r, g, b, a]`.
    #[inline]
    pub fn as_array(&self) -> &[f64; 4] {
        bytemuck::cast_ref(self)
    }

    /// Multiplies each channel by the corresponding channel of `other`.
    #[inline]
    pub fn hadamard(&self, other: &Self) -> Self {
        Self::with_alpha(
            self.r * other.r,
            self.g * other.g,
            self.b * other.b,
            self.a * other.a,
        )
    }

    /// Whether every channel is within [`EPSILON`](rtc_math::EPSILON) of the
    /// corresponding channel of `other`.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        TupleArithmetic::approx_eq(self, other)
    }

    #[inline]
    fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::with_alpha(f(self.r), f(self.g), f(self.b), f(self.a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl TupleArithmetic for Color {
    #[inline]
    fn components(&self) -> [f64; 4] {
        *self.as_array()
    }

    fn try_div(&self, _scalar: f64) -> Result<Self> {
        bail!("Dividing a color by a scalar is not supported")
    }
}

impl From<Color> for Tuple {
    #[inline]
    fn from(color: Color) -> Self {
        Tuple::from(*color.as_array())
    }
}

rtc_math::impl_binop!(Add, add, Color, Color, Color, |a, b| {
    Color::with_alpha(a.r + b.r, a.g + b.g, a.b + b.b, a.a + b.a)
});

rtc_math::impl_binop!(Sub, sub, Color, Color, Color, |a, b| {
    Color::with_alpha(a.r - b.r, a.g - b.g, a.b - b.b, a.a - b.a)
});

rtc_math::impl_binop!(Mul, mul, Color, f64, Color, |a, b| {
    a.mapped(|c| c * b)
});

rtc_math::impl_binop!(Mul, mul, f64, Color, Color, |a, b| { b.mul(a) });

rtc_math::impl_binop!(Mul, mul, Color, Color, Color, |a, b| { a.hadamard(b) });

rtc_math::impl_abs_diff_eq!(Color, |a, b, epsilon| {
    a.as_array()
        .iter()
        .zip(b.as_array())
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

rtc_math::impl_relative_eq!(Color, |a, b, epsilon, max_relative| {
    a.as_array()
        .iter()
        .zip(b.as_array())
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

#[cfg(feature = "serde")]
fn opaque() -> f64 {
    1.0
}
