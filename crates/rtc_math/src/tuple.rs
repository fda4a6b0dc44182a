//! Homogeneous four-component tuples representing points and vectors.

use crate::arithmetic::TupleArithmetic;
use anyhow::Result;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, Mul},
};

/// A homogeneous tuple `(x, y, z, w)`.
///
/// The `w` component tells points (`w == 1`) apart from vectors (`w == 0`).
/// The arithmetic is plain component-wise arithmetic on all four components,
/// so the point/vector distinction falls out of it: the difference of two
/// points is a vector, and a point plus a vector is a point. Tuples with
/// other `w` values can be created with [`Tuple::new`], but are neither
/// points nor vectors.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Tuple {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Tuple {
    /// Creates a new tuple with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point (`w == 1`) with the given coordinates.
    #[inline]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a vector (`w == 0`) with the given components.
    #[inline]
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a tuple with all components zero. This is also the zero
    /// vector.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// The components as an array `[x, y, z, w]`.
    #[inline]
    pub fn as_array(&self) -> &[f64; 4] {
        bytemuck::cast_ref(self)
    }

    /// Whether `w` is exactly one.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    /// Whether `w` is exactly zero.
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Computes the Euclidean norm over all four components. For vectors this
    /// is the ordinary 3D length, but a nonzero `w` contributes too.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Divides the tuple by its magnitude. A zero tuple yields NaN
    /// components.
    #[inline]
    pub fn normalized(&self) -> Self {
        self / self.magnitude()
    }

    /// Computes the dot product over all four components with any value
    /// sharing the tuple arithmetic, so a tuple can be dotted with a color.
    #[inline]
    pub fn dot(&self, other: &impl TupleArithmetic) -> f64 {
        self.as_array()
            .iter()
            .zip(other.components())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Computes the cross product of the xyz parts of this tuple and
    /// `other`, returning a vector.
    ///
    /// If `other` is not a vector, the zero tuple is returned instead.
    pub fn cross(&self, other: &Self) -> Self {
        if !other.is_vector() {
            return Self::zeros();
        }
        Self::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Whether every component is within [`EPSILON`](crate::EPSILON) of the
    /// corresponding component of `other`.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        TupleArithmetic::approx_eq(self, other)
    }

    /// Returns a tuple with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }
}

impl TupleArithmetic for Tuple {
    #[inline]
    fn components(&self) -> [f64; 4] {
        *self.as_array()
    }

    #[inline]
    fn try_div(&self, scalar: f64) -> Result<Self> {
        Ok(self / scalar)
    }
}

impl From<[f64; 4]> for Tuple {
    #[inline]
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Tuple> for [f64; 4] {
    #[inline]
    fn from(tuple: Tuple) -> Self {
        *tuple.as_array()
    }
}

impl Index<usize> for Tuple {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[index]
    }
}

impl_binop!(Add, add, Tuple, Tuple, Tuple, |a, b| {
    Tuple::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Tuple, Tuple, Tuple, |a, b| {
    Tuple::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Tuple, f64, Tuple, |a, b| { a.mapped(|c| c * b) });

impl_binop!(Mul, mul, f64, Tuple, Tuple, |a, b| { b.mul(a) });

impl_binop!(Div, div, Tuple, f64, Tuple, |a, b| { a.mul(b.recip()) });

impl_unary_op!(Neg, neg, Tuple, Tuple, |val| { val.mapped(|c| -c) });

impl_abs_diff_eq!(Tuple, |a, b, epsilon| {
    a.as_array()
        .iter()
        .zip(b.as_array())
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Tuple, |a, b, epsilon, max_relative| {
    a.as_array()
        .iter()
        .zip(b.as_array())
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.is_point() {
            "Point"
        } else if self.is_vector() {
            "Vector"
        } else {
            "Tuple"
        };
        f.debug_struct(name)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}
