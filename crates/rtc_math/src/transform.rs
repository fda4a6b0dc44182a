//! Builders for 4x4 affine transform matrices.
//!
//! Transforms compose by matrix multiplication, with the rightmost matrix
//! applied first: to apply `a`, then `b`, then `c` to a tuple `t`, compute
//! `c * b * a * t`. The fluent methods on [`Matrix`] read in application
//! order instead, so `a.scaled(..)` is `scaling(..) * a`.

use crate::{angle::Angle, matrix::Matrix};

/// Creates a matrix translating points by `(x, y, z)`. Vectors are left
/// unchanged since their `w` is zero.
pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_rows([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a matrix scaling each axis by the corresponding factor. Negative
/// factors reflect across the axis.
pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    Matrix::from_rows([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a matrix rotating by the given angle about the x-axis.
pub fn rotation_x(angle: impl Angle) -> Matrix {
    let (sin, cos) = angle.radians().sin_cos();
    Matrix::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a matrix rotating by the given angle about the y-axis.
pub fn rotation_y(angle: impl Angle) -> Matrix {
    let (sin, cos) = angle.radians().sin_cos();
    Matrix::from_rows([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a matrix rotating by the given angle about the z-axis.
pub fn rotation_z(angle: impl Angle) -> Matrix {
    let (sin, cos) = angle.radians().sin_cos();
    Matrix::from_rows([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Creates a shearing matrix. Each coefficient moves one coordinate in
/// proportion to another, e.g. `xy` moves x in proportion to y.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    Matrix::from_rows([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

impl Matrix {
    /// Returns this transform followed by a translation.
    pub fn translated(&self, x: f64, y: f64, z: f64) -> Self {
        translation(x, y, z) * self
    }

    /// Returns this transform followed by a scaling.
    pub fn scaled(&self, x: f64, y: f64, z: f64) -> Self {
        scaling(x, y, z) * self
    }

    /// Returns this transform followed by a rotation about the x-axis.
    pub fn rotated_x(&self, angle: impl Angle) -> Self {
        rotation_x(angle) * self
    }

    /// Returns this transform followed by a rotation about the y-axis.
    pub fn rotated_y(&self, angle: impl Angle) -> Self {
        rotation_y(angle) * self
    }

    /// Returns this transform followed by a rotation about the z-axis.
    pub fn rotated_z(&self, angle: impl Angle) -> Self {
        rotation_z(angle) * self
    }

    /// Returns this transform followed by a shearing.
    pub fn sheared(&self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        shearing(xy, xz, yx, yz, zx, zy) * self
    }
}
