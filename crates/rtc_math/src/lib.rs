//! Linear algebra for the ray tracer: homogeneous tuples, square matrices and
//! affine transforms.

#[macro_use]
mod macros;

pub mod angle;
pub mod arithmetic;
pub mod matrix;
pub mod ray;
pub mod tolerance;
pub mod transform;
pub mod tuple;

pub use angle::{Angle, Degrees, Radians};
pub use arithmetic::TupleArithmetic;
pub use matrix::Matrix;
pub use ray::Ray;
pub use tolerance::{EPSILON, approximately_equal, approximately_equal_within};
pub use tuple::Tuple;
