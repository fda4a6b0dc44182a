//! Arithmetic shared by the four-component value types.

use crate::tolerance::approximately_equal;
use anyhow::Result;
use std::ops::{Add, Mul, Sub};

/// The arithmetic surface common to all four-component value types, such as
/// [`Tuple`](crate::Tuple) and colors.
///
/// Addition, subtraction and scaling are always defined and come from the
/// operator supertraits. Division by a scalar is a capability that a type may
/// refuse, in which case [`try_div`](Self::try_div) returns an error.
pub trait TupleArithmetic:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    /// The four components, in storage order.
    fn components(&self) -> [f64; 4];

    /// Divides every component by the given scalar, or fails if division is
    /// not meaningful for the type.
    fn try_div(&self, scalar: f64) -> Result<Self>;

    /// Whether every component is within [`EPSILON`](crate::EPSILON) of the
    /// corresponding component of `other`.
    fn approx_eq(&self, other: &Self) -> bool {
        self.components()
            .into_iter()
            .zip(other.components())
            .all(|(a, b)| approximately_equal(a, b))
    }
}
