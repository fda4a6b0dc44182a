//! Rays.

use crate::tuple::Tuple;

/// A ray starting at `origin` and extending along `direction`.
///
/// The origin is expected to be a point and the direction a vector, but this
/// is not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    origin: Tuple,
    direction: Tuple,
}

impl Ray {
    /// Creates a new ray with the given origin and direction.
    #[inline]
    pub const fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub const fn origin(&self) -> &Tuple {
        &self.origin
    }

    #[inline]
    pub const fn direction(&self) -> &Tuple {
        &self.direction
    }

    /// Computes the point at distance `t` along the ray, measured in units
    /// of the direction's length.
    #[inline]
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }
}
