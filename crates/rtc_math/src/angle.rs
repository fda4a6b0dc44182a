//! Different units for angles.

use approx::AbsDiffEq;
use std::{
    f64::consts::PI,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Represents an angle.
pub trait Angle: Copy {
    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f64;

    /// Returns the value of the angle in radians.
    fn radians(self) -> f64;
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Degrees(pub f64);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians(pub f64);

impl Angle for Degrees {
    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians::from(self)
    }

    fn degrees(self) -> f64 {
        self.0
    }

    fn radians(self) -> f64 {
        degrees_to_radians(self.0)
    }
}

impl Angle for Radians {
    fn as_degrees(self) -> Degrees {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians {
        self
    }

    fn degrees(self) -> f64 {
        radians_to_degrees(self.0)
    }

    fn radians(self) -> f64 {
        self.0
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Self(radians_to_degrees(rad.0))
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Self(degrees_to_radians(deg.0))
    }
}

macro_rules! impl_angle_ops {
    ($unit:ident) => {
        impl Add for $unit {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $unit {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $unit {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $unit {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $unit {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl AbsDiffEq for $unit {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                f64::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }
    };
}

impl_angle_ops!(Degrees);
impl_angle_ops!(Radians);

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}
