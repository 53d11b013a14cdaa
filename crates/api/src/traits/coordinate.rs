//! Scalar types usable as curve coordinates

use core::fmt::{Debug, Display};
use core::ops::{Add, Mul, Neg, Sub};

/// A number type a curve can be drawn over.
///
/// Implemented for `f64` (the real plane) and `i64` (symmetric residues
/// modulo k). Arithmetic is plain ring arithmetic; reduction into a field is
/// the job of a [`FieldModel`](crate::FieldModel).
pub trait Coordinate:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity
    fn zero() -> Self;

    /// Lift a small integer constant (the 2 and 3 of the tangent slope)
    fn from_small(value: i32) -> Self;

    /// Whether the value is usable as a coordinate
    fn is_finite(self) -> bool;

    /// Lossy conversion for plotting
    fn to_f64(self) -> f64;
}

impl Coordinate for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn from_small(value: i32) -> Self {
        f64::from(value)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

impl Coordinate for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn from_small(value: i32) -> Self {
        i64::from(value)
    }

    #[inline]
    fn is_finite(self) -> bool {
        true
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}
