//! Core value types shared across the engine

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Coordinate;

/// A finite point in the affine plane, ordered by x then y
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AffinePoint<E> {
    /// Abscissa
    pub x: E,
    /// Ordinate
    pub y: E,
}

impl<E> AffinePoint<E> {
    /// Create a new affine point
    pub const fn new(x: E, y: E) -> Self {
        Self { x, y }
    }
}

impl<E: Coordinate> AffinePoint<E> {
    /// Widen to plot coordinates
    pub fn to_f64(self) -> AffinePoint<f64> {
        AffinePoint::new(self.x.to_f64(), self.y.to_f64())
    }
}

impl<E: fmt::Display> fmt::Display for AffinePoint<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point of the curve group: the identity or a finite point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Point<E> {
    /// The point at infinity (group identity)
    Infinity,
    /// A finite point
    Affine(AffinePoint<E>),
}

impl<E> Point<E> {
    /// The group identity
    pub const fn identity() -> Self {
        Point::Infinity
    }

    /// Finite point from coordinates
    pub const fn new(x: E, y: E) -> Self {
        Point::Affine(AffinePoint::new(x, y))
    }

    /// Check if this is the point at infinity
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Coordinates of a finite point
    pub fn affine(&self) -> Option<&AffinePoint<E>> {
        match self {
            Point::Infinity => None,
            Point::Affine(p) => Some(p),
        }
    }
}

impl<E> From<AffinePoint<E>> for Point<E> {
    fn from(p: AffinePoint<E>) -> Self {
        Point::Affine(p)
    }
}

impl<E: fmt::Display> fmt::Display for Point<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => f.write_str("Inf"),
            Point::Affine(p) => fmt::Display::fmt(p, f),
        }
    }
}

/// Slope of the line through two points
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Slope<E> {
    /// A finite, reduced slope
    Finite(E),
    /// Vertical line (or no inverse exists for the denominator)
    Vertical,
}

impl<E: Copy> Slope<E> {
    /// Finite value, if any
    pub fn finite(&self) -> Option<E> {
        match self {
            Slope::Finite(m) => Some(*m),
            Slope::Vertical => None,
        }
    }

    /// Whether the line is vertical
    pub fn is_vertical(&self) -> bool {
        matches!(self, Slope::Vertical)
    }
}

/// One element of a polyline handed to a renderer
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlotVertex {
    /// A vertex in plot coordinates
    At(AffinePoint<f64>),
    /// Discontinuity: do not join the neighbouring vertices
    Break,
}

impl PlotVertex {
    /// Vertex at the given plot coordinates
    pub const fn at(x: f64, y: f64) -> Self {
        PlotVertex::At(AffinePoint::new(x, y))
    }

    /// Whether this is a discontinuity marker
    pub fn is_break(&self) -> bool {
        matches!(self, PlotVertex::Break)
    }
}

/// Coefficients of y² = x³ + ax + b
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveParams<E> {
    /// Linear coefficient
    pub a: E,
    /// Constant coefficient
    pub b: E,
}

impl<E: Coordinate> CurveParams<E> {
    /// Create curve parameters
    pub const fn new(a: E, b: E) -> Self {
        Self { a, b }
    }

    /// 4a³ + 27b², zero exactly when the curve is singular
    pub fn singularity_term(&self) -> E {
        let (a, b) = (self.a, self.b);
        E::from_small(4) * a * a * a + E::from_small(27) * b * b
    }

    /// Discriminant Δ = −(4a³ + 27b²)
    pub fn discriminant(&self) -> E {
        -self.singularity_term()
    }

    /// Whether the discriminant vanishes over the integers or reals.
    ///
    /// Modular curves test the term modulo k instead, see the modular
    /// curve model.
    pub fn is_singular(&self) -> bool {
        self.singularity_term() == E::zero()
    }

    /// Human-readable equation, e.g. `y^2 = x^3 - 2x + 1`
    pub fn equation(&self) -> String {
        self.to_string()
    }
}

impl<E: Coordinate> fmt::Display for CurveParams<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn term<E: Coordinate>(f: &mut fmt::Formatter<'_>, value: E, suffix: &str) -> fmt::Result {
            if value > E::zero() {
                write!(f, " + {}{}", value, suffix)
            } else if value < E::zero() {
                let text = value.to_string();
                write!(f, " - {}{}", text.trim_start_matches('-'), suffix)
            } else {
                Ok(())
            }
        }

        f.write_str("y^2 = x^3")?;
        term(f, self.a, "x")?;
        term(f, self.b, "")
    }
}
