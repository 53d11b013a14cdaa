//! Curve explorer scenes
//!
//! Each scene takes the raw state of one explorer page (curve coefficients,
//! the modulus, a scalar, edited points together with their last accepted
//! values) and recomputes everything the page shows: snapped points, the
//! result of the group operation, the viewport and the polylines to draw.
//! Scenes are plain values and evaluation is pure.

#![forbid(unsafe_code)]

use ecviz_api::{AffinePoint, Coordinate, Point};
use ecviz_common::round_to_exp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use ecviz_algorithms::PlotConfig;
pub use ecviz_api::{Error, Result};

pub mod modular;
pub mod real;

/// An explorer page: inputs in, a complete view out
pub trait Scene {
    /// Everything a renderer needs to draw the page
    type View;

    /// Recompute the page from its inputs
    fn evaluate(&self, config: &PlotConfig) -> Result<Self::View>;
}

/// A point as typed by the user together with the last value accepted for it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointInput<E> {
    /// The value just entered
    pub raw: AffinePoint<E>,
    /// The value accepted on the previous evaluation
    pub previous: AffinePoint<E>,
}

impl<E: Copy> PointInput<E> {
    /// An edit from `previous` to `raw`
    pub fn new(raw: AffinePoint<E>, previous: AffinePoint<E>) -> Self {
        Self { raw, previous }
    }

    /// An input that has not been edited since it was accepted
    pub fn unchanged(point: AffinePoint<E>) -> Self {
        Self::new(point, point)
    }
}

/// Result coordinates as displayed: `Inf` for the point at infinity,
/// otherwise each coordinate rounded to a multiple of `10^exponent`.
pub fn coordinate_text<E: Coordinate>(point: &Point<E>, exponent: i32) -> [String; 2] {
    match point {
        Point::Infinity => ["Inf".to_string(), "Inf".to_string()],
        Point::Affine(p) => {
            let text = |v: E| {
                // Adding 0 turns -0 into 0
                let rounded = round_to_exp(v.to_f64(), exponent) + 0.0;
                rounded.to_string()
            };
            [text(p.x), text(p.y)]
        }
    }
}
