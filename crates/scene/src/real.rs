//! Explorer pages over the real numbers

use ecviz_algorithms::geometry::real::{
    curve_sample_points, line_segment, plot_viewport, snap_to_curve,
};
use ecviz_algorithms::{RealCurve, Viewport};
use ecviz_api::{AffinePoint, PlotVertex, Point};
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{coordinate_text, PlotConfig, PointInput, Result, Scene};

/// What every real page shows about the curve itself
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CurveInfo {
    /// Rendered equation
    pub equation: String,
    /// Whether 4a³ + 27b² = 0
    pub singular: bool,
}

impl CurveInfo {
    fn of(curve: &RealCurve) -> Self {
        Self {
            equation: curve.equation(),
            singular: curve.is_singular(),
        }
    }
}

/// P + Q = R on y² = x³ + ax + b
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointAddition {
    /// Linear coefficient
    pub a: f64,
    /// Constant coefficient
    pub b: f64,
    /// First operand
    pub p: PointInput<f64>,
    /// Second operand
    pub q: PointInput<f64>,
}

/// Rendered state of [`PointAddition`]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PointAdditionView {
    /// Curve summary
    pub curve: CurveInfo,
    /// P after snapping
    pub p: AffinePoint<f64>,
    /// Q after snapping
    pub q: AffinePoint<f64>,
    /// P + Q
    pub r: Point<f64>,
    /// Displayed coordinates of R
    pub r_text: [String; 2],
    /// Plot bounds
    pub viewport: Viewport,
    /// Traced curve
    pub samples: Vec<PlotVertex>,
    /// Line through P and Q across the viewport
    pub chord: [AffinePoint<f64>; 2],
    /// Segment from R to -R, absent when R is the point at infinity
    pub reflection: Option<[AffinePoint<f64>; 2]>,
}

impl Scene for PointAddition {
    type View = PointAdditionView;

    fn evaluate(&self, config: &PlotConfig) -> Result<PointAdditionView> {
        config.validate()?;
        let curve = RealCurve::new(self.a, self.b)?;
        let exponent = config.rounding_exponent;

        let p = snap_to_curve(&curve, self.p.raw, self.p.previous, exponent);
        let q = snap_to_curve(&curve, self.q.raw, self.q.previous, exponent);
        let r = curve.group_law().add(&p.into(), &q.into());
        debug!("real addition on {}: {} + {} = {}", curve.params(), p, q, r);

        let reflection = r.affine().map(|r| [*r, AffinePoint::new(r.x, -r.y)]);
        let mut landmarks = vec![p, q];
        if let Some(segment) = reflection {
            landmarks.extend_from_slice(&segment);
        }

        let viewport = plot_viewport(&curve, &landmarks, config);
        Ok(PointAdditionView {
            curve: CurveInfo::of(&curve),
            p,
            q,
            r_text: coordinate_text(&r, exponent),
            r,
            samples: curve_sample_points(&curve, &viewport, config.resolution),
            chord: line_segment(&curve, &p, &q, &viewport),
            reflection,
            viewport,
        })
    }
}

/// Q = nP on y² = x³ + ax + b
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarMultiplication {
    /// Linear coefficient
    pub a: f64,
    /// Constant coefficient
    pub b: f64,
    /// Scalar
    pub n: i64,
    /// The multiplied point
    pub p: PointInput<f64>,
}

/// Rendered state of [`ScalarMultiplication`]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScalarMultiplicationView {
    /// Curve summary
    pub curve: CurveInfo,
    /// P after snapping
    pub p: AffinePoint<f64>,
    /// nP
    pub q: Point<f64>,
    /// Displayed coordinates of Q
    pub q_text: [String; 2],
    /// Plot bounds
    pub viewport: Viewport,
    /// Traced curve
    pub samples: Vec<PlotVertex>,
}

impl Scene for ScalarMultiplication {
    type View = ScalarMultiplicationView;

    fn evaluate(&self, config: &PlotConfig) -> Result<ScalarMultiplicationView> {
        config.validate()?;
        let curve = RealCurve::new(self.a, self.b)?;
        let exponent = config.rounding_exponent;

        let p = snap_to_curve(&curve, self.p.raw, self.p.previous, exponent);
        let q = curve.group_law().multiply(self.n, &p.into());
        debug!("real multiplication on {}: {}·{} = {}", curve.params(), self.n, p, q);

        let mut landmarks = vec![p];
        landmarks.extend(q.affine().copied());

        let viewport = plot_viewport(&curve, &landmarks, config);
        Ok(ScalarMultiplicationView {
            curve: CurveInfo::of(&curve),
            p,
            q_text: coordinate_text(&q, exponent),
            q,
            samples: curve_sample_points(&curve, &viewport, config.resolution),
            viewport,
        })
    }
}
