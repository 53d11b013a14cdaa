//! Explorer pages over the integers modulo k

use ecviz_algorithms::geometry::modular::{
    plot_viewport, snap_to_curve, subgroup_order, wrapped_line_segments,
};
use ecviz_algorithms::{ModularCurve, Viewport};
use ecviz_api::{AffinePoint, PlotVertex, Point};
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{coordinate_text, PlotConfig, PointInput, Result, Scene};

/// What every modular page shows about the curve itself
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CurveInfo {
    /// Rendered equation, with the coefficients as entered
    pub equation: String,
    /// Whether 4a³ + 27b² ≡ 0 (mod k)
    pub singular: bool,
    /// Whether k is prime; the group law is only meaningful if it is
    pub prime: bool,
    /// k
    pub field_order: u64,
    /// Affine points plus the point at infinity
    pub curve_order: u64,
    /// Affine points ordered by x, then y
    pub points: Vec<AffinePoint<i64>>,
}

/// `p` as a group element, or `None` when snapping could not place it on the
/// curve, which happens when the curve has no affine points
fn on_curve(curve: &ModularCurve, p: &AffinePoint<i64>) -> Option<Point<i64>> {
    if curve.contains(p) {
        Some((*p).into())
    } else {
        debug!("{} is not on {} mod {}", p, curve.params(), curve.field().order());
        None
    }
}

impl CurveInfo {
    fn of(curve: &ModularCurve) -> Self {
        Self {
            equation: curve.equation(),
            singular: curve.is_singular(),
            prime: curve.is_prime(),
            field_order: curve.field().order(),
            curve_order: curve.order(),
            points: curve.points().to_vec(),
        }
    }
}

/// P + Q = R on y² ≡ x³ + ax + b (mod k)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointAddition {
    /// Linear coefficient
    pub a: i64,
    /// Constant coefficient
    pub b: i64,
    /// Modulus
    pub k: u64,
    /// First operand
    pub p: PointInput<i64>,
    /// Second operand
    pub q: PointInput<i64>,
}

/// Rendered state of [`PointAddition`]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PointAdditionView {
    /// Curve summary
    pub curve: CurveInfo,
    /// P after snapping
    pub p: AffinePoint<i64>,
    /// Q after snapping
    pub q: AffinePoint<i64>,
    /// P + Q
    pub r: Point<i64>,
    /// Displayed coordinates of R
    pub r_text: [String; 2],
    /// Plot bounds
    pub viewport: Viewport,
    /// Line through P and Q wrapped into the residue square
    pub chord: Vec<PlotVertex>,
    /// Segment from R to -R, absent when R is the point at infinity
    pub reflection: Option<[AffinePoint<f64>; 2]>,
}

impl Scene for PointAddition {
    type View = PointAdditionView;

    fn evaluate(&self, config: &PlotConfig) -> Result<PointAdditionView> {
        config.validate()?;
        let curve = ModularCurve::new(self.a, self.b, self.k)?;
        let law = curve.group_law();

        let p = snap_to_curve(self.p.raw, self.p.previous, curve.points());
        let q = snap_to_curve(self.q.raw, self.q.previous, curve.points());
        let (r, chord) = match (on_curve(&curve, &p), on_curve(&curve, &q)) {
            (Some(p_point), Some(q_point)) => (
                law.add(&p_point, &q_point),
                wrapped_line_segments(&curve, &p, &q, config.prefer_shallow_slopes),
            ),
            _ => (Point::Infinity, Vec::new()),
        };
        debug!(
            "modular addition on {} mod {}: {} + {} = {}",
            curve.params(),
            self.k,
            p,
            q,
            r
        );

        let reflection = match (r, law.negate(&r)) {
            (Point::Affine(r), Point::Affine(neg)) => Some([r.to_f64(), neg.to_f64()]),
            _ => None,
        };

        Ok(PointAdditionView {
            viewport: plot_viewport(curve.field(), &[], config),
            chord,
            curve: CurveInfo::of(&curve),
            p,
            q,
            r_text: coordinate_text(&r, config.rounding_exponent),
            r,
            reflection,
        })
    }
}

/// Q = nP on y² ≡ x³ + ax + b (mod k)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScalarMultiplication {
    /// Linear coefficient
    pub a: i64,
    /// Constant coefficient
    pub b: i64,
    /// Modulus
    pub k: u64,
    /// Scalar
    pub n: i64,
    /// The multiplied point
    pub p: PointInput<i64>,
}

/// Rendered state of [`ScalarMultiplication`]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScalarMultiplicationView {
    /// Curve summary
    pub curve: CurveInfo,
    /// P after snapping
    pub p: AffinePoint<i64>,
    /// nP
    pub q: Point<i64>,
    /// Displayed coordinates of Q
    pub q_text: [String; 2],
    /// Order of the subgroup generated by P, when it is defined
    pub subgroup_order: Option<u64>,
    /// Plot bounds
    pub viewport: Viewport,
}

impl Scene for ScalarMultiplication {
    type View = ScalarMultiplicationView;

    fn evaluate(&self, config: &PlotConfig) -> Result<ScalarMultiplicationView> {
        config.validate()?;
        let curve = ModularCurve::new(self.a, self.b, self.k)?;

        let p = snap_to_curve(self.p.raw, self.p.previous, curve.points());
        let Some(p_point) = on_curve(&curve, &p) else {
            return Ok(ScalarMultiplicationView {
                viewport: plot_viewport(curve.field(), &[], config),
                curve: CurveInfo::of(&curve),
                p,
                q_text: coordinate_text(&Point::<i64>::Infinity, config.rounding_exponent),
                q: Point::Infinity,
                subgroup_order: None,
            });
        };

        let q = curve.group_law().multiply(self.n, &p_point);
        let order = match subgroup_order(&curve, &p_point) {
            Ok(order) => Some(order),
            Err(e) => {
                debug!("no subgroup order for {}: {}", p, e);
                None
            }
        };

        let mut landmarks = vec![p.to_f64()];
        landmarks.extend(q.affine().map(|q| q.to_f64()));

        Ok(ScalarMultiplicationView {
            viewport: plot_viewport(curve.field(), &landmarks, config),
            curve: CurveInfo::of(&curve),
            p,
            q_text: coordinate_text(&q, config.rounding_exponent),
            q,
            subgroup_order: order,
        })
    }
}
