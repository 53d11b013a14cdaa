//! Real-plane curve geometry
//!
//! A [`RealCurve`] owns the coefficients of y² = x³ + ax + b together with
//! everything derived from them (roots and stationary points). Building a new
//! curve recomputes all of it; nothing is cached across parameter changes.
//!
//! The free functions turn a curve into plot data: traced branches, chord
//! segments clipped to a viewport, and the nearest point on the curve to a
//! user edit.

use ecviz_api::{validate, AffinePoint, CurveParams, PlotVertex, Result};
use ecviz_common::round_to_exp;
use ecviz_params::{LONE_POINT_COMPANION, MAX_BRANCH_SAMPLES};
use log::debug;

use crate::config::PlotConfig;
use crate::cubic::cubic_roots;
use crate::field::RealField;
use crate::geometry::Viewport;
use crate::group::GroupLaw;

/// y² = x³ + ax + b over the reals, with its roots and stationary points
#[derive(Clone, Debug, PartialEq)]
pub struct RealCurve {
    params: CurveParams<f64>,
    roots: Vec<f64>,
    stationary: Vec<AffinePoint<f64>>,
}

impl RealCurve {
    /// Build the curve and its derived data. Coefficients must be finite.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        validate::finite(a, "a")?;
        validate::finite(b, "b")?;

        let curve = Self {
            params: CurveParams::new(a, b),
            roots: cubic_roots(a, b),
            stationary: stationary_points(a, b),
        };
        debug!(
            "real curve {}: {} root(s), {} stationary point(s)",
            curve.params,
            curve.roots.len(),
            curve.stationary.len()
        );
        Ok(curve)
    }

    /// Curve coefficients
    pub fn params(&self) -> &CurveParams<f64> {
        &self.params
    }

    /// Linear coefficient
    pub fn a(&self) -> f64 {
        self.params.a
    }

    /// Constant coefficient
    pub fn b(&self) -> f64 {
        self.params.b
    }

    /// Real roots of x³ + ax + b, ascending
    pub fn roots(&self) -> &[f64] {
        &self.roots
    }

    /// Stationary points above the x axis
    pub fn stationary_points(&self) -> &[AffinePoint<f64>] {
        &self.stationary
    }

    /// Whether 4a³ + 27b² = 0
    pub fn is_singular(&self) -> bool {
        self.params.is_singular()
    }

    /// Rendered equation
    pub fn equation(&self) -> String {
        self.params.equation()
    }

    /// Group law of this curve
    pub fn group_law(&self) -> GroupLaw<'static, RealField> {
        GroupLaw::new(&RealField, self.params.a)
    }

    /// x³ + ax + b
    pub fn rhs(&self, x: f64) -> f64 {
        x * (x * x + self.params.a) + self.params.b
    }

    /// Non-negative ordinate above `x`.
    ///
    /// Just past a root rounding can make the radicand slightly negative; the
    /// ordinate is 0 there.
    pub fn ordinate(&self, x: f64) -> f64 {
        let y = self.rhs(x).sqrt();
        if y.is_nan() {
            0.0
        } else {
            y
        }
    }

    /// Every abscissa whose curve point has ordinate ±`y`
    pub fn abscissas(&self, y: f64) -> Vec<f64> {
        cubic_roots(self.params.a, self.params.b - y * y)
    }

    /// Whether `p` survives snapping unchanged at decimal precision
    /// `10^exponent`.
    ///
    /// Moving each coordinate of a curve point by at most half a unit changes
    /// y² - (x³ + ax + b) by at most the bound below: the first-order terms
    /// through the partial derivatives 2y and 3x² + a, the second-order
    /// remainder, and the float error of the evaluation.
    fn holds_at_precision(&self, p: &AffinePoint<f64>, exponent: i32) -> bool {
        let half = 0.5 * 10f64.powi(exponent);
        let (x, y) = (p.x, p.y);
        let (a, b) = (self.params.a, self.params.b);

        let first_order = (2.0 * y.abs() + (3.0 * x * x + a).abs()) * half;
        let second_order = half * half * (1.0 + 3.0 * x.abs() + half);
        let magnitude = y * y + (x * x * x).abs() + (a * x).abs() + b.abs();
        let slack = first_order + second_order + 64.0 * f64::EPSILON * magnitude;
        if (y * y - self.rhs(x)).abs() <= slack {
            return true;
        }

        closest(&self.abscissas(y), x).map_or(false, |c| round_to_exp(c, exponent) == x)
    }
}

/// Stationary points of the upper half of the curve.
///
/// They solve 3x² + a = 0, so none exist for a > 0. With x1 = √(-a/3) and
/// x0 = -x1 the ordinates are √(b - 2x³). The left point is the one that
/// exists when only one does.
pub fn stationary_points(a: f64, b: f64) -> Vec<AffinePoint<f64>> {
    let x2 = -a / 3.0;
    let x1 = x2.sqrt();
    let x0 = -x1;
    let y1 = (b - 2.0 * x1 * x2).sqrt();
    let y0 = (b - 2.0 * x0 * x2).sqrt();

    if x0.is_nan() || y0.is_nan() {
        Vec::new()
    } else if x0 == 0.0 || y1.is_nan() {
        vec![AffinePoint::new(x0, y0)]
    } else {
        vec![AffinePoint::new(x0, y0), AffinePoint::new(x1, y1)]
    }
}

/// Polyline tracing the curve across `viewport`.
///
/// Each branch is sampled right to left above the axis at steps of
/// `x_range / resolution`, ends exactly on its root, then returns left to
/// right below the axis. With three roots the bounded oval between the
/// first two roots is closed on itself and separated by a
/// [`PlotVertex::Break`] from the unbounded branch starting at the third.
pub fn curve_sample_points(
    curve: &RealCurve,
    viewport: &Viewport,
    resolution: usize,
) -> Vec<PlotVertex> {
    let step = viewport.x_range() / resolution.max(1) as f64;
    let roots = curve.roots();
    let mut vertices = Vec::new();

    match roots {
        [r0, r1, r2] => {
            trace_branch(curve, *r0, *r1, step, &mut vertices);
            if let Some(&first) = vertices.first() {
                vertices.push(first);
            }
            vertices.push(PlotVertex::Break);
            trace_branch(curve, *r2, viewport.x_max, step, &mut vertices);
        }
        [r0, ..] => trace_branch(curve, *r0, viewport.x_max, step, &mut vertices),
        [] => {}
    }

    vertices
}

/// One continuous branch from `root` to `end`, appended to `out`
fn trace_branch(curve: &RealCurve, root: f64, end: f64, step: f64, out: &mut Vec<PlotVertex>) {
    let start = out.len();
    let step = step.max((end - root) / MAX_BRANCH_SAMPLES as f64);

    if step > 0.0 && step.is_finite() {
        let mut i = 0usize;
        loop {
            let x = end - i as f64 * step;
            if !(x > root) {
                break;
            }
            out.push(PlotVertex::at(x, curve.ordinate(x)));
            i += 1;
        }
    }
    out.push(PlotVertex::at(root, curve.ordinate(root)));

    // Mirror below the axis, root excluded
    let upper_end = out.len() - 1;
    for i in (start..upper_end).rev() {
        let vertex = out[i];
        if let PlotVertex::At(p) = vertex {
            out.push(PlotVertex::at(p.x, -p.y));
        }
    }
}

/// Endpoints of the line through `p` and `q` across `viewport`.
///
/// The chord (tangent when `p == q`) spans the full viewport width; a
/// vertical line spans its full height at `p.x`.
pub fn line_segment(
    curve: &RealCurve,
    p: &AffinePoint<f64>,
    q: &AffinePoint<f64>,
    viewport: &Viewport,
) -> [AffinePoint<f64>; 2] {
    match curve.group_law().slope(p, q).finite() {
        None => [
            AffinePoint::new(p.x, viewport.y_min),
            AffinePoint::new(p.x, viewport.y_max),
        ],
        Some(m) => [
            AffinePoint::new(viewport.x_min, p.y - m * (p.x - viewport.x_min)),
            AffinePoint::new(viewport.x_max, p.y - m * (p.x - viewport.x_max)),
        ],
    }
}

/// Move an edited point onto the curve.
///
/// `raw` is the new input, `prev` the last accepted point. The result is
/// rounded to multiples of `10^exponent`, and snapping it again returns it
/// unchanged:
///
/// - a NaN coordinate leaves `prev` in place,
/// - an unchanged point that still lies on the curve is kept,
/// - a changed abscissa left of the first root clamps to that root, one
///   inside the gap between the oval and the unbounded branch jumps to the
///   root in the direction of the edit, and any other keeps its value with
///   the ordinate taken on the side of the edit,
/// - otherwise the abscissa is recomputed from the ordinate, choosing the
///   solution nearest to `prev.x`.
pub fn snap_to_curve(
    curve: &RealCurve,
    raw: AffinePoint<f64>,
    prev: AffinePoint<f64>,
    exponent: i32,
) -> AffinePoint<f64> {
    if raw.x.is_nan() || raw.y.is_nan() {
        debug!("ignoring non-numeric point input {}", raw);
        return prev;
    }

    if raw == prev && curve.holds_at_precision(&raw, exponent) {
        return raw;
    }

    let roots = curve.roots();
    let (x, y) = if raw.x != prev.x {
        match roots {
            [r0, ..] if raw.x < *r0 => (*r0, 0.0),
            [_, r1, r2] if *r1 < raw.x && raw.x < *r2 => {
                (if raw.x > prev.x { *r2 } else { *r1 }, 0.0)
            }
            _ => {
                let y = curve.ordinate(raw.x);
                let upper = raw.y > 0.0 || (raw.y == 0.0 && raw.y >= prev.y);
                (raw.x, if upper { y } else { -y })
            }
        }
    } else {
        match closest(&curve.abscissas(raw.y), prev.x) {
            Some(x) => (x, raw.y),
            None => return prev,
        }
    };

    AffinePoint::new(round_to_exp(x, exponent), round_to_exp(y, exponent))
}

/// Candidate nearest to `target`, the first one on ties
fn closest(candidates: &[f64], target: f64) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for &c in candidates {
        let distance = (c - target).abs();
        match best {
            Some((_, d)) if !(distance < d) => {}
            _ => best = Some((c, distance)),
        }
    }
    best.map(|(c, _)| c)
}

/// Viewport showing `extra` points and the landmarks of the curve: its roots
/// on the axis and its stationary points with their mirrors. A lone landmark
/// is paired with (1, 0) so the plot does not collapse.
pub fn plot_viewport(curve: &RealCurve, extra: &[AffinePoint<f64>], config: &PlotConfig) -> Viewport {
    let mut points = extra.to_vec();
    points.extend(curve.roots().iter().map(|&x| AffinePoint::new(x, 0.0)));
    for p in curve.stationary_points() {
        points.push(*p);
        points.push(AffinePoint::new(p.x, -p.y));
    }
    if points.len() == 1 {
        let (x, y) = LONE_POINT_COMPANION;
        points.push(AffinePoint::new(x, y));
    }

    Viewport::enclosing_with(&points, config.real_margin_factor, config.degenerate_margin)
}
