//! Curve geometry over the integers modulo k
//!
//! A [`ModularCurve`] is the finite point set of y² = x³ + ax + b with both
//! coordinates taken from the symmetric residues of k. Lines through two of
//! its points wrap around the residue square like a torus, so chords are
//! drawn as several pieces separated by [`PlotVertex::Break`].

use core::cmp::Ordering;

use ecviz_api::{AffinePoint, CurveParams, Error, FieldModel, PlotVertex, Point, Result, Slope};
use log::{debug, trace};

use crate::config::PlotConfig;
use crate::field::ModularField;
use crate::geometry::Viewport;
use crate::group::GroupLaw;

pub use crate::field::field_residues;

/// y² = x³ + ax + b over Z/k together with its enumerated points
#[derive(Clone, Debug, PartialEq)]
pub struct ModularCurve {
    field: ModularField,
    params: CurveParams<i64>,
    a: i64,
    b: i64,
    points: Vec<AffinePoint<i64>>,
}

impl ModularCurve {
    /// Build the curve for modulus `k`. The coefficients may be any
    /// integers; arithmetic uses their residues.
    pub fn new(a: i64, b: i64, k: u64) -> Result<Self> {
        let field = ModularField::new(k)?;
        Ok(Self::over(field, a, b))
    }

    /// Build the curve over an existing field descriptor
    pub fn over(field: ModularField, a: i64, b: i64) -> Self {
        let points = enumerate_curve_points(&field, a, b);
        let curve = Self {
            field,
            params: CurveParams::new(a, b),
            a: field.reduce(a),
            b: field.reduce(b),
            points,
        };
        debug!(
            "modular curve {} over Z/{}: {} affine point(s)",
            curve.params,
            field.modulus(),
            curve.points.len()
        );
        curve
    }

    /// The residue system
    pub fn field(&self) -> &ModularField {
        &self.field
    }

    /// Coefficients as given
    pub fn params(&self) -> &CurveParams<i64> {
        &self.params
    }

    /// Reduced linear coefficient
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Reduced constant coefficient
    pub fn b(&self) -> i64 {
        self.b
    }

    /// Affine points ordered by x, then y
    pub fn points(&self) -> &[AffinePoint<i64>] {
        &self.points
    }

    /// Group order: the affine points plus the point at infinity
    pub fn order(&self) -> u64 {
        self.points.len() as u64 + 1
    }

    /// Whether k is prime
    pub fn is_prime(&self) -> bool {
        self.field.is_prime()
    }

    /// Whether 4a³ + 27b² ≡ 0 (mod k)
    pub fn is_singular(&self) -> bool {
        let f = &self.field;
        let a3 = f.reduce(f.reduce(self.a * self.a) * self.a);
        let b2 = f.reduce(self.b * self.b);
        f.reduce(f.reduce(4 * a3) + f.reduce(27 * b2)) == 0
    }

    /// Rendered equation, with the coefficients as given
    pub fn equation(&self) -> String {
        self.params.equation()
    }

    /// Group law of this curve
    pub fn group_law(&self) -> GroupLaw<'_, ModularField> {
        GroupLaw::new(&self.field, self.a)
    }

    /// x³ + ax + b reduced modulo k
    pub fn rhs(&self, x: i64) -> i64 {
        curve_rhs(&self.field, self.a, self.b, self.field.reduce(x))
    }

    /// Every y with (x, y) on the curve, ascending
    pub fn ordinates(&self, x: i64) -> Vec<i64> {
        let x = self.field.reduce(x);
        let start = self.points.partition_point(|p| p.x < x);
        self.points[start..]
            .iter()
            .take_while(|p| p.x == x)
            .map(|p| p.y)
            .collect()
    }

    /// Whether `p` is one of the enumerated affine points
    pub fn contains(&self, p: &AffinePoint<i64>) -> bool {
        self.field.contains(p.x)
            && self.field.contains(p.y)
            && self.field.reduce(p.y * p.y) == self.rhs(p.x)
    }
}

/// x³ + ax + b for reduced `a`, `b` and `x`, keeping every intermediate
/// product below 2⁶³
fn curve_rhs(field: &ModularField, a: i64, b: i64, x: i64) -> i64 {
    let t = field.reduce(x * x);
    let t = field.reduce(t + a);
    let t = field.reduce(t * x);
    field.reduce(t + b)
}

/// Every (x, y) over the residues of `field` with y² ≡ x³ + ax + b, ordered
/// by x then y.
///
/// Square roots are bucketed once, so the cost is linear in k.
pub fn enumerate_curve_points(field: &ModularField, a: i64, b: i64) -> Vec<AffinePoint<i64>> {
    let (a, b) = (field.reduce(a), field.reduce(b));
    let min = field.min();
    let slot = |residue: i64| (residue - min) as usize;

    let mut roots_of: Vec<Vec<i64>> = vec![Vec::new(); field.order() as usize];
    for y in min..=field.max() {
        roots_of[slot(field.reduce(y * y))].push(y);
    }

    let mut points = Vec::new();
    for x in min..=field.max() {
        for &y in &roots_of[slot(curve_rhs(field, a, b, x))] {
            points.push(AffinePoint::new(x, y));
        }
    }
    points
}

/// Pieces of the line through `p` and `q` (tangent when equal) wrapped into
/// the residue square.
///
/// With `prefer_shallow` set, a slope whose inverse has a smaller magnitude
/// is drawn along the other axis, which yields fewer and longer pieces.
pub fn wrapped_line_segments(
    curve: &ModularCurve,
    p: &AffinePoint<i64>,
    q: &AffinePoint<i64>,
    prefer_shallow: bool,
) -> Vec<PlotVertex> {
    let slope = curve.group_law().slope(p, q);
    wrap_line(curve.field(), p, slope, prefer_shallow)
}

/// Wrap the line through `through` with `slope` into the residue square of
/// `field`
pub(crate) fn wrap_line(
    field: &ModularField,
    through: &AffinePoint<i64>,
    slope: Slope<i64>,
    prefer_shallow: bool,
) -> Vec<PlotVertex> {
    let (min, max) = (field.min() as f64, field.max() as f64);

    let m = match slope {
        Slope::Vertical => {
            let x = through.x as f64;
            return vec![PlotVertex::at(x, min), PlotVertex::at(x, max)];
        }
        Slope::Finite(0) => {
            let y = through.y as f64;
            return vec![PlotVertex::at(min, y), PlotVertex::at(max, y)];
        }
        Slope::Finite(m) => m,
    };

    let inverse = field.inverse_of(m).filter(|inv| inv.unsigned_abs() < m.unsigned_abs());
    match inverse {
        Some(inv) if prefer_shallow => {
            trace!("drawing slope {} as {} along the y axis", m, inv);
            let swapped = AffinePoint::new(through.y, through.x);
            wrap_walk(field, &swapped, inv)
                .into_iter()
                .map(|v| match v {
                    PlotVertex::At(p) => PlotVertex::at(p.y, p.x),
                    PlotVertex::Break => PlotVertex::Break,
                })
                .collect()
        }
        _ => wrap_walk(field, through, m),
    }
}

/// Walk a line of non-zero slope `m` from the left edge to the right edge,
/// starting a new piece each time it leaves through the top or bottom.
fn wrap_walk(field: &ModularField, through: &AffinePoint<i64>, m: i64) -> Vec<PlotVertex> {
    let (min, max, k) = (field.min() as f64, field.max() as f64, field.modulus() as f64);

    // Left-edge ordinate of the representative line through the point
    let offset = through.y - m * through.x;
    let y0 = field.reduce(m * field.min() + offset) as f64;
    let slope = m as f64;
    let mut q = y0 - slope * min;

    let (y_from, y_to, dq) = if m > 0 { (min, max, k) } else { (max, min, -k) };

    let mut out = vec![PlotVertex::at(min, y0)];
    loop {
        let exit_x = (y_to - q) / slope;
        if exit_x >= max {
            let last = PlotVertex::at(max, slope * max + q);
            if out.last() != Some(&last) {
                out.push(last);
            }
            break;
        }
        out.push(PlotVertex::at(exit_x, y_to));

        q -= dq;
        let entry_x = (y_from - q) / slope;
        if entry_x > max {
            break;
        }
        out.push(PlotVertex::Break);
        out.push(PlotVertex::at(entry_x, y_from));
    }
    out
}

/// Move an edited point onto the curve.
///
/// A point of the curve is returned as is. Otherwise the candidates are the
/// curve points lying beyond `prev` in the direction of the edit (along x if
/// x changed, else along y), and the one closest to `raw` wins, the first in
/// enumeration order on ties. With no candidate in that direction `prev`
/// stays when it is on the curve; otherwise every curve point competes.
pub fn snap_to_curve(
    raw: AffinePoint<i64>,
    prev: AffinePoint<i64>,
    points: &[AffinePoint<i64>],
) -> AffinePoint<i64> {
    if points.contains(&raw) {
        return raw;
    }

    let ahead = |p: &AffinePoint<i64>| match raw.x.cmp(&prev.x) {
        Ordering::Equal => match raw.y.cmp(&prev.y) {
            Ordering::Equal => true,
            direction => p.y.cmp(&prev.y) == direction,
        },
        direction => p.x.cmp(&prev.x) == direction,
    };

    let forward = nearest(points.iter().filter(|p| ahead(p)), &raw);
    match forward {
        Some(p) => p,
        None if points.contains(&prev) => {
            trace!("no curve point beyond {} toward {}, keeping it", prev, raw);
            prev
        }
        None => {
            trace!("snapping {} to the nearest curve point", raw);
            nearest(points.iter(), &raw).unwrap_or(prev)
        }
    }
}

/// Point at the smallest squared distance from `target`, the first on ties
fn nearest<'a, I>(points: I, target: &AffinePoint<i64>) -> Option<AffinePoint<i64>>
where
    I: Iterator<Item = &'a AffinePoint<i64>>,
{
    let distance = |p: &AffinePoint<i64>| {
        let dx = p.x as i128 - target.x as i128;
        let dy = p.y as i128 - target.y as i128;
        dx * dx + dy * dy
    };

    let mut best: Option<(AffinePoint<i64>, i128)> = None;
    for p in points {
        let d = distance(p);
        match best {
            Some((_, bd)) if bd <= d => {}
            _ => best = Some((*p, d)),
        }
    }
    best.map(|(p, _)| p)
}

/// Order of the cyclic subgroup generated by `p`: the least n ≥ 1 with
/// n·P = O.
///
/// Only defined on non-singular curves over a prime modulus, where the group
/// is finite and every order is at most k + 1 + 2√k.
pub fn subgroup_order(curve: &ModularCurve, p: &Point<i64>) -> Result<u64> {
    const OPERATION: &str = "subgroup order";

    if !curve.is_prime() {
        return Err(Error::undefined(OPERATION, "the modulus is not prime"));
    }
    if curve.is_singular() {
        return Err(Error::undefined(OPERATION, "the curve is singular"));
    }
    if let Some(affine) = p.affine() {
        if !curve.contains(affine) {
            return Err(Error::param("p", "point is not on the curve"));
        }
    }

    let k = curve.field().order();
    let limit = k + 1 + 2 * ((k as f64).sqrt().ceil() as u64);
    let law = curve.group_law();

    let mut multiple = *p;
    let mut n = 1u64;
    while !multiple.is_identity() {
        if n > limit {
            return Err(Error::undefined(OPERATION, "no cycle within the Hasse bound"));
        }
        multiple = law.add(&multiple, p);
        n += 1;
    }

    debug!("{} generates a subgroup of order {}", p, n);
    Ok(n)
}

/// Viewport showing the residue square of `field` and any `extra` points
pub fn plot_viewport(field: &ModularField, extra: &[AffinePoint<f64>], config: &PlotConfig) -> Viewport {
    let (min, max) = (field.min() as f64, field.max() as f64);
    let mut points = vec![AffinePoint::new(min, min), AffinePoint::new(max, max)];
    points.extend_from_slice(extra);
    Viewport::enclosing_with(&points, config.modular_margin_factor, config.degenerate_margin)
}
