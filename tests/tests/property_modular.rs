//! Property-based tests for arithmetic and geometry modulo k

use ecviz::prelude::*;
use ecviz_algorithms::field_residues;
use ecviz_algorithms::geometry::modular::{enumerate_curve_points, snap_to_curve, wrapped_line_segments};
use proptest::prelude::*;
use proptest::sample::Index;

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Whether (x, y) lies on the segment from `from` to `to`
fn on_segment(x: f64, y: f64, from: &AffinePoint<f64>, to: &AffinePoint<f64>) -> bool {
    let eps = 1e-9;
    let cross = (to.x - from.x) * (y - from.y) - (to.y - from.y) * (x - from.x);
    cross.abs() <= 1e-6
        && x >= from.x.min(to.x) - eps
        && x <= from.x.max(to.x) + eps
        && y >= from.y.min(to.y) - eps
        && y <= from.y.max(to.y) + eps
}

proptest! {
    #[test]
    fn residue_shape(k in 1u64..5000) {
        let residues = field_residues(k).unwrap();
        let min = -((k / 2) as i64);

        prop_assert_eq!(residues.len() as u64, k);
        prop_assert_eq!(residues[0], min);
        prop_assert_eq!(residues[residues.len() - 1], min + k as i64 - 1);
        prop_assert!(residues.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn inverse_is_correct(k in 1u64..=65_536, value in any::<i64>()) {
        let field = ModularField::new(k).unwrap();
        let a = field.reduce(value);

        match field.inverse_of(a) {
            Some(inverse) => {
                prop_assert!(field.contains(inverse));
                prop_assert_eq!(field.reduce(a * inverse), field.one());
            }
            None => prop_assert_ne!(gcd(a.unsigned_abs(), k), 1),
        }
    }

    #[test]
    fn enumerated_points_are_on_the_curve(k in 1u64..300, a in any::<i64>(), b in any::<i64>()) {
        let field = ModularField::new(k).unwrap();
        let points = enumerate_curve_points(&field, a, b);
        let (a, b) = (field.reduce(a), field.reduce(b));

        for p in &points {
            prop_assert!(field.contains(p.x) && field.contains(p.y));
            let rhs = field.reduce(field.reduce(field.reduce(p.x * p.x) * p.x) + field.reduce(a * p.x) + b);
            prop_assert_eq!(field.reduce(p.y * p.y), rhs);
        }
        prop_assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn wrapped_chord_covers_the_modular_line(
        k in prop::sample::select(vec![5u64, 7, 11, 13, 17, 19, 23, 29, 31]),
        a in -20i64..20,
        b in -20i64..20,
        i in any::<Index>(),
        j in any::<Index>(),
        shallow in any::<bool>(),
    ) {
        let curve = ModularCurve::new(a, b, k).unwrap();
        prop_assume!(!curve.points().is_empty());
        let (p, q) = (*i.get(curve.points()), *j.get(curve.points()));
        let field = curve.field();

        let lattice: Vec<(i64, i64)> = match curve.group_law().slope(&p, &q) {
            Slope::Finite(m) => field
                .residues()
                .into_iter()
                .map(|x| (x, field.reduce(p.y + m * (x - p.x))))
                .collect(),
            Slope::Vertical => field.residues().into_iter().map(|y| (p.x, y)).collect(),
        };

        let line = wrapped_line_segments(&curve, &p, &q, shallow);
        let segments: Vec<(AffinePoint<f64>, AffinePoint<f64>)> = line
            .windows(2)
            .filter_map(|w| match (w[0], w[1]) {
                (PlotVertex::At(from), PlotVertex::At(to)) => Some((from, to)),
                _ => None,
            })
            .collect();

        // A piece can shrink to a lone vertex in a corner of the square
        let covered = |x: f64, y: f64| {
            segments.iter().any(|(from, to)| on_segment(x, y, from, to))
                || line.contains(&PlotVertex::at(x, y))
        };
        for (x, y) in lattice {
            let (x, y) = (x as f64, y as f64);
            prop_assert!(
                covered(x, y),
                "({}, {}) missing from the chord through {} and {}", x, y, p, q
            );
        }
    }

    #[test]
    fn snap_lands_on_the_curve(
        k in 2u64..60,
        a in -20i64..20,
        b in -20i64..20,
        raw in (-40i64..40, -40i64..40),
        i in any::<Index>(),
    ) {
        let curve = ModularCurve::new(a, b, k).unwrap();
        prop_assume!(!curve.points().is_empty());
        let prev = *i.get(curve.points());
        let raw = AffinePoint::new(raw.0, raw.1);

        let snapped = snap_to_curve(raw, prev, curve.points());
        prop_assert!(curve.contains(&snapped));
        prop_assert_eq!(snap_to_curve(snapped, snapped, curve.points()), snapped);
    }
}
