//! Known-answer tests against `src/vectors/curves.json`

use approx::assert_abs_diff_eq;
use ecviz::prelude::*;
use ecviz_algorithms::cubic_roots;
use ecviz_algorithms::geometry::modular::subgroup_order;
use ecviz_algorithms::geometry::real::stationary_points;
use ecviz_tests::vectors::{affine, curve_vectors};

#[test]
fn real_roots() {
    for v in &curve_vectors().real.roots {
        let roots = cubic_roots(v.a, v.b);
        assert_eq!(roots.len(), v.roots.len(), "a = {}, b = {}", v.a, v.b);
        for (got, want) in roots.iter().zip(&v.roots) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-9);
        }

        let curve = RealCurve::new(v.a, v.b).unwrap();
        assert_eq!(curve.is_singular(), v.singular, "a = {}, b = {}", v.a, v.b);
    }
}

#[test]
fn real_stationary_points() {
    for v in &curve_vectors().real.stationary {
        let points = stationary_points(v.a, v.b);
        assert_eq!(points.len(), v.points.len(), "a = {}, b = {}", v.a, v.b);
        for (got, want) in points.iter().zip(&v.points) {
            assert_abs_diff_eq!(got.x, want[0], epsilon = 1e-12);
            assert_abs_diff_eq!(got.y, want[1], epsilon = 1e-12);
        }
    }
}

#[test]
fn real_multiples() {
    for v in &curve_vectors().real.multiples {
        let curve = RealCurve::new(v.a, v.b).unwrap();
        let law = curve.group_law();
        let p = Point::from(affine(v.point));

        for m in &v.results {
            let got = law.multiply(m.n, &p);
            match (got.affine(), m.point) {
                (None, None) => {}
                (Some(got), Some(want)) => {
                    assert_abs_diff_eq!(got.x, want[0], epsilon = 1e-12);
                    assert_abs_diff_eq!(got.y, want[1], epsilon = 1e-12);
                }
                _ => panic!("{}·{} = {}, expected {:?}", m.n, p, got, m.point),
            }
        }
    }
}

#[test]
fn modular_curves() {
    for v in &curve_vectors().modular {
        let curve = ModularCurve::new(v.a, v.b, v.k).unwrap();
        let expected: Vec<AffinePoint<i64>> = v.points.iter().copied().map(affine).collect();

        assert_eq!(curve.points(), expected.as_slice(), "k = {}", v.k);
        assert_eq!(curve.order(), v.order, "k = {}", v.k);
        assert_eq!(curve.is_singular(), v.singular, "k = {}", v.k);
        assert_eq!(curve.is_prime(), v.prime, "k = {}", v.k);
    }
}

#[test]
fn modular_subgroup_orders() {
    for v in &curve_vectors().modular {
        let curve = ModularCurve::new(v.a, v.b, v.k).unwrap();
        if v.subgroup_orders.is_empty() {
            // Singular or composite: the order is not defined
            if let Some(&p) = curve.points().first() {
                assert!(subgroup_order(&curve, &p.into()).is_err(), "k = {}", v.k);
            }
        }
        for s in &v.subgroup_orders {
            let p = Point::from(affine(s.point));
            assert_eq!(subgroup_order(&curve, &p), Ok(s.order), "k = {}, P = {}", v.k, p);
        }
    }
}

#[test]
fn modular_multiples() {
    for v in &curve_vectors().modular {
        let Some(multiples) = &v.multiples else { continue };
        let curve = ModularCurve::new(v.a, v.b, v.k).unwrap();
        let law = curve.group_law();
        let p = Point::from(affine(multiples.point));

        for m in &multiples.results {
            let expected = m.point.map_or(Point::Infinity, |pair| affine(pair).into());
            assert_eq!(law.multiply(m.n, &p), expected, "k = {}, n = {}", v.k, m.n);
        }
    }
}
