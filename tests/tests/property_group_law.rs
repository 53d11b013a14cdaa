//! Property-based tests for the group law over small prime fields

use ecviz::prelude::*;
use proptest::prelude::*;
use proptest::sample::Index;

const PRIMES: &[u64] = &[3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97];

/// Non-singular curve over a prime field with at least one affine point
fn prime_curve() -> impl Strategy<Value = ModularCurve> {
    (prop::sample::select(PRIMES), -50i64..50, -50i64..50)
        .prop_map(|(k, a, b)| ModularCurve::new(a, b, k).unwrap())
        .prop_filter("non-singular with points", |c| !c.is_singular() && !c.points().is_empty())
}

fn pick(curve: &ModularCurve, index: &Index) -> Point<i64> {
    (*index.get(curve.points())).into()
}

proptest! {
    #[test]
    fn identity_and_inverse(curve in prime_curve(), i in any::<Index>()) {
        let law = curve.group_law();
        let p = pick(&curve, &i);

        prop_assert_eq!(law.add(&p, &Point::Infinity), p);
        prop_assert_eq!(law.add(&Point::Infinity, &p), p);
        prop_assert_eq!(law.add(&p, &law.negate(&p)), Point::Infinity);
    }

    #[test]
    fn addition_is_commutative_and_closed(curve in prime_curve(), i in any::<Index>(), j in any::<Index>()) {
        let law = curve.group_law();
        let (p, q) = (pick(&curve, &i), pick(&curve, &j));
        let r = law.add(&p, &q);

        prop_assert_eq!(r, law.add(&q, &p));
        if let Some(r) = r.affine() {
            prop_assert!(curve.contains(r), "{} + {} = {} is off the curve", p, q, r);
        }
    }

    #[test]
    fn addition_is_associative(
        curve in prime_curve(),
        i in any::<Index>(),
        j in any::<Index>(),
        l in any::<Index>(),
    ) {
        let law = curve.group_law();
        let (p, q, r) = (pick(&curve, &i), pick(&curve, &j), pick(&curve, &l));

        let left = law.add(&law.add(&p, &q), &r);
        let right = law.add(&p, &law.add(&q, &r));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn scalar_multiplication_recurrence(curve in prime_curve(), i in any::<Index>(), n in -200i64..200) {
        let law = curve.group_law();
        let p = pick(&curve, &i);

        prop_assert_eq!(law.multiply(0, &p), Point::Infinity);
        prop_assert_eq!(law.multiply(1, &p), p);
        prop_assert_eq!(law.multiply(-1, &p), law.negate(&p));
        prop_assert_eq!(law.multiply(n, &p), law.add(&law.multiply(n - 1, &p), &p));
    }

    #[test]
    fn subgroup_order_divides_curve_order(curve in prime_curve(), i in any::<Index>()) {
        use ecviz_algorithms::geometry::modular::subgroup_order;

        let p = pick(&curve, &i);
        let order = subgroup_order(&curve, &p).unwrap();

        prop_assert_eq!(curve.order() % order, 0);
        prop_assert_eq!(curve.group_law().multiply(order as i64, &p), Point::Infinity);
    }
}
