//! Elliptic-curve group law over any field model
//!
//! One generic implementation of the chord-and-tangent rule, instantiated
//! with [`RealField`](crate::field::RealField) for the real plane and
//! [`ModularField`](crate::field::ModularField) for the integers modulo k.
//! Every operation is total: vertical chords and missing inverses yield the
//! point at infinity instead of an error.

use ecviz_api::{AffinePoint, Coordinate, FieldModel, Point, Slope};

/// The group law of y² = x³ + ax + b over a field model.
///
/// Only the coefficient `a` enters the formulas. The engine holds no state
/// between calls and is cheap to build for each update.
#[derive(Debug)]
pub struct GroupLaw<'f, F: FieldModel> {
    field: &'f F,
    a: F::Element,
}

impl<'f, F: FieldModel> Clone for GroupLaw<'f, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'f, F: FieldModel> Copy for GroupLaw<'f, F> {}

impl<'f, F: FieldModel> GroupLaw<'f, F> {
    /// Group law of the curve with linear coefficient `a` over `field`
    pub fn new(field: &'f F, a: F::Element) -> Self {
        Self { field, a }
    }

    /// The field model in use
    pub fn field(&self) -> &'f F {
        self.field
    }

    /// Additive inverse: (x, y) -> (x, -y)
    pub fn negate(&self, p: &Point<F::Element>) -> Point<F::Element> {
        match p {
            Point::Infinity => Point::Infinity,
            Point::Affine(p) => Point::new(p.x, self.field.reduce(-p.y)),
        }
    }

    /// Slope of the chord through `p` and `q`, or of the tangent when they
    /// coincide.
    pub fn slope(
        &self,
        p: &AffinePoint<F::Element>,
        q: &AffinePoint<F::Element>,
    ) -> Slope<F::Element> {
        let f = self.field;
        let (numerator, denominator) = if p.x != q.x {
            (p.y - q.y, p.x - q.x)
        } else if p.y == q.y && p.y != F::Element::zero() {
            let three = F::Element::from_small(3);
            let two = F::Element::from_small(2);
            (three * p.x * p.x + self.a, two * p.y)
        } else {
            return Slope::Vertical;
        };

        match f.inverse_of(f.reduce(denominator)) {
            Some(inverse) => {
                let m = f.reduce(f.reduce(numerator) * inverse);
                if m.is_finite() {
                    Slope::Finite(m)
                } else {
                    Slope::Vertical
                }
            }
            None => Slope::Vertical,
        }
    }

    /// Group addition
    pub fn add(&self, p: &Point<F::Element>, q: &Point<F::Element>) -> Point<F::Element> {
        let (p, q) = match (p, q) {
            (Point::Infinity, _) => return *q,
            (_, Point::Infinity) => return *p,
            (Point::Affine(p), Point::Affine(q)) => (p, q),
        };

        let m = match self.slope(p, q) {
            Slope::Finite(m) => m,
            Slope::Vertical => return Point::Infinity,
        };

        let f = self.field;
        let x3 = f.reduce(m * m - p.x - q.x);
        let y3 = f.reduce(m * (p.x - x3) - p.y);
        Point::new(x3, y3)
    }

    /// Point doubling, `add(p, p)`
    pub fn double(&self, p: &Point<F::Element>) -> Point<F::Element> {
        self.add(p, p)
    }

    /// Scalar multiplication n·P by double-and-add, least significant bit
    /// first. Negative n multiplies the negated point.
    pub fn multiply(&self, n: i64, p: &Point<F::Element>) -> Point<F::Element> {
        let mut addend = if n < 0 { self.negate(p) } else { *p };
        let mut n = n.unsigned_abs();
        let mut acc = Point::Infinity;

        while n != 0 {
            if n & 1 == 1 {
                acc = self.add(&addend, &acc);
            }
            addend = self.double(&addend);
            n >>= 1;
        }

        acc
    }
}
