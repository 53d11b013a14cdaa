//! The field capability injected into the group law

use super::Coordinate;

/// Arithmetic context of a curve: how values are normalised and inverted.
///
/// The real plane reduces by identity and inverts by division. The integers
/// modulo k reduce to the symmetric residue range and invert with the
/// extended Euclidean algorithm. `inverse_of` returning `None` is the
/// "no inverse" sentinel: zero in the reals, a value sharing a factor with k
/// in the modular case.
pub trait FieldModel {
    /// Coordinate type of points over this field
    type Element: Coordinate;

    /// Map a value to its canonical representative
    fn reduce(&self, value: Self::Element) -> Self::Element;

    /// Multiplicative inverse, already reduced
    fn inverse_of(&self, value: Self::Element) -> Option<Self::Element>;

    /// The canonical representative of one
    fn one(&self) -> Self::Element {
        self.reduce(Self::Element::from_small(1))
    }
}
