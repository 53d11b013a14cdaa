//! The real plane

use ecviz_api::FieldModel;

/// Arithmetic over the reals: reduction is the identity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RealField;

impl FieldModel for RealField {
    type Element = f64;

    #[inline]
    fn reduce(&self, value: f64) -> f64 {
        value
    }

    fn inverse_of(&self, value: f64) -> Option<f64> {
        if value == 0.0 {
            return None;
        }
        let inverse = 1.0 / value;
        inverse.is_finite().then_some(inverse)
    }
}
