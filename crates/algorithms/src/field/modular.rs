//! The integers modulo k in symmetric representation

use ecviz_api::{validate, FieldModel, Result};
use ecviz_common::{is_prime, mod_inverse};
use ecviz_params::{MAX_MODULUS, MIN_MODULUS};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Arithmetic modulo k with representatives in `[min, max]`,
/// `min = -⌊k/2⌋`, `max = min + k - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ModularField {
    k: i64,
    min: i64,
    max: i64,
}

impl ModularField {
    /// Create the field descriptor for modulus `k`
    pub fn new(k: u64) -> Result<Self> {
        validate::range(k, MIN_MODULUS, MAX_MODULUS, "k")?;

        let k = k as i64;
        let min = -(k / 2);
        Ok(Self {
            k,
            min,
            max: min + k - 1,
        })
    }

    /// The modulus k
    pub fn modulus(&self) -> i64 {
        self.k
    }

    /// Number of residues, which is also k
    pub fn order(&self) -> u64 {
        self.k as u64
    }

    /// Smallest representative, `-⌊k/2⌋`
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Largest representative, `min + k - 1`
    pub fn max(&self) -> i64 {
        self.max
    }

    /// All k representatives in ascending order
    pub fn residues(&self) -> Vec<i64> {
        (self.min..=self.max).collect()
    }

    /// Whether k is prime, i.e. whether this is a field
    pub fn is_prime(&self) -> bool {
        is_prime(self.k as u64)
    }

    /// Whether a value is already a representative
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl FieldModel for ModularField {
    type Element = i64;

    fn reduce(&self, value: i64) -> i64 {
        let mut r = value % self.k;
        if r < self.min {
            r += self.k;
        } else if r > self.max {
            r -= self.k;
        }
        r
    }

    fn inverse_of(&self, value: i64) -> Option<i64> {
        mod_inverse(value, self.k).map(|inv| self.reduce(inv))
    }
}

/// Symmetric residues modulo `k`: exactly k ascending integers starting at
/// `-⌊k/2⌋`
pub fn field_residues(k: u64) -> Result<Vec<i64>> {
    ModularField::new(k).map(|field| field.residues())
}
