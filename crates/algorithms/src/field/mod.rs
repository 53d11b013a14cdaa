//! Field models the group law is instantiated with
//!
//! Both models implement [`FieldModel`](ecviz_api::FieldModel):
//!
//! - [`RealField`]: the real plane, identity reduction and division,
//! - [`ModularField`]: the integers modulo k in the symmetric residue range
//!   `[-⌊k/2⌋, -⌊k/2⌋ + k - 1]`.

mod modular;
mod real;

pub use modular::{field_residues, ModularField};
pub use real::RealField;
