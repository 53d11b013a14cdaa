//! Common helpers shared across the ecviz engine
//!
//! Leaf utilities with no knowledge of curves: integer number theory for the
//! modular field (inverse, primality) and the floating-point helpers the real
//! geometry relies on (decimal rounding, sorted de-duplication).

#![forbid(unsafe_code)]

pub mod math_common;
pub mod numeric;

pub use math_common::{is_prime, mod_inverse};
pub use numeric::{round_to_exp, sort_unique};
