//! Public API traits and types for the ecviz engine
//!
//! This crate provides the vocabulary shared by every ecviz component: the
//! point model (with an explicit point at infinity), chord slopes, plot
//! vertices, curve parameters, the field capability traits the group law is
//! generic over, and the error type.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::*;

pub use traits::{Coordinate, FieldModel};
