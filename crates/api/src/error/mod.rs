//! Error handling for the ecviz engine
//!
//! Arithmetic and geometry operations are total and report degenerate
//! outcomes through sentinels (`Point::Infinity`, `Slope::Vertical`, a `None`
//! inverse). Errors only surface where inputs are validated: field and curve
//! construction, plot configuration, and the guarded subgroup order.

mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};
