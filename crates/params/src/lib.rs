//! Constant values for the ecviz engine
//!
//! Plot defaults and numeric limits shared by the geometry code and the
//! runtime `PlotConfig`.

#![no_std]

pub mod field;
pub mod plot;

pub use field::*;
pub use plot::*;
