//! Elliptic-curve arithmetic and plot geometry
//!
//! This crate implements the chord-and-tangent group law of short Weierstrass
//! curves y² = x³ + ax + b once, over a [`FieldModel`](ecviz_api::FieldModel),
//! and builds the geometry a visualizer needs on top of it:
//!
//! - [`cubic_roots`]: real roots of x³ + ax + b
//! - [`GroupLaw`]: negation, addition, doubling and scalar multiplication
//! - [`RealCurve`] and the [`geometry::real`] helpers: branch tracing, chords
//!   and snapping in the real plane
//! - [`ModularCurve`] and the [`geometry::modular`] helpers: point
//!   enumeration, wrapped chords, snapping and subgroup orders modulo k
//! - [`Viewport`]: plot bounds around a set of points

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error types are shared with the rest of the workspace
pub use ecviz_api::{validate, Error, Result};

pub mod config;
pub use config::PlotConfig;

pub mod cubic;
pub use cubic::cubic_roots;

pub mod field;
pub use field::{field_residues, ModularField, RealField};

pub mod group;
pub use group::GroupLaw;

pub mod geometry;
pub use geometry::{ModularCurve, RealCurve, Viewport};
