//! Curve geometry for the real and modular planes
//!
//! The two planes share only the [`Viewport`] and the
//! [`PlotVertex`](ecviz_api::PlotVertex) polyline vocabulary; each has its own
//! curve model and operations:
//!
//! - [`real`]: roots, stationary points, curve tracing, chord segments and
//!   snapping edited points onto the curve,
//! - [`modular`]: point enumeration, wrapped chords on the residue torus,
//!   nearest-point snapping and subgroup orders.

pub mod modular;
pub mod real;
pub mod viewport;

pub use modular::ModularCurve;
pub use real::RealCurve;
pub use viewport::Viewport;
