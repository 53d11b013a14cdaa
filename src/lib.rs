//! # ecviz
//!
//! An engine for interactive elliptic-curve explorers over the reals and over
//! the integers modulo k.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecviz = "0.4"
//! ```
//!
//! ## Features
//!
//! - `scene` (default): view-facing page evaluators, implies `algorithms`
//! - `algorithms`: group law, cubic roots and curve geometry
//! - `serde`: serializable inputs, configuration and views
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecviz-api`]: point types, the field model trait and the error type
//! - [`ecviz-common`]: number-theory and rounding helpers
//! - [`ecviz-params`]: plotting and modulus constants
//! - [`ecviz-algorithms`]: the group law and curve geometry
//! - [`ecviz-scene`]: explorer page evaluators

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use ecviz_api as api;
pub use ecviz_common as common;
pub use ecviz_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ecviz_algorithms as algorithms;

#[cfg(feature = "scene")]
pub use ecviz_scene as scene;

/// Common imports for ecviz users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Point and curve types
    pub use crate::api::{AffinePoint, CurveParams, PlotVertex, Point, Slope};

    // Core traits
    pub use crate::api::{Coordinate, FieldModel};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        GroupLaw, ModularCurve, ModularField, PlotConfig, RealCurve, RealField, Viewport,
    };

    #[cfg(feature = "scene")]
    pub use crate::scene::{PointInput, Scene};
}
