//! Test support for the ecviz workspace
//!
//! Holds the known-answer curve vectors shared by the integration and
//! property tests under `tests/`.

pub mod vectors;
