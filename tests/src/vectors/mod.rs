//! Loads the known-answer curve vectors from JSON.

mod model;

pub use model::*;

use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read or parse a vector file
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Directory holding the JSON vectors
fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

/// Read and parse `curves.json`
pub fn load_curve_vectors() -> Result<CurveVectors, VectorError> {
    let path = vectors_dir().join("curves.json");
    let json = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| VectorError::Parse { path, source })
}

static CURVE_VECTORS: Lazy<CurveVectors> =
    Lazy::new(|| load_curve_vectors().unwrap_or_else(|e| panic!("{}", e)));

/// The curve vectors, parsed once per test binary
pub fn curve_vectors() -> &'static CurveVectors {
    &CURVE_VECTORS
}
