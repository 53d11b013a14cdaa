//! Shapes of the curve vector file

use ecviz_api::AffinePoint;
use serde::Deserialize;

/// The whole vector file
#[derive(Debug, Clone, Deserialize)]
pub struct CurveVectors {
    pub real: RealVectors,
    pub modular: Vec<ModularVector>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RealVectors {
    pub roots: Vec<RootVector>,
    pub stationary: Vec<StationaryVector>,
    pub multiples: Vec<RealMultiples>,
}

/// Real roots of x³ + ax + b, ascending
#[derive(Debug, Clone, Deserialize)]
pub struct RootVector {
    pub a: f64,
    pub b: f64,
    pub roots: Vec<f64>,
    pub singular: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationaryVector {
    pub a: f64,
    pub b: f64,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RealMultiples {
    pub a: f64,
    pub b: f64,
    pub point: [f64; 2],
    pub results: Vec<Multiple<f64>>,
}

/// n·P, `None` for the point at infinity
#[derive(Debug, Clone, Deserialize)]
pub struct Multiple<E> {
    pub n: i64,
    pub point: Option<[E; 2]>,
}

/// A curve modulo k with its complete point set
#[derive(Debug, Clone, Deserialize)]
pub struct ModularVector {
    pub a: i64,
    pub b: i64,
    pub k: u64,
    pub singular: bool,
    pub prime: bool,
    pub order: u64,
    pub points: Vec<[i64; 2]>,
    #[serde(default)]
    pub subgroup_orders: Vec<SubgroupOrder>,
    #[serde(default)]
    pub multiples: Option<ModularMultiples>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubgroupOrder {
    pub point: [i64; 2],
    pub order: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModularMultiples {
    pub point: [i64; 2],
    pub results: Vec<Multiple<i64>>,
}

/// Affine point from a `[x, y]` pair
pub fn affine<E: Copy>(pair: [E; 2]) -> AffinePoint<E> {
    AffinePoint::new(pair[0], pair[1])
}
