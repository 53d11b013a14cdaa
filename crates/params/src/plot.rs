//! Constants for plotting curves

/// Number of samples across the viewport width when tracing a real curve
pub const PLOT_RESOLUTION: usize = 256;

/// Viewport margin, as a fraction of the data range, in the real plane
pub const REAL_MARGIN_FACTOR: f64 = 1.0 / 8.0;

/// Viewport margin in the modular plane (the residue square is shown exactly)
pub const MODULAR_MARGIN_FACTOR: f64 = 0.0;

/// Margin used on both axes when every interesting point coincides
pub const DEGENERATE_VIEWPORT_MARGIN: f64 = 5.0;

/// Decimal exponent snapped real coordinates are rounded to (10^-5)
pub const ROUNDING_EXPONENT: i32 = -5;

/// Companion point added to the real viewport when only one point would
/// otherwise define it
pub const LONE_POINT_COMPANION: (f64, f64) = (1.0, 0.0);

/// Upper bound on samples traced along one branch of a real curve, whatever
/// the viewport width
pub const MAX_BRANCH_SAMPLES: usize = 1 << 16;
