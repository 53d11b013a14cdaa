//! Runtime plot configuration

use ecviz_api::{validate, Result};
use ecviz_params::{
    DEGENERATE_VIEWPORT_MARGIN, MODULAR_MARGIN_FACTOR, PLOT_RESOLUTION, REAL_MARGIN_FACTOR,
    ROUNDING_EXPONENT,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knobs for curve tracing, viewport sizing and snapping.
///
/// Defaults come from `ecviz-params`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotConfig {
    /// Samples across the viewport width for real curves
    pub resolution: usize,
    /// Viewport margin as a fraction of the data range, real plane
    pub real_margin_factor: f64,
    /// Viewport margin as a fraction of the data range, modular plane
    pub modular_margin_factor: f64,
    /// Margin used when the data collapses to a single point
    pub degenerate_margin: f64,
    /// Snapped real coordinates are rounded to multiples of 10^exponent
    pub rounding_exponent: i32,
    /// Draw wrapped modular lines along the axis with the shallower slope
    pub prefer_shallow_slopes: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            resolution: PLOT_RESOLUTION,
            real_margin_factor: REAL_MARGIN_FACTOR,
            modular_margin_factor: MODULAR_MARGIN_FACTOR,
            degenerate_margin: DEGENERATE_VIEWPORT_MARGIN,
            rounding_exponent: ROUNDING_EXPONENT,
            prefer_shallow_slopes: true,
        }
    }
}

// Builder methods for easy customization
impl PlotConfig {
    /// Samples across the viewport width
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Margin factors for the real and modular planes
    pub fn with_margins(mut self, real: f64, modular: f64) -> Self {
        self.real_margin_factor = real;
        self.modular_margin_factor = modular;
        self
    }

    /// Fallback margin for collapsed data
    pub fn with_degenerate_margin(mut self, margin: f64) -> Self {
        self.degenerate_margin = margin;
        self
    }

    /// Decimal exponent of snapped real coordinates
    pub fn with_rounding_exponent(mut self, exponent: i32) -> Self {
        self.rounding_exponent = exponent;
        self
    }

    /// Whether wrapped lines may be drawn along the y axis
    pub fn with_shallow_slopes(mut self, prefer: bool) -> Self {
        self.prefer_shallow_slopes = prefer;
        self
    }

    /// Check that every knob is usable
    pub fn validate(&self) -> Result<()> {
        validate::parameter(self.resolution > 0, "resolution", "must be at least 1")?;
        validate::finite(self.real_margin_factor, "real_margin_factor")?;
        validate::parameter(self.real_margin_factor >= 0.0, "real_margin_factor", "must not be negative")?;
        validate::finite(self.modular_margin_factor, "modular_margin_factor")?;
        validate::parameter(self.modular_margin_factor >= 0.0, "modular_margin_factor", "must not be negative")?;
        validate::finite(self.degenerate_margin, "degenerate_margin")?;
        validate::parameter(self.degenerate_margin > 0.0, "degenerate_margin", "must be positive")?;
        validate::range(self.rounding_exponent, -15, 15, "rounding_exponent")
    }
}
