//! Plot viewport sizing

use ecviz_api::AffinePoint;
use ecviz_params::DEGENERATE_VIEWPORT_MARGIN;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Visible rectangle of the plot
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Viewport {
    /// Left edge
    pub x_min: f64,
    /// Right edge
    pub x_max: f64,
    /// Bottom edge
    pub y_min: f64,
    /// Top edge
    pub y_max: f64,
}

impl Viewport {
    /// Width of the viewport
    pub fn x_range(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the viewport
    pub fn y_range(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether a point lies inside (edges included)
    pub fn contains(&self, p: &AffinePoint<f64>) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Smallest square-aspect viewport enclosing `points` with a margin.
    ///
    /// See [`Viewport::enclosing_with`]; the degenerate fallback margin is
    /// `DEGENERATE_VIEWPORT_MARGIN`.
    pub fn enclosing<'a, I>(points: I, margin_factor: f64) -> Self
    where
        I: IntoIterator<Item = &'a AffinePoint<f64>>,
    {
        Self::enclosing_with(points, margin_factor, DEGENERATE_VIEWPORT_MARGIN)
    }

    /// Bounding box of the finite `points` grown by `margin_factor` times its
    /// range on each side, then widened along the narrower axis so that both
    /// spans are equal. A zero factor returns the bare bounding box. When
    /// every point coincides (or none is given) both axes get `fallback` on
    /// each side.
    pub fn enclosing_with<'a, I>(points: I, margin_factor: f64, fallback: f64) -> Self
    where
        I: IntoIterator<Item = &'a AffinePoint<f64>>,
    {
        let mut bounds: Option<Viewport> = None;
        for p in points.into_iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
            bounds = Some(match bounds {
                None => Viewport {
                    x_min: p.x,
                    x_max: p.x,
                    y_min: p.y,
                    y_max: p.y,
                },
                Some(b) => Viewport {
                    x_min: b.x_min.min(p.x),
                    x_max: b.x_max.max(p.x),
                    y_min: b.y_min.min(p.y),
                    y_max: b.y_max.max(p.y),
                },
            });
        }

        let b = bounds.unwrap_or(Viewport {
            x_min: 0.0,
            x_max: 0.0,
            y_min: 0.0,
            y_max: 0.0,
        });

        let (x_range, y_range) = (b.x_range(), b.y_range());
        let (mut x_margin, mut y_margin) = (0.0, 0.0);

        if margin_factor != 0.0 {
            x_margin = margin_factor * x_range;
            y_margin = margin_factor * y_range;

            if y_margin < x_margin {
                y_margin = x_margin + (x_range - y_range) / 2.0;
            } else {
                x_margin = y_margin + (y_range - x_range) / 2.0;
            }
        }

        if x_range == 0.0 && y_range == 0.0 {
            x_margin = fallback;
            y_margin = fallback;
        }

        Viewport {
            x_min: b.x_min - x_margin,
            x_max: b.x_max + x_margin,
            y_min: b.y_min - y_margin,
            y_max: b.y_max + y_margin,
        }
    }
}
