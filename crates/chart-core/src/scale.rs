// File: crates/chart-core/src/scale.rs
// Summary: Linear value scale mapping data values onto plot-area pixel heights.

use crate::error::{ChartError, Result};
use crate::geometry::PlotArea;

/// Vertical value scale: 0 sits on the plot bottom, `max` on the plot top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmax: f64,
}

impl ValueScale {
    /// Fails when `vmax` is not a positive finite number; the factor would be
    /// infinite or NaN.
    pub fn new(plot: &PlotArea, vmax: f64) -> Result<Self> {
        if !(vmax.is_finite() && vmax > 0.0) {
            return Err(ChartError::NonPositiveMaximum(vmax));
        }
        Ok(Self { top_px: plot.top(), bottom_px: plot.bottom(), vmax })
    }

    /// Pixels per data unit.
    #[inline]
    pub fn factor(&self) -> f64 {
        (self.bottom_px - self.top_px) / self.vmax
    }

    #[inline]
    pub fn height_of(&self, v: f64) -> f64 {
        v * self.factor()
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.bottom_px - self.height_of(v)
    }
}

/// Largest value in `data`, `None` when empty.
pub fn max_value(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Insets;

    #[test]
    fn maps_zero_to_bottom_and_max_to_top() {
        let plot = PlotArea::from_surface(600, 300, &Insets::default());
        let s = ValueScale::new(&plot, 80.0).unwrap();
        assert_eq!(s.to_px(0.0), 230.0);
        assert!((s.to_px(80.0) - 60.0).abs() < 1e-9);
        assert!((s.factor() - 170.0 / 80.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_maximum() {
        let plot = PlotArea::from_surface(600, 300, &Insets::default());
        assert_eq!(ValueScale::new(&plot, 0.0), Err(ChartError::NonPositiveMaximum(0.0)));
        assert!(ValueScale::new(&plot, f64::NAN).is_err());
    }

    #[test]
    fn max_value_of_empty_is_none() {
        assert_eq!(max_value(&[]), None);
        assert_eq!(max_value(&[3.0, 7.5, 1.0]), Some(7.5));
    }
}
