// File: crates/chart-core/src/bars.rs
// Summary: Bar and category slot layout within the plot area.

use crate::error::Result;
use crate::geometry::{PlotArea, Point, Rect};
use crate::scale::{max_value, ValueScale};
use crate::types::CATEGORY_OFFSET;

/// Side padding used while bars stay narrow.
pub const NARROW_PADDING: f64 = 10.0;
/// Side padding used once bars would get wider than [`WIDE_THRESHOLD`].
pub const WIDE_PADDING: f64 = 50.0;
pub const WIDE_THRESHOLD: f64 = 80.0;

/// Horizontal layout shared by every bar of a dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    /// Width of the slot each bar is centered in: plot width / N.
    pub slot_width: f64,
    /// Empty space on each side of the bar inside its slot.
    pub side_padding: f64,
    pub bar_width: f64,
}

impl BarLayout {
    /// Two-tier padding: with narrow padding, a bar whose width minus one
    /// padding exceeds the threshold switches to wide padding. Exactly at
    /// the threshold stays narrow.
    pub fn compute(count: usize, plot_width: f64) -> Self {
        let slot_width = plot_width / count.max(1) as f64;
        let narrow = slot_width - NARROW_PADDING * 2.0;
        let side_padding = if narrow - NARROW_PADDING > WIDE_THRESHOLD {
            WIDE_PADDING
        } else {
            NARROW_PADDING
        };
        Self { slot_width, side_padding, bar_width: slot_width - side_padding * 2.0 }
    }

    /// Left edge of bar `index`.
    pub fn bar_x(&self, plot: &PlotArea, index: usize) -> f64 {
        plot.left() + index as f64 * self.slot_width + self.side_padding
    }
}

/// Rectangles for every value, anchored on the plot bottom. Heights are
/// proportional to the value; the dataset maximum reaches the plot top.
pub fn bar_rects(values: &[f64], plot: &PlotArea) -> Result<Vec<Rect>> {
    let max = max_value(values).unwrap_or(0.0);
    let scale = ValueScale::new(plot, max)?;
    let layout = BarLayout::compute(values.len(), plot.width);
    Ok(values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let h = scale.height_of(v);
            Rect::from_xywh(layout.bar_x(plot, i), scale.to_px(v), layout.bar_width, h)
        })
        .collect())
}

/// Baseline anchors for `count` category labels, each centered in its slot.
/// Slots are derived from the label count, not the dataset length.
pub fn category_anchors(count: usize, plot: &PlotArea) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let slot = plot.width / count as f64;
    let y = plot.bottom() + CATEGORY_OFFSET;
    (0..count)
        .map(|i| Point::new(plot.left() + slot / 2.0 + i as f64 * slot, y))
        .collect()
}
