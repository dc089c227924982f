// File: crates/chart-core/src/labels.rs
// Summary: Title and axis label text with their anchor positions.

use crate::geometry::{PlotArea, Point};
use crate::types::{Insets, TITLE_OFFSET};

/// Text kept across redraws; `None` draws nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels {
    pub title: Option<String>,
    pub x_axis: Option<String>,
    pub y_axis: Option<String>,
}

/// Title baseline, left aligned with the plot's left edge.
pub fn title_anchor(insets: &Insets) -> Point {
    Point::new(insets.left as f64, insets.top as f64 - TITLE_OFFSET)
}

/// X label center, two thirds of the way into the bottom inset.
pub fn x_label_anchor(plot: &PlotArea, insets: &Insets) -> Point {
    Point::new(plot.center_x(), plot.bottom() + insets.bottom as f64 * 2.0 / 3.0)
}

/// Y label rotation origin, two fifths into the left inset at the plot's vertical middle.
pub fn y_label_anchor(plot: &PlotArea, insets: &Insets) -> Point {
    Point::new(insets.left as f64 / 5.0 * 2.0, plot.center_y())
}
