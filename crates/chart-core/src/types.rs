// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: u32 = 600;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 300;

/// Thickness of the rounded border drawn around the whole surface.
pub const BORDER_THICKNESS: f64 = 10.0;
/// Stroke width shared by axes, tick marks, gridlines and bar outlines.
pub const LINE_WIDTH: f64 = 2.0;
/// Length of a tick mark to the left of the Y axis.
pub const TICK_LENGTH: f64 = 10.0;
/// Distance between the plot bottom and the category label baseline.
pub const CATEGORY_OFFSET: f64 = 16.0;
/// Distance between the title baseline and the top padding edge.
pub const TITLE_OFFSET: f64 = 20.0;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 {
        self.left + self.right
    }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 {
        self.top + self.bottom
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(100, 20, 60, 70)
    }
}
