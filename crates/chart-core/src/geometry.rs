// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface pixels. Width/height may be negative
/// when produced from caller geometry; no normalization happens here.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { x: left, y: top, width: right - left, height: bottom - top }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// The region inside the insets where axes, gridlines and bars live.
/// Recomputed from the surface size on every redraw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_surface(width: u32, height: u32, insets: &Insets) -> Self {
        Self {
            x: insets.left as f64,
            y: insets.top as f64,
            width: width as f64 - insets.hsum() as f64,
            height: height as f64 - insets.vsum() as f64,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn as_rect(&self) -> Rect {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }
}

/// Corner of the surface a border cap sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Start and end angle (radians, clockwise from +x in screen space) of
    /// the quarter circle filling this corner.
    pub fn arc_angles(self) -> (f64, f64) {
        match self {
            Corner::TopRight => (3.0 * FRAC_PI_2, 2.0 * PI),
            Corner::TopLeft => (PI, 3.0 * FRAC_PI_2),
            Corner::BottomLeft => (FRAC_PI_2, PI),
            Corner::BottomRight => (0.0, FRAC_PI_2),
        }
    }

    /// Center of the cap for a surface of `width` x `height` inset by `margin`.
    pub fn center(self, width: f64, height: f64, margin: f64) -> Point {
        match self {
            Corner::TopRight => Point::new(width - margin, margin),
            Corner::TopLeft => Point::new(margin, margin),
            Corner::BottomLeft => Point::new(margin, height - margin),
            Corner::BottomRight => Point::new(width - margin, height - margin),
        }
    }
}
