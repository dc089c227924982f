// File: crates/chart-core/src/surface.rs
// Summary: Immediate-mode drawing surface the chart paints onto, and the host that resolves it.

use crate::color::Color;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::text::TextStyle;

/// Line style for strokes; passed per call rather than held as context state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// Minimal 2D drawing target.
///
/// Angles are radians measured clockwise from +x in screen space (y grows
/// downward). Transforms set with `translate`/`rotate` apply to subsequent
/// draws until the matching `restore`.
pub trait Surface {
    fn size(&self) -> (u32, u32);
    /// Change the pixel dimensions. Content is discarded. On failure the
    /// surface keeps its previous size and content.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    fn clear_rect(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke);
    /// Fill the wedge bounded by an arc and its center.
    fn fill_arc(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color);
    fn line(&mut self, from: Point, to: Point, stroke: Stroke);
    /// Draw `text` with its baseline at `at.y`, horizontally placed per `style.align`.
    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);

    fn save(&mut self);
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, radians: f64);
    fn restore(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        (**self).resize(width, height)
    }

    fn clear_rect(&mut self, rect: Rect) {
        (**self).clear_rect(rect)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color)
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        (**self).stroke_rect(rect, stroke)
    }

    fn fill_arc(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color) {
        (**self).fill_arc(center, radius, start, end, color)
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        (**self).line(from, to, stroke)
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        (**self).fill_text(text, at, style)
    }

    fn save(&mut self) {
        (**self).save()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        (**self).translate(dx, dy)
    }

    fn rotate(&mut self, radians: f64) {
        (**self).rotate(radians)
    }

    fn restore(&mut self) {
        (**self).restore()
    }
}

/// Environment that owns named drawing surfaces (a page, a window registry,
/// a test fixture). Resolution hands the surface over to the caller.
pub trait SurfaceHost {
    type Surface: Surface;

    fn resolve(&mut self, id: &str) -> Option<Self::Surface>;
}
