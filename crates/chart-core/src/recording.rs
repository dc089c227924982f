// File: crates/chart-core/src/recording.rs
// Summary: Surface that records draw calls as values, for tests and headless inspection.

use std::collections::HashMap;

use crate::color::Color;
use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect};
use crate::surface::{Stroke, Surface, SurfaceHost};
use crate::text::TextStyle;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect(Rect),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, stroke: Stroke },
    FillArc { center: Point, radius: f64, start: f64, end: f64, color: Color },
    Line { from: Point, to: Point, stroke: Stroke },
    Text { text: String, at: Point, style: TextStyle },
    Save,
    Translate { dx: f64, dy: f64 },
    Rotate(f64),
    Restore,
}

/// Records commands in call order. A clear covering the whole surface, or a
/// resize, drops everything recorded so far: those pixels are gone.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    // largest size a resize may allocate, like a backend with bounded memory
    max_size: Option<(u32, u32)>,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, max_size: None, commands: Vec::new() }
    }

    /// Refuse resizes beyond `width` x `height` with `SurfaceAllocation`.
    pub fn with_max_size(mut self, width: u32, height: u32) -> Self {
        self.max_size = Some((width, height));
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Filled rectangles, in draw order. Bars are the only filled rectangles a chart draws.
    pub fn filled_rects(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Point, Point, Stroke)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, stroke } => Some((*from, *to, *stroke)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, at, .. } => Some((text.as_str(), *at)),
                _ => None,
            })
            .collect()
    }

    pub fn lines_with_color(&self, color: Color) -> Vec<(Point, Point, Stroke)> {
        self.lines().into_iter().filter(|(_, _, s)| s.color == color).collect()
    }

    fn covers_surface(&self, rect: &Rect) -> bool {
        rect.x <= 0.0
            && rect.y <= 0.0
            && rect.right() >= self.width as f64
            && rect.bottom() >= self.height as f64
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if let Some((max_w, max_h)) = self.max_size {
            if width > max_w || height > max_h {
                return Err(ChartError::SurfaceAllocation { width, height });
            }
        }
        self.width = width;
        self.height = height;
        self.commands.clear();
        Ok(())
    }

    fn clear_rect(&mut self, rect: Rect) {
        if self.covers_surface(&rect) {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeRect { rect, stroke });
    }

    fn fill_arc(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color) {
        self.commands.push(DrawCommand::FillArc { center, radius, start, end, color });
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            style: style.clone(),
        });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn rotate(&mut self, radians: f64) {
        self.commands.push(DrawCommand::Rotate(radians));
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }
}

/// Named recording surfaces; each id resolves at most once.
#[derive(Debug, Default)]
pub struct RecordingHost {
    surfaces: HashMap<String, RecordingSurface>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_surface(mut self, id: impl Into<String>, surface: RecordingSurface) -> Self {
        self.surfaces.insert(id.into(), surface);
        self
    }
}

impl SurfaceHost for RecordingHost {
    type Surface = RecordingSurface;

    fn resolve(&mut self, id: &str) -> Option<RecordingSurface> {
        self.surfaces.remove(id)
    }
}
