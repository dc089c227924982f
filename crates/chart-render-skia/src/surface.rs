// File: crates/chart-render-skia/src/surface.rs
// Summary: Skia CPU raster surface implementing the chart drawing contract.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use barchart_core::{ChartError, Color, Point, Rect, Stroke, Surface, TextStyle};
use skia_safe as skia;
use tracing::{error, trace};

pub struct SkiaSurface {
    surface: skia::Surface,
    width: u32,
    height: u32,
    font_mgr: skia::FontMgr,
    // family name -> resolved typeface (None when the family is unknown)
    typefaces: HashMap<String, Option<skia::Typeface>>,
}

impl SkiaSurface {
    /// Allocate a transparent `width` x `height` raster surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let surface = raster(width, height)?;
        Ok(Self {
            surface,
            width,
            height,
            font_mgr: skia::FontMgr::default(),
            typefaces: HashMap::new(),
        })
    }

    /// Encode the current pixels as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the current pixels to `path` as PNG, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, bytes)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let (w, h) = (self.width as i32, self.height as i32);
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("pixel readback failed");
        }
        Ok(pixels)
    }

    fn font(&mut self, family: &str, size: f32) -> skia::Font {
        let font_mgr = &self.font_mgr;
        let typeface = self
            .typefaces
            .entry(family.to_string())
            .or_insert_with(|| {
                let style = skia::FontStyle::normal();
                font_mgr
                    .match_family_style(family, style)
                    .or_else(|| font_mgr.legacy_make_typeface(None::<&str>, style))
            })
            .clone();
        match typeface {
            Some(tf) => skia::Font::from_typeface(tf, size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }
}

fn raster(width: u32, height: u32) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
        .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
    surface.canvas().clear(skia::Color::TRANSPARENT);
    Ok(surface)
}

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.alpha_u8(), c.r, c.g, c.b)
}

fn sk_rect(r: Rect) -> skia::Rect {
    // canvas rectangles with negative extents cover the same pixels as their normalized form
    skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32).sorted()
}

fn sk_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk_color(color));
    paint
}

fn stroke_paint(stroke: Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(sk_color(stroke.color));
    paint
}

impl Surface for SkiaSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) -> barchart_core::Result<()> {
        let surface = raster(width, height).map_err(|e| {
            error!("keeping {}x{} surface: {e:#}", self.width, self.height);
            ChartError::SurfaceAllocation { width, height }
        })?;
        self.surface = surface;
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn clear_rect(&mut self, rect: Rect) {
        let mut paint = skia::Paint::default();
        paint.set_blend_mode(skia::BlendMode::Clear);
        self.surface.canvas().draw_rect(sk_rect(rect), &paint);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.surface.canvas().draw_rect(sk_rect(rect), &fill_paint(color));
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.surface.canvas().draw_rect(sk_rect(rect), &stroke_paint(stroke));
    }

    fn fill_arc(&mut self, center: Point, radius: f64, start: f64, end: f64, color: Color) {
        let oval = skia::Rect::from_xywh(
            (center.x - radius) as f32,
            (center.y - radius) as f32,
            (radius * 2.0) as f32,
            (radius * 2.0) as f32,
        );
        let start_deg = start.to_degrees() as f32;
        let sweep_deg = (end - start).to_degrees() as f32;
        self.surface.canvas().draw_arc(oval, start_deg, sweep_deg, true, &fill_paint(color));
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.surface.canvas().draw_line(sk_point(from), sk_point(to), &stroke_paint(stroke));
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let font = self.font(&style.font.family, style.font.size_px);
        let paint = fill_paint(style.color);
        let (advance, _) = font.measure_str(text, Some(&paint));
        let x = at.x as f32 + style.align.offset(advance);
        trace!(text, x, y = at.y, "text");
        self.surface.canvas().draw_str(text, (x, at.y as f32), &font, &paint);
    }

    fn save(&mut self) {
        self.surface.canvas().save();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.surface.canvas().translate((dx as f32, dy as f32));
    }

    fn rotate(&mut self, radians: f64) {
        self.surface.canvas().rotate(radians.to_degrees() as f32, None);
    }

    fn restore(&mut self) {
        self.surface.canvas().restore();
    }
}
