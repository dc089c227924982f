// File: crates/chart-core/src/text.rs
// Summary: Font and text style descriptions passed explicitly to every text draw.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Horizontal shift to apply to the anchor for a string `advance` px wide.
    pub fn offset(self, advance: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => -advance / 2.0,
            TextAlign::Right => -advance,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_px: f32) -> Self {
        Self { family: family.into(), size_px: size_px.max(1.0) }
    }

    pub fn arial(size_px: f32) -> Self {
        Self::new("Arial", size_px)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: FontSpec,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(font: FontSpec, color: Color, align: TextAlign) -> Self {
        Self { font, color, align }
    }
}

/// Fonts used by the different text layers of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Fonts {
    pub category: FontSpec,
    pub tick: FontSpec,
    pub title: FontSpec,
    pub axis_label: FontSpec,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            category: FontSpec::arial(12.0),
            tick: FontSpec::arial(12.0),
            title: FontSpec::arial(18.0),
            axis_label: FontSpec::arial(16.0),
        }
    }
}
