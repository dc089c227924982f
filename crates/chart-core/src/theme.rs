// File: crates/chart-core/src/theme.rs
// Summary: Color themes for the fixed chart layers, with named presets.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub border: Color,
    pub axis_line: Color,
    pub grid: Color,
    pub tick: Color,
    pub tick_label: Color,
    pub category_label: Color,
    pub title: Color,
    pub axis_label: Color,
    pub bar: Color,
}

impl Theme {
    /// Light gray border, black axes, green translucent bars.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            border: Color::rgb(0xDD, 0xDD, 0xDD),
            axis_line: Color::BLACK,
            grid: Color::rgb(0xCC, 0xCC, 0xCC),
            tick: Color::BLACK,
            tick_label: Color::BLACK,
            category_label: Color::BLACK,
            title: Color::rgb(0x33, 0x33, 0x33),
            axis_label: Color::BLACK,
            bar: Color::rgba(34, 145, 23, 0.5),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            border: Color::rgb(40, 40, 45),
            axis_line: Color::rgb(180, 180, 190),
            grid: Color::rgb(60, 60, 68),
            tick: Color::rgb(150, 150, 160),
            tick_label: Color::rgb(210, 210, 220),
            category_label: Color::rgb(210, 210, 220),
            title: Color::rgb(235, 235, 245),
            axis_label: Color::rgb(235, 235, 245),
            bar: Color::rgb(64, 160, 255),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            border: Color::BLACK,
            axis_line: Color::BLACK,
            grid: Color::rgb(0x88, 0x88, 0x88),
            tick: Color::BLACK,
            tick_label: Color::BLACK,
            category_label: Color::BLACK,
            title: Color::BLACK,
            axis_label: Color::BLACK,
            bar: Color::rgb(0x00, 0x55, 0xFF),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
