// File: crates/chart-core/src/color.rs
// Summary: RGBA color value with CSS-style parsing (#RRGGBB, #RGB, rgb(), rgba()).

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Straight (non-premultiplied) RGBA color; alpha in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha scaled to a byte, for backends that take 8-bit channels.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// `#RRGGBB` with uppercase digits, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8))
            }
            3 => {
                let v = u16::from_str_radix(hex, 16).ok()?;
                let expand = |n: u16| ((n & 0xF) * 17) as u8;
                Some(Self::rgb(expand(v >> 8), expand(v >> 4), expand(v)))
            }
            _ => None,
        }
    }

    fn parse_functional(body: &str, with_alpha: bool) -> Option<Self> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return None;
        }
        let channel = |s: &str| -> Option<u8> {
            let v: f64 = s.parse().ok()?;
            if !(0.0..=255.0).contains(&v) {
                return None;
            }
            Some(v.round() as u8)
        };
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = if with_alpha {
            let a: f32 = parts[3].parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            a
        } else {
            1.0
        };
        Some(Self::rgba(r, g, b, a))
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let parsed = if let Some(hex) = lower.strip_prefix('#') {
            Self::parse_hex(hex)
        } else if let Some(body) = lower.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            Self::parse_functional(body, true)
        } else if let Some(body) = lower.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            Self::parse_functional(body, false)
        } else {
            None
        };
        parsed.ok_or_else(|| ChartError::InvalidColor(trimmed.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_hex())
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}
