// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the bar chart component and surface contract.

pub mod bars;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod labels;
pub mod random;
pub mod recording;
pub mod scale;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use bars::{bar_rects, category_anchors, BarLayout};
pub use chart::{BarChart, ChartOptions};
pub use color::Color;
pub use error::{ChartError, Result};
pub use geometry::{Corner, PlotArea, Point, Rect};
pub use grid::{tick_count, tick_step, ticks, MAX_TICKS};
pub use labels::Labels;
pub use random::{random_hex_color, ColorSource, RandomHexColors};
pub use recording::{DrawCommand, RecordingHost, RecordingSurface};
pub use scale::ValueScale;
pub use surface::{Stroke, Surface, SurfaceHost};
pub use text::{FontSpec, Fonts, TextAlign, TextStyle};
pub use theme::Theme;
