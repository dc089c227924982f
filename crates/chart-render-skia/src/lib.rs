// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate; CPU raster surfaces with text, arcs and PNG encoding.

pub mod host;
pub mod surface;

pub use host::SkiaHost;
pub use surface::SkiaSurface;
