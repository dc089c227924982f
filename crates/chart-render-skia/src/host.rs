// File: crates/chart-render-skia/src/host.rs
// Summary: Registry of named raster surfaces, resolved on demand.

use std::collections::HashMap;

use barchart_core::SurfaceHost;
use tracing::warn;

use crate::surface::SkiaSurface;

/// Surfaces are declared by id with an initial size and allocated on
/// resolution. Unknown ids, and ids whose allocation fails, do not resolve.
#[derive(Debug, Default)]
pub struct SkiaHost {
    declared: HashMap<String, (u32, u32)>,
}

impl SkiaHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, id: impl Into<String>, width: u32, height: u32) -> &mut Self {
        self.declared.insert(id.into(), (width, height));
        self
    }
}

impl SurfaceHost for SkiaHost {
    type Surface = SkiaSurface;

    fn resolve(&mut self, id: &str) -> Option<SkiaSurface> {
        let &(w, h) = self.declared.get(id)?;
        SkiaSurface::new(w, h).inspect_err(|e| warn!(id, "surface allocation failed: {e:#}")).ok()
    }
}
