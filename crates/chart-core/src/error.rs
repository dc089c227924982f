// File: crates/chart-core/src/error.rs
// Summary: Error type for chart configuration and surface binding.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("drawing surface '{0}' not found")]
    SurfaceNotFound(String),
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("dataset maximum must be positive, got {0}")]
    NonPositiveMaximum(f64),
    #[error("value at index {index} is not finite ({value})")]
    NonFiniteValue { index: usize, value: f64 },
    #[error("invalid color '{0}'")]
    InvalidColor(String),
    #[error("dataset maximum needs {count} gridlines; at most {limit} are drawn")]
    TooManyTicks { count: usize, limit: usize },
    #[error("drawing surface could not be allocated at {width}x{height}")]
    SurfaceAllocation { width: u32, height: u32 },
    #[error("surface dimensions must be non-zero")]
    ZeroDimension,
    #[error("plot area would be {width}x{height}; surface too small for the configured insets")]
    PlotAreaTooSmall { width: f64, height: f64 },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
