// File: crates/chart-core/src/grid.rs
// Summary: Gridline/tick layout helpers for the Y-axis scale.

/// Upper bound on gridlines per chart; datasets needing more are rejected.
pub const MAX_TICKS: usize = 10_000;

/// Tick spacing for a dataset whose maximum is `max`.
pub fn tick_step(max: f64) -> f64 {
    if max < 10.0 {
        1.0
    } else if max < 200.0 {
        10.0
    } else {
        100.0
    }
}

/// Tick values from 0 up to and including `max`, at most [`MAX_TICKS`] of them.
pub fn ticks(max: f64) -> Vec<f64> {
    let count = tick_count(max).min(MAX_TICKS);
    if count == 0 {
        return Vec::new();
    }
    let step = tick_step(max);
    // integer stepping keeps 0.1-style float drift out of the labels
    (0..count).map(|i| i as f64 * step).collect()
}

/// Number of ticks `ticks(max)` yields: `floor(max / step) + 1`.
pub fn tick_count(max: f64) -> usize {
    if !max.is_finite() || max < 0.0 {
        return 0;
    }
    // float-to-int casts saturate, so huge maxima land on usize::MAX
    ((max / tick_step(max)).floor() as usize).saturating_add(1)
}

/// Label text for a tick value; integral values print without a fraction.
pub fn tick_label(value: f64) -> String {
    format!("{value}")
}
