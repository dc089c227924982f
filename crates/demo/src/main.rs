// File: crates/demo/src/main.rs
// Summary: Demo loads a category/value CSV (or a built-in sample) and renders bar chart PNGs.

use anyhow::{Context, Result};
use barchart_core::{theme, BarChart, ChartOptions};
use barchart_render_skia::SkiaSurface;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // usage: barchart-demo [data.csv] [theme]
    let mut args = std::env::args().skip(1);
    let input = args.next().map(PathBuf::from);
    let theme = theme::find(args.next().as_deref().unwrap_or("classic"));

    let (stem, rows) = match &input {
        Some(path) => {
            let rows = load_rows(path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (stem, rows)
        }
        None => {
            info!("no input given, using built-in quarterly sample");
            ("quarterly".to_string(), sample_rows())
        }
    };
    info!(rows = rows.len(), theme = theme.name, "loaded");
    if rows.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }

    let (categories, values): (Vec<String>, Vec<f64>) = rows.into_iter().unzip();

    let opts = ChartOptions { theme, ..ChartOptions::default() };
    let surface = SkiaSurface::new(opts.width, opts.height)?;
    let mut chart = BarChart::with_options(surface, opts)?;
    chart.set_data(values)?;
    chart.set_categories(categories);
    chart.set_title(stem.clone());
    chart.set_x_axis_label("Category");
    chart.set_y_axis_label("Value");

    let out = out_name_with(&stem, "bars");
    chart.surface_mut().write_png(&out)?;
    info!("wrote {}", out.display());

    let colors = chart.set_random_colors();
    let out_random = out_name_with(&stem, "random");
    chart.surface_mut().write_png(&out_random)?;
    info!(
        colors = %colors.iter().map(|c| c.to_hex()).collect::<Vec<_>>().join(" "),
        "wrote {}",
        out_random.display()
    );

    Ok(())
}

/// Produce output file name like target/out/barchart_<stem>_<suffix>.png
fn out_name_with(stem: &str, suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("barchart_{stem}_{suffix}.png"));
    out
}

fn sample_rows() -> Vec<(String, f64)> {
    [("Q1", 5.0), ("Q2", 80.0), ("Q3", 45.0), ("Q4", 10.0)]
        .into_iter()
        .map(|(c, v)| (c.to_string(), v))
        .collect()
}

/// Load `category,value` rows. Header names are matched loosely; without a
/// recognized header the first two columns are used.
fn load_rows(path: &Path) -> Result<Vec<(String, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_cat = idx(&["category", "label", "name", "x"]).unwrap_or(0);
    let i_val = idx(&["value", "y", "count", "amount", "total"]).unwrap_or(1);

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let cat = rec.get(i_cat).map(str::trim).unwrap_or_default();
        match rec.get(i_val).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(v) => out.push((cat.to_string(), v)),
            None => warn!(line = line + 2, "skipping row without a numeric value"),
        }
    }
    Ok(out)
}
