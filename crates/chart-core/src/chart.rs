// File: crates/chart-core/src/chart.rs
// Summary: BarChart component; owns a drawing surface and repaints it in full on every change.

use std::f64::consts::FRAC_PI_2;

use tracing::{debug, trace, warn};

use crate::bars::{category_anchors, BarLayout};
use crate::color::Color;
use crate::error::{ChartError, Result};
use crate::geometry::{Corner, PlotArea, Point, Rect};
use crate::grid::{tick_count, tick_label, ticks, MAX_TICKS};
use crate::labels::{title_anchor, x_label_anchor, y_label_anchor, Labels};
use crate::random::{ColorSource, RandomHexColors};
use crate::scale::{max_value, ValueScale};
use crate::surface::{Stroke, Surface, SurfaceHost};
use crate::text::{Fonts, TextAlign, TextStyle};
use crate::theme::Theme;
use crate::types::{Insets, BORDER_THICKNESS, HEIGHT, LINE_WIDTH, TICK_LENGTH, WIDTH};

/// Gap between a tick mark and the center of its label.
const TICK_LABEL_GAP: f64 = 10.0;
/// Baseline shift that visually centers 12px digits on their tick.
const TICK_LABEL_BASELINE: f64 = 4.0;

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub border_thickness: f64,
    pub theme: Theme,
    pub fonts: Fonts,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            border_thickness: BORDER_THICKNESS,
            theme: Theme::classic(),
            fonts: Fonts::default(),
        }
    }
}

/// How bars get their color during one redraw.
enum BarFill {
    Uniform(Color),
    PerBar(Vec<Color>),
}

impl BarFill {
    fn color(&self, index: usize) -> Color {
        match self {
            BarFill::Uniform(c) => *c,
            BarFill::PerBar(colors) => colors[index],
        }
    }
}

/// A categorical bar chart bound to one drawing surface.
///
/// Every mutator that changes geometry or data repaints the whole surface
/// before returning. Text setters (categories, title, axis labels) paint
/// their text over the current picture and are repainted by later redraws.
pub struct BarChart<S: Surface> {
    surface: S,
    options: ChartOptions,
    data: Option<Vec<f64>>,
    categories: Option<Vec<String>>,
    bar_color: Color,
    labels: Labels,
    color_source: Box<dyn ColorSource>,
}

impl<S: Surface> BarChart<S> {
    /// Bind to `surface`, size it to 600x300 and draw the empty chart.
    pub fn new(surface: S) -> Result<Self> {
        Self::with_options(surface, ChartOptions::default())
    }

    pub fn with_options(surface: S, options: ChartOptions) -> Result<Self> {
        check_size(options.width, options.height, &options.insets)?;
        let mut chart = Self {
            surface,
            bar_color: options.theme.bar,
            options,
            data: None,
            categories: None,
            labels: Labels::default(),
            color_source: Box::new(RandomHexColors::new()),
        };
        chart.surface.resize(chart.options.width, chart.options.height)?;
        chart.redraw();
        Ok(chart)
    }

    /// Resolve `id` through `host` and bind to the surface it names.
    pub fn attach<H>(host: &mut H, id: &str) -> Result<Self>
    where
        H: SurfaceHost<Surface = S>,
    {
        let surface = host
            .resolve(id)
            .ok_or_else(|| ChartError::SurfaceNotFound(id.to_string()))?;
        debug!(id, "surface resolved");
        Self::new(surface)
    }

    /// Replace the source used by [`BarChart::set_random_colors`].
    pub fn with_color_source(mut self, source: impl ColorSource + 'static) -> Self {
        self.color_source = Box::new(source);
        self
    }

    // ---- accessors ---------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.surface.size().0
    }

    pub fn height(&self) -> u32 {
        self.surface.size().1
    }

    pub fn data(&self) -> Option<&[f64]> {
        self.data.as_deref()
    }

    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    pub fn bar_color(&self) -> Color {
        self.bar_color
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn title(&self) -> Option<&str> {
        self.labels.title.as_deref()
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct access for export (PNG encoding, pixel readback). Anything drawn
    /// through it is overwritten by the next redraw.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn plot_area(&self) -> PlotArea {
        let (w, h) = self.surface.size();
        PlotArea::from_surface(w, h, &self.options.insets)
    }

    // ---- mutators ----------------------------------------------------------

    pub fn set_width(&mut self, width: u32) -> Result<()> {
        self.set_size(width, self.height())
    }

    pub fn set_height(&mut self, height: u32) -> Result<()> {
        self.set_size(self.width(), height)
    }

    /// Resize the surface and repaint. A size the surface cannot take is
    /// reported and leaves the current picture in place.
    pub fn set_size(&mut self, width: u32, height: u32) -> Result<()> {
        check_size(width, height, &self.options.insets)
            .and_then(|()| self.surface.resize(width, height))
            .inspect_err(|e| warn!(width, height, "resize rejected: {e}"))?;
        self.redraw();
        Ok(())
    }

    /// Set the uniform bar color from CSS syntax (`#RRGGBB`, `rgba(...)`).
    /// An unparsable color leaves the chart untouched.
    pub fn set_color(&mut self, color: &str) -> Result<()> {
        let parsed = color.parse::<Color>().inspect_err(|e| warn!("{e}"))?;
        self.set_bar_color(parsed);
        Ok(())
    }

    pub fn set_bar_color(&mut self, color: Color) {
        debug!(%color, "bar color");
        self.bar_color = color;
        self.redraw();
    }

    /// Repaint with a fresh random color per bar and return those colors.
    /// The uniform color is kept; the next redraw goes back to it. Without a
    /// dataset nothing is drawn and the result is empty.
    pub fn set_random_colors(&mut self) -> Vec<Color> {
        let Some(n) = self.data.as_ref().map(Vec::len) else {
            debug!("random colors requested without data");
            return Vec::new();
        };
        let colors: Vec<Color> = (0..n).map(|_| self.color_source.next_color()).collect();
        self.draw_chart(BarFill::PerBar(colors.clone()));
        colors
    }

    /// Replace the dataset. Empty, non-finite or all-zero data is rejected
    /// because the value scale would be undefined, as is a maximum needing
    /// more than [`MAX_TICKS`] gridlines.
    pub fn set_data(&mut self, values: impl Into<Vec<f64>>) -> Result<()> {
        let values = values.into();
        validate_data(&values).inspect_err(|e| warn!("dataset rejected: {e}"))?;
        debug!(bars = values.len(), "data");
        self.data = Some(values);
        self.warn_on_mismatch();
        self.redraw();
        Ok(())
    }

    pub fn clear_data(&mut self) {
        self.data = None;
        self.redraw();
    }

    /// Store category labels and paint them under the plot area.
    pub fn set_categories<I, T>(&mut self, labels: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.categories = Some(labels.into_iter().map(Into::into).collect());
        self.warn_on_mismatch();
        let plot = self.plot_area();
        self.draw_categories(&plot);
    }

    pub fn clear_categories(&mut self) {
        self.categories = None;
        self.redraw();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.labels.title = Some(title.into());
        self.draw_title();
    }

    pub fn set_x_axis_label(&mut self, label: impl Into<String>) {
        self.labels.x_axis = Some(label.into());
        let plot = self.plot_area();
        self.draw_x_axis_label(&plot);
    }

    pub fn set_y_axis_label(&mut self, label: impl Into<String>) {
        self.labels.y_axis = Some(label.into());
        let plot = self.plot_area();
        self.draw_y_axis_label(&plot);
    }

    pub fn clear_title(&mut self) {
        self.labels.title = None;
        self.redraw();
    }

    pub fn clear_x_axis_label(&mut self) {
        self.labels.x_axis = None;
        self.redraw();
    }

    pub fn clear_y_axis_label(&mut self) {
        self.labels.y_axis = None;
        self.redraw();
    }

    /// Clear the surface and paint every layer from the current state.
    pub fn redraw(&mut self) {
        self.draw_chart(BarFill::Uniform(self.bar_color));
    }

    // ---- drawing -----------------------------------------------------------

    fn draw_chart(&mut self, fill: BarFill) {
        let (w, h) = self.surface.size();
        let _span = tracing::debug_span!(
            "redraw",
            width = w,
            height = h,
            bars = self.data.as_ref().map_or(0, Vec::len)
        )
        .entered();

        self.surface.clear_rect(Rect::from_xywh(0.0, 0.0, w as f64, h as f64));
        let plot = self.plot_area();

        self.draw_border();
        self.draw_x_axis(&plot);
        self.draw_y_axis(&plot);

        if let Some(data) = self.data.take() {
            match ValueScale::new(&plot, max_value(&data).unwrap_or(0.0)) {
                Ok(scale) => {
                    self.draw_y_scale(&plot, &scale);
                    self.draw_gridlines(&plot, &scale);
                    self.draw_bars(&plot, &scale, &data, &fill);
                    self.draw_x_axis(&plot);
                }
                Err(e) => warn!("skipping bars: {e}"),
            }
            self.data = Some(data);
        }

        if self.categories.is_some() {
            self.draw_categories(&plot);
            self.draw_x_axis(&plot);
        }

        self.draw_title();
        self.draw_x_axis_label(&plot);
        self.draw_y_axis_label(&plot);
    }

    fn draw_border(&mut self) {
        trace!("border");
        let (w, h) = self.surface.size();
        let (w, h) = (w as f64, h as f64);
        let thickness = self.options.border_thickness;
        let color = self.options.theme.border;
        let m = thickness / 2.0;

        for corner in Corner::ALL {
            let (start, end) = corner.arc_angles();
            self.surface.fill_arc(corner.center(w, h, m), m, start, end, color);
        }

        let stroke = Stroke::new(thickness, color);
        self.surface.line(Point::new(m, m), Point::new(w - m, m), stroke);
        self.surface.line(Point::new(m, m), Point::new(m, h - m), stroke);
        self.surface.line(Point::new(m, h - m), Point::new(w - m, h - m), stroke);
        self.surface.line(Point::new(w - m, m), Point::new(w - m, h - m), stroke);
    }

    fn axis_stroke(&self) -> Stroke {
        Stroke::new(LINE_WIDTH, self.options.theme.axis_line)
    }

    fn draw_x_axis(&mut self, plot: &PlotArea) {
        let stroke = self.axis_stroke();
        self.surface.line(
            Point::new(plot.left(), plot.bottom()),
            Point::new(plot.right(), plot.bottom()),
            stroke,
        );
    }

    fn draw_y_axis(&mut self, plot: &PlotArea) {
        let stroke = self.axis_stroke();
        self.surface.line(
            Point::new(plot.left(), plot.top()),
            Point::new(plot.left(), plot.bottom()),
            stroke,
        );
    }

    fn draw_y_scale(&mut self, plot: &PlotArea, scale: &ValueScale) {
        trace!("y scale");
        let stroke = Stroke::new(LINE_WIDTH, self.options.theme.tick);
        let style = TextStyle::new(
            self.options.fonts.tick.clone(),
            self.options.theme.tick_label,
            TextAlign::Center,
        );
        let x0 = plot.left() - TICK_LENGTH;
        for v in ticks(scale.vmax) {
            let y = scale.to_px(v);
            self.surface.line(Point::new(x0, y), Point::new(plot.left(), y), stroke);
            self.surface.fill_text(
                &tick_label(v),
                Point::new(x0 - TICK_LABEL_GAP, y + TICK_LABEL_BASELINE),
                &style,
            );
        }
    }

    fn draw_gridlines(&mut self, plot: &PlotArea, scale: &ValueScale) {
        trace!("gridlines");
        let stroke = Stroke::new(LINE_WIDTH, self.options.theme.grid);
        for v in ticks(scale.vmax) {
            let y = scale.to_px(v);
            self.surface.line(Point::new(plot.left(), y), Point::new(plot.right(), y), stroke);
        }
    }

    fn draw_bars(&mut self, plot: &PlotArea, scale: &ValueScale, data: &[f64], fill: &BarFill) {
        trace!(count = data.len(), "bars");
        let layout = BarLayout::compute(data.len(), plot.width);
        for (i, &v) in data.iter().enumerate() {
            let rect = Rect::from_xywh(
                layout.bar_x(plot, i),
                scale.to_px(v),
                layout.bar_width,
                scale.height_of(v),
            );
            let color = fill.color(i);
            self.surface.fill_rect(rect, color);
            self.surface.stroke_rect(rect, Stroke::new(LINE_WIDTH, color));
        }
    }

    fn draw_categories(&mut self, plot: &PlotArea) {
        let Some(categories) = self.categories.as_ref() else {
            return;
        };
        trace!(count = categories.len(), "categories");
        let style = TextStyle::new(
            self.options.fonts.category.clone(),
            self.options.theme.category_label,
            TextAlign::Center,
        );
        for (label, at) in categories.iter().zip(category_anchors(categories.len(), plot)) {
            self.surface.fill_text(label, at, &style);
        }
    }

    fn draw_title(&mut self) {
        let Some(title) = self.labels.title.as_deref() else {
            return;
        };
        let style = TextStyle::new(
            self.options.fonts.title.clone(),
            self.options.theme.title,
            TextAlign::Left,
        );
        self.surface.fill_text(title, title_anchor(&self.options.insets), &style);
    }

    fn draw_x_axis_label(&mut self, plot: &PlotArea) {
        let Some(label) = self.labels.x_axis.as_deref() else {
            return;
        };
        let style = self.axis_label_style();
        self.surface.fill_text(label, x_label_anchor(plot, &self.options.insets), &style);
    }

    fn draw_y_axis_label(&mut self, plot: &PlotArea) {
        let Some(label) = self.labels.y_axis.as_deref() else {
            return;
        };
        let style = self.axis_label_style();
        let anchor = y_label_anchor(plot, &self.options.insets);
        self.surface.save();
        self.surface.translate(anchor.x, anchor.y);
        self.surface.rotate(-FRAC_PI_2);
        self.surface.fill_text(label, Point::new(0.0, 0.0), &style);
        self.surface.restore();
    }

    fn axis_label_style(&self) -> TextStyle {
        TextStyle::new(
            self.options.fonts.axis_label.clone(),
            self.options.theme.axis_label,
            TextAlign::Center,
        )
    }

    fn warn_on_mismatch(&self) {
        if let (Some(d), Some(c)) = (&self.data, &self.categories) {
            if d.len() != c.len() {
                warn!(
                    bars = d.len(),
                    categories = c.len(),
                    "category count does not match dataset length"
                );
            }
        }
    }
}

fn check_size(width: u32, height: u32, insets: &Insets) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ChartError::ZeroDimension);
    }
    let plot = PlotArea::from_surface(width, height, insets);
    if !plot.is_drawable() {
        return Err(ChartError::PlotAreaTooSmall {
            width: plot.width,
            height: plot.height,
        });
    }
    Ok(())
}

fn validate_data(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(ChartError::EmptyDataset);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ChartError::NonFiniteValue { index, value });
    }
    let max = max_value(values).unwrap_or(0.0);
    if max <= 0.0 {
        return Err(ChartError::NonPositiveMaximum(max));
    }
    let count = tick_count(max);
    if count > MAX_TICKS {
        return Err(ChartError::TooManyTicks { count, limit: MAX_TICKS });
    }
    Ok(())
}
