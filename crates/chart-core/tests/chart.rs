// File: crates/chart-core/tests/chart.rs
// Purpose: Component behavior: redraw layering, text retention, random colors, error guards.

use std::f64::consts::FRAC_PI_2;

use barchart_core::{
    BarChart, ChartError, Color, DrawCommand, Point, RandomHexColors, RecordingHost,
    RecordingSurface, Surface, MAX_TICKS,
};

fn chart() -> BarChart<RecordingSurface> {
    BarChart::new(RecordingSurface::new(1, 1)).expect("chart")
}

#[test]
fn empty_chart_draws_border_and_axes_only() {
    let c = chart();
    assert_eq!(c.surface().size(), (600, 300));
    let cmds = c.surface().commands();
    assert!(matches!(cmds[0], DrawCommand::ClearRect(_)));
    let arcs = cmds.iter().filter(|c| matches!(c, DrawCommand::FillArc { .. })).count();
    assert_eq!(arcs, 4);
    assert_eq!(c.surface().lines().len(), 6);
    assert!(c.surface().filled_rects().is_empty());
    assert!(c.surface().texts().is_empty());
}

#[test]
fn border_caps_sit_in_the_corners() {
    let c = chart();
    let centers: Vec<Point> = c
        .surface()
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::FillArc { center, radius, .. } => {
                assert_eq!(*radius, 5.0);
                Some(*center)
            }
            _ => None,
        })
        .collect();
    let corners = [
        Point::new(5.0, 5.0),
        Point::new(595.0, 5.0),
        Point::new(595.0, 295.0),
        Point::new(5.0, 295.0),
    ];
    for p in corners {
        assert!(centers.contains(&p), "{p:?}");
    }
}

#[test]
fn end_to_end_quarterly() {
    let mut c = chart();
    c.set_data([5.0, 80.0, 45.0, 10.0]).unwrap();
    c.set_categories(["Q1", "Q2", "Q3", "Q4"]);

    let s = c.surface();
    let bars = s.filled_rects();
    assert_eq!(bars.len(), 4);
    let fill = Color::rgba(34, 145, 23, 0.5);
    assert!(bars.iter().all(|(r, col)| r.width == 20.0 && *col == fill));

    let grid = s.lines_with_color(Color::rgb(0xCC, 0xCC, 0xCC));
    assert_eq!(grid.len(), 9);

    let texts = s.texts();
    let ticks: Vec<&str> = texts
        .iter()
        .map(|(t, _)| *t)
        .filter(|t| t.parse::<f64>().is_ok())
        .collect();
    assert_eq!(ticks, vec!["0", "10", "20", "30", "40", "50", "60", "70", "80"]);

    let cats: Vec<(&str, Point)> = texts.into_iter().filter(|(t, _)| t.starts_with('Q')).collect();
    assert_eq!(
        cats,
        vec![
            ("Q1", Point::new(160.0, 246.0)),
            ("Q2", Point::new(280.0, 246.0)),
            ("Q3", Point::new(400.0, 246.0)),
            ("Q4", Point::new(520.0, 246.0)),
        ]
    );
}

#[test]
fn x_axis_is_painted_last() {
    let mut c = chart();
    c.set_categories(["a", "b"]);
    c.set_data([1.0, 2.0]).unwrap();
    let cmds = c.surface().commands();
    let last_line = cmds.iter().rev().find_map(|cmd| match cmd {
        DrawCommand::Line { from, to, .. } => Some((*from, *to)),
        _ => None,
    });
    assert_eq!(last_line, Some((Point::new(100.0, 230.0), Point::new(580.0, 230.0))));
    let last_text = cmds.iter().rposition(|cmd| matches!(cmd, DrawCommand::Text { .. })).unwrap();
    let last_line_at = cmds
        .iter()
        .rposition(|cmd| matches!(cmd, DrawCommand::Line { .. }))
        .unwrap();
    assert!(last_line_at > last_text);
}

#[test]
fn redraw_is_idempotent() {
    let mut c = chart();
    c.set_data([3.0, 1.0, 4.0, 1.0, 5.0]).unwrap();
    c.set_categories(["a", "b", "c", "d", "e"]);
    c.set_title("Pi");
    c.redraw();
    let first = c.surface().commands().to_vec();
    c.redraw();
    assert_eq!(first, c.surface().commands());
}

#[test]
fn text_survives_redraw() {
    let mut c = chart();
    c.set_title("Sales");
    c.set_x_axis_label("Quarter");
    c.set_y_axis_label("Units");
    c.set_categories(["Q1", "Q2"]);
    c.set_data([1.0, 2.0]).unwrap();

    let texts: Vec<&str> = c.surface().texts().into_iter().map(|(t, _)| t).collect();
    for t in ["Sales", "Quarter", "Units", "Q1", "Q2"] {
        assert_eq!(texts.iter().filter(|x| **x == t).count(), 1, "{t}");
    }

    c.clear_title();
    assert!(!c.surface().texts().iter().any(|(t, _)| *t == "Sales"));
    assert_eq!(c.title(), None);
}

#[test]
fn title_and_x_label_positions() {
    let mut c = chart();
    c.set_title("T");
    c.set_x_axis_label("X");
    let texts = c.surface().texts();
    assert_eq!(texts[0], ("T", Point::new(100.0, 40.0)));
    assert_eq!(texts[1].1.x, 340.0);
}

#[test]
fn y_label_is_rotated_about_its_anchor() {
    let mut c = chart();
    c.set_y_axis_label("Units");
    let cmds = c.surface().commands();
    let n = cmds.len();
    assert_eq!(cmds[n - 5], DrawCommand::Save);
    assert_eq!(cmds[n - 4], DrawCommand::Translate { dx: 40.0, dy: 145.0 });
    assert_eq!(cmds[n - 3], DrawCommand::Rotate(-FRAC_PI_2));
    assert!(matches!(
        &cmds[n - 2],
        DrawCommand::Text { text, at, .. } if text == "Units" && *at == Point::new(0.0, 0.0)
    ));
    assert_eq!(cmds[n - 1], DrawCommand::Restore);
}

#[test]
fn categories_overlay_without_clearing() {
    let mut c = chart();
    c.set_data([1.0, 2.0, 3.0]).unwrap();
    let before = c.surface().commands().len();
    c.set_categories(["a", "b", "c"]);
    let cmds = c.surface().commands();
    assert_eq!(cmds.len(), before + 3);
    assert!(cmds[before..].iter().all(|cmd| matches!(cmd, DrawCommand::Text { .. })));
}

#[test]
fn category_count_mismatch_is_tolerated() {
    let mut c = chart();
    c.set_data([1.0, 2.0, 3.0, 4.0]).unwrap();
    c.set_categories(["a", "b"]);
    c.redraw();
    let labels: Vec<Point> = c
        .surface()
        .texts()
        .into_iter()
        .filter(|(t, _)| t.len() == 1 && t.chars().all(char::is_alphabetic))
        .map(|(_, p)| p)
        .collect();
    // slots come from the label count: 480 / 2
    assert_eq!(labels, vec![Point::new(220.0, 246.0), Point::new(460.0, 246.0)]);
    assert_eq!(c.surface().filled_rects().len(), 4);
}

#[test]
fn random_colors_are_transient() {
    let mut c = chart().with_color_source(RandomHexColors::with_seed(11));
    c.set_data([5.0, 80.0, 45.0, 10.0]).unwrap();

    let first = c.set_random_colors();
    assert_eq!(first.len(), 4);
    let drawn: Vec<Color> = c.surface().filled_rects().into_iter().map(|(_, col)| col).collect();
    assert_eq!(drawn, first);
    assert!(first.iter().all(|col| col.is_opaque()));

    let second = c.set_random_colors();
    assert_eq!(second.len(), 4);
    assert_ne!(first, second);

    c.redraw();
    assert!(c.surface().filled_rects().iter().all(|(_, col)| *col == c.bar_color()));
}

#[test]
fn random_colors_without_data_do_nothing() {
    let mut c = chart();
    let before = c.surface().commands().to_vec();
    assert!(c.set_random_colors().is_empty());
    assert_eq!(before, c.surface().commands());
}

#[test]
fn set_color_accepts_css_and_rejects_garbage() {
    let mut c = chart();
    c.set_data([1.0]).unwrap();
    c.set_color("#336699").unwrap();
    assert_eq!(c.bar_color(), Color::rgb(0x33, 0x66, 0x99));
    let blue = Color::rgb(0x33, 0x66, 0x99);
    assert!(c.surface().filled_rects().iter().all(|(_, col)| *col == blue));

    let before = c.surface().commands().to_vec();
    assert_eq!(
        c.set_color("not-a-color"),
        Err(ChartError::InvalidColor("not-a-color".into()))
    );
    assert_eq!(c.bar_color(), blue);
    assert_eq!(before, c.surface().commands());
}

#[test]
fn degenerate_data_is_rejected() {
    let mut c = chart();
    c.set_data([2.0, 4.0]).unwrap();
    assert_eq!(c.set_data(Vec::<f64>::new()), Err(ChartError::EmptyDataset));
    assert_eq!(c.set_data([0.0, 0.0]), Err(ChartError::NonPositiveMaximum(0.0)));
    assert!(matches!(
        c.set_data([1.0, f64::NAN]),
        Err(ChartError::NonFiniteValue { index: 1, .. })
    ));
    assert!(matches!(
        c.set_data([f64::INFINITY]),
        Err(ChartError::NonFiniteValue { index: 0, .. })
    ));
    assert_eq!(c.data(), Some(&[2.0, 4.0][..]));
}

#[test]
fn huge_maximum_is_rejected_before_drawing() {
    let mut c = chart();
    c.set_data([2.0, 4.0]).unwrap();
    let before = c.surface().commands().to_vec();
    assert!(matches!(
        c.set_data([1.0e20, 5.0]),
        Err(ChartError::TooManyTicks { count, limit: MAX_TICKS }) if count > MAX_TICKS
    ));
    assert_eq!(c.data(), Some(&[2.0, 4.0][..]));
    assert_eq!(before, c.surface().commands());

    // largest maximum still drawn: 999_900 -> step 100, 10_000 gridlines
    c.set_data([999_900.0]).unwrap();
    assert_eq!(c.surface().lines_with_color(Color::rgb(0xCC, 0xCC, 0xCC)).len(), MAX_TICKS);
}

#[test]
fn clear_data_returns_to_axes_only() {
    let mut c = chart();
    c.set_data([2.0, 4.0]).unwrap();
    c.clear_data();
    assert!(c.data().is_none());
    assert!(c.surface().filled_rects().is_empty());
}

#[test]
fn undersized_surface_is_rejected() {
    let mut c = chart();
    assert_eq!(c.set_width(0), Err(ChartError::ZeroDimension));
    assert!(matches!(c.set_width(120), Err(ChartError::PlotAreaTooSmall { .. })));
    assert!(matches!(c.set_height(100), Err(ChartError::PlotAreaTooSmall { .. })));
    assert_eq!(c.surface().size(), (600, 300));
}

#[test]
fn refused_resize_keeps_size_and_picture() {
    let surface = RecordingSurface::new(1, 1).with_max_size(1000, 1000);
    let mut c = BarChart::new(surface).expect("chart");
    c.set_data([1.0, 2.0]).unwrap();
    let before = c.surface().commands().to_vec();

    assert_eq!(
        c.set_size(2000, 500),
        Err(ChartError::SurfaceAllocation { width: 2000, height: 500 })
    );
    assert_eq!(c.surface().size(), (600, 300));
    assert_eq!(before, c.surface().commands());

    c.set_size(1000, 500).unwrap();
    assert_eq!(c.surface().size(), (1000, 500));
}

#[test]
fn construction_fails_when_surface_cannot_grow() {
    let surface = RecordingSurface::new(1, 1).with_max_size(100, 100);
    assert!(matches!(
        BarChart::new(surface),
        Err(ChartError::SurfaceAllocation { width: 600, height: 300 })
    ));
}

#[test]
fn attach_resolves_through_host() {
    let mut host = RecordingHost::new().with_surface("sales", RecordingSurface::new(10, 10));
    let c = BarChart::attach(&mut host, "sales").expect("attach");
    assert_eq!(c.surface().size(), (600, 300));

    let missing = BarChart::attach(&mut host, "sales");
    assert!(matches!(missing, Err(ChartError::SurfaceNotFound(id)) if id == "sales"));
}

#[test]
fn borrowed_surface_can_back_a_chart() {
    let mut surface = RecordingSurface::new(1, 1);
    {
        let mut c = BarChart::new(&mut surface).expect("chart");
        c.set_data([1.0, 3.0]).unwrap();
    }
    assert_eq!(surface.size(), (600, 300));
    assert_eq!(surface.filled_rects().len(), 2);
}
