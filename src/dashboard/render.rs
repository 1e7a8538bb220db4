//! # Dashboard Renderer
//!
//! Draws a [`DashboardLayout`] with `plotters`. Rendering is the terminal
//! side effect of a run and is never retried.

use super::layout::{ChartColor, DashboardLayout, LabelSlice, Panel, PanelKind};
use crate::analysis::Histogram;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::f64::consts::TAU;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Default figure size in pixels
pub const DEFAULT_SIZE: (u32, u32) = (1400, 1400);

/// Half of a bar's width in x units
const BAR_HALF_WIDTH: f64 = 0.35;

/// Angle of the first pie wedge, degrees counterclockwise from 3 o'clock
const PIE_START_ANGLE: f64 = 140.0;

const FONT: &str = "sans-serif";

/// Errors raised while drawing the figure
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("rendering surface unavailable: {0}")]
    Surface(String),

    #[error("failed to draw {panel}: {message}")]
    Draw { panel: String, message: String },
}

/// A drawing surface able to show a dashboard
pub trait DashboardRenderer {
    /// Draw the full figure once
    fn render(&mut self, layout: &DashboardLayout) -> Result<(), RenderError>;
}

/// Writes the figure to an SVG file
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: DEFAULT_SIZE,
        }
    }

    /// Set the figure size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DashboardRenderer for SvgRenderer {
    fn render(&mut self, layout: &DashboardLayout) -> Result<(), RenderError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(RenderError::Surface(format!(
                    "directory {} does not exist",
                    parent.display()
                )));
            }
        }

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        draw_dashboard(&root, layout)?;
        root.present()
            .map_err(|e| RenderError::Surface(e.to_string()))?;

        info!("Dashboard written to {}", self.path.display());
        Ok(())
    }
}

/// Keeps the last figure as an SVG document in memory
#[derive(Debug, Clone)]
pub struct SvgStringRenderer {
    size: (u32, u32),
    output: Option<String>,
}

impl Default for SvgStringRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl SvgStringRenderer {
    pub fn new(size: (u32, u32)) -> Self {
        Self { size, output: None }
    }

    /// The SVG produced by the last successful render
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl DashboardRenderer for SvgStringRenderer {
    fn render(&mut self, layout: &DashboardLayout) -> Result<(), RenderError> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, self.size).into_drawing_area();
            draw_dashboard(&root, layout)?;
            root.present()
                .map_err(|e| RenderError::Surface(e.to_string()))?;
        }
        self.output = Some(buffer);
        Ok(())
    }
}

/// Draw the title and the panel grid onto any plotters surface
pub fn draw_dashboard<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &DashboardLayout,
) -> Result<(), RenderError> {
    let failed = |e: &dyn fmt::Display| RenderError::Draw {
        panel: "figure".to_string(),
        message: e.to_string(),
    };

    root.fill(&WHITE).map_err(|e| failed(&e))?;
    let body = root
        .titled(&layout.title, (FONT, 36))
        .map_err(|e| failed(&e))?;

    let areas = body.split_evenly((layout.rows, layout.columns));
    for (panel, area) in layout.panels.iter().zip(areas.iter()) {
        draw_panel(area, panel).map_err(|message| RenderError::Draw {
            panel: panel.title.clone(),
            message,
        })?;
    }

    Ok(())
}

fn draw_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, panel: &Panel) -> Result<(), String> {
    let drawn = match &panel.kind {
        PanelKind::RecordBars {
            values,
            y_range,
            zero_baseline,
            color,
        } => draw_record_bars(area, panel, values, *y_range, *zero_baseline, *color),
        PanelKind::LabelPie { slices } => draw_label_pie(area, panel, slices),
        PanelKind::LabelBars { slices } => draw_label_bars(area, panel, slices),
        PanelKind::Histogram { histogram, color } => draw_histogram(area, panel, histogram, *color),
    };
    drawn.map_err(|e| e.to_string())
}

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

fn draw_record_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    values: &[f64],
    y_range: (f64, f64),
    zero_baseline: bool,
    color: ChartColor,
) -> DrawResult<DB> {
    let n = values.len();
    let x_max = n as f64 + 1.0;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 20))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..x_max, y_range.0..y_range.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n + 2)
        .x_label_formatter(&|x| integer_label(*x, 1, n, |i| i.to_string()))
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .draw()?;

    let fill = to_rgb(color);
    chart.draw_series(values.iter().enumerate().map(|(i, &value)| {
        let x = (i + 1) as f64;
        Rectangle::new(
            [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, value)],
            fill.filled(),
        )
    }))?;

    if zero_baseline {
        chart.draw_series(LineSeries::new(vec![(0.0, 0.0), (x_max, 0.0)], &BLACK.mix(0.5)))?;
    }

    Ok(())
}

fn draw_label_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    slices: &[LabelSlice],
) -> DrawResult<DB> {
    let area = area.titled(&panel.title, (FONT, 20))?;

    let total: usize = slices.iter().map(|s| s.count).sum();
    if total == 0 {
        return Ok(());
    }

    let (width, height) = area.dim_in_pixel();
    let center = (width as f64 / 2.0, height as f64 / 2.0);
    let radius = width.min(height) as f64 * 0.35;
    let centered = |size: f64| {
        (FONT, size)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center))
    };

    let mut start = PIE_START_ANGLE.to_radians();
    for slice in slices {
        let sweep = slice.count as f64 / total as f64 * TAU;
        area.draw(&Polygon::new(
            wedge(center, radius, start, sweep),
            to_rgb(slice.color).filled(),
        ))?;

        let middle = start + sweep / 2.0;
        area.draw(&Text::new(
            slice.label.as_str(),
            polar(center, radius * 1.2, middle),
            centered(16.0),
        ))?;
        area.draw(&Text::new(
            format!("{:.1}%", slice.percentage),
            polar(center, radius * 0.6, middle),
            centered(15.0),
        ))?;

        start += sweep;
    }

    Ok(())
}

fn draw_label_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    slices: &[LabelSlice],
) -> DrawResult<DB> {
    let k = slices.len();
    let x_max = k as f64 + 1.0;
    let y_max = slices.iter().map(|s| s.count).max().unwrap_or(0) as f64 + 1.0;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 20))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(k + 2)
        .x_label_formatter(&|x| {
            integer_label(*x, 1, k, |i| slices[i - 1].label.as_str().to_string())
        })
        .y_label_formatter(&|y| integer_label(*y, 0, usize::MAX, |i| i.to_string()))
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .draw()?;

    chart.draw_series(slices.iter().enumerate().map(|(i, slice)| {
        let x = (i + 1) as f64;
        Rectangle::new(
            [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, slice.count as f64)],
            to_rgb(slice.color).filled(),
        )
    }))?;

    Ok(())
}

fn draw_histogram<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    histogram: &Histogram,
    color: ChartColor,
) -> DrawResult<DB> {
    let (lower, upper) = histogram.range;
    let y_max = histogram.max_count() as f64 + 1.0;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT, 20))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(lower..upper, 0.0..y_max)?;

    chart
        .configure_mesh()
        .y_label_formatter(&|y| integer_label(*y, 0, usize::MAX, |i| i.to_string()))
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .draw()?;

    let bars: Vec<((f64, f64), usize)> = (0..histogram.bins())
        .map(|i| (histogram.bin_edges(i), histogram.counts[i]))
        .filter(|&(_, count)| count > 0)
        .collect();

    let fill = to_rgb(color);
    chart.draw_series(bars.iter().map(|&((left, right), count)| {
        Rectangle::new([(left, 0.0), (right, count as f64)], fill.filled())
    }))?;
    chart.draw_series(bars.iter().map(|&((left, right), count)| {
        Rectangle::new([(left, 0.0), (right, count as f64)], BLACK.stroke_width(1))
    }))?;

    Ok(())
}

fn to_rgb(color: ChartColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Tick text for whole-number ticks in `min..=max`, blank otherwise
fn integer_label(value: f64, min: usize, max: usize, label: impl Fn(usize) -> String) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < min as f64 || rounded > max as f64 {
        return String::new();
    }
    label(rounded as usize)
}

/// Pixel coordinate at `angle` radians counterclockwise around `center`
fn polar(center: (f64, f64), radius: f64, angle: f64) -> (i32, i32) {
    (
        (center.0 + radius * angle.cos()).round() as i32,
        (center.1 - radius * angle.sin()).round() as i32,
    )
}

/// Polygon approximating a pie wedge
fn wedge(center: (f64, f64), radius: f64, start: f64, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep / TAU) * 120.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(polar(center, 0.0, start));
    for step in 0..=steps {
        points.push(polar(center, radius, start + sweep * step as f64 / steps as f64));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_label() {
        assert_eq!(integer_label(2.0, 1, 5, |i| i.to_string()), "2");
        assert_eq!(integer_label(2.5, 1, 5, |i| i.to_string()), "");
        assert_eq!(integer_label(0.0, 1, 5, |i| i.to_string()), "");
        assert_eq!(integer_label(6.0, 1, 5, |i| i.to_string()), "");
    }

    #[test]
    fn test_wedge_starts_at_center() {
        let points = wedge((100.0, 100.0), 50.0, 0.0, TAU / 4.0);
        assert_eq!(points[0], (100, 100));
        assert_eq!(points[1], (150, 100));
        // a quarter turn counterclockwise ends straight up
        assert_eq!(*points.last().unwrap(), (100, 50));
    }

    #[test]
    fn test_missing_directory_is_surface_error() {
        let layout = DashboardLayout {
            title: "t".to_string(),
            rows: 1,
            columns: 1,
            panels: Vec::new(),
        };
        let mut renderer = SvgRenderer::new("/no/such/dir/figure.svg");
        let err = renderer.render(&layout).unwrap_err();
        assert!(matches!(err, RenderError::Surface(_)));
    }
}
