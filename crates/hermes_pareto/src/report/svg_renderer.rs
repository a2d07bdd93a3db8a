use std::{fmt::Write, path::Path};

use tracing::debug;

use crate::solution::origin::Origin;

use super::renderer::{ChartOptions, FrontierPoint, FrontierRenderer, RenderError};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 60.0;
const MARKER_SIZE: f64 = 5.0;

/// Scatter plot of a frontier as a standalone SVG document. Dichotomy points
/// are red triangles, backward search points blue circles.
#[derive(Default)]
pub struct SvgRenderer;

struct Axis {
    min: f64,
    max: f64,
}

impl Axis {
    fn new(min: f64, max: f64) -> Self {
        if max > min {
            Axis { min, max }
        } else {
            Axis {
                min: min - 1.0,
                max: max + 1.0,
            }
        }
    }

    fn ratio(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

struct Layout {
    x_axis: Axis,
    y_axis: Axis,
    plot_width: f64,
    plot_height: f64,
}

impl Layout {
    fn new(x_axis: Axis, y_axis: Axis) -> Self {
        Layout {
            x_axis,
            y_axis,
            plot_width: WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
            plot_height: HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    fn bottom(&self) -> f64 {
        MARGIN_TOP + self.plot_height
    }

    fn right(&self) -> f64 {
        MARGIN_LEFT + self.plot_width
    }

    fn x(&self, value: f64) -> f64 {
        MARGIN_LEFT + self.x_axis.ratio(value) * self.plot_width
    }

    fn y(&self, value: f64) -> f64 {
        self.bottom() - self.y_axis.ratio(value) * self.plot_height
    }

    fn write_svg(&self, svg: &mut impl Write, points: &[FrontierPoint]) -> std::fmt::Result {
        let bottom = self.bottom();
        let right = self.right();

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif" font-size="12">"#
        )?;
        writeln!(
            svg,
            r#"<rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#
        )?;
        writeln!(
            svg,
            r#"<path d="M{MARGIN_LEFT} {MARGIN_TOP} V{bottom} H{right}" fill="none" stroke="black"/>"#
        )?;

        for (value, anchor) in [(self.x_axis.min, "start"), (self.x_axis.max, "end")] {
            writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="{anchor}">{value:.0}</text>"#,
                self.x(value),
                bottom + 18.0,
            )?;
        }
        for value in [self.y_axis.min, self.y_axis.max] {
            writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{value:.0}</text>"#,
                MARGIN_LEFT - 6.0,
                self.y(value) + 4.0,
            )?;
        }

        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">Completion time</text>"#,
            MARGIN_LEFT + self.plot_width / 2.0,
            HEIGHT - 15.0,
        )?;
        writeln!(
            svg,
            r#"<text x="20" y="{0:.1}" text-anchor="middle" transform="rotate(-90 20 {0:.1})">Cost</text>"#,
            MARGIN_TOP + self.plot_height / 2.0,
        )?;

        for origin in [Origin::BackwardSearch, Origin::Dichotomy] {
            for point in points.iter().filter(|point| point.origin == origin) {
                self.write_marker(svg, point)?;
            }
        }

        writeln!(svg, "</svg>")
    }

    fn write_marker(&self, svg: &mut impl Write, point: &FrontierPoint) -> std::fmt::Result {
        let cx = self.x(point.completion as f64);
        let cy = self.y(point.cost as f64);

        match point.origin {
            Origin::Dichotomy => writeln!(
                svg,
                r#"<polygon points="{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}" fill="none" stroke="red" stroke-width="0.7"/>"#,
                cx,
                cy - MARKER_SIZE,
                cx - MARKER_SIZE,
                cy + MARKER_SIZE,
                cx + MARKER_SIZE,
                cy + MARKER_SIZE,
            ),
            Origin::BackwardSearch => writeln!(
                svg,
                r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{MARKER_SIZE}" fill="none" stroke="blue" stroke-width="0.5"/>"#,
            ),
        }
    }
}

impl SvgRenderer {
    pub fn to_svg(
        &self,
        points: &[FrontierPoint],
        options: &ChartOptions,
    ) -> Result<String, RenderError> {
        let (cost_min, cost_max) = options.cost_range(points).ok_or(RenderError::Empty)?;
        let completions = points.iter().map(|point| point.completion);
        let completion_min = completions.clone().min().ok_or(RenderError::Empty)? as f64;
        let completion_max = completions.max().ok_or(RenderError::Empty)? as f64;

        let layout = Layout::new(
            Axis::new(completion_min, completion_max),
            Axis::new(cost_min, cost_max),
        );

        let mut svg = String::new();
        layout.write_svg(&mut svg, points)?;

        Ok(svg)
    }
}

impl FrontierRenderer for SvgRenderer {
    fn render(
        &self,
        points: &[FrontierPoint],
        destination: &Path,
        options: &ChartOptions,
    ) -> Result<(), RenderError> {
        let svg = self.to_svg(points, options)?;

        std::fs::write(destination, svg).map_err(|source| RenderError::Io {
            path: destination.to_path_buf(),
            source,
        })?;

        debug!(
            "SvgRenderer: wrote {} points to {}",
            points.len(),
            destination.display()
        );

        Ok(())
    }
}
