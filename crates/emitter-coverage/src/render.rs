//! Static SVG rendering of the three coverage plots.
//!
//! Each plot is drawn into an in-memory SVG document. Nothing touches the
//! filesystem here, so a plot that fails halfway leaves no trace behind.

use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Serialize;

use crate::config::PlotSize;
use crate::coverage::{CoverageMatrix, gap_points};
use crate::error::CoverageError;

/// Darkest inferno stop, used for uncovered cells.
const INFERNO_LOW: RGBColor = RGBColor(0, 0, 4);
/// Brightest inferno stop, used for covered cells.
const INFERNO_HIGH: RGBColor = RGBColor(252, 255, 164);

const CAPTION_FONT: (&str, u32) = ("sans-serif", 20);

type DrawResult = Result<(), Box<dyn std::error::Error>>;

/// The plots produced by the visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotKind {
    /// Emitter-by-candidate coverage heatmap.
    Heatmap,
    /// Prime positions across the candidate range.
    Scatter,
    /// Gap to the next prime, plotted against the prime.
    Gaps,
}

impl PlotKind {
    /// All plots, in rendering order.
    pub const ALL: [Self; 3] = [Self::Heatmap, Self::Scatter, Self::Gaps];

    /// Output file name for this plot.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Heatmap => "coverage_heatmap.svg",
            Self::Scatter => "prime_positions.svg",
            Self::Gaps => "prime_gaps.svg",
        }
    }

    /// Caption drawn above the plot.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Heatmap => "Multiplicative reconstruction waves of the number space",
            Self::Scatter => "Prime positions (structural growth gaps)",
            Self::Gaps => "Prime gap size over n, damping with growth density",
        }
    }
}

impl core::fmt::Display for PlotKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Heatmap => "heatmap",
            Self::Scatter => "scatter",
            Self::Gaps => "gaps",
        };
        write!(f, "{name}")
    }
}

/// Render the coverage matrix as a heatmap. Row 0 (prime 2) is on top.
pub fn render_heatmap(matrix: &CoverageMatrix, size: PlotSize) -> Result<String, CoverageError> {
    let limit = plot_coordinate(matrix.limit())?;
    let rows = u32::try_from(matrix.rows()).map_err(|_err| CoverageError::LimitTooLarge {
        limit: matrix.limit(),
    })?;
    render_svg(PlotKind::Heatmap, size, |root| {
        draw_heatmap(root, matrix, limit, rows)
    })
}

/// Render the prime indicator as a scatter: y = 1 for primes, 0 otherwise.
pub fn render_scatter(
    indicator: &[bool],
    limit: u64,
    size: PlotSize,
) -> Result<String, CoverageError> {
    let limit = plot_coordinate(limit)?;
    render_svg(PlotKind::Scatter, size, |root| {
        draw_scatter(root, indicator, limit)
    })
}

/// Render the gap sequence of `primes` as a line over the primes.
pub fn render_gaps(primes: &[u64], limit: u64, size: PlotSize) -> Result<String, CoverageError> {
    let limit = plot_coordinate(limit)?;
    let points = gap_points(primes)
        .into_iter()
        .map(|(prime, gap)| Ok((plot_coordinate(prime)?, plot_coordinate(gap)?)))
        .collect::<Result<Vec<(u32, u32)>, CoverageError>>()?;
    render_svg(PlotKind::Gaps, size, |root| draw_gaps(root, &points, limit))
}

fn plot_coordinate(value: u64) -> Result<u32, CoverageError> {
    u32::try_from(value).map_err(|_err| CoverageError::LimitTooLarge { limit: value })
}

fn render_svg<F>(kind: PlotKind, size: PlotSize, draw: F) -> Result<String, CoverageError>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> DrawResult,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.dimensions()).into_drawing_area();
        draw(&root)
            .and_then(|()| root.present().map_err(Into::into))
            .map_err(|e| CoverageError::Render {
                plot: kind,
                message: e.to_string(),
            })?;
    }
    Ok(svg)
}

fn draw_heatmap(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    matrix: &CoverageMatrix,
    limit: u32,
    rows: u32,
) -> DrawResult {
    root.fill(&WHITE)?;

    let x_end = limit.saturating_add(1).max(3);
    let y_end = rows.max(1);

    let mut chart = ChartBuilder::on(root)
        .caption(PlotKind::Heatmap.title(), CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(2_u32..x_end, 0_u32..y_end)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("n")
        .y_desc("prime emitters")
        .y_label_formatter(&|v: &u32| y_end.saturating_sub(*v).to_string())
        .draw()?;

    chart.draw_series(std::iter::once(Rectangle::new(
        [(2, 0), (x_end, y_end)],
        INFERNO_LOW.filled(),
    )))?;

    chart
        .draw_series(matrix.cells().map(|(row, n)| {
            let row = u32::try_from(row).unwrap_or(u32::MAX);
            let x = u32::try_from(n).unwrap_or(u32::MAX);
            let top = y_end.saturating_sub(row);
            Rectangle::new(
                [(x, top), (x.saturating_add(1), top.saturating_sub(1))],
                INFERNO_HIGH.filled(),
            )
        }))?
        .label("multiplicative coverage")
        .legend(|(x, y)| {
            Rectangle::new(
                [(x, y.saturating_sub(5)), (x.saturating_add(10), y.saturating_add(5))],
                INFERNO_HIGH.filled(),
            )
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

fn draw_scatter(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    indicator: &[bool],
    limit: u32,
) -> DrawResult {
    root.fill(&WHITE)?;

    let x_end = limit.saturating_add(1).max(3);

    let mut chart = ChartBuilder::on(root)
        .caption(PlotKind::Scatter.title(), CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(2_u32..x_end, -1_i32..2_i32)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(4)
        .y_label_formatter(&|v: &i32| match v {
            0 => "composite".to_owned(),
            1 => "prime".to_owned(),
            _ => String::new(),
        })
        .x_desc("n")
        .draw()?;

    chart.draw_series(
        (2..=limit)
            .zip(indicator)
            .map(|(n, &is_prime)| Circle::new((n, i32::from(is_prime)), 2, BLUE.filled())),
    )?;

    Ok(())
}

fn draw_gaps(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    points: &[(u32, u32)],
    limit: u32,
) -> DrawResult {
    root.fill(&WHITE)?;

    let x_end = limit.saturating_add(1).max(3);
    let y_end = points
        .iter()
        .map(|&(_, gap)| gap)
        .max()
        .unwrap_or(0)
        .saturating_add(1);

    let mut chart = ChartBuilder::on(root)
        .caption(PlotKind::Gaps.title(), CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0_u32..x_end, 0_u32..y_end)?;

    chart
        .configure_mesh()
        .x_desc("prime")
        .y_desc("gap to next prime")
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &RED))?;

    Ok(())
}
