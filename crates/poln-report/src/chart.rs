//! Four-panel SVG chart of a run.
//!
//! | Panel | Series |
//! |-------|--------|
//! | 1 | circulating supply, total burnt tokens |
//! | 2 | token price (USD) |
//! | 3 | DAO treasury balance |
//! | 4 | new missions per month |

use crate::error::{ReportError, Result};
use poln_economics::{MonthlyRecord, SimulationRun, SYMBOL};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Chart size in pixels
pub const CHART_SIZE: (u32, u32) = (1400, 1400);

fn chart_err<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Chart(err.to_string())
}

struct Series<'a> {
    label: &'a str,
    color: RGBColor,
    points: Vec<(f64, f64)>,
}

fn line<'a>(
    records: &[MonthlyRecord],
    label: &'a str,
    color: RGBColor,
    value: impl Fn(&MonthlyRecord) -> f64,
) -> Series<'a> {
    Series {
        label,
        color,
        points: records.iter().map(|r| (r.month as f64, value(r))).collect(),
    }
}

/// Y range covering all series, padded so flat lines stay visible
fn y_range(series: &[Series<'_>]) -> (f64, f64) {
    let values = series.iter().flat_map(|s| s.points.iter().map(|(_, y)| *y));
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { hi.abs().max(1.0) * 0.05 };
    (lo - pad, hi + pad)
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    title: &str,
    y_desc: &str,
    months: u32,
    series: &[Series<'_>],
) -> Result<()> {
    let (y_min, y_max) = y_range(series);
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(90)
        .build_cartesian_2d(1f64..(months.max(2) as f64), y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc(y_desc)
        .draw()
        .map_err(chart_err)?;

    for s in series {
        let color = s.color;
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), color.stroke_width(2)))
            .map_err(chart_err)?
            .label(s.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    if series.len() > 1 {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(chart_err)?;
    }
    Ok(())
}

/// Render the run's key metrics to an SVG file
pub fn render_chart(path: &Path, run: &SimulationRun) -> Result<()> {
    let records = &run.records;
    let months = records.len() as u32;
    let horizon = format!("{} Year{}", run.years, if run.years == 1 { "" } else { "s" });

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let panels = root.split_evenly((4, 1));

    draw_panel(
        &panels[0],
        &format!("${} Token Circulation over {}", SYMBOL, horizon),
        "Tokens",
        months,
        &[
            line(records, "Circulating Supply", BLUE, |r| r.circulating_supply),
            line(records, "Total Burnt Tokens", RED, |r| r.total_burnt_tokens),
        ],
    )?;
    draw_panel(
        &panels[1],
        &format!("${} Token Price over {}", SYMBOL, horizon),
        "Token Price (USD)",
        months,
        &[line(records, "Token Price", GREEN, |r| r.token_price)],
    )?;
    draw_panel(
        &panels[2],
        &format!("DAO Treasury Balance over {}", horizon),
        "Tokens in DAO Treasury",
        months,
        &[line(records, "DAO Treasury", RGBColor(128, 0, 128), |r| r.dao_treasury)],
    )?;
    draw_panel(
        &panels[3],
        &format!("Number of Missions over {}", horizon),
        "New Missions",
        months,
        &[line(records, "New Missions", RGBColor(255, 140, 0), |r| r.new_missions as f64)],
    )?;

    root.present().map_err(chart_err)?;
    tracing::debug!(path = %path.display(), "chart rendered");
    Ok(())
}
