//! Chart rendering command
//!
//! Prints the series a chart would draw: each with its colour, tick
//! labels and tooltip values.

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use kubedash_core::{
    format_value, renderable, to_chart_series, ChartPoint, Palette, Selection, StyledSeries,
    ThemeMode, TimeAxis,
};
use serde::Serialize;
use tabled::Tabled;

use crate::input::load_series;
use crate::output::{paint, print_info, print_json, print_table, print_warning, OutputFormat};

/// Chart display options
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub span_secs: i64,
    pub selected: Option<String>,
    pub unit: String,
    pub utc: bool,
    pub mode: ThemeMode,
}

/// Row for a series' points table
#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Serialize)]
struct LabeledPoint {
    time: f64,
    label: String,
    value: f64,
}

#[derive(Serialize)]
struct RenderedSeries<'a> {
    name: &'a str,
    index: usize,
    color: &'a str,
    points: Vec<LabeledPoint>,
}

fn tick(axis: &TimeAxis, point: &ChartPoint, utc: bool) -> String {
    if utc {
        axis.format_tick(point.time, &Utc)
    } else {
        axis.format_tick_local(point.time)
    }
}

fn rendered<'a>(styled: &StyledSeries<'a>, axis: &TimeAxis, utc: bool) -> RenderedSeries<'a> {
    RenderedSeries {
        name: &styled.series.name,
        index: styled.index,
        color: styled.color,
        points: styled
            .series
            .data
            .iter()
            .map(|p| LabeledPoint {
                time: p.time,
                label: tick(axis, p, utc),
                value: p.value,
            })
            .collect(),
    }
}

/// Render labeled series from a snapshot
pub fn show_chart(
    source: &str,
    options: &ChartOptions,
    palette: &Palette,
    format: OutputFormat,
) -> Result<()> {
    let series = to_chart_series(&load_series(source)?);
    let selection = options
        .selected
        .as_deref()
        .map(Selection::of)
        .unwrap_or_default();
    let axis = TimeAxis::new(options.span_secs);
    let styled = renderable(&series, &selection, palette, options.mode);

    tracing::debug!(
        total = series.len(),
        rendered = styled.len(),
        selected = ?selection.selected(),
        "Prepared chart series"
    );

    match format {
        OutputFormat::Json => {
            let out: Vec<RenderedSeries> = styled
                .iter()
                .map(|s| rendered(s, &axis, options.utc))
                .collect();
            print_json(&out)?;
        }
        OutputFormat::Table => {
            if styled.is_empty() {
                match selection.selected() {
                    Some(label) => print_warning(&format!("No series labeled '{}'", label)),
                    None => print_warning("No series found"),
                }
                return Ok(());
            }

            for s in &styled {
                println!(
                    "{} {} {}",
                    paint("■", s.color),
                    s.series.name.bold(),
                    format!("({})", s.color).dimmed()
                );
                let rows: Vec<PointRow> = s
                    .series
                    .data
                    .iter()
                    .map(|p| PointRow {
                        time: tick(&axis, p, options.utc),
                        value: format_value(p.value, &options.unit),
                    })
                    .collect();
                print_table(rows);
                println!();
            }

            if selection.selected().is_some() {
                print_info(&format!("Showing {} of {} series", styled.len(), series.len()));
            }
        }
    }

    Ok(())
}
