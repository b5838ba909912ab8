//! Time-series transformation for charts
//!
//! Turns labeled `[timestamp, "value"]` sample arrays, as returned by a
//! metrics backend, into chart series of `{time, value}` points, and
//! provides the colour, selection and axis-label helpers a chart needs.
//!
//! Points keep the order of the input samples. Values that fail to parse
//! become NaN rather than being dropped, so series stay aligned on the
//! time axis.

mod palette;
mod selection;
mod time_axis;

pub use palette::{Palette, PaletteError, ThemeMode, ThemeSetting, DARK_COLORS, LIGHT_COLORS};
pub use selection::{renderable, Selection, StyledSeries};
pub use time_axis::{TimeAxis, DAY_SECS};

use serde::{Deserialize, Serialize};

/// One raw sample: timestamp in seconds and the value as sent by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample(pub f64, pub String);

/// A labeled series of raw samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMetricSeries {
    pub label: String,
    #[serde(default)]
    pub values: Vec<RawSample>,
}

/// A single chart point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: f64,
    pub value: f64,
}

/// A named series of chart points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<ChartPoint>,
}

impl From<&RawMetricSeries> for ChartSeries {
    fn from(raw: &RawMetricSeries) -> Self {
        Self {
            name: raw.label.clone(),
            data: raw
                .values
                .iter()
                .map(|RawSample(time, value)| ChartPoint {
                    time: *time,
                    value: coerce_sample(value),
                })
                .collect(),
        }
    }
}

/// Parse a sample value, yielding NaN when it is not a number
pub fn coerce_sample(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

/// Convert every raw series into a chart series, preserving order
pub fn to_chart_series(results: &[RawMetricSeries]) -> Vec<ChartSeries> {
    results.iter().map(ChartSeries::from).collect()
}

/// Tooltip rendering of a value: five decimals, a space, then the unit
pub fn format_value(value: f64, unit: &str) -> String {
    format!("{:.5} {}", value, unit)
}
