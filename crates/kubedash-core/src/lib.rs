//! Dashboard core for Kubernetes cluster inspection
//!
//! This crate turns raw cluster snapshots into presentation data:
//! - Resource quantity normalization (millicores, mebibytes)
//! - Pod readiness, restarts, resources and status classification
//! - Chart series, colours and time-axis labels from metric samples
//!
//! Everything here is a pure function over immutable input.

pub mod models;
pub mod pod;
pub mod quantity;
pub mod series;

pub use models::{ContainerMetrics, ContainerResources, PodMetrics};
pub use pod::{
    readiness, resource_summary, resource_totals, restarts, status, PodHealth, PodPhase,
    PodResources, PodStatusInfo, PodSummary, ResourceTotals,
};
pub use quantity::{normalize, normalize_quantity, QuantityError, ResourceKind};
pub use series::{
    coerce_sample, format_value, renderable, to_chart_series, ChartPoint, ChartSeries, Palette,
    PaletteError, RawMetricSeries, RawSample, Selection, StyledSeries, ThemeMode, ThemeSetting,
    TimeAxis,
};
