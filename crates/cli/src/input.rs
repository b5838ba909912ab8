//! Loading of already-fetched JSON snapshots
//!
//! Accepts the documents `kubectl ... -o json` and the Prometheus HTTP API
//! return, read from a file or from stdin (`-`).

use anyhow::{bail, Context, Result};
use k8s_openapi::api::core::v1::Pod;
use kubedash_core::{PodMetrics, RawMetricSeries, RawSample};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;
use tracing::debug;

/// Read a whole document from a path, or stdin for `-`
pub fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(source).with_context(|| format!("Failed to read {}", source))
}

fn parse_document(source: &str) -> Result<Value> {
    let content = read_source(source)?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON from {}", source))
}

/// Split a `List` document into its items; any other document is one item
fn into_items(document: Value) -> Vec<Value> {
    match document {
        Value::Object(mut map) if map.get("items").map_or(false, Value::is_array) => {
            match map.remove("items") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            }
        }
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Fill in `apiVersion`/`kind` when list items omit them
fn with_type_meta(mut item: Value, api_version: &str, kind: &str) -> Value {
    if let Value::Object(map) = &mut item {
        map.entry("apiVersion")
            .or_insert_with(|| Value::String(api_version.to_string()));
        map.entry("kind")
            .or_insert_with(|| Value::String(kind.to_string()));
    }
    item
}

/// Load a Pod, a PodList or a List of pods
pub fn load_pods(source: &str) -> Result<Vec<Pod>> {
    let pods = into_items(parse_document(source)?)
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(with_type_meta(item, "v1", "Pod"))
                .with_context(|| format!("Item {} of {} is not a valid pod", i, source))
        })
        .collect::<Result<Vec<Pod>>>()?;

    debug!(source = %source, count = pods.len(), "Loaded pods");
    Ok(pods)
}

/// Load a PodMetrics object or a list of them
pub fn load_metrics(source: &str) -> Result<Vec<PodMetrics>> {
    let metrics = into_items(parse_document(source)?)
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .with_context(|| format!("Item {} of {} is not valid pod metrics", i, source))
        })
        .collect::<Result<Vec<PodMetrics>>>()?;

    debug!(source = %source, count = metrics.len(), "Loaded pod metrics");
    Ok(metrics)
}

/// Find the metrics sample belonging to a pod
pub fn metrics_for<'a>(pod: &Pod, metrics: &'a [PodMetrics]) -> Option<&'a PodMetrics> {
    let name = pod.metadata.name.as_deref().unwrap_or_default();
    let namespace = pod.metadata.namespace.as_deref().unwrap_or_default();
    metrics
        .iter()
        .find(|m| m.name() == name && m.namespace() == namespace)
}

#[derive(Debug, Deserialize)]
struct PrometheusResponse {
    data: PrometheusData,
}

#[derive(Debug, Deserialize)]
struct PrometheusData {
    #[serde(rename = "resultType")]
    result_type: String,
    #[serde(default)]
    result: Vec<PrometheusSeries>,
}

#[derive(Debug, Deserialize)]
struct PrometheusSeries {
    #[serde(default)]
    metric: BTreeMap<String, String>,
    #[serde(default)]
    values: Vec<RawSample>,
}

/// Render a Prometheus label set as `name{k="v",...}`
pub fn series_label(metric: &BTreeMap<String, String>) -> String {
    let name = metric.get("__name__").cloned().unwrap_or_default();
    let labels: Vec<String> = metric
        .iter()
        .filter(|(k, _)| k.as_str() != "__name__")
        .map(|(k, v)| format!("{}=\"{}\"", k, v))
        .collect();

    if labels.is_empty() && !name.is_empty() {
        name
    } else {
        format!("{}{{{}}}", name, labels.join(","))
    }
}

/// Load labeled series: either a JSON array of `{label, values}` or a
/// Prometheus `query_range` response with a matrix result
pub fn load_series(source: &str) -> Result<Vec<RawMetricSeries>> {
    let document = parse_document(source)?;

    if document.is_array() {
        return serde_json::from_value(document)
            .with_context(|| format!("{} is not a list of labeled series", source));
    }

    let response: PrometheusResponse = serde_json::from_value(document)
        .with_context(|| format!("{} is not a Prometheus query response", source))?;
    if response.data.result_type != "matrix" {
        bail!(
            "Expected a matrix result, got '{}'",
            response.data.result_type
        );
    }

    Ok(response
        .data
        .result
        .into_iter()
        .map(|series| RawMetricSeries {
            label: series_label(&series.metric),
            values: series.values,
        })
        .collect())
}
