//! Pod listing command

use anyhow::Result;
use kubedash_core::PodSummary;
use tabled::Tabled;

use crate::input::{load_metrics, load_pods, metrics_for};
use crate::output::{color_health, print_json, print_table, OutputFormat};

/// Row for the pods table
#[derive(Tabled)]
struct PodRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "Ready")]
    ready: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Restarts")]
    restarts: u32,
    #[tabled(rename = "Resources")]
    resources: String,
}

impl From<&PodSummary> for PodRow {
    fn from(summary: &PodSummary) -> Self {
        Self {
            name: summary.name.clone(),
            namespace: summary.namespace.clone(),
            ready: summary.ready.clone(),
            status: color_health(summary.status.display_status(), summary.health()),
            restarts: summary.restarts,
            resources: summary.resources.to_string(),
        }
    }
}

/// Summarize pods from a snapshot, with optional metrics
pub fn show_pods(source: &str, metrics_source: Option<&str>, format: OutputFormat) -> Result<()> {
    let pods = load_pods(source)?;
    let metrics = match metrics_source {
        Some(path) => load_metrics(path)?,
        None => Vec::new(),
    };

    let summaries: Vec<PodSummary> = pods
        .iter()
        .map(|pod| PodSummary::from_pod(pod, metrics_for(pod, &metrics)))
        .collect();

    match format {
        OutputFormat::Json => print_json(&summaries)?,
        OutputFormat::Table => print_table(summaries.iter().map(PodRow::from).collect()),
    }

    Ok(())
}
