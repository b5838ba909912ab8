//! Pod state aggregation
//!
//! Read-only projections over a pod snapshot:
//! - readiness (`ready/total` containers)
//! - restart count
//! - resource usage, requests and limits
//! - phase/reason status classification
//!
//! All projections are total: missing nested fields count as empty or zero.

mod resources;
mod status;

#[cfg(test)]
mod tests;

pub use resources::{resource_summary, resource_totals, PodResources, ResourceTotals, NO_DATA};
pub use status::{status, PodHealth, PodPhase, PodStatusInfo};

use crate::models::PodMetrics;
use k8s_openapi::api::core::v1::{ContainerStatus, Pod};
use serde::{Deserialize, Serialize};

fn container_statuses(pod: &Pod) -> &[ContainerStatus] {
    pod.status
        .as_ref()
        .and_then(|s| s.container_statuses.as_deref())
        .unwrap_or_default()
}

/// Number of ready containers over the number of container statuses, as `R/N`
pub fn readiness(pod: &Pod) -> String {
    let statuses = container_statuses(pod);
    let ready = statuses.iter().filter(|cs| cs.ready).count();
    format!("{}/{}", ready, statuses.len())
}

/// Sum of container restart counts
pub fn restarts(pod: &Pod) -> u32 {
    container_statuses(pod)
        .iter()
        .map(|cs| u32::try_from(cs.restart_count).unwrap_or(0))
        .fold(0u32, u32::saturating_add)
}

/// One row of a pod listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodSummary {
    pub name: String,
    pub namespace: String,
    pub ready: String,
    pub restarts: u32,
    pub status: PodStatusInfo,
    pub resources: PodResources,
}

impl PodSummary {
    pub fn from_pod(pod: &Pod, metrics: Option<&PodMetrics>) -> Self {
        let containers = pod
            .spec
            .as_ref()
            .map(|spec| spec.containers.as_slice())
            .unwrap_or_default();

        Self {
            name: pod.metadata.name.clone().unwrap_or_default(),
            namespace: pod.metadata.namespace.clone().unwrap_or_default(),
            ready: readiness(pod),
            restarts: restarts(pod),
            status: status(pod),
            resources: resource_totals(containers, metrics),
        }
    }

    pub fn health(&self) -> PodHealth {
        self.status.health()
    }
}
