//! Resource aggregation across the containers of a pod
//!
//! Requests and limits are summed from container specs, usage from the
//! metrics sample. A requests/limits total that no container contributed
//! to stays `None` and renders as `-`, which keeps "not requested" apart
//! from "requested 0".

use crate::models::{ContainerResources, PodMetrics};
use crate::quantity::{normalize_quantity, ResourceKind};
use k8s_openapi::api::core::v1::Container;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Placeholder for a total no container contributed to
pub const NO_DATA: &str = "-";

/// Summed usage, requests and limits for one resource kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTotals {
    pub usage: u64,
    pub requests: Option<u64>,
    pub limits: Option<u64>,
}

impl ResourceTotals {
    fn add_request(&mut self, value: u64) {
        self.requests = Some(self.requests.unwrap_or(0).saturating_add(value));
    }

    fn add_limit(&mut self, value: u64) {
        self.limits = Some(self.limits.unwrap_or(0).saturating_add(value));
    }

    fn add_usage(&mut self, value: u64) {
        self.usage = self.usage.saturating_add(value);
    }
}

/// Resource totals of a pod, per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodResources {
    pub cpu: ResourceTotals,
    pub memory: ResourceTotals,
}

impl PodResources {
    pub fn get(&self, kind: ResourceKind) -> &ResourceTotals {
        match kind {
            ResourceKind::Cpu => &self.cpu,
            ResourceKind::Memory => &self.memory,
        }
    }

    fn get_mut(&mut self, kind: ResourceKind) -> &mut ResourceTotals {
        match kind {
            ResourceKind::Cpu => &mut self.cpu,
            ResourceKind::Memory => &mut self.memory,
        }
    }
}

impl fmt::Display for PodResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |value: Option<u64>, kind: ResourceKind| match value {
            Some(v) => format!("{}{}", v, kind.unit()),
            None => NO_DATA.to_string(),
        };

        write!(
            f,
            "CPU: {}m ({}/{}) | Memory: {}Mi ({}/{})",
            self.cpu.usage,
            slot(self.cpu.requests, ResourceKind::Cpu),
            slot(self.cpu.limits, ResourceKind::Cpu),
            self.memory.usage,
            slot(self.memory.requests, ResourceKind::Memory),
            slot(self.memory.limits, ResourceKind::Memory),
        )
    }
}

/// Sum requests, limits and usage over all containers
pub fn resource_totals(containers: &[Container], metrics: Option<&PodMetrics>) -> PodResources {
    let mut totals = PodResources::default();

    for container in containers {
        for kind in ResourceKind::ALL {
            if let Some(value) = container
                .request(kind)
                .and_then(|q| checked(&container.name, kind, q))
            {
                totals.get_mut(kind).add_request(value);
            }
            if let Some(value) = container
                .limit(kind)
                .and_then(|q| checked(&container.name, kind, q))
            {
                totals.get_mut(kind).add_limit(value);
            }
        }
    }

    for sample in metrics.map(|m| m.containers.as_slice()).unwrap_or_default() {
        for kind in ResourceKind::ALL {
            if let Some(value) = sample
                .usage(kind)
                .and_then(|q| checked(&sample.name, kind, q))
            {
                totals.get_mut(kind).add_usage(value);
            }
        }
    }

    debug!(
        containers = containers.len(),
        has_metrics = metrics.is_some(),
        cpu = ?totals.cpu,
        memory = ?totals.memory,
        "Aggregated pod resources"
    );

    totals
}

/// Formatted `CPU: ...m (req/lim) | Memory: ...Mi (req/lim)` summary
pub fn resource_summary(containers: &[Container], metrics: Option<&PodMetrics>) -> String {
    resource_totals(containers, metrics).to_string()
}

/// Normalize a quantity, skipping (and logging) malformed values
fn checked(container: &str, kind: ResourceKind, quantity: &Quantity) -> Option<u64> {
    match normalize_quantity(kind, quantity) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(container = %container, resource = %kind, error = %e, "Skipping malformed quantity");
            None
        }
    }
}
