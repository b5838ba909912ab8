//! Input data models
//!
//! Pods and containers use the upstream `k8s-openapi` types as-is. The
//! metrics API (`metrics.k8s.io/v1beta1`) is not part of that crate, so
//! its PodMetrics shape is mirrored here. Every field is defaulted because
//! snapshots are frequently observed mid-transition.

use crate::quantity::ResourceKind;
use k8s_openapi::api::core::v1::Container;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time resource usage for the containers of a pod
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodMetrics {
    pub metadata: ObjectMeta,
    pub timestamp: Option<String>,
    pub window: Option<String>,
    pub containers: Vec<ContainerMetrics>,
}

impl PodMetrics {
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or_default()
    }
}

/// Usage sample for a single container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerMetrics {
    pub name: String,
    pub usage: BTreeMap<String, Quantity>,
}

impl ContainerMetrics {
    /// Usage of the given kind, if the sample carries one
    pub fn usage(&self, kind: ResourceKind) -> Option<&Quantity> {
        self.usage.get(kind.as_str())
    }
}

/// Typed access to the string-keyed resource maps of a container spec
pub trait ContainerResources {
    /// Requested amount of the given kind
    fn request(&self, kind: ResourceKind) -> Option<&Quantity>;

    /// Limit of the given kind
    fn limit(&self, kind: ResourceKind) -> Option<&Quantity>;
}

impl ContainerResources for Container {
    fn request(&self, kind: ResourceKind) -> Option<&Quantity> {
        self.resources
            .as_ref()
            .and_then(|r| r.requests.as_ref())
            .and_then(|m| m.get(kind.as_str()))
    }

    fn limit(&self, kind: ResourceKind) -> Option<&Quantity> {
        self.resources
            .as_ref()
            .and_then(|r| r.limits.as_ref())
            .and_then(|m| m.get(kind.as_str()))
    }
}
