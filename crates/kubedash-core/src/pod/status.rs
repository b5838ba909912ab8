//! Pod phase and status classification

use k8s_openapi::api::core::v1::{ContainerState, Pod};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase reported by the cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PodPhase {
    /// Accepted, but one or more containers have not been created yet
    Pending,
    /// Bound to a node with all containers created
    Running,
    /// All containers terminated successfully and will not restart
    Succeeded,
    /// All containers terminated, at least one of them in failure
    Failed,
    /// State could not be obtained
    #[default]
    Unknown,
}

impl PodPhase {
    /// Parse a phase string; absent or unrecognized values are `Unknown`
    pub fn from_phase(phase: Option<&str>) -> Self {
        match phase {
            Some("Pending") => PodPhase::Pending,
            Some("Running") => PodPhase::Running,
            Some("Succeeded") => PodPhase::Succeeded,
            Some("Failed") => PodPhase::Failed,
            _ => PodPhase::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PodPhase::Pending => "Pending",
            PodPhase::Running => "Running",
            PodPhase::Succeeded => "Succeeded",
            PodPhase::Failed => "Failed",
            PodPhase::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse health bucket used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PodHealth {
    /// Pod is running or finished cleanly
    Healthy,
    /// Pod is progressing or running with a problem reported
    Degraded,
    /// Pod has failed or its state is unknown
    Unhealthy,
}

impl PodHealth {
    /// Returns true if the pod is at least partially operational
    pub fn is_operational(&self) -> bool {
        matches!(self, PodHealth::Healthy | PodHealth::Degraded)
    }
}

/// Derived phase and reason of a pod
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodStatusInfo {
    pub phase: PodPhase,
    pub reason: String,
}

impl PodStatusInfo {
    /// The reason when one is known, the phase otherwise
    pub fn display_status(&self) -> &str {
        if self.reason.is_empty() {
            self.phase.as_str()
        } else {
            &self.reason
        }
    }

    pub fn health(&self) -> PodHealth {
        match self.phase {
            PodPhase::Failed | PodPhase::Unknown => PodHealth::Unhealthy,
            PodPhase::Succeeded => PodHealth::Healthy,
            PodPhase::Running if self.reason.is_empty() => PodHealth::Healthy,
            PodPhase::Running | PodPhase::Pending => PodHealth::Degraded,
        }
    }
}

/// Phase and reason of a pod.
///
/// A pod-level reason wins. Otherwise the first container that is waiting
/// or terminated supplies the reason, even an empty one, and the scan stops
/// there.
pub fn status(pod: &Pod) -> PodStatusInfo {
    let pod_status = pod.status.as_ref();
    let phase = PodPhase::from_phase(pod_status.and_then(|s| s.phase.as_deref()));

    let reason = match pod_status.and_then(|s| s.reason.as_deref()) {
        Some(reason) if !reason.is_empty() => reason.to_string(),
        _ => pod_status
            .and_then(|s| s.container_statuses.as_ref())
            .and_then(|statuses| {
                statuses
                    .iter()
                    .find_map(|cs| cs.state.as_ref().and_then(state_reason))
            })
            .unwrap_or_default(),
    };

    PodStatusInfo { phase, reason }
}

/// Reason of a waiting or terminated state; `None` for running or empty states
fn state_reason(state: &ContainerState) -> Option<String> {
    if let Some(waiting) = &state.waiting {
        return Some(waiting.reason.clone().unwrap_or_default());
    }
    if let Some(terminated) = &state.terminated {
        return Some(terminated.reason.clone().unwrap_or_default());
    }
    None
}
