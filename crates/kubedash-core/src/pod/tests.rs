//! Fixture tests for pod aggregation
//!
//! Pods are built either from `k8s-openapi` structs or from JSON documents
//! shaped like `kubectl get pod -o json` output.

#[cfg(test)]
mod fixture_tests {
    use crate::models::{ContainerMetrics, PodMetrics};
    use crate::pod::*;
    use k8s_openapi::api::core::v1::{
        Container, ContainerState, ContainerStateRunning, ContainerStateTerminated,
        ContainerStateWaiting, ContainerStatus, Pod, PodStatus, ResourceRequirements,
    };
    use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
    use std::collections::BTreeMap;

    fn quantities(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, Quantity>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), Quantity(v.to_string())))
                .collect(),
        )
    }

    fn container(name: &str, requests: &[(&str, &str)], limits: &[(&str, &str)]) -> Container {
        Container {
            name: name.to_string(),
            resources: Some(ResourceRequirements {
                requests: quantities(requests),
                limits: quantities(limits),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn container_status(ready: bool, restarts: i32, state: Option<ContainerState>) -> ContainerStatus {
        ContainerStatus {
            name: "c".to_string(),
            ready,
            restart_count: restarts,
            state,
            ..Default::default()
        }
    }

    fn waiting(reason: Option<&str>) -> Option<ContainerState> {
        Some(ContainerState {
            waiting: Some(ContainerStateWaiting {
                reason: reason.map(str::to_string),
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    fn terminated(reason: Option<&str>) -> Option<ContainerState> {
        Some(ContainerState {
            terminated: Some(ContainerStateTerminated {
                reason: reason.map(str::to_string),
                exit_code: 1,
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    fn running() -> Option<ContainerState> {
        Some(ContainerState {
            running: Some(ContainerStateRunning::default()),
            ..Default::default()
        })
    }

    fn pod_with(
        phase: Option<&str>,
        reason: Option<&str>,
        statuses: Option<Vec<ContainerStatus>>,
    ) -> Pod {
        Pod {
            status: Some(PodStatus {
                phase: phase.map(str::to_string),
                reason: reason.map(str::to_string),
                container_statuses: statuses,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn metrics(samples: Vec<(&str, Vec<(&str, &str)>)>) -> PodMetrics {
        PodMetrics {
            containers: samples
                .into_iter()
                .map(|(name, usage)| ContainerMetrics {
                    name: name.to_string(),
                    usage: quantities(&usage).unwrap_or_default(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_readiness_counts_ready_statuses() {
        let pod = pod_with(
            Some("Running"),
            None,
            Some(vec![
                container_status(true, 0, running()),
                container_status(false, 0, waiting(Some("ContainerCreating"))),
                container_status(true, 0, running()),
            ]),
        );
        assert_eq!(readiness(&pod), "2/3");
    }

    #[test]
    fn test_readiness_without_statuses() {
        assert_eq!(readiness(&Pod::default()), "0/0");
        assert_eq!(readiness(&pod_with(Some("Pending"), None, None)), "0/0");
    }

    #[test]
    fn test_restarts_sum() {
        let pod = pod_with(
            Some("Running"),
            None,
            Some(vec![
                container_status(true, 3, running()),
                container_status(true, 0, running()),
                container_status(true, 4, running()),
            ]),
        );
        assert_eq!(restarts(&pod), 7);
        assert_eq!(restarts(&Pod::default()), 0);
    }

    #[test]
    fn test_restarts_ignores_negative_counts() {
        let pod = pod_with(
            None,
            None,
            Some(vec![
                container_status(true, -2, None),
                container_status(true, 5, None),
            ]),
        );
        assert_eq!(restarts(&pod), 5);
    }

    #[test]
    fn test_status_defaults_to_unknown() {
        let info = status(&Pod::default());
        assert_eq!(info.phase, PodPhase::Unknown);
        assert_eq!(info.reason, "");
    }

    #[test]
    fn test_status_pod_reason_wins() {
        let pod = pod_with(
            Some("Failed"),
            Some("Evicted"),
            Some(vec![container_status(false, 0, waiting(Some("ImagePullBackOff")))]),
        );
        let info = status(&pod);
        assert_eq!(info.phase, PodPhase::Failed);
        assert_eq!(info.reason, "Evicted");
    }

    #[test]
    fn test_status_empty_pod_reason_falls_through() {
        let pod = pod_with(
            Some("Pending"),
            Some(""),
            Some(vec![container_status(false, 0, waiting(Some("ErrImagePull")))]),
        );
        assert_eq!(status(&pod).reason, "ErrImagePull");
    }

    #[test]
    fn test_status_first_problem_container_wins() {
        let pod = pod_with(
            Some("Running"),
            None,
            Some(vec![
                container_status(true, 0, running()),
                container_status(false, 5, terminated(Some("OOMKilled"))),
                container_status(false, 0, waiting(Some("CrashLoopBackOff"))),
            ]),
        );
        let info = status(&pod);
        assert_eq!(info.phase, PodPhase::Running);
        assert_eq!(info.reason, "OOMKilled");
    }

    #[test]
    fn test_status_scan_stops_at_empty_reason() {
        let pod = pod_with(
            Some("Pending"),
            None,
            Some(vec![
                container_status(false, 0, waiting(None)),
                container_status(false, 0, waiting(Some("ImagePullBackOff"))),
            ]),
        );
        assert_eq!(status(&pod).reason, "");
    }

    #[test]
    fn test_status_all_running() {
        let pod = pod_with(
            Some("Running"),
            None,
            Some(vec![container_status(true, 0, running()), container_status(true, 0, None)]),
        );
        let info = status(&pod);
        assert_eq!(info.reason, "");
        assert_eq!(info.health(), PodHealth::Healthy);
    }

    #[test]
    fn test_resource_summary_without_requests() {
        let containers = vec![container("app", &[], &[])];
        assert_eq!(
            resource_summary(&containers, None),
            "CPU: 0m (-/-) | Memory: 0Mi (-/-)"
        );
    }

    #[test]
    fn test_resource_summary_zero_request_is_not_placeholder() {
        let containers = vec![container("app", &[("cpu", "0m")], &[])];
        assert_eq!(
            resource_summary(&containers, None),
            "CPU: 0m (0m/-) | Memory: 0Mi (-/-)"
        );
    }

    #[test]
    fn test_resource_summary_sums_containers_and_usage() {
        let containers = vec![
            container(
                "app",
                &[("cpu", "250m"), ("memory", "128Mi")],
                &[("cpu", "1"), ("memory", "1Gi")],
            ),
            container("sidecar", &[("cpu", "50m")], &[("memory", "64Mi")]),
        ];
        let sample = metrics(vec![
            ("app", vec![("cpu", "120m"), ("memory", "200Mi")]),
            ("sidecar", vec![("cpu", "3m")]),
        ]);

        let totals = resource_totals(&containers, Some(&sample));
        assert_eq!(totals.cpu.usage, 123);
        assert_eq!(totals.cpu.requests, Some(300));
        assert_eq!(totals.cpu.limits, Some(1000));
        assert_eq!(totals.memory.usage, 200);
        assert_eq!(totals.memory.requests, Some(128));
        assert_eq!(totals.memory.limits, Some(1088));

        assert_eq!(
            totals.to_string(),
            "CPU: 123m (300m/1000m) | Memory: 200Mi (128Mi/1088Mi)"
        );
    }

    #[test]
    fn test_resource_summary_skips_malformed_quantities() {
        let containers = vec![
            container("bad", &[("cpu", "lots")], &[]),
            container("good", &[], &[("cpu", "500m")]),
        ];
        let totals = resource_totals(&containers, None);
        assert_eq!(totals.cpu.requests, None);
        assert_eq!(totals.cpu.limits, Some(500));
    }

    #[test]
    fn test_resource_summary_ignores_unknown_resources() {
        let containers = vec![container("gpu", &[("nvidia.com/gpu", "1")], &[])];
        assert_eq!(resource_totals(&containers, None), PodResources::default());
    }

    #[test]
    fn test_usage_defaults_to_zero_without_entries() {
        let containers = vec![container("app", &[("memory", "64Mi")], &[])];
        let sample = metrics(vec![("app", vec![])]);
        assert_eq!(
            resource_summary(&containers, Some(&sample)),
            "CPU: 0m (-/-) | Memory: 0Mi (64Mi/-)"
        );
    }

    #[test]
    fn test_projections_are_idempotent() {
        let pod = pod_with(
            Some("Running"),
            None,
            Some(vec![container_status(true, 1, running())]),
        );
        let containers = vec![container("app", &[("cpu", "100m")], &[])];

        assert_eq!(readiness(&pod), readiness(&pod));
        assert_eq!(restarts(&pod), restarts(&pod));
        assert_eq!(status(&pod), status(&pod));
        assert_eq!(
            resource_summary(&containers, None),
            resource_summary(&containers, None)
        );
    }

    #[test]
    fn test_summary_from_kubectl_json() {
        let pod: Pod = serde_json::from_value(serde_json::json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": { "name": "api-7d9f", "namespace": "shop" },
            "spec": {
                "containers": [
                    {
                        "name": "api",
                        "image": "shop/api:1.4",
                        "resources": {
                            "requests": { "cpu": "100m", "memory": "256Mi" },
                            "limits": { "memory": "512Mi" }
                        }
                    }
                ]
            },
            "status": {
                "phase": "Running",
                "containerStatuses": [
                    {
                        "name": "api",
                        "image": "shop/api:1.4",
                        "imageID": "",
                        "ready": false,
                        "restartCount": 6,
                        "state": { "waiting": { "reason": "CrashLoopBackOff" } }
                    }
                ]
            }
        }))
        .unwrap();

        let sample: PodMetrics = serde_json::from_value(serde_json::json!({
            "metadata": { "name": "api-7d9f", "namespace": "shop" },
            "containers": [ { "name": "api", "usage": { "cpu": "5m", "memory": "180Mi" } } ]
        }))
        .unwrap();

        let summary = PodSummary::from_pod(&pod, Some(&sample));
        assert_eq!(summary.name, "api-7d9f");
        assert_eq!(summary.namespace, "shop");
        assert_eq!(summary.ready, "0/1");
        assert_eq!(summary.restarts, 6);
        assert_eq!(summary.status.display_status(), "CrashLoopBackOff");
        assert_eq!(summary.health(), PodHealth::Degraded);
        assert_eq!(
            summary.resources.to_string(),
            "CPU: 5m (100m/-) | Memory: 180Mi (256Mi/512Mi)"
        );
    }
}
