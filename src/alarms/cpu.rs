use crate::existing::ExistingResources;
use crate::service::ServiceHandle;
use crate::types::{AlarmKind, AlarmSpec, Statistic};
use super::base::{service_dimensions, AlarmRule, ECS_NAMESPACE};

/// Sustained CPU saturation: two consecutive breaching periods.
pub const RULE: AlarmRule = AlarmRule {
    kind: AlarmKind::CpuUtilization,
    metric_name: "CPUUtilization",
    namespace: ECS_NAMESPACE,
    statistic: Statistic::Average,
    evaluation_periods: 2,
    threshold: 85,
};

pub fn cpu_utilization_alarm(service: &ServiceHandle, existing: &ExistingResources) -> AlarmSpec {
    RULE.to_spec(service_dimensions(service), existing)
}
