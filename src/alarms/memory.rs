use crate::existing::ExistingResources;
use crate::service::ServiceHandle;
use crate::types::{AlarmKind, AlarmSpec, Statistic};
use super::base::{service_dimensions, AlarmRule, ECS_NAMESPACE};

/// Memory pressure fires on the first breaching period.
pub const RULE: AlarmRule = AlarmRule {
    kind: AlarmKind::MemoryUtilization,
    metric_name: "MemoryUtilization",
    namespace: ECS_NAMESPACE,
    statistic: Statistic::Average,
    evaluation_periods: 1,
    threshold: 80,
};

pub fn memory_utilization_alarm(service: &ServiceHandle, existing: &ExistingResources) -> AlarmSpec {
    RULE.to_spec(service_dimensions(service), existing)
}
