use crate::existing::ExistingResources;
use crate::service::ServiceHandle;
use crate::types::{AlarmKind, AlarmSpec, Statistic};
use super::base::{load_balancer_dimensions, AlarmRule, LOAD_BALANCER_NAMESPACE};

/// Absolute count of target 5xx responses per period, not a rate.
pub const RULE: AlarmRule = AlarmRule {
    kind: AlarmKind::TargetServerErrors,
    metric_name: "HTTPCode_Target_5XX_Count",
    namespace: LOAD_BALANCER_NAMESPACE,
    statistic: Statistic::Sum,
    evaluation_periods: 1,
    threshold: 10,
};

/// `None` for services without a load balancer.
pub fn target_server_errors_alarm(service: &ServiceHandle, existing: &ExistingResources) -> Option<AlarmSpec> {
    let front_door = service.front_door.as_ref()?;
    Some(RULE.to_spec(load_balancer_dimensions(front_door), existing))
}
