use crate::existing::ExistingResources;
use crate::service::{FrontDoor, ServiceHandle};
use crate::types::{AlarmKind, AlarmSpec, ComparisonOperator, Dimension, Statistic, ValueRef};

pub const ECS_NAMESPACE: &str = "AWS/ECS";
pub const LOAD_BALANCER_NAMESPACE: &str = "AWS/ApplicationELB";
pub const PERIOD_SECONDS: u32 = 300;

/// Cluster and service dimensions shared by the task-level alarms.
pub fn service_dimensions(service: &ServiceHandle) -> Vec<Dimension> {
    vec![
        Dimension::new("ClusterName", service.cluster_name.clone()),
        Dimension::new("ServiceName", service.service_name.clone()),
    ]
}

pub fn load_balancer_dimensions(front_door: &FrontDoor) -> Vec<Dimension> {
    vec![Dimension::new("LoadBalancer", front_door.load_balancer_full_name.clone())]
}

/// Alarm and recovery both notify the shared alarm topic.
pub fn notification_actions(existing: &ExistingResources) -> Vec<ValueRef> {
    vec![existing.notification.alarm_notification_topic.reference.clone()]
}

/// The numbers that make up one alarm rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlarmRule {
    pub kind: AlarmKind,
    pub metric_name: &'static str,
    pub namespace: &'static str,
    pub statistic: Statistic,
    pub evaluation_periods: u32,
    pub threshold: u32,
}

impl AlarmRule {
    pub fn to_spec(&self, dimensions: Vec<Dimension>, existing: &ExistingResources) -> AlarmSpec {
        let actions = notification_actions(existing);
        AlarmSpec {
            kind: self.kind,
            metric_name: self.metric_name.to_string(),
            namespace: self.namespace.to_string(),
            dimensions,
            statistic: self.statistic,
            period: PERIOD_SECONDS,
            evaluation_periods: self.evaluation_periods,
            comparison_operator: ComparisonOperator::GreaterThanOrEqualToThreshold,
            threshold: self.threshold,
            alarm_actions: actions.clone(),
            ok_actions: actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::existing::tests::sample_resources;

    #[test]
    fn test_service_dimensions_keep_references() {
        let handle = ServiceHandle {
            cluster_name: ValueRef::reference("EcsDefaultClusterMnL3mNNYN926A5246"),
            service_name: ValueRef::get_att("FargateServiceECC8084D", "Name"),
            front_door: None,
        };
        let dims = service_dimensions(&handle);
        assert_eq!(dims.len(), 2);
        assert_eq!(dims[0].name, "ClusterName");
        assert_eq!(dims[0].value, ValueRef::reference("EcsDefaultClusterMnL3mNNYN926A5246"));
        assert_eq!(dims[1].name, "ServiceName");
        assert_eq!(dims[1].value, ValueRef::get_att("FargateServiceECC8084D", "Name"));
    }

    #[test]
    fn test_rule_to_spec_uses_topic_for_both_transitions() {
        let rule = AlarmRule {
            kind: AlarmKind::CpuUtilization,
            metric_name: "CPUUtilization",
            namespace: ECS_NAMESPACE,
            statistic: Statistic::Average,
            evaluation_periods: 2,
            threshold: 85,
        };
        let spec = rule.to_spec(vec![], &sample_resources());
        assert_eq!(spec.alarm_actions, vec![ValueRef::reference("TestTopic339EC197")]);
        assert_eq!(spec.ok_actions, spec.alarm_actions);
        assert_eq!(spec.period, 300);
        assert_eq!(spec.comparison_operator, ComparisonOperator::GreaterThanOrEqualToThreshold);
    }
}
