use serde::Serialize;
use std::fmt;

/// A value that may only be known once the surrounding template is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ValueRef {
    Literal(String),
    Ref {
        #[serde(rename = "Ref")]
        logical_id: String,
    },
    GetAtt {
        #[serde(rename = "Fn::GetAtt")]
        target: (String, String),
    },
}

impl ValueRef {
    pub fn literal<S: Into<String>>(value: S) -> Self {
        ValueRef::Literal(value.into())
    }

    pub fn reference<S: Into<String>>(logical_id: S) -> Self {
        ValueRef::Ref { logical_id: logical_id.into() }
    }

    pub fn get_att<S, A>(logical_id: S, attribute: A) -> Self
    where
        S: Into<String>,
        A: Into<String>,
    {
        ValueRef::GetAtt { target: (logical_id.into(), attribute.into()) }
    }

    /// True when the value is resolved at emission time rather than known now.
    pub fn is_deferred(&self) -> bool {
        !matches!(self, ValueRef::Literal(_))
    }
}

impl fmt::Display for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Literal(v) => write!(f, "{}", v),
            ValueRef::Ref { logical_id } => write!(f, "Ref({})", logical_id),
            ValueRef::GetAtt { target: (id, attr) } => write!(f, "GetAtt({}.{})", id, attr),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimension {
    pub name: String,
    pub value: ValueRef,
}

impl Dimension {
    pub fn new<S: Into<String>>(name: S, value: ValueRef) -> Self {
        Self { name: name.into(), value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Statistic {
    Average,
    Sum,
    Minimum,
    Maximum,
    SampleCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonOperator {
    GreaterThanOrEqualToThreshold,
    GreaterThanThreshold,
    LessThanThreshold,
    LessThanOrEqualToThreshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AlarmKind {
    CpuUtilization,
    MemoryUtilization,
    TargetServerErrors,
}

impl AlarmKind {
    pub const ALL: [AlarmKind; 3] = [
        AlarmKind::CpuUtilization,
        AlarmKind::MemoryUtilization,
        AlarmKind::TargetServerErrors,
    ];

    /// Suffix appended to the owning construct id when the alarm is rendered.
    pub fn logical_suffix(&self) -> &'static str {
        match self {
            AlarmKind::CpuUtilization => "CpuAlarm",
            AlarmKind::MemoryUtilization => "MemoryAlarm",
            AlarmKind::TargetServerErrors => "LoadBalancer5xxAlarm",
        }
    }
}

impl fmt::Display for AlarmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlarmKind::CpuUtilization => "cpu-utilization",
            AlarmKind::MemoryUtilization => "memory-utilization",
            AlarmKind::TargetServerErrors => "target-5xx",
        };
        f.write_str(s)
    }
}

/// A declared metric alarm. Serializes with CloudWatch alarm property names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmSpec {
    #[serde(skip)]
    pub kind: AlarmKind,
    pub metric_name: String,
    pub namespace: String,
    pub dimensions: Vec<Dimension>,
    pub statistic: Statistic,
    pub period: u32,
    pub evaluation_periods: u32,
    pub comparison_operator: ComparisonOperator,
    pub threshold: u32,
    pub alarm_actions: Vec<ValueRef>,
    #[serde(rename = "OKActions")]
    pub ok_actions: Vec<ValueRef>,
}

impl AlarmSpec {
    /// The (metric, namespace, dimensions) triple that identifies the underlying alarm.
    pub fn identity(&self) -> (&str, &str, &[Dimension]) {
        (&self.metric_name, &self.namespace, &self.dimensions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AccountAndRegion {
    pub account: String,
    pub region: String,
}

impl AccountAndRegion {
    pub fn new<A, R>(account: A, region: R) -> Self
    where
        A: Into<String>,
        R: Into<String>,
    {
        Self { account: account.into(), region: region.into() }
    }
}

impl fmt::Display for AccountAndRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.account, self.region)
    }
}

/// Shared resources a locator must be able to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Network,
    Domain,
    Certificate,
    HostedZone,
    DockerHubSecret,
    CodeStarConnection,
    ChatbotChannel,
    AlarmNotificationTopic,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Network => "network",
            ResourceKind::Domain => "domain",
            ResourceKind::Certificate => "certificate",
            ResourceKind::HostedZone => "hosted zone",
            ResourceKind::DockerHubSecret => "docker hub credentials secret",
            ResourceKind::CodeStarConnection => "code star connection",
            ResourceKind::ChatbotChannel => "chatbot channel",
            ResourceKind::AlarmNotificationTopic => "alarm notification topic",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ref_serialization_shapes() {
        assert_eq!(
            serde_json::to_value(ValueRef::literal("arn:aws:sns:us-west-2:1:topic")).unwrap(),
            serde_json::json!("arn:aws:sns:us-west-2:1:topic")
        );
        assert_eq!(
            serde_json::to_value(ValueRef::reference("TestTopic")).unwrap(),
            serde_json::json!({"Ref": "TestTopic"})
        );
        assert_eq!(
            serde_json::to_value(ValueRef::get_att("FargateService", "Name")).unwrap(),
            serde_json::json!({"Fn::GetAtt": ["FargateService", "Name"]})
        );
    }

    #[test]
    fn test_value_ref_deferred() {
        assert!(!ValueRef::literal("x").is_deferred());
        assert!(ValueRef::reference("x").is_deferred());
        assert!(ValueRef::get_att("x", "Name").is_deferred());
    }

    #[test]
    fn test_dimension_serialization() {
        let dim = Dimension::new("ClusterName", ValueRef::reference("Cluster"));
        assert_eq!(
            serde_json::to_value(&dim).unwrap(),
            serde_json::json!({"Name": "ClusterName", "Value": {"Ref": "Cluster"}})
        );
    }

    #[test]
    fn test_alarm_kind_suffixes_are_distinct() {
        let mut suffixes: Vec<&str> = AlarmKind::ALL.iter().map(|k| k.logical_suffix()).collect();
        suffixes.sort();
        suffixes.dedup();
        assert_eq!(suffixes.len(), AlarmKind::ALL.len());
    }

    #[test]
    fn test_account_and_region_display() {
        let target = AccountAndRegion::new("123456789012", "us-west-2");
        assert_eq!(target.to_string(), "123456789012/us-west-2");
    }
}
