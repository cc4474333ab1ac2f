use crate::composer::Composition;
use crate::config::DeploymentConfig;
use crate::types::AlarmKind;

/// What was composed for a deployment, for logging and assertions
pub struct AlarmReport {
    pub deployment: String,
    pub branch: String,
    pub services: Vec<ServiceSummary>,
}

pub struct ServiceSummary {
    pub construct_id: String,
    pub kinds: Vec<AlarmKind>,
}

impl AlarmReport {
    pub fn new(config: &DeploymentConfig) -> Self {
        Self {
            deployment: config.name().to_string(),
            branch: config.branch().to_string(),
            services: Vec::new(),
        }
    }

    pub fn add_composition(&mut self, construct_id: &str, composition: &Composition) {
        self.services.push(ServiceSummary {
            construct_id: construct_id.to_string(),
            kinds: composition.kinds(),
        });
    }

    /// Get a summary of the number of alarms per kind
    pub fn summary(&self) -> ReportSummary {
        let count = |kind: AlarmKind| -> usize {
            self.services
                .iter()
                .map(|s| s.kinds.iter().filter(|k| **k == kind).count())
                .sum()
        };
        ReportSummary {
            service_count: self.services.len(),
            cpu_alarm_count: count(AlarmKind::CpuUtilization),
            memory_alarm_count: count(AlarmKind::MemoryUtilization),
            edge_alarm_count: count(AlarmKind::TargetServerErrors),
        }
    }
}

pub struct ReportSummary {
    pub service_count: usize,
    pub cpu_alarm_count: usize,
    pub memory_alarm_count: usize,
    pub edge_alarm_count: usize,
}

impl ReportSummary {
    pub fn total_alarms(&self) -> usize {
        self.cpu_alarm_count + self.memory_alarm_count + self.edge_alarm_count
    }

    pub fn has_edge_alarm(&self) -> bool {
        self.edge_alarm_count > 0
    }
}
