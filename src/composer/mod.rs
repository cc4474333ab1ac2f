use std::collections::HashSet;
use tracing::{debug, info};

use crate::alarms;
use crate::config::DeploymentConfig;
use crate::error::CompositionError;
use crate::existing::ExistingResources;
use crate::service::ServiceHandle;
use crate::types::{AlarmKind, AlarmSpec};

/// Composes the alarms of services that belong to one deployment
pub struct AlarmComposer<'a> {
    config: &'a DeploymentConfig,
    existing: &'a ExistingResources,
}

impl<'a> AlarmComposer<'a> {
    pub fn new(config: &'a DeploymentConfig, existing: &'a ExistingResources) -> Self {
        Self { config, existing }
    }

    /// Build every alarm that applies to `service`, in a fixed order
    pub fn compose(&self, service: &ServiceHandle) -> Result<Composition, CompositionError> {
        let mut specs = vec![
            alarms::cpu_utilization_alarm(service, self.existing),
            alarms::memory_utilization_alarm(service, self.existing),
        ];
        match alarms::target_server_errors_alarm(service, self.existing) {
            Some(edge) => specs.push(edge),
            None => debug!("service has no load balancer, skipping {}", AlarmKind::TargetServerErrors),
        }

        check_invariants(&specs)?;

        let composition = Composition { alarms: specs };
        info!(
            "composed {} alarms for {} ({}): {}",
            composition.len(),
            self.config.name(),
            self.config.branch(),
            composition
                .kinds()
                .iter()
                .map(|k| k.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(composition)
    }
}

/// Convenience wrapper around [`AlarmComposer`].
pub fn compose(
    config: &DeploymentConfig,
    existing: &ExistingResources,
    service: &ServiceHandle,
) -> Result<Composition, CompositionError> {
    AlarmComposer::new(config, existing).compose(service)
}

fn check_invariants(alarms: &[AlarmSpec]) -> Result<(), CompositionError> {
    let mut seen = HashSet::new();
    for alarm in alarms {
        if alarm.dimensions.is_empty() {
            return Err(CompositionError::MissingDimensions { metric_name: alarm.metric_name.clone() });
        }
        if alarm.alarm_actions.is_empty() || alarm.ok_actions.is_empty() {
            return Err(CompositionError::MissingActions { metric_name: alarm.metric_name.clone() });
        }
        if !seen.insert(alarm.identity()) {
            return Err(CompositionError::DuplicateAlarm {
                metric_name: alarm.metric_name.clone(),
                namespace: alarm.namespace.clone(),
                dimensions: alarm
                    .dimensions
                    .iter()
                    .map(|d| format!("{}={}", d.name, d.value))
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
    }
    Ok(())
}

/// The alarms composed for one service
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    alarms: Vec<AlarmSpec>,
}

impl Composition {
    pub fn alarms(&self) -> &[AlarmSpec] {
        &self.alarms
    }

    pub fn into_alarms(self) -> Vec<AlarmSpec> {
        self.alarms
    }

    /// Kinds that were produced, in composition order
    pub fn kinds(&self) -> Vec<AlarmKind> {
        self.alarms.iter().map(|a| a.kind).collect()
    }

    pub fn count(&self, kind: AlarmKind) -> usize {
        self.alarms.iter().filter(|a| a.kind == kind).count()
    }

    pub fn get(&self, kind: AlarmKind) -> Option<&AlarmSpec> {
        self.alarms.iter().find(|a| a.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.alarms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alarms.is_empty()
    }
}
