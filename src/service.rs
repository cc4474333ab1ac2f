use tracing::debug;

use crate::config::{DeploymentConfig, DERIVED_TAG_KEYS};
use crate::existing::ExistingResources;
use crate::types::ValueRef;

/// Load balancer that fronts a service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontDoor {
    pub load_balancer_full_name: ValueRef,
}

/// Identifiers of a composed compute service, bound once the template is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHandle {
    pub cluster_name: ValueRef,
    pub service_name: ValueRef,
    pub front_door: Option<FrontDoor>,
}

impl ServiceHandle {
    pub fn is_fronted(&self) -> bool {
        self.front_door.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    LoadBalanced,
    Internal,
}

/// Declarative description of the frontend service and the shared resources it binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDefinition {
    pub construct_id: String,
    pub cpu: u32,
    pub memory_limit_mib: u32,
    pub desired_count: u32,
    pub min_capacity: u32,
    pub max_capacity: u32,
    pub environment: Vec<(String, String)>,
    pub subnet_ids: Vec<String>,
    pub registry_credentials: String,
    pub certificate_arn: Option<String>,
    pub hosted_zone_id: Option<String>,
    pub domain_name: Option<String>,
    pub tags: Vec<(String, String)>,
    pub handle: ServiceHandle,
}

impl ServiceDefinition {
    pub fn compose(
        config: &DeploymentConfig,
        existing: &ExistingResources,
        construct_id: &str,
        exposure: Exposure,
    ) -> Self {
        let sizing = config.frontend();
        let handle = service_handle(construct_id, exposure);

        let (certificate_arn, hosted_zone_id, domain_name) = match exposure {
            Exposure::LoadBalanced => (
                Some(existing.domain.certificate.arn.clone()),
                Some(existing.domain.zone.id.clone()),
                Some(format!("{}-{}.{}", config.name(), config.branch(), existing.domain.name)),
            ),
            Exposure::Internal => (None, None, None),
        };

        let [environment_key, branch_key] = DERIVED_TAG_KEYS;
        let mut tags: Vec<(String, String)> = vec![
            (environment_key.to_string(), config.name().to_string()),
            (branch_key.to_string(), config.branch().to_string()),
        ];
        tags.extend(config.tags().iter().map(|(k, v)| (k.to_string(), v.to_string())));

        debug!(
            "composed service {} (cpu {}, memory {} MiB, {}..{} tasks, fronted: {})",
            construct_id,
            sizing.cpu,
            sizing.memory_limit_mib,
            sizing.desired_count,
            sizing.max_capacity,
            handle.is_fronted()
        );

        Self {
            construct_id: construct_id.to_string(),
            cpu: sizing.cpu,
            memory_limit_mib: sizing.memory_limit_mib,
            desired_count: sizing.desired_count,
            min_capacity: sizing.desired_count,
            max_capacity: sizing.max_capacity,
            environment: vec![("BACKEND_URL".to_string(), config.backend_url().to_string())],
            subnet_ids: existing.network.public_subnet_ids.clone(),
            registry_credentials: existing.docker_hub_credentials.secret.arn.clone(),
            certificate_arn,
            hosted_zone_id,
            domain_name,
            tags,
            handle,
        }
    }
}

fn service_handle(construct_id: &str, exposure: Exposure) -> ServiceHandle {
    let front_door = match exposure {
        Exposure::LoadBalanced => {
            let lb = format!("{}LB", construct_id);
            Some(FrontDoor {
                load_balancer_full_name: ValueRef::get_att(lb, "LoadBalancerFullName"),
            })
        }
        Exposure::Internal => None,
    };
    ServiceHandle {
        cluster_name: ValueRef::reference(format!("{}Cluster", construct_id)),
        service_name: ValueRef::get_att(format!("{}Service", construct_id), "Name"),
        front_door,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizingInput;
    use crate::existing::tests::sample_resources;

    fn demo_config() -> DeploymentConfig {
        DeploymentConfig::new(
            "demo",
            "some-branch",
            SizingInput {
                cpu: Some(1024),
                memory_limit_mib: Some(2048),
                desired_count: Some(1),
                max_capacity: Some(4),
            },
            "https://pankbase-some-test-backend.demo.pankbase.org",
            vec![("test".to_string(), "tag".to_string())],
        )
        .unwrap()
    }

    #[test]
    fn test_load_balanced_service() {
        let service = ServiceDefinition::compose(&demo_config(), &sample_resources(), "Frontend", Exposure::LoadBalanced);

        assert_eq!(service.cpu, 1024);
        assert_eq!(service.memory_limit_mib, 2048);
        assert_eq!(service.min_capacity, 1);
        assert_eq!(service.max_capacity, 4);
        assert_eq!(service.subnet_ids, vec!["subnet-public-a".to_string()]);
        assert_eq!(service.domain_name.as_deref(), Some("demo-some-branch.my.test.domain.org"));
        assert_eq!(
            service.environment,
            vec![("BACKEND_URL".to_string(), "https://pankbase-some-test-backend.demo.pankbase.org".to_string())]
        );
        assert_eq!(
            service.tags,
            vec![
                ("environment".to_string(), "demo".to_string()),
                ("branch".to_string(), "some-branch".to_string()),
                ("test".to_string(), "tag".to_string()),
            ]
        );

        let handle = &service.handle;
        assert_eq!(handle.cluster_name, ValueRef::reference("FrontendCluster"));
        assert_eq!(handle.service_name, ValueRef::get_att("FrontendService", "Name"));
        let front_door = handle.front_door.as_ref().unwrap();
        assert_eq!(front_door.load_balancer_full_name, ValueRef::get_att("FrontendLB", "LoadBalancerFullName"));
    }

    #[test]
    fn test_internal_service_has_no_front_door() {
        let service = ServiceDefinition::compose(&demo_config(), &sample_resources(), "Worker", Exposure::Internal);
        assert!(!service.handle.is_fronted());
        assert_eq!(service.certificate_arn, None);
        assert_eq!(service.domain_name, None);
    }

    #[test]
    fn test_handle_identifiers_are_deferred() {
        let service = ServiceDefinition::compose(&demo_config(), &sample_resources(), "Frontend", Exposure::LoadBalanced);
        assert!(service.handle.cluster_name.is_deferred());
        assert!(service.handle.service_name.is_deferred());
    }
}
