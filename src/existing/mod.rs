// Lookup of shared infrastructure that is provisioned elsewhere
pub mod catalog;
pub mod development;
pub mod production;

use crate::error::{ResourceNotFoundError, ValidationError};
use crate::types::{AccountAndRegion, ResourceKind, ValueRef};

pub use catalog::{CatalogEntry, CatalogLocator, ResourceCatalog};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    pub vpc_id: String,
    pub public_subnet_ids: Vec<String>,
    pub isolated_subnet_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub name: String,
    pub certificate: Certificate,
    pub zone: HostedZone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    pub arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerHubCredentials {
    pub secret: Secret,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeStarConnection {
    pub arn: String,
}

/// Chat channel that receives notifications published to the alarm topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatbotChannel {
    pub configuration_name: String,
    pub channel_id: String,
    pub workspace_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTopic {
    pub reference: ValueRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub chatbot: ChatbotChannel,
    pub alarm_notification_topic: NotificationTopic,
}

/// Read-only handles to everything a deployment binds to but does not own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingResources {
    pub network: Network,
    pub domain: Domain,
    pub docker_hub_credentials: DockerHubCredentials,
    pub code_star_connection: CodeStarConnection,
    pub notification: Notification,
}

/// Resolves existing resources for a deployment identity.
///
/// Implementations look resources up. They must never create one or fall back
/// to a default when something is missing.
pub trait ExistingResourceLocator: Send + Sync {
    fn name(&self) -> &'static str;

    fn serves(&self, target: &AccountAndRegion) -> bool;

    fn resolve(&self, target: &AccountAndRegion) -> Result<ExistingResources, ResourceNotFoundError>;
}

/// Which locator a pipeline binds to. Selected by name, instantiated on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocatorKind {
    Development,
    Production,
}

impl LocatorKind {
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        match name.trim() {
            "development" | "dev" => Ok(LocatorKind::Development),
            "production" | "prod" => Ok(LocatorKind::Production),
            other => Err(ValidationError::UnknownLocator(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LocatorKind::Development => development::NAME,
            LocatorKind::Production => production::NAME,
        }
    }

    /// The built-in catalog of exported identifiers for this kind.
    pub fn catalog(&self) -> ResourceCatalog {
        match self {
            LocatorKind::Development => development::catalog(),
            LocatorKind::Production => production::catalog(),
        }
    }

    pub fn locator(&self) -> Box<dyn ExistingResourceLocator> {
        Box::new(CatalogLocator::new(self.name(), self.catalog()))
    }

    pub fn supports(&self, target: &AccountAndRegion) -> bool {
        self.locator().serves(target)
    }
}

/// Serves one prebuilt bundle for one identity.
#[derive(Debug, Clone)]
pub struct InMemoryLocator {
    target: AccountAndRegion,
    resources: ExistingResources,
}

impl InMemoryLocator {
    pub fn new(target: AccountAndRegion, resources: ExistingResources) -> Self {
        Self { target, resources }
    }
}

impl ExistingResourceLocator for InMemoryLocator {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    fn serves(&self, target: &AccountAndRegion) -> bool {
        &self.target == target
    }

    fn resolve(&self, target: &AccountAndRegion) -> Result<ExistingResources, ResourceNotFoundError> {
        if !self.serves(target) {
            return Err(ResourceNotFoundError::new(ResourceKind::Network, target));
        }
        Ok(self.resources.clone())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_resources() -> ExistingResources {
        ExistingResources {
            network: Network {
                vpc_id: "vpc-test".to_string(),
                public_subnet_ids: vec!["subnet-public-a".to_string()],
                isolated_subnet_ids: vec!["subnet-isolated-a".to_string()],
            },
            domain: Domain {
                name: "my.test.domain.org".to_string(),
                certificate: Certificate { arn: "arn:aws:acm:us-west-2:123456789012:certificate/test".to_string() },
                zone: HostedZone { id: "ZTEST".to_string(), name: "my.test.domain.org".to_string() },
            },
            docker_hub_credentials: DockerHubCredentials {
                secret: Secret { arn: "arn:aws:secretsmanager:us-west-2:123456789012:secret:test".to_string() },
            },
            code_star_connection: CodeStarConnection { arn: "some-code-star-arn".to_string() },
            notification: Notification {
                chatbot: ChatbotChannel {
                    configuration_name: "some-config-name".to_string(),
                    channel_id: "some-channel-id".to_string(),
                    workspace_id: "some-workspace-id".to_string(),
                },
                alarm_notification_topic: NotificationTopic { reference: ValueRef::reference("TestTopic339EC197") },
            },
        }
    }

    #[test]
    fn test_in_memory_locator_serves_only_its_target() {
        let target = AccountAndRegion::new("123456789012", "us-west-2");
        let locator = InMemoryLocator::new(target.clone(), sample_resources());

        assert_eq!(locator.resolve(&target).unwrap(), sample_resources());

        let other = AccountAndRegion::new("123456789012", "us-east-1");
        assert!(!locator.serves(&other));
        let err = locator.resolve(&other).unwrap_err();
        assert_eq!(err.resource, ResourceKind::Network);
        assert_eq!(err.target, other);
    }

    #[test]
    fn test_locator_kind_from_name() {
        assert_eq!(LocatorKind::from_name("development"), Ok(LocatorKind::Development));
        assert_eq!(LocatorKind::from_name("dev"), Ok(LocatorKind::Development));
        assert_eq!(LocatorKind::from_name(" production "), Ok(LocatorKind::Production));
        assert_eq!(
            LocatorKind::from_name("staging"),
            Err(ValidationError::UnknownLocator("staging".to_string()))
        );
    }

    #[test]
    fn test_locator_kind_supports_own_account_only() {
        assert!(LocatorKind::Development.supports(&development::us_west_2()));
        assert!(!LocatorKind::Development.supports(&production::us_west_2()));
        assert!(LocatorKind::Production.supports(&production::us_west_2()));
        assert!(!LocatorKind::Production.supports(&development::us_west_2()));
    }

    #[test]
    fn test_locator_kind_instances_match_name() {
        for kind in [LocatorKind::Development, LocatorKind::Production] {
            assert_eq!(kind.locator().name(), kind.name());
        }
    }

    #[test]
    fn test_locator_kind_resolves_from_its_catalog() {
        for (kind, target) in [
            (LocatorKind::Development, development::us_west_2()),
            (LocatorKind::Production, production::us_west_2()),
        ] {
            let entry = kind.catalog().get(&target).cloned().unwrap();
            let resources = kind.locator().resolve(&target).unwrap();
            assert_eq!(Some(resources.domain.name), entry.domain_name);
            assert_eq!(
                resources.notification.alarm_notification_topic.reference,
                ValueRef::literal(entry.alarm_topic_arn.unwrap())
            );
        }
    }
}
