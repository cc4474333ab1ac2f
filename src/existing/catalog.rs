use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::error::ResourceNotFoundError;
use crate::types::{AccountAndRegion, ResourceKind, ValueRef};
use super::{
    Certificate, ChatbotChannel, CodeStarConnection, DockerHubCredentials, Domain,
    ExistingResourceLocator, ExistingResources, HostedZone, Network, Notification,
    NotificationTopic, Secret,
};

/// Exported identifiers of the shared resources in one account and region.
/// A `None` means the resource does not exist there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub vpc_id: Option<String>,
    pub public_subnet_ids: Vec<String>,
    pub isolated_subnet_ids: Vec<String>,
    pub domain_name: Option<String>,
    pub certificate_arn: Option<String>,
    pub hosted_zone_id: Option<String>,
    pub docker_hub_secret_arn: Option<String>,
    pub code_star_connection_arn: Option<String>,
    pub chatbot: Option<ChatbotChannel>,
    pub alarm_topic_arn: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    entries: BTreeMap<AccountAndRegion, CatalogEntry>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, target: AccountAndRegion, entry: CatalogEntry) -> Self {
        self.entries.insert(target, entry);
        self
    }

    pub fn get(&self, target: &AccountAndRegion) -> Option<&CatalogEntry> {
        self.entries.get(target)
    }
}

/// A locator that answers from a fixed catalog of exported identifiers.
#[derive(Debug, Clone)]
pub struct CatalogLocator {
    name: &'static str,
    catalog: ResourceCatalog,
}

impl CatalogLocator {
    pub fn new(name: &'static str, catalog: ResourceCatalog) -> Self {
        Self { name, catalog }
    }
}

fn required<'a>(
    value: Option<&'a String>,
    resource: ResourceKind,
    target: &AccountAndRegion,
) -> Result<&'a str, ResourceNotFoundError> {
    value
        .map(|v| v.as_str())
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ResourceNotFoundError::new(resource, target))
}

impl ExistingResourceLocator for CatalogLocator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn serves(&self, target: &AccountAndRegion) -> bool {
        self.catalog.get(target).is_some()
    }

    fn resolve(&self, target: &AccountAndRegion) -> Result<ExistingResources, ResourceNotFoundError> {
        debug!("resolving {} existing resources for {}", self.name, target);
        let entry = self
            .catalog
            .get(target)
            .ok_or_else(|| ResourceNotFoundError::new(ResourceKind::Network, target))?;

        let vpc_id = required(entry.vpc_id.as_ref(), ResourceKind::Network, target)?;
        if entry.public_subnet_ids.is_empty() {
            return Err(ResourceNotFoundError::new(ResourceKind::Network, target));
        }
        let network = Network {
            vpc_id: vpc_id.to_string(),
            public_subnet_ids: entry.public_subnet_ids.clone(),
            isolated_subnet_ids: entry.isolated_subnet_ids.clone(),
        };

        let domain_name = required(entry.domain_name.as_ref(), ResourceKind::Domain, target)?;
        let certificate_arn = required(entry.certificate_arn.as_ref(), ResourceKind::Certificate, target)?;
        let zone_id = required(entry.hosted_zone_id.as_ref(), ResourceKind::HostedZone, target)?;
        let domain = Domain {
            name: domain_name.to_string(),
            certificate: Certificate { arn: certificate_arn.to_string() },
            zone: HostedZone { id: zone_id.to_string(), name: domain_name.to_string() },
        };

        let secret_arn = required(entry.docker_hub_secret_arn.as_ref(), ResourceKind::DockerHubSecret, target)?;
        let connection_arn = required(
            entry.code_star_connection_arn.as_ref(),
            ResourceKind::CodeStarConnection,
            target,
        )?;
        let chatbot = entry
            .chatbot
            .clone()
            .ok_or_else(|| ResourceNotFoundError::new(ResourceKind::ChatbotChannel, target))?;
        let topic_arn = required(entry.alarm_topic_arn.as_ref(), ResourceKind::AlarmNotificationTopic, target)?;

        info!("resolved {} existing resources for {}", self.name, target);
        Ok(ExistingResources {
            network,
            domain,
            docker_hub_credentials: DockerHubCredentials {
                secret: Secret { arn: secret_arn.to_string() },
            },
            code_star_connection: CodeStarConnection { arn: connection_arn.to_string() },
            notification: Notification {
                chatbot,
                alarm_notification_topic: NotificationTopic { reference: ValueRef::literal(topic_arn) },
            },
        })
    }
}
