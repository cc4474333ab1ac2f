use tracing::info;

use crate::composer::{AlarmComposer, Composition};
use crate::config::{DeploymentConfig, PipelineConfig};
use crate::error::Result;
use crate::existing::{ExistingResourceLocator, ExistingResources};
use crate::service::{Exposure, ServiceDefinition};

/// Everything composed for one service of a deployment.
pub struct ServiceAlarms {
    pub existing: ExistingResources,
    pub service: ServiceDefinition,
    pub composition: Composition,
}

/// Resolves the pipeline's existing resources and composes one service with its alarms.
pub fn compose_service_alarms(
    deployment: &DeploymentConfig,
    pipeline: &PipelineConfig,
    construct_id: &str,
    exposure: Exposure,
) -> Result<ServiceAlarms> {
    let locator = pipeline.existing_resources().locator();
    compose_with_locator(deployment, pipeline, locator.as_ref(), construct_id, exposure)
}

pub fn compose_with_locator(
    deployment: &DeploymentConfig,
    pipeline: &PipelineConfig,
    locator: &dyn ExistingResourceLocator,
    construct_id: &str,
    exposure: Exposure,
) -> Result<ServiceAlarms> {
    info!(
        "resolving {} existing resources for {}",
        locator.name(),
        pipeline.account_and_region()
    );
    let existing = locator.resolve(pipeline.account_and_region())?;
    let service = ServiceDefinition::compose(deployment, &existing, construct_id, exposure);
    let composition = AlarmComposer::new(deployment, &existing).compose(&service.handle)?;
    Ok(ServiceAlarms { existing, service, composition })
}
