// Public modules
pub mod types;
pub mod error;
pub mod config;
pub mod parsing;
pub mod existing;
pub mod service;
pub mod alarms;
pub mod composer;
pub mod deployment;
pub mod report;
pub mod template;

// Re-export commonly used items
pub use types::*;
pub use error::{CompositionError, Error, ResourceNotFoundError, ValidationError};
pub use config::{
    load_deployment_config, load_deployment_config_with_env, load_pipeline_config,
    load_pipeline_config_with_env, DeploymentConfig, EnvironmentProvider, MockEnvironment,
    PipelineConfig, PipelineInput, ServiceSizing, SizingInput, SystemEnvironment, Tags,
};
pub use existing::{ExistingResourceLocator, ExistingResources, InMemoryLocator, LocatorKind};
pub use service::{Exposure, FrontDoor, ServiceDefinition, ServiceHandle};
pub use composer::{compose, AlarmComposer, Composition};
pub use deployment::{compose_service_alarms, compose_with_locator, ServiceAlarms};
pub use report::{AlarmReport, ReportSummary};
pub use template::build_alarm_document;
