use thiserror::Error;

use crate::types::{AccountAndRegion, ResourceKind};

/// Malformed deployment or pipeline input, detected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be a positive integer, got '{value}'")]
    NotPositive { field: &'static str, value: String },

    #[error("max_capacity ({max_capacity}) must be >= desired_count ({desired_count})")]
    CapacityBelowDesired { desired_count: u32, max_capacity: u32 },

    #[error("duplicate tag key '{0}'")]
    DuplicateTag(String),

    #[error("tag key '{0}' is derived from the deployment and cannot be set")]
    ReservedTag(String),

    #[error("malformed tag '{0}', expected key=value")]
    MalformedTag(String),

    #[error("invalid backend_url '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("invalid value for {field}: '{value}'")]
    Invalid { field: &'static str, value: String },

    #[error("unknown deployment environment '{0}'")]
    UnknownEnvironment(String),

    #[error("unknown existing resources '{0}'")]
    UnknownLocator(String),

    #[error("existing resources '{locator}' do not serve {target}")]
    UnsupportedTarget { locator: &'static str, target: AccountAndRegion },
}

/// A required shared resource could not be located for the target identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resource} not found for {target}")]
pub struct ResourceNotFoundError {
    pub resource: ResourceKind,
    pub target: AccountAndRegion,
}

impl ResourceNotFoundError {
    pub fn new(resource: ResourceKind, target: &AccountAndRegion) -> Self {
        Self { resource, target: target.clone() }
    }
}

/// An alarm composition broke one of its own invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositionError {
    #[error("duplicate alarm for {metric_name} in {namespace} with dimensions [{dimensions}]")]
    DuplicateAlarm {
        metric_name: String,
        namespace: String,
        dimensions: String,
    },

    #[error("{metric_name} alarm has no dimensions")]
    MissingDimensions { metric_name: String },

    #[error("{metric_name} alarm has no notification target")]
    MissingActions { metric_name: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    ResourceNotFound(#[from] ResourceNotFoundError),

    #[error(transparent)]
    Composition(#[from] CompositionError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
