use std::collections::{HashMap, HashSet};
use url::Url;

use crate::error::ValidationError;
use crate::existing::LocatorKind;
use crate::parsing::{parse_flag, parse_positive, parse_tags, require_positive};
use crate::types::AccountAndRegion;

/// Trait for abstracting environment variable access
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production implementation using std::env
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Mock implementation for testing
#[derive(Debug, Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn set_var<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_var(key, value);
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Ordered key/value tags with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(Vec<(String, String)>);

impl Tags {
    pub fn new(pairs: Vec<(String, String)>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for (key, _) in &pairs {
            if key.trim().is_empty() {
                return Err(ValidationError::Empty { field: "tag key" });
            }
            if !seen.insert(key.as_str()) {
                return Err(ValidationError::DuplicateTag(key.clone()));
            }
        }
        Ok(Self(pairs))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Unvalidated sizing numbers, as they arrive from a preset or the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizingInput {
    pub cpu: Option<i64>,
    pub memory_limit_mib: Option<i64>,
    pub desired_count: Option<i64>,
    pub max_capacity: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSizing {
    pub cpu: u32,
    pub memory_limit_mib: u32,
    pub desired_count: u32,
    pub max_capacity: u32,
}

impl ServiceSizing {
    pub fn new(input: SizingInput) -> Result<Self, ValidationError> {
        let cpu = require_positive("cpu", input.cpu)?;
        let memory_limit_mib = require_positive("memory_limit_mib", input.memory_limit_mib)?;
        let desired_count = require_positive("desired_count", input.desired_count)?;
        let max_capacity = require_positive("max_capacity", input.max_capacity)?;
        if max_capacity < desired_count {
            return Err(ValidationError::CapacityBelowDesired { desired_count, max_capacity });
        }
        Ok(Self { cpu, memory_limit_mib, desired_count, max_capacity })
    }
}

/// Built-in sizing for the named environments.
pub fn sizing_preset(name: &str) -> Option<SizingInput> {
    let (cpu, memory_limit_mib, desired_count, max_capacity) = match name {
        "demo" | "dev" => (1024, 2048, 1, 4),
        "production" => (2048, 4096, 2, 8),
        _ => return None,
    };
    Some(SizingInput {
        cpu: Some(cpu),
        memory_limit_mib: Some(memory_limit_mib),
        desired_count: Some(desired_count),
        max_capacity: Some(max_capacity),
    })
}

fn require_non_empty(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

fn deployment_tags(pairs: Vec<(String, String)>) -> Result<Tags, ValidationError> {
    let tags = Tags::new(pairs)?;
    if let Some(key) = DERIVED_TAG_KEYS.iter().find(|key| tags.get(key).is_some()) {
        return Err(ValidationError::ReservedTag(key.to_string()));
    }
    Ok(tags)
}

/// Checks that `raw` is an absolute URL with a host and returns it trimmed but otherwise untouched.
fn parse_backend_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| ValidationError::InvalidUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !url.has_host() {
        return Err(ValidationError::InvalidUrl {
            value: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Tag keys every deployed service derives from its config.
pub const DERIVED_TAG_KEYS: [&str; 2] = ["environment", "branch"];

/// Validated settings of one named, branch-scoped deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    name: String,
    branch: String,
    frontend: ServiceSizing,
    backend_url: String,
    tags: Tags,
}

impl DeploymentConfig {
    pub fn new(
        name: impl Into<String>,
        branch: impl Into<String>,
        frontend: SizingInput,
        backend_url: &str,
        tags: Vec<(String, String)>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_non_empty("name", name.into())?,
            branch: require_non_empty("branch", branch.into())?,
            frontend: ServiceSizing::new(frontend)?,
            backend_url: parse_backend_url(backend_url)?,
            tags: deployment_tags(tags)?,
        })
    }

    /// Builds a config from the sizing preset registered under `name`.
    pub fn from_name(
        name: &str,
        branch: impl Into<String>,
        backend_url: &str,
        tags: Vec<(String, String)>,
    ) -> Result<Self, ValidationError> {
        let sizing = sizing_preset(name).ok_or_else(|| ValidationError::UnknownEnvironment(name.to_string()))?;
        Self::new(name, branch, sizing, backend_url, tags)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn frontend(&self) -> &ServiceSizing {
        &self.frontend
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

/// Unvalidated pipeline settings.
#[derive(Debug, Clone)]
pub struct PipelineInput {
    pub name: String,
    pub branch: String,
    pub pipeline: String,
    pub existing_resources: LocatorKind,
    pub account_and_region: AccountAndRegion,
    pub cross_account_keys: bool,
    pub tags: Vec<(String, String)>,
}

/// Validated settings of the pipeline that deploys a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    name: String,
    branch: String,
    pipeline: String,
    existing_resources: LocatorKind,
    account_and_region: AccountAndRegion,
    cross_account_keys: bool,
    tags: Tags,
}

impl PipelineConfig {
    pub fn new(input: PipelineInput) -> Result<Self, ValidationError> {
        let account_and_region = input.account_and_region;
        let account = &account_and_region.account;
        if account.len() != 12 || !account.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::Invalid { field: "account", value: account.clone() });
        }
        if account_and_region.region.trim().is_empty() {
            return Err(ValidationError::Empty { field: "region" });
        }
        if !input.existing_resources.supports(&account_and_region) {
            return Err(ValidationError::UnsupportedTarget {
                locator: input.existing_resources.name(),
                target: account_and_region,
            });
        }
        Ok(Self {
            name: require_non_empty("name", input.name)?,
            branch: require_non_empty("branch", input.branch)?,
            pipeline: require_non_empty("pipeline", input.pipeline)?,
            existing_resources: input.existing_resources,
            account_and_region,
            cross_account_keys: input.cross_account_keys,
            tags: Tags::new(input.tags)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn pipeline(&self) -> &str {
        &self.pipeline
    }

    pub fn existing_resources(&self) -> LocatorKind {
        self.existing_resources
    }

    pub fn account_and_region(&self) -> &AccountAndRegion {
        &self.account_and_region
    }

    pub fn cross_account_keys(&self) -> bool {
        self.cross_account_keys
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }
}

fn required_var<E: EnvironmentProvider>(env: &E, key: &'static str) -> Result<String, ValidationError> {
    env.get_var(key)
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim().to_string())
        .ok_or(ValidationError::Missing { field: key })
}

fn sizing_override<E: EnvironmentProvider>(
    env: &E,
    key: &'static str,
    preset: Option<i64>,
) -> Result<Option<i64>, ValidationError> {
    match env.get_var(key) {
        Some(raw) => Ok(Some(parse_positive(key, &raw)? as i64)),
        None => Ok(preset),
    }
}

fn tags_from_env<E: EnvironmentProvider>(env: &E) -> Result<Vec<(String, String)>, ValidationError> {
    env.get_var("TAGS").map(|raw| parse_tags(&raw)).unwrap_or_else(|| Ok(Vec::new()))
}

pub fn load_deployment_config() -> Result<DeploymentConfig, ValidationError> {
    load_deployment_config_with_env(&SystemEnvironment)
}

pub fn load_deployment_config_with_env<E: EnvironmentProvider>(env: &E) -> Result<DeploymentConfig, ValidationError> {
    let name = required_var(env, "DEPLOYMENT_NAME")?;
    let branch = required_var(env, "BRANCH")?;
    let backend_url = required_var(env, "BACKEND_URL")?;

    // Unknown names are allowed when every sizing value is supplied explicitly.
    let preset = sizing_preset(&name).unwrap_or_default();
    let sizing = SizingInput {
        cpu: sizing_override(env, "FRONTEND_CPU", preset.cpu)?,
        memory_limit_mib: sizing_override(env, "FRONTEND_MEMORY_LIMIT_MIB", preset.memory_limit_mib)?,
        desired_count: sizing_override(env, "FRONTEND_DESIRED_COUNT", preset.desired_count)?,
        max_capacity: sizing_override(env, "FRONTEND_MAX_CAPACITY", preset.max_capacity)?,
    };
    if sizing_preset(&name).is_none() && sizing == SizingInput::default() {
        return Err(ValidationError::UnknownEnvironment(name));
    }

    DeploymentConfig::new(name, branch, sizing, &backend_url, tags_from_env(env)?)
}

pub fn load_pipeline_config() -> Result<PipelineConfig, ValidationError> {
    load_pipeline_config_with_env(&SystemEnvironment)
}

pub fn load_pipeline_config_with_env<E: EnvironmentProvider>(env: &E) -> Result<PipelineConfig, ValidationError> {
    let existing_resources = LocatorKind::from_name(&required_var(env, "EXISTING_RESOURCES")?)?;
    let cross_account_keys = env
        .get_var("CROSS_ACCOUNT_KEYS")
        .map(|v| parse_flag(&v))
        .unwrap_or(false);

    PipelineConfig::new(PipelineInput {
        name: required_var(env, "DEPLOYMENT_NAME")?,
        branch: required_var(env, "BRANCH")?,
        pipeline: required_var(env, "PIPELINE")?,
        existing_resources,
        account_and_region: AccountAndRegion::new(required_var(env, "ACCOUNT")?, required_var(env, "REGION")?),
        cross_account_keys,
        tags: tags_from_env(env)?,
    })
}
