//! Service definition types.
//!
//! These structs map the subset of `serverless.yml` the diff needs. Everything
//! else in the file is ignored.

use serde::{Deserialize, Serialize};

/// The root of a service definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Service name.
    pub service: ServiceName,
    /// Service-level defaults (legacy layout).
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,
    /// Provider section.
    #[serde(default)]
    pub provider: Option<ProviderConfig>,
}

/// Service name, either a bare string or a mapping with a `name` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ServiceName {
    /// `service: my-service`
    Plain(String),
    /// `service: { name: my-service }`
    Named {
        /// The service name.
        name: String,
    },
}

/// Service-level defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Default stage.
    #[serde(default)]
    pub stage: Option<String>,
    /// Default region.
    #[serde(default)]
    pub region: Option<String>,
    /// Default credential profile.
    #[serde(default, rename = "aws-profile")]
    pub aws_profile: Option<String>,
}

/// Provider section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// Provider name (e.g. `aws`).
    #[serde(default)]
    pub name: Option<String>,
    /// Provider stage.
    #[serde(default)]
    pub stage: Option<String>,
    /// Provider region.
    #[serde(default)]
    pub region: Option<String>,
    /// Provider credential profile.
    #[serde(default, rename = "aws-profile")]
    pub aws_profile: Option<String>,
    /// Explicit stack name, overriding `<service>-<stage>`.
    #[serde(default)]
    pub stack_name: Option<String>,
    /// Legacy stacks carry a `-r` suffix.
    #[serde(default, rename = "preV1Resources")]
    pub pre_v1_resources: Option<bool>,
}

impl ServiceName {
    /// Returns the service name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(name) | Self::Named { name } => name,
        }
    }
}

impl ServiceConfig {
    /// Returns the service name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.service.as_str()
    }

    /// Returns the explicit stack name, if one is set.
    #[must_use]
    pub fn stack_name_override(&self) -> Option<&str> {
        self.provider.as_ref().and_then(|p| p.stack_name.as_deref())
    }

    /// Returns true if the stack uses the legacy `-r` suffix.
    #[must_use]
    pub fn uses_legacy_suffix(&self) -> bool {
        self.provider
            .as_ref()
            .and_then(|p| p.pre_v1_resources)
            .unwrap_or(false)
    }
}
