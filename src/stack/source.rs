//! Deployed template sources.
//!
//! The fetcher talks to CloudFormation through the [`TemplateSource`] trait so
//! the download step can run against a stub in tests.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cloudformation::types::TemplateStage;
use aws_sdk_cloudformation::Client;
use tracing::debug;

use crate::config::ResolvedSettings;
use crate::error::FetchError;

/// Immutable AWS client configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Region the stack lives in.
    pub region: String,
    /// Shared-config credential profile.
    pub profile: String,
}

impl ClientConfig {
    /// Creates a client configuration.
    #[must_use]
    pub fn new(region: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            profile: profile.into(),
        }
    }
}

impl From<&ResolvedSettings> for ClientConfig {
    fn from(settings: &ResolvedSettings) -> Self {
        Self::new(&settings.region, &settings.aws_profile)
    }
}

/// Trait for anything that can hand out a stack's processed template body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Returns the processed template body of the named stack.
    async fn processed_template(&self, stack_name: &str) -> Result<String, FetchError>;

    /// Gets the source type name.
    fn source_type(&self) -> &'static str;
}

/// CloudFormation-backed template source.
#[derive(Debug, Clone)]
pub struct CloudFormationSource {
    /// CloudFormation client.
    client: Client,
}

impl CloudFormationSource {
    /// Creates a source from an explicit client configuration.
    pub async fn new(config: &ClientConfig) -> Self {
        debug!(
            "Creating CloudFormation client (region={}, profile={})",
            config.region, config.profile
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .profile_name(&config.profile)
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
        }
    }

    /// Creates a source with an existing client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TemplateSource for CloudFormationSource {
    async fn processed_template(&self, stack_name: &str) -> Result<String, FetchError> {
        let output = self
            .client
            .get_template()
            .stack_name(stack_name)
            .template_stage(TemplateStage::Processed)
            .send()
            .await
            .map_err(|err| {
                let message = err
                    .as_service_error()
                    .and_then(ProvideErrorMetadata::message)
                    .map_or_else(|| DisplayErrorContext(&err).to_string(), str::to_string);
                FetchError::provider(message)
            })?;

        output
            .template_body()
            .filter(|body| !body.is_empty())
            .map(str::to_string)
            .ok_or_else(|| FetchError::EmptyTemplate {
                stack_name: stack_name.to_string(),
            })
    }

    fn source_type(&self) -> &'static str {
        "cloudformation"
    }
}
