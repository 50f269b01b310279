//! Ordered-override resolution of invocation settings.
//!
//! Stage, region and credential profile all follow the same precedence:
//! command-line option, then service defaults, then provider section, then a
//! hardcoded fallback.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::spec::ServiceConfig;

/// Fallback stage.
pub const DEFAULT_STAGE: &str = "dev";

/// Fallback region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Fallback credential profile.
pub const DEFAULT_AWS_PROFILE: &str = "default";

/// Default package directory.
pub const DEFAULT_PACKAGE_DIR: &str = ".serverless";

/// Locally packaged template file name.
pub const LOCAL_TEMPLATE_FILE: &str = "cloudformation-template-update-stack.json";

/// Downloaded deployed template file name.
pub const ORG_TEMPLATE_FILE: &str = "cloudformation-template-update-stack.org.json";

/// Values supplied explicitly for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingOverrides {
    /// Stage option.
    pub stage: Option<String>,
    /// Region option.
    pub region: Option<String>,
    /// Credential profile option.
    pub aws_profile: Option<String>,
    /// Package directory option.
    pub package: Option<PathBuf>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Deployment stage.
    pub stage: String,
    /// AWS region.
    pub region: String,
    /// Shared-config credential profile.
    pub aws_profile: String,
    /// Package directory.
    pub package: PathBuf,
}

/// Locations of the two templates inside a package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePaths {
    /// Locally packaged (candidate) template.
    pub local: PathBuf,
    /// Downloaded deployed (baseline) template.
    pub org: PathBuf,
}

/// Returns the first candidate that is present and non-empty, else `fallback`.
#[must_use]
pub fn resolve_setting(candidates: &[Option<&str>], fallback: &str) -> String {
    candidates
        .iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map_or_else(|| fallback.to_string(), |value| (*value).to_string())
}

impl ResolvedSettings {
    /// Resolves settings from explicit overrides and the service definition.
    #[must_use]
    pub fn resolve(overrides: &SettingOverrides, service: &ServiceConfig) -> Self {
        let defaults = service.defaults.as_ref();
        let provider = service.provider.as_ref();

        let stage = resolve_setting(
            &[
                overrides.stage.as_deref(),
                defaults.and_then(|d| d.stage.as_deref()),
                provider.and_then(|p| p.stage.as_deref()),
            ],
            DEFAULT_STAGE,
        );

        let region = resolve_setting(
            &[
                overrides.region.as_deref(),
                defaults.and_then(|d| d.region.as_deref()),
                provider.and_then(|p| p.region.as_deref()),
            ],
            DEFAULT_REGION,
        );

        let aws_profile = resolve_setting(
            &[
                overrides.aws_profile.as_deref(),
                defaults.and_then(|d| d.aws_profile.as_deref()),
                provider.and_then(|p| p.aws_profile.as_deref()),
            ],
            DEFAULT_AWS_PROFILE,
        );

        let package = overrides
            .package
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_PACKAGE_DIR), Path::to_path_buf);

        debug!(
            "Resolved stage={stage} region={region} profile={aws_profile} package={}",
            package.display()
        );

        Self {
            stage,
            region,
            aws_profile,
            package,
        }
    }

    /// Anchors a relative package directory at `base_dir`.
    #[must_use]
    pub fn relative_to(mut self, base_dir: &Path) -> Self {
        if self.package.is_relative() {
            self.package = base_dir.join(&self.package);
        }
        self
    }

    /// Returns the template locations for the resolved package directory.
    #[must_use]
    pub fn template_paths(&self) -> TemplatePaths {
        TemplatePaths::in_dir(&self.package)
    }
}

impl TemplatePaths {
    /// Returns the template locations inside `package_dir`.
    #[must_use]
    pub fn in_dir(package_dir: impl AsRef<Path>) -> Self {
        let dir = package_dir.as_ref();
        Self {
            local: dir.join(LOCAL_TEMPLATE_FILE),
            org: dir.join(ORG_TEMPLATE_FILE),
        }
    }
}
