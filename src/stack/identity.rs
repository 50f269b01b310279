//! Stack identity derivation.

use std::fmt;

use crate::config::ServiceConfig;

/// Suffix carried by stacks created before v1 resource naming.
pub const LEGACY_SUFFIX: &str = "-r";

/// Name of a deployed CloudFormation stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackIdentity(String);

impl StackIdentity {
    /// Derives the stack name from its inputs.
    ///
    /// A non-empty `explicit` name wins over `<service>-<stage>`. The legacy
    /// suffix is appended in either case.
    #[must_use]
    pub fn derive(service: &str, stage: &str, explicit: Option<&str>, legacy: bool) -> Self {
        let mut name = match explicit.filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => format!("{service}-{stage}"),
        };

        if legacy {
            name.push_str(LEGACY_SUFFIX);
        }

        Self(name)
    }

    /// Derives the stack name for a service definition at the given stage.
    #[must_use]
    pub fn for_service(service: &ServiceConfig, stage: &str) -> Self {
        Self::derive(
            service.name(),
            stage,
            service.stack_name_override(),
            service.uses_legacy_suffix(),
        )
    }

    /// Returns the stack name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StackIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StackIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
