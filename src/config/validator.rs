//! Validation of the resolved invocation before any network call.

use crate::error::{ConfigError, Result, StackDiffError};
use crate::stack::StackIdentity;
use tracing::debug;

use super::spec::ServiceConfig;

/// Maximum length of a CloudFormation stack name.
pub const MAX_STACK_NAME_LEN: usize = 128;

/// Validator for service definitions and derived stack names.
#[derive(Debug, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates the service definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the service name is empty.
    pub fn validate_service(&self, service: &ServiceConfig) -> Result<()> {
        debug!("Validating service definition");

        if service.name().trim().is_empty() {
            return Err(StackDiffError::Config(ConfigError::validation(
                "service name must not be empty",
                "service",
            )));
        }

        Ok(())
    }

    /// Validates a derived stack name against CloudFormation naming rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, too long, does not start with a
    /// letter, or contains characters other than ASCII alphanumerics and `-`.
    pub fn validate_stack_name(&self, identity: &StackIdentity) -> Result<()> {
        let name = identity.as_str();

        let problem = if name.is_empty() {
            Some(String::from("stack name must not be empty"))
        } else if name.len() > MAX_STACK_NAME_LEN {
            Some(format!(
                "stack name '{name}' exceeds {MAX_STACK_NAME_LEN} characters"
            ))
        } else if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            Some(format!("stack name '{name}' must start with a letter"))
        } else if let Some(bad) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
            Some(format!("stack name '{name}' contains invalid character '{bad}'"))
        } else {
            None
        };

        match problem {
            Some(message) => Err(StackDiffError::Config(ConfigError::validation(
                message,
                "provider.stackName",
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigParser;

    #[test]
    fn test_valid_stack_names() {
        let validator = ConfigValidator::new();
        for name in ["foo-dev", "foo-dev-r", "A1", "custom-stack"] {
            let identity = StackIdentity::derive(name, "x", Some(name), false);
            assert!(validator.validate_stack_name(&identity).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_invalid_stack_names() {
        let validator = ConfigValidator::new();
        let too_long = "a".repeat(MAX_STACK_NAME_LEN + 1);
        for name in ["1-stack", "my_stack", "-lead", too_long.as_str()] {
            let identity = StackIdentity::derive("svc", "dev", Some(name), false);
            assert!(validator.validate_stack_name(&identity).is_err(), "{name}");
        }
    }

    #[test]
    fn test_empty_service_name() {
        let service = ConfigParser::new()
            .parse_yaml("service: ''\n", None)
            .expect("service should parse");

        let result = ConfigValidator::new().validate_service(&service);
        assert!(matches!(
            result,
            Err(StackDiffError::Config(ConfigError::ValidationError { .. }))
        ));
    }
}
