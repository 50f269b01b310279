//! Error types for the stackdiff tool.
//!
//! This module provides the error hierarchy for every step of an invocation:
//! configuration, fetching the deployed template, and diffing it against the
//! locally packaged one.

use std::path::PathBuf;
use thiserror::Error;

/// Directive shown when the locally packaged template is missing.
pub const PACKAGE_DIRECTIVE: &str = "run \"sls deploy --noDeploy\" first.";

/// The main error type for the stackdiff tool.
#[derive(Debug, Error)]
pub enum StackDiffError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors retrieving or persisting the deployed template.
    #[error("{0}")]
    Fetch(#[from] FetchError),

    /// Errors comparing the two templates.
    #[error("{0}")]
    Diff(#[from] DiffError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The service file was not found.
    #[error("Service file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The service file could not be parsed.
    #[error("Failed to parse service file: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// Validation failed.
    #[error("Configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation error.
        message: String,
        /// Field that failed validation.
        field: Option<String>,
    },
}

/// Errors raised while downloading the deployed template.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider rejected the request (missing stack, bad credentials, transport).
    #[error("{message}")]
    Provider {
        /// Message reported by the provider, verbatim.
        message: String,
    },

    /// The provider answered without a template body.
    #[error("Stack {stack_name} returned an empty template")]
    EmptyTemplate {
        /// Stack that was queried.
        stack_name: String,
    },

    /// The template body is not valid JSON.
    #[error("Deployed template is not valid JSON: {message}")]
    InvalidTemplate {
        /// Description of the parse error.
        message: String,
    },

    /// The template could not be written to disk.
    #[error("Failed to write {path}: {message}")]
    Persist {
        /// Target path.
        path: PathBuf,
        /// Description of the IO error.
        message: String,
    },
}

/// Errors raised while diffing the templates.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The locally packaged template does not exist.
    #[error("{} could not be found: {}", path.display(), PACKAGE_DIRECTIVE)]
    NotFound {
        /// Expected location of the local template.
        path: PathBuf,
    },

    /// Any other read or parse failure.
    #[error("{}: {message}", path.display())]
    Other {
        /// File that failed.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },
}

/// Result type alias for stackdiff operations.
pub type Result<T> = std::result::Result<T, StackDiffError>;

impl ConfigError {
    /// Creates a validation error for a specific field.
    #[must_use]
    pub fn validation(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl FetchError {
    /// Creates a provider error with the given message.
    #[must_use]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}

impl DiffError {
    /// Creates a read or parse error for the given file.
    #[must_use]
    pub fn other(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Other {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if the local template was missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_prerequisite() {
        let err = DiffError::NotFound {
            path: PathBuf::from(".serverless/cloudformation-template-update-stack.json"),
        };

        let message = err.to_string();
        assert!(message.starts_with(".serverless/cloudformation-template-update-stack.json"));
        assert!(message.contains("sls deploy --noDeploy"));
    }

    #[test]
    fn test_provider_message_is_verbatim() {
        let err = StackDiffError::from(FetchError::provider("Stack with id foo-dev does not exist"));
        assert_eq!(err.to_string(), "Stack with id foo-dev does not exist");
    }
}
