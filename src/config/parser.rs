//! Service definition parser.
//!
//! This module handles loading the service definition from YAML and the
//! optional `.env` file next to it.

use crate::error::{ConfigError, Result, StackDiffError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::spec::ServiceConfig;

/// Parser for the service definition.
#[derive(Debug, Default)]
pub struct ConfigParser {
    /// Base path for resolving relative paths.
    base_path: Option<PathBuf>,
}

impl ConfigParser {
    /// Creates a new configuration parser.
    #[must_use]
    pub const fn new() -> Self {
        Self { base_path: None }
    }

    /// Sets the base path for resolving relative paths.
    #[must_use]
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Loads the service definition from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ServiceConfig> {
        let path = path.as_ref();
        info!("Loading service definition from: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::ParseError {
                message: format!("Failed to read service file: {e}"),
                location: Some(path.display().to_string()),
            },
        })?;

        self.parse_yaml(&content, Some(path))
    }

    /// Parses a service definition from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(&self, content: &str, source: Option<&Path>) -> Result<ServiceConfig> {
        debug!("Parsing YAML service definition");

        let config: ServiceConfig = serde_yaml::from_str(content).map_err(|e| {
            let location = source.map(|p| p.display().to_string());
            StackDiffError::Config(ConfigError::ParseError {
                message: format!("YAML parse error: {e}"),
                location,
            })
        })?;

        debug!("Parsed service definition for: {}", config.name());
        Ok(config)
    }

    /// Exports the variables of the `.env` file next to the service file.
    ///
    /// Variables already set in the environment keep their value, so
    /// credentials exported by the shell win over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but is malformed.
    pub fn load_dotenv(&self) -> Result<()> {
        let env_path = self
            .base_path
            .as_ref()
            .map_or_else(|| PathBuf::from(".env"), |p| p.join(".env"));

        match dotenvy::from_path(&env_path) {
            Ok(()) => info!("Loaded environment from: {}", env_path.display()),
            Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No .env file at: {}", env_path.display());
            }
            Err(e) => {
                return Err(StackDiffError::Config(ConfigError::ParseError {
                    message: format!("Failed to load .env file: {e}"),
                    location: Some(env_path.display().to_string()),
                }));
            }
        }

        Ok(())
    }
}

/// Service file names to search for.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["serverless.yml", "serverless.yaml"];

/// Finds the service file in the given directory or its parents.
///
/// # Errors
///
/// Returns an error if no service file is found.
pub fn find_config_file(start_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let start = start_dir.as_ref();
    let mut current = start.to_path_buf();

    loop {
        for filename in DEFAULT_CONFIG_FILES {
            let config_path = current.join(filename);
            if config_path.exists() {
                info!("Found service file: {}", config_path.display());
                return Ok(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    Err(StackDiffError::Config(ConfigError::FileNotFound {
        path: start.join(DEFAULT_CONFIG_FILES[0]),
    }))
}
