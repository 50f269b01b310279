//! Configuration module for stackdiff.
//!
//! This module handles everything that happens before the first network call:
//! - Parsing the `serverless.yml` service definition
//! - Resolving stage, region, profile and package directory
//! - Validating the service and the derived stack name

mod spec;
mod parser;
mod resolve;
mod validator;

pub use spec::{DefaultsConfig, ProviderConfig, ServiceConfig, ServiceName};
pub use parser::{ConfigParser, find_config_file};
pub use resolve::{
    resolve_setting, ResolvedSettings, SettingOverrides, TemplatePaths, DEFAULT_AWS_PROFILE,
    DEFAULT_PACKAGE_DIR, DEFAULT_REGION, DEFAULT_STAGE, LOCAL_TEMPLATE_FILE, ORG_TEMPLATE_FILE,
};
pub use validator::ConfigValidator;
