//! Deployed stack access.
//!
//! This module resolves which stack to look at and downloads its processed
//! template from CloudFormation.

mod fetcher;
mod identity;
mod source;

pub use fetcher::TemplateFetcher;
pub use identity::{StackIdentity, LEGACY_SUFFIX};
pub use source::{ClientConfig, CloudFormationSource, TemplateSource};

#[cfg(test)]
pub(crate) use source::MockTemplateSource;
