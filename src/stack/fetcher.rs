//! Remote template fetcher.
//!
//! Downloads the processed template of a deployed stack and stores it,
//! pretty-printed, at the baseline location inside the package directory.

use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::FetchError;

use super::identity::StackIdentity;
use super::source::TemplateSource;

/// Fetches a deployed template and persists it locally.
#[derive(Debug)]
pub struct TemplateFetcher<S> {
    /// Where templates come from.
    source: S,
    /// Where the baseline template is written.
    org_path: PathBuf,
}

impl<S: TemplateSource> TemplateFetcher<S> {
    /// Creates a fetcher writing to `org_path`.
    #[must_use]
    pub fn new(source: S, org_path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            org_path: org_path.into(),
        }
    }

    /// Returns the baseline template path.
    #[must_use]
    pub fn org_path(&self) -> &Path {
        &self.org_path
    }

    /// Downloads the processed template of `stack` and overwrites the baseline file.
    ///
    /// Nothing is written unless the full body was received and parsed.
    ///
    /// # Errors
    ///
    /// Returns the provider's error verbatim, or an error if the body is not
    /// JSON or cannot be written.
    pub async fn fetch_and_persist(&self, stack: &StackIdentity) -> Result<(), FetchError> {
        debug!(
            "Requesting processed template for {stack} from {}",
            self.source.source_type()
        );

        let body = self.source.processed_template(stack.as_str()).await?;

        let template: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| FetchError::InvalidTemplate {
                message: e.to_string(),
            })?;

        let pretty = serde_json::to_string_pretty(&template).map_err(|e| {
            FetchError::InvalidTemplate {
                message: e.to_string(),
            }
        })?;

        self.write_atomic(pretty.as_bytes()).await?;

        info!("Stored deployed template at {}", self.org_path.display());
        Ok(())
    }

    /// Writes to a sibling temp file and renames it over the target.
    async fn write_atomic(&self, content: &[u8]) -> Result<(), FetchError> {
        let persist_err = |e: std::io::Error| FetchError::Persist {
            path: self.org_path.clone(),
            message: e.to_string(),
        };

        if let Some(parent) = self.org_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            debug!("Creating package directory: {}", parent.display());
            fs::create_dir_all(parent).await.map_err(persist_err)?;
        }

        let temp_path = self.org_path.with_extension("json.tmp");

        if let Err(e) = Self::write_and_rename(&temp_path, &self.org_path, content).await {
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                debug!("Could not remove {}: {cleanup}", temp_path.display());
            }
            return Err(persist_err(e));
        }

        Ok(())
    }

    async fn write_and_rename(
        temp_path: &Path,
        target: &Path,
        content: &[u8],
    ) -> std::io::Result<()> {
        let mut file = fs::File::create(temp_path).await?;
        file.write_all(content).await?;
        file.sync_all().await?;
        drop(file);

        fs::rename(temp_path, target).await
    }
}
