//! Diff invocation handler.
//!
//! Runs the two steps of an invocation in order: download the deployed
//! template, then diff it against the local one. The first failure aborts the
//! invocation and no report is produced.

use std::io::Write;
use tracing::{debug, info};

use crate::cli::OutputFormatter;
use crate::config::TemplatePaths;
use crate::diff::{compute_diff, DifferenceReport};
use crate::error::Result;
use crate::stack::{StackIdentity, TemplateFetcher, TemplateSource};

/// Runs one diff invocation against a deployed stack.
#[derive(Debug)]
pub struct DiffRunner<S> {
    /// Stack whose template is the baseline.
    stack: StackIdentity,
    /// Downloads the baseline.
    fetcher: TemplateFetcher<S>,
    /// Locally packaged template.
    local_path: std::path::PathBuf,
    /// Renders the report.
    formatter: OutputFormatter,
}

impl<S: TemplateSource> DiffRunner<S> {
    /// Creates a runner for `stack` using the templates at `paths`.
    #[must_use]
    pub fn new(
        source: S,
        stack: StackIdentity,
        paths: TemplatePaths,
        formatter: OutputFormatter,
    ) -> Self {
        Self {
            stack,
            fetcher: TemplateFetcher::new(source, paths.org),
            local_path: paths.local,
            formatter,
        }
    }

    /// Returns the stack this runner compares against.
    #[must_use]
    pub const fn stack(&self) -> &StackIdentity {
        &self.stack
    }

    /// Downloads the deployed template, diffs it, and writes the rendering to `out`.
    ///
    /// # Errors
    ///
    /// Returns the first fetch, diff or write error encountered.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<DifferenceReport> {
        info!("Downloading currently deployed template");
        self.fetcher.fetch_and_persist(&self.stack).await?;
        info!("Downloaded currently deployed template");

        info!("Running diff against deployed template");
        let report = compute_diff(&self.local_path, self.fetcher.org_path())?;

        debug!("Found {} differences", report.len());

        out.write_all(self.formatter.format_report(&report).as_bytes())?;
        out.flush()?;

        Ok(report)
    }
}
