//! Loading and diffing the two template files.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::DiffError;

use super::engine::DiffEngine;
use super::report::DifferenceReport;

/// Diffs the locally packaged template against the downloaded baseline.
///
/// The baseline at `org_path` is expected to have been written by the fetcher
/// earlier in the same invocation.
///
/// # Errors
///
/// Returns [`DiffError::NotFound`] if the local template is missing, and
/// [`DiffError::Other`] for any other read or parse failure.
pub fn compute_diff(
    local_path: impl AsRef<Path>,
    org_path: impl AsRef<Path>,
) -> Result<DifferenceReport, DiffError> {
    let local_path = local_path.as_ref();
    let org_path = org_path.as_ref();

    if !local_path.exists() {
        return Err(DiffError::NotFound {
            path: local_path.to_path_buf(),
        });
    }

    let baseline = load_template(org_path)?;
    let candidate = load_template(local_path).map_err(|e| match e {
        DiffError::Other { .. } if !local_path.exists() => DiffError::NotFound {
            path: local_path.to_path_buf(),
        },
        other => other,
    })?;

    Ok(DiffEngine::new().compute(&baseline, &candidate))
}

/// Reads and parses one template file.
///
/// # Errors
///
/// Returns [`DiffError::Other`] naming the file if it cannot be read or is not JSON.
pub fn load_template(path: &Path) -> Result<Value, DiffError> {
    debug!("Reading template: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DiffError::other(path, "file does not exist"),
        _ => DiffError::other(path, e.to_string()),
    })?;

    serde_json::from_str(&content).map_err(|e| DiffError::other(path, format!("invalid JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplatePaths;
    use crate::diff::Change;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        std::fs::write(path, content).expect("Failed to write template");
    }

    #[test]
    fn test_missing_local_template() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let paths = TemplatePaths::in_dir(temp.path());
        write(&paths.org, "{}");

        let err = compute_diff(&paths.local, &paths.org).expect_err("should fail");

        assert!(err.is_not_found());
        let message = err.to_string();
        assert!(message.contains("cloudformation-template-update-stack.json could not be found"));
        assert!(message.contains("run \"sls deploy --noDeploy\" first."));
    }

    #[test]
    fn test_missing_baseline_is_other() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let paths = TemplatePaths::in_dir(temp.path());
        write(&paths.local, "{}");

        let err = compute_diff(&paths.local, &paths.org).expect_err("should fail");
        assert!(matches!(err, DiffError::Other { .. }));
    }

    #[test]
    fn test_malformed_local_template() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let paths = TemplatePaths::in_dir(temp.path());
        write(&paths.org, "{}");
        write(&paths.local, "{\"Resources\": ");

        let err = compute_diff(&paths.local, &paths.org).expect_err("should fail");

        assert!(matches!(err, DiffError::Other { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_identical_files() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let paths = TemplatePaths::in_dir(temp.path());
        let template = r#"{"AWSTemplateFormatVersion":"2010-09-09","Resources":{"A":{"Type":"X"}}}"#;
        write(&paths.org, template);
        write(&paths.local, template);

        let report = compute_diff(&paths.local, &paths.org).expect("diff should succeed");
        assert!(report.is_empty());
    }

    #[test]
    fn test_files_are_compared_org_to_local() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let paths = TemplatePaths::in_dir(temp.path());
        write(&paths.org, r#"{"Resources":{"A":{"Type":"X"}}}"#);
        write(&paths.local, r#"{"Resources":{"A":{"Type":"Y"},"B":{"Type":"Z"}}}"#);

        let report = compute_diff(&paths.local, &paths.org).expect("diff should succeed");

        assert_eq!(
            report.get("Resources.A.Type"),
            Some(&Change::Changed {
                from: json!("X"),
                to: json!("Y"),
            })
        );
        assert_eq!(
            report.get("Resources.B"),
            Some(&Change::Added {
                value: json!({"Type": "Z"}),
            })
        );
    }
}
