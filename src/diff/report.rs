//! Difference report types.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// One step into a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object member.
    Key(String),
    /// Array element.
    Index(usize),
}

/// Location of a node inside a template, e.g. `Resources.A.Type` or `Outputs.List[2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffPath(Vec<PathSegment>);

/// A single structural delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Change {
    /// Present only in the candidate.
    Added {
        /// Candidate value.
        value: Value,
    },
    /// Present only in the baseline.
    Removed {
        /// Baseline value.
        value: Value,
    },
    /// Present in both with different values.
    Changed {
        /// Baseline value.
        from: Value,
        /// Candidate value.
        to: Value,
    },
}

/// A change together with where it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    /// Where the change happened.
    pub path: DiffPath,
    /// What changed.
    pub change: Change,
}

/// All differences between a baseline and a candidate template.
///
/// Entries keep document traversal order. An empty report means the templates
/// are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DifferenceReport {
    entries: Vec<DiffEntry>,
}

impl DiffPath {
    /// The document root.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns the segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

/// Keys that can be written after a dot without ambiguity.
fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && !key
            .chars()
            .any(|c| matches!(c, '.' | '[' | ']' | '"') || c.is_whitespace())
}

impl fmt::Display for DiffPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(root)");
        }

        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if is_plain_key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                PathSegment::Key(key) => write!(f, "[{}]", Value::String(key.clone()))?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for DiffPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Change {
    /// Returns the single-character marker used in text output.
    #[must_use]
    pub const fn marker(&self) -> char {
        match self {
            Self::Added { .. } => '+',
            Self::Removed { .. } => '-',
            Self::Changed { .. } => '~',
        }
    }
}

impl DifferenceReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, path: &DiffPath, change: Change) {
        self.entries.push(DiffEntry {
            path: path.clone(),
            change,
        });
    }

    /// Returns true if the templates were equal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns all entries in traversal order.
    #[must_use]
    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    /// Looks up the change recorded at a rendered path such as `Resources.B`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Change> {
        self.entries
            .iter()
            .find(|entry| entry.path.to_string() == path)
            .map(|entry| &entry.change)
    }

    /// Number of added entries.
    #[must_use]
    pub fn added_count(&self) -> usize {
        self.count(|c| matches!(c, Change::Added { .. }))
    }

    /// Number of removed entries.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.count(|c| matches!(c, Change::Removed { .. }))
    }

    /// Number of changed entries.
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.count(|c| matches!(c, Change::Changed { .. }))
    }

    fn count(&self, predicate: impl Fn(&Change) -> bool) -> usize {
        self.entries.iter().filter(|e| predicate(&e.change)).count()
    }
}

impl Serialize for DifferenceReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.path, &entry.change)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(segments: Vec<PathSegment>) -> DiffPath {
        DiffPath(segments)
    }

    #[test]
    fn test_path_rendering() {
        let p = path(vec![
            PathSegment::Key(String::from("Resources")),
            PathSegment::Key(String::from("Fn::Join")),
            PathSegment::Index(1),
            PathSegment::Key(String::from("a.b")),
        ]);
        assert_eq!(p.to_string(), r#"Resources.Fn::Join[1]["a.b"]"#);
        assert_eq!(DiffPath::root().to_string(), "(root)");
    }

    #[test]
    fn test_report_serializes_as_mapping() {
        let mut report = DifferenceReport::new();
        report.record(
            &path(vec![PathSegment::Key(String::from("A"))]),
            Change::Changed {
                from: json!("X"),
                to: json!("Y"),
            },
        );

        let value = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(value, json!({ "A": { "kind": "changed", "from": "X", "to": "Y" } }));
    }
}
