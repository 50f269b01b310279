//! Structural diff engine for JSON templates.
//!
//! Objects are compared by key, arrays by position, scalars by strict
//! equality. Numbers compare by value, so `1` and `1.0` are equal. Arrays are
//! not aligned, so a reordered list reports every shifted position as changed.

use serde_json::{Number, Value};
use tracing::debug;

use super::report::{Change, DiffPath, DifferenceReport, PathSegment};

/// Engine for computing structural diffs between two templates.
#[derive(Debug, Default)]
pub struct DiffEngine;

impl DiffEngine {
    /// Creates a new diff engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the differences of `candidate` relative to `baseline`.
    #[must_use]
    pub fn compute(&self, baseline: &Value, candidate: &Value) -> DifferenceReport {
        let mut report = DifferenceReport::new();
        let mut path = DiffPath::root();

        Self::walk(&mut path, baseline, candidate, &mut report);

        debug!(
            "Diff complete: {} added, {} removed, {} changed",
            report.added_count(),
            report.removed_count(),
            report.changed_count()
        );
        report
    }

    fn walk(path: &mut DiffPath, baseline: &Value, candidate: &Value, report: &mut DifferenceReport) {
        if baseline == candidate {
            return;
        }

        match (baseline, candidate) {
            (Value::Object(old), Value::Object(new)) => {
                // Baseline order first, then keys only the candidate has
                let added = new.keys().filter(|key| !old.contains_key(key.as_str()));

                for key in old.keys().chain(added) {
                    path.push(PathSegment::Key(key.clone()));
                    Self::visit(path, old.get(key.as_str()), new.get(key.as_str()), report);
                    path.pop();
                }
            }

            (Value::Array(old), Value::Array(new)) => {
                for index in 0..old.len().max(new.len()) {
                    path.push(PathSegment::Index(index));
                    Self::visit(path, old.get(index), new.get(index), report);
                    path.pop();
                }
            }

            (Value::Number(old), Value::Number(new)) if same_number(old, new) => {}

            // Scalars, or nodes whose kinds differ
            _ => report.record(
                path,
                Change::Changed {
                    from: baseline.clone(),
                    to: candidate.clone(),
                },
            ),
        }
    }

    fn visit(
        path: &mut DiffPath,
        baseline: Option<&Value>,
        candidate: Option<&Value>,
        report: &mut DifferenceReport,
    ) {
        match (baseline, candidate) {
            (Some(old), Some(new)) => Self::walk(path, old, new, report),
            (Some(old), None) => report.record(path, Change::Removed { value: old.clone() }),
            (None, Some(new)) => report.record(path, Change::Added { value: new.clone() }),
            (None, None) => {}
        }
    }
}

/// Integers and floats holding the same value are equal.
#[allow(clippy::float_cmp)]
fn same_number(a: &Number, b: &Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn diff(baseline: &Value, candidate: &Value) -> DifferenceReport {
        DiffEngine::new().compute(baseline, candidate)
    }

    #[test]
    fn test_equal_documents_yield_empty_report() {
        let docs = [
            json!(null),
            json!(42),
            json!("text"),
            json!([1, [2, 3], {"a": null}]),
            json!({"Resources": {"A": {"Type": "X", "Properties": {"List": [1, 2]}}}}),
        ];

        for doc in &docs {
            assert!(diff(doc, doc).is_empty(), "{doc}");
        }
    }

    #[test]
    fn test_disjoint_roots() {
        let baseline = json!({"a": 1, "b": {"c": true}});
        let candidate = json!({"x": [1], "y": "z"});

        let report = diff(&baseline, &candidate);

        assert_eq!(report.len(), 4);
        assert_eq!(report.get("a"), Some(&Change::Removed { value: json!(1) }));
        assert_eq!(report.get("b"), Some(&Change::Removed { value: json!({"c": true}) }));
        assert_eq!(report.get("x"), Some(&Change::Added { value: json!([1]) }));
        assert_eq!(report.get("y"), Some(&Change::Added { value: json!("z") }));
    }

    #[test]
    fn test_single_leaf_change_has_no_sibling_entries() {
        let baseline = json!({"Resources": {"A": {"Type": "X", "Name": "n"}, "B": {"Type": "Z"}}});
        let candidate = json!({"Resources": {"A": {"Type": "Q", "Name": "n"}, "B": {"Type": "Z"}}});

        let report = diff(&baseline, &candidate);

        assert_eq!(report.len(), 1);
        assert_eq!(
            report.get("Resources.A.Type"),
            Some(&Change::Changed {
                from: json!("X"),
                to: json!("Q"),
            })
        );
    }

    #[test]
    fn test_scalar_type_mismatch_is_a_change() {
        let report = diff(&json!({"v": "1"}), &json!({"v": 1}));

        assert_eq!(
            report.get("v"),
            Some(&Change::Changed {
                from: json!("1"),
                to: json!(1),
            })
        );
    }

    #[test]
    fn test_integer_and_float_with_same_value_are_equal() {
        let baseline = json!({"v": 1, "l": [2, {"w": 3}]});
        let candidate: Value =
            serde_json::from_str(r#"{"v": 1.0, "l": [2.0, {"w": 3.0}]}"#).expect("valid JSON");

        assert!(diff(&baseline, &candidate).is_empty());

        let report = diff(&json!({"v": 1}), &json!({"v": 1.5}));
        assert_eq!(
            report.get("v"),
            Some(&Change::Changed {
                from: json!(1),
                to: json!(1.5),
            })
        );
    }

    #[test]
    fn test_removed_keys_follow_baseline_order() {
        let baseline: Value = serde_json::from_str(r#"{"z": 1, "a": 2}"#).expect("valid JSON");
        let report = diff(&baseline, &json!({}));

        let paths: Vec<String> = report.entries().iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, ["z", "a"]);
    }

    #[test]
    fn test_node_kind_mismatch_is_reported_once() {
        let report = diff(&json!({"v": {"a": 1}}), &json!({"v": [1]}));

        assert_eq!(report.len(), 1);
        assert!(matches!(report.get("v"), Some(Change::Changed { .. })));
    }

    #[test]
    fn test_arrays_compare_positionally() {
        let report = diff(&json!({"l": [1, 2, 3]}), &json!({"l": [1, 5]}));

        assert_eq!(report.len(), 2);
        assert_eq!(
            report.get("l[1]"),
            Some(&Change::Changed {
                from: json!(2),
                to: json!(5),
            })
        );
        assert_eq!(report.get("l[2]"), Some(&Change::Removed { value: json!(3) }));

        let report = diff(&json!([1]), &json!([1, {"k": "v"}]));
        assert_eq!(report.get("[1]"), Some(&Change::Added { value: json!({"k": "v"}) }));
    }

    #[test]
    fn test_reordered_array_over_reports() {
        let report = diff(&json!(["a", "b"]), &json!(["b", "a"]));
        assert_eq!(report.changed_count(), 2);
    }

    #[test]
    fn test_nested_array_objects() {
        let baseline = json!({"Outputs": [{"Name": "a", "Value": 1}]});
        let candidate = json!({"Outputs": [{"Name": "a", "Value": 2}]});

        let report = diff(&baseline, &candidate);
        assert_eq!(report.len(), 1);
        assert!(report.get("Outputs[0].Value").is_some());
    }

    #[test]
    fn test_end_to_end_template_scenario() {
        let baseline = json!({"Resources": {"A": {"Type": "X"}}});
        let candidate = json!({"Resources": {"A": {"Type": "Y"}, "B": {"Type": "Z"}}});

        let report = diff(&baseline, &candidate);

        assert_eq!(report.len(), 2);
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
