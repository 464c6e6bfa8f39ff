//! One-directional structural diff between a control and an annotated document.
//!
//! The walk follows the annotated document's shape and reports every position
//! where it diverges from the control document:
//!
//! - keys and elements that exist only in the annotated document,
//! - nodes whose kind (object, array, string, number, boolean, null) changed,
//! - scalars whose value changed.
//!
//! Positions that exist only in the control document are not reported.
//! Arrays are aligned by index; there is no element matching.

use crate::{error::value_type_name, Path, Seg};
use serde_json::Value;
use std::fmt;
use std::iter::FusedIterator;

/// How a position in the annotated document diverges from the control document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Both sides are scalars of the same kind with different values.
    ValueChanged,
    /// The two sides are different kinds of node. The subtree is not entered.
    TypeChanged,
    /// An object key present only in the annotated document.
    KeyAdded,
    /// An array index past the end of the control array.
    ElementAdded,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::ValueChanged => "value_changed",
            ChangeKind::TypeChanged => "type_changed",
            ChangeKind::KeyAdded => "key_added",
            ChangeKind::ElementAdded => "element_added",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One point of divergence.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord<'a> {
    /// Where the divergence is, in both documents.
    pub path: Path,
    pub kind: ChangeKind,
    /// The annotated document's node at `path`.
    pub new_value: &'a Value,
}

/// Compare `control` against `annotated`.
///
/// Records come out lazily in depth-first pre-order, children in the annotated
/// document's iteration order. Call `diff` again to restart.
///
/// # Examples
///
/// ```
/// use ariadne_paths::{diff, path, ChangeKind};
/// use serde_json::json;
///
/// let control = json!({"items": [10, 20]});
/// let annotated = json!({"items": ["__want__:x", 20, 30], "extra": true});
///
/// let records: Vec<_> = diff(&control, &annotated).collect();
/// assert_eq!(records.len(), 3);
/// assert_eq!(records[0].path, path!("extra"));
/// assert_eq!(records[0].kind, ChangeKind::KeyAdded);
/// assert_eq!(records[1].path, path!("items", 0));
/// assert_eq!(records[1].kind, ChangeKind::TypeChanged);
/// assert_eq!(records[2].path, path!("items", 2));
/// assert_eq!(records[2].kind, ChangeKind::ElementAdded);
/// ```
pub fn diff<'a>(control: &'a Value, annotated: &'a Value) -> Diff<'a> {
    Diff {
        stack: vec![Pending::Compare {
            path: Path::root(),
            control,
            annotated,
        }],
    }
}

/// Iterator over the [`ChangeRecord`]s of a control/annotated pair.
///
/// Created by [`diff`].
#[derive(Debug, Clone)]
pub struct Diff<'a> {
    stack: Vec<Pending<'a>>,
}

#[derive(Debug, Clone)]
enum Pending<'a> {
    Compare {
        path: Path,
        control: &'a Value,
        annotated: &'a Value,
    },
    Added {
        path: Path,
        kind: ChangeKind,
        value: &'a Value,
    },
}

impl<'a> Diff<'a> {
    /// Compare one pair of nodes. Containers schedule their children (pushed in
    /// reverse so they pop in order); scalars report immediately.
    fn compare(
        &mut self,
        path: Path,
        control: &'a Value,
        annotated: &'a Value,
    ) -> Option<ChangeRecord<'a>> {
        match (control, annotated) {
            (Value::Object(old), Value::Object(new)) => {
                for (key, value) in new.iter().rev() {
                    let child = path.child(Seg::key(key.as_str()));
                    self.stack.push(match old.get(key) {
                        Some(prev) => Pending::Compare {
                            path: child,
                            control: prev,
                            annotated: value,
                        },
                        None => Pending::Added {
                            path: child,
                            kind: ChangeKind::KeyAdded,
                            value,
                        },
                    });
                }
                None
            }
            (Value::Array(old), Value::Array(new)) => {
                for (idx, value) in new.iter().enumerate().rev() {
                    let child = path.child(Seg::index(idx));
                    self.stack.push(match old.get(idx) {
                        Some(prev) => Pending::Compare {
                            path: child,
                            control: prev,
                            annotated: value,
                        },
                        None => Pending::Added {
                            path: child,
                            kind: ChangeKind::ElementAdded,
                            value,
                        },
                    });
                }
                None
            }
            _ if value_type_name(control) != value_type_name(annotated) => Some(ChangeRecord {
                path,
                kind: ChangeKind::TypeChanged,
                new_value: annotated,
            }),
            _ if control != annotated => Some(ChangeRecord {
                path,
                kind: ChangeKind::ValueChanged,
                new_value: annotated,
            }),
            _ => None,
        }
    }
}

impl<'a> Iterator for Diff<'a> {
    type Item = ChangeRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pending) = self.stack.pop() {
            let record = match pending {
                Pending::Added { path, kind, value } => Some(ChangeRecord {
                    path,
                    kind,
                    new_value: value,
                }),
                Pending::Compare {
                    path,
                    control,
                    annotated,
                } => self.compare(path, control, annotated),
            };
            if record.is_some() {
                return record;
            }
        }
        None
    }
}

impl FusedIterator for Diff<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    fn kinds(control: &Value, annotated: &Value) -> Vec<(Path, ChangeKind)> {
        diff(control, annotated)
            .map(|record| (record.path, record.kind))
            .collect()
    }

    #[test]
    fn test_identical_documents_have_no_changes() {
        let doc = json!({"a": [1, {"b": null}], "c": "text", "d": 1.5});
        assert!(diff(&doc, &doc.clone()).next().is_none());
    }

    #[test]
    fn test_scalar_value_change() {
        let control = json!({"name": "Ada"});
        let annotated = json!({"name": "Grace"});
        let records: Vec<_> = diff(&control, &annotated).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, path!("name"));
        assert_eq!(records[0].kind, ChangeKind::ValueChanged);
        assert_eq!(records[0].new_value, &json!("Grace"));
    }

    #[test]
    fn test_number_to_string_is_type_change() {
        let control = json!({"x": 5});
        let annotated = json!({"x": "__want__:x"});
        assert_eq!(kinds(&control, &annotated), vec![(path!("x"), ChangeKind::TypeChanged)]);
    }

    #[test]
    fn test_integer_and_float_are_different_values() {
        let control = json!({"n": 1});
        let annotated = json!({"n": 1.0});
        assert_eq!(kinds(&control, &annotated), vec![(path!("n"), ChangeKind::ValueChanged)]);
    }

    #[test]
    fn test_type_change_does_not_recurse() {
        let control = json!({"a": {"b": 1, "c": 2}});
        let annotated = json!({"a": [{"b": 1}]});
        let records: Vec<_> = diff(&control, &annotated).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, ChangeKind::TypeChanged);
        assert_eq!(records[0].new_value, &json!([{"b": 1}]));
    }

    #[test]
    fn test_key_added_is_reported_once_at_the_key() {
        let control = json!({"a": 1});
        let annotated = json!({"a": 1, "b": {"c": {"d": 2}}});
        let records: Vec<_> = diff(&control, &annotated).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, path!("b"));
        assert_eq!(records[0].kind, ChangeKind::KeyAdded);
        assert_eq!(records[0].new_value, &json!({"c": {"d": 2}}));
    }

    #[test]
    fn test_removed_keys_and_elements_are_not_reported() {
        let control = json!({"a": 1, "b": 2, "list": [1, 2, 3]});
        let annotated = json!({"a": 1, "list": [1]});
        assert!(kinds(&control, &annotated).is_empty());
    }

    #[test]
    fn test_arrays_align_by_position() {
        let control = json!({"items": [10, 20]});
        let annotated = json!({"items": ["__want__:x", 20]});
        assert_eq!(
            kinds(&control, &annotated),
            vec![(path!("items", 0), ChangeKind::TypeChanged)]
        );

        // A shifted array reports every shifted position, not a single insertion.
        let annotated = json!({"items": [5, 10, 20]});
        assert_eq!(
            kinds(&control, &annotated),
            vec![
                (path!("items", 0), ChangeKind::ValueChanged),
                (path!("items", 1), ChangeKind::ValueChanged),
                (path!("items", 2), ChangeKind::ElementAdded),
            ]
        );
    }

    #[test]
    fn test_root_level_changes() {
        assert_eq!(
            kinds(&json!(5), &json!("__want__:root")),
            vec![(Path::root(), ChangeKind::TypeChanged)]
        );
        assert_eq!(
            kinds(&json!(null), &json!({})),
            vec![(Path::root(), ChangeKind::TypeChanged)]
        );
        assert_eq!(
            kinds(&json!([]), &json!([true])),
            vec![(path!(0), ChangeKind::ElementAdded)]
        );
    }

    #[test]
    fn test_depth_first_order() {
        let control = json!({"a": {"x": 1, "y": 2}, "b": [1, 2]});
        let annotated = json!({"a": {"x": 9, "y": 8}, "b": [7, 2, 3]});
        assert_eq!(
            kinds(&control, &annotated),
            vec![
                (path!("a", "x"), ChangeKind::ValueChanged),
                (path!("a", "y"), ChangeKind::ValueChanged),
                (path!("b", 0), ChangeKind::ValueChanged),
                (path!("b", 2), ChangeKind::ElementAdded),
            ]
        );
    }

    #[test]
    fn test_diff_is_lazy_and_restartable() {
        let control = json!({"a": 1, "b": 2, "c": 3});
        let annotated = json!({"a": 10, "b": 20, "c": 30});

        let mut records = diff(&control, &annotated);
        assert_eq!(records.next().map(|r| r.path), Some(path!("a")));
        let rest: Vec<_> = records.collect();
        assert_eq!(rest.len(), 2);

        assert_eq!(diff(&control, &annotated).count(), 3);
    }

    #[test]
    fn test_change_kind_display() {
        assert_eq!(ChangeKind::ValueChanged.to_string(), "value_changed");
        assert_eq!(ChangeKind::ElementAdded.to_string(), "element_added");
    }
}
