//! Resolving paths against documents.

use crate::{AriadneError, AriadneResult, Path, Seg};
use serde_json::Value;

/// Get the value at `path` in `doc`.
///
/// A missing key, an out-of-range index, or a segment applied to the wrong
/// kind of node (a key on an array, anything on a scalar) yields `None`.
///
/// ```
/// use ariadne_paths::{path, resolve};
/// use serde_json::json;
///
/// let doc = json!({"items": [10, 20]});
/// assert_eq!(resolve(&doc, &path!("items", 1)), Some(&json!(20)));
/// assert_eq!(resolve(&doc, &path!("items", 2)), None);
/// assert_eq!(resolve(&doc, &path!("items", 0, "x")), None);
/// ```
pub fn resolve<'a>(doc: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = doc;
    for seg in path {
        current = step(current, seg)?;
    }
    Some(current)
}

fn step<'a>(node: &'a Value, seg: &Seg) -> Option<&'a Value> {
    match (node, seg) {
        (Value::Object(map), Seg::Key(key)) => map.get(key),
        (Value::Array(items), Seg::Index(idx)) => items.get(*idx),
        _ => None,
    }
}

/// A named retrieval of the value at one path.
///
/// Accessors are what a mapping turns into once it is applied to documents
/// other than the control document: any document that shares the path's shape
/// works.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accessor {
    name: String,
    path: Path,
}

impl Accessor {
    pub fn new(name: impl Into<String>, path: Path) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk the path in `doc`.
    ///
    /// Fails with [`AriadneError::PathNotFound`] naming the first segment that
    /// does not resolve.
    pub fn get<'a>(&self, doc: &'a Value) -> AriadneResult<&'a Value> {
        let mut current = doc;
        for (depth, seg) in self.path.iter().enumerate() {
            current = step(current, seg).ok_or_else(|| {
                AriadneError::path_not_found(
                    self.name.clone(),
                    self.path.clone(),
                    self.path.prefix(depth + 1),
                )
            })?;
        }
        Ok(current)
    }
}
