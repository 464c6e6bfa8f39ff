//! Placeholder extraction: from change records to a tag → path mapping.

use crate::{diff, Accessor, AriadneError, AriadneResult, ChangeKind, ChangeRecord, Path, Seg};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Default marker for placeholder strings in an annotated document.
pub const DEFAULT_SENTINEL_PREFIX: &str = "__want__:";

/// The marker that makes a string a placeholder.
///
/// Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SentinelPrefix(String);

impl SentinelPrefix {
    /// Fails with [`AriadneError::EmptyPrefix`] for `""`.
    pub fn new(prefix: impl Into<String>) -> AriadneResult<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(AriadneError::EmptyPrefix);
        }
        Ok(Self(prefix))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The placeholder tag held by `value`, if it is one.
    #[inline]
    pub fn tag_of<'v>(&self, value: &'v Value) -> Option<&'v str> {
        value.as_str().filter(|s| s.starts_with(self.0.as_str()))
    }

    /// The caller-chosen name in `tag`, i.e. the tag without this prefix.
    #[inline]
    pub fn strip<'t>(&self, tag: &'t str) -> Option<&'t str> {
        tag.strip_prefix(self.0.as_str())
    }
}

impl Default for SentinelPrefix {
    fn default() -> Self {
        Self(DEFAULT_SENTINEL_PREFIX.to_owned())
    }
}

impl fmt::Display for SentinelPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tag that was found at more than one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTag {
    pub tag: String,
    /// The path recorded first and then overwritten.
    pub replaced: Path,
    /// The path the mapping ended up with.
    pub kept: Path,
}

/// Placeholder tags and the paths they were found at, ordered by tag.
///
/// Tags keep their sentinel prefix. When a tag occurs more than once the path
/// found last in traversal order is kept and the overwrite is listed in
/// [`Mapping::duplicates`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: BTreeMap<String, Path>,
    #[serde(skip)]
    duplicates: Vec<DuplicateTag>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, tag: &str, path: Path) {
        if let Some(replaced) = self.entries.insert(tag.to_owned(), path.clone()) {
            tracing::warn!(
                tag,
                replaced = %replaced,
                kept = %path,
                "placeholder tag used more than once; keeping the later path"
            );
            self.duplicates.push(DuplicateTag {
                tag: tag.to_owned(),
                replaced,
                kept: path,
            });
        }
    }

    #[inline]
    pub fn get(&self, tag: &str) -> Option<&Path> {
        self.entries.get(tag)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(tag, path)| (tag.as_str(), path))
    }

    /// Every overwrite that happened while the mapping was built, in order.
    #[inline]
    pub fn duplicates(&self) -> &[DuplicateTag] {
        &self.duplicates
    }

    /// One accessor per entry, named by the tag with `prefix` removed.
    ///
    /// Tags are built with `prefix`, so the name is the tag itself only if the
    /// mapping came from a different prefix.
    pub fn accessors<'m>(
        &'m self,
        prefix: &'m SentinelPrefix,
    ) -> impl Iterator<Item = Accessor> + 'm {
        self.iter().map(move |(tag, path)| {
            Accessor::new(prefix.strip(tag).unwrap_or(tag), path.clone())
        })
    }

    pub fn into_entries(self) -> BTreeMap<String, Path> {
        self.entries
    }
}

/// Fold change records into a mapping of the placeholders they carry.
///
/// A record counts when its new value is a string starting with `prefix`.
/// Added and type-changed subtrees have no counterpart in the control
/// document, so placeholders nested inside them are collected as well.
pub fn extract<'a>(
    records: impl IntoIterator<Item = ChangeRecord<'a>>,
    prefix: &SentinelPrefix,
) -> Mapping {
    let mut mapping = Mapping::new();
    for record in records {
        match record.kind {
            ChangeKind::ValueChanged => {
                if let Some(tag) = prefix.tag_of(record.new_value) {
                    mapping.insert(tag, record.path);
                }
            }
            ChangeKind::TypeChanged | ChangeKind::KeyAdded | ChangeKind::ElementAdded => {
                collect_subtree(record.new_value, record.path, prefix, &mut mapping);
            }
        }
    }
    mapping
}

/// Collect every placeholder in `value`, which sits at `path`.
///
/// Walks an explicit stack in depth-first pre-order with children pushed in
/// reverse, the same order [`crate::Diff`] reports in. One path buffer is
/// shared and cut back to each entry's depth before its segment is appended.
fn collect_subtree(
    value: &Value,
    mut path: Path,
    prefix: &SentinelPrefix,
    mapping: &mut Mapping,
) {
    let mut stack: Vec<(usize, Option<Seg>, &Value)> = vec![(path.len(), None, value)];

    while let Some((depth, seg, node)) = stack.pop() {
        path.truncate(depth);
        if let Some(seg) = seg {
            path.push(seg);
        }

        match node {
            Value::Object(map) => {
                for (key, child) in map.iter().rev() {
                    stack.push((path.len(), Some(Seg::key(key.as_str())), child));
                }
            }
            Value::Array(items) => {
                for (idx, child) in items.iter().enumerate().rev() {
                    stack.push((path.len(), Some(Seg::index(idx)), child));
                }
            }
            _ => {
                if let Some(tag) = prefix.tag_of(node) {
                    mapping.insert(tag, path.clone());
                }
            }
        }
    }
}

/// Diff `control` against `annotated` and extract the placeholders.
///
/// # Examples
///
/// ```
/// use ariadne_paths::{map_placeholders, path, SentinelPrefix};
/// use serde_json::json;
///
/// let control = json!({"a": {"b": {"c": 5}}});
/// let annotated = json!({"a": {"b": {"c": "__want__:deep"}}});
///
/// let mapping = map_placeholders(&control, &annotated, &SentinelPrefix::default());
/// assert_eq!(mapping.get("__want__:deep"), Some(&path!("a", "b", "c")));
/// ```
pub fn map_placeholders(control: &Value, annotated: &Value, prefix: &SentinelPrefix) -> Mapping {
    extract(diff(control, annotated), prefix)
}
