//! Structural paths into JSON documents.
//!
//! A path is a sequence of segments starting at the document root. Each
//! segment is either an object key or an array index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single step of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seg {
    /// Object key access: `{"key": value}`
    Key(String),
    /// Array index access: `[index]`
    Index(usize),
}

impl Seg {
    #[inline]
    pub fn key(k: impl Into<String>) -> Self {
        Seg::Key(k.into())
    }

    #[inline]
    pub fn index(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// Returns true if `s` can be written in JSONPath dot notation.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

impl fmt::Display for Seg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seg::Key(k) if is_identifier(k) => write!(f, ".{k}"),
            Seg::Key(k) => {
                f.write_str("['")?;
                for c in k.chars() {
                    match c {
                        '\'' => f.write_str("\\'")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        c if c.is_control() => write!(f, "\\x{:02x}", c as u32)?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("']")
            }
            Seg::Index(i) => write!(f, "[{i}]"),
        }
    }
}

impl From<String> for Seg {
    fn from(s: String) -> Self {
        Seg::Key(s)
    }
}

impl From<&str> for Seg {
    fn from(s: &str) -> Self {
        Seg::Key(s.to_owned())
    }
}

impl From<usize> for Seg {
    fn from(i: usize) -> Self {
        Seg::Index(i)
    }
}

/// A location in a JSON document, as the keys and indices leading to it.
///
/// The empty path denotes the root. Paths serialize as plain JSON arrays,
/// e.g. `["contribution", "allocations", 0, "amount"]`, and display in
/// JSONPath notation, e.g. `$.contribution.allocations[0].amount`.
///
/// # Examples
///
/// ```
/// use ariadne_paths::{path, Seg};
///
/// let path = path!("users", 0).child(Seg::key("name"));
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "$.users[0].name");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Seg>);

impl Path {
    /// The root path.
    #[inline]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, seg: Seg) {
        self.0.push(seg);
    }

    /// Shorten the path to its first `len` segments.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Append a segment and return a new path, leaving `self` untouched.
    #[inline]
    pub fn child(&self, seg: Seg) -> Path {
        let mut result = Path(Vec::with_capacity(self.0.len() + 1));
        result.0.extend(self.0.iter().cloned());
        result.0.push(seg);
        result
    }

    /// The first `len` segments of this path.
    #[inline]
    pub fn prefix(&self, len: usize) -> Path {
        Path(self.0[..len.min(self.0.len())].to_vec())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Seg> {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for seg in &self.0 {
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Seg;
    type IntoIter = std::slice::Iter<'a, Seg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Construct a `Path` from a sequence of segments.
///
/// String expressions become key segments, `usize` expressions become index
/// segments.
///
/// ```
/// use ariadne_paths::path;
///
/// let p = path!("contribution", "allocations", 0, "amount");
/// assert_eq!(p.to_string(), "$.contribution.allocations[0].amount");
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::Seg::from($seg));
        )+
        p
    }};
}
