//! Error types for ariadne-paths operations.

use crate::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ariadne-paths operations.
pub type AriadneResult<T> = Result<T, AriadneError>;

/// Errors that can occur while mapping placeholders or consuming a mapping.
///
/// Shape differences between the control and annotated documents are never
/// errors; they are how placeholders are found.
#[derive(Debug, Error)]
pub enum AriadneError {
    /// The sentinel prefix was empty, so every string would be a placeholder.
    #[error("sentinel prefix must not be empty")]
    EmptyPrefix,

    /// An accessor could not walk its path in the document it was given.
    #[error("could not find '{name}': path {path} is missing at {at}")]
    PathNotFound {
        /// Accessor name (the tag without its prefix).
        name: String,
        /// The full path the accessor walks.
        path: Path,
        /// The shortest prefix of `path` that does not resolve.
        at: Path,
    },

    /// The same placeholder tag appears at two paths.
    #[error("placeholder {tag} appears at both {first} and {second}")]
    DuplicateTag {
        tag: String,
        first: Path,
        second: Path,
    },

    /// A tag cannot be turned into a generated function name.
    #[error("placeholder {tag} does not yield a valid accessor name ({name:?})")]
    InvalidAccessorName { tag: String, name: String },

    /// Reading an input file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file is not valid JSON.
    #[error("failed to parse {} as JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AriadneError {
    #[inline]
    pub fn path_not_found(name: impl Into<String>, path: Path, at: Path) -> Self {
        AriadneError::PathNotFound {
            name: name.into(),
            path,
            at,
        }
    }

    #[inline]
    pub fn duplicate_tag(tag: impl Into<String>, first: Path, second: Path) -> Self {
        AriadneError::DuplicateTag {
            tag: tag.into(),
            first,
            second,
        }
    }

    #[inline]
    pub fn invalid_accessor_name(tag: impl Into<String>, name: impl Into<String>) -> Self {
        AriadneError::InvalidAccessorName {
            tag: tag.into(),
            name: name.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AriadneError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        AriadneError::Json {
            path: path.into(),
            source,
        }
    }
}

/// Get the kind name of a JSON value.
///
/// Two nodes whose kind names differ are a type change.
#[inline]
pub fn value_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
