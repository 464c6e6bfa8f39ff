//! Mapper configuration.

use crate::{load, AriadneResult, SentinelPrefix, DEFAULT_SENTINEL_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::Path as FsPath;

/// Default prefix for generated accessor functions.
pub const DEFAULT_ACCESSOR_PREFIX: &str = "get_";

/// What to do when one placeholder tag is used at several paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the path found last and log a warning.
    #[default]
    Warn,
    /// Fail with [`crate::AriadneError::DuplicateTag`].
    Reject,
}

/// Settings for a [`crate::Mapper`].
///
/// Every field has a default, so a config file only needs the fields it
/// changes:
///
/// ```json
/// { "sentinel_prefix": "@@", "duplicate_tags": "reject" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    /// Marker that identifies placeholder strings in the annotated document.
    pub sentinel_prefix: String,
    /// Prepended to each tag name to form a generated function name.
    pub accessor_prefix: String,
    pub duplicate_tags: DuplicatePolicy,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            sentinel_prefix: DEFAULT_SENTINEL_PREFIX.to_owned(),
            accessor_prefix: DEFAULT_ACCESSOR_PREFIX.to_owned(),
            duplicate_tags: DuplicatePolicy::default(),
        }
    }
}

impl MapperConfig {
    /// Read a JSON config file.
    pub fn from_file(path: impl AsRef<FsPath>) -> AriadneResult<Self> {
        let path = path.as_ref();
        let raw = load::read_file(path)?;
        let config = serde_json::from_str(&raw).map_err(|e| crate::AriadneError::json(path, e))?;
        tracing::debug!(path = %path.display(), ?config, "loaded mapper config");
        Ok(config)
    }

    pub fn with_sentinel_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.sentinel_prefix = prefix.into();
        self
    }

    pub fn with_accessor_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.accessor_prefix = prefix.into();
        self
    }

    pub fn with_duplicate_tags(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_tags = policy;
        self
    }

    /// The validated sentinel prefix.
    pub fn sentinel_prefix(&self) -> AriadneResult<SentinelPrefix> {
        SentinelPrefix::new(self.sentinel_prefix.as_str())
    }
}
