//! The configured entry point: load, map, generate.

use crate::{
    codegen, diff, extract, load_document, AriadneError, AriadneResult, DuplicatePolicy, Mapping,
    MapperConfig, SentinelPrefix,
};
use serde_json::Value;
use std::path::Path as FsPath;

/// Placeholder mapping with a fixed configuration.
///
/// # Examples
///
/// ```
/// use ariadne_paths::{path, Mapper, MapperConfig};
/// use serde_json::json;
///
/// let mapper = Mapper::new(MapperConfig::default()).unwrap();
/// let mapping = mapper
///     .map(
///         &json!({"contribution": {"id": 99}}),
///         &json!({"contribution": {"id": "__want__:contribution_id"}}),
///     )
///     .unwrap();
/// assert_eq!(mapping.get("__want__:contribution_id"), Some(&path!("contribution", "id")));
///
/// let code = mapper.generate(&mapping).unwrap();
/// assert!(code.contains("def get_contribution_id(obj: Union[Dict, List]) -> Any:"));
/// ```
#[derive(Debug, Clone)]
pub struct Mapper {
    config: MapperConfig,
    prefix: SentinelPrefix,
}

impl Mapper {
    /// Fails with [`AriadneError::EmptyPrefix`] if the config's sentinel
    /// prefix is empty.
    pub fn new(config: MapperConfig) -> AriadneResult<Self> {
        let prefix = config.sentinel_prefix()?;
        Ok(Self { config, prefix })
    }

    /// Find the placeholders in `annotated` and their paths.
    ///
    /// Under [`DuplicatePolicy::Reject`] a tag found at two paths is an error.
    pub fn map(&self, control: &Value, annotated: &Value) -> AriadneResult<Mapping> {
        let mapping = extract(diff(control, annotated), &self.prefix);

        if self.config.duplicate_tags == DuplicatePolicy::Reject {
            if let Some(dup) = mapping.duplicates().first() {
                return Err(AriadneError::duplicate_tag(
                    dup.tag.clone(),
                    dup.replaced.clone(),
                    dup.kept.clone(),
                ));
            }
        }

        tracing::debug!(
            placeholders = mapping.len(),
            duplicates = mapping.duplicates().len(),
            "mapped placeholders"
        );
        Ok(mapping)
    }

    /// Render the Python accessor module for `mapping`.
    pub fn generate(&self, mapping: &Mapping) -> AriadneResult<String> {
        codegen::generate_python(mapping, &self.prefix, &self.config.accessor_prefix)
    }

    /// Load both documents and map them.
    pub fn map_files(
        &self,
        control: impl AsRef<FsPath>,
        annotated: impl AsRef<FsPath>,
    ) -> AriadneResult<Mapping> {
        let control = load_document(control)?;
        let annotated = load_document(annotated)?;
        self.map(&control, &annotated)
    }

    /// Load both documents and render the accessor module.
    pub fn generate_from_files(
        &self,
        control: impl AsRef<FsPath>,
        annotated: impl AsRef<FsPath>,
    ) -> AriadneResult<String> {
        let mapping = self.map_files(control, annotated)?;
        self.generate(&mapping)
    }
}
