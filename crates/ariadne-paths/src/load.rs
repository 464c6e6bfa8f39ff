//! Reading control and annotated documents from disk.

use crate::{AriadneError, AriadneResult};
use serde_json::Value;
use std::path::Path as FsPath;

pub(crate) fn read_file(path: &FsPath) -> AriadneResult<String> {
    std::fs::read_to_string(path).map_err(|e| AriadneError::io(path, e))
}

/// Read and parse a JSON document.
///
/// Fails with [`AriadneError::Io`] if the file cannot be read and
/// [`AriadneError::Json`] if it is not valid JSON.
pub fn load_document(path: impl AsRef<FsPath>) -> AriadneResult<Value> {
    let path = path.as_ref();
    let raw = read_file(path)?;
    let doc = serde_json::from_str(&raw).map_err(|e| AriadneError::json(path, e))?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "loaded document");
    Ok(doc)
}
