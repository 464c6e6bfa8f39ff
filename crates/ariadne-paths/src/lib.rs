//! Locate values in JSON documents by example.
//!
//! Give `ariadne-paths` a *control* document (real sample data) and an
//! *annotated* copy in which the values you care about are replaced by
//! placeholder strings such as `"__want__:donor_email"`. It walks both
//! documents side by side and reports, for each placeholder, the path of keys
//! and indices that leads to it. Those paths can then be read from any
//! document of the same shape, either in process with an [`Accessor`] or from
//! generated Python helpers.
//!
//! # Pipeline
//!
//! ```text
//! (control, annotated) --diff--> ChangeRecord* --extract--> Mapping --> accessors / codegen
//! ```
//!
//! - [`diff`] is a one-directional structural diff: it follows the annotated
//!   document and reports added keys and elements, kind changes and value
//!   changes. Arrays are aligned by position.
//! - [`extract`] keeps the records whose new value starts with the
//!   [`SentinelPrefix`] and folds them into a [`Mapping`] from tag to [`Path`].
//! - [`Mapper`] wraps both behind a [`MapperConfig`] and adds file loading and
//!   Python generation.
//!
//! # Quick Start
//!
//! ```
//! use ariadne_paths::{map_placeholders, path, SentinelPrefix};
//! use serde_json::json;
//!
//! let control = json!({
//!     "contribution": {"id": 99, "amount": 12.5, "donor": {"email": "a@b.com"}}
//! });
//! let annotated = json!({
//!     "contribution": {
//!         "id": "__want__:contribution_id",
//!         "amount": "__want__:gross_amount",
//!         "donor": {"email": "__want__:donor_email"}
//!     }
//! });
//!
//! let mapping = map_placeholders(&control, &annotated, &SentinelPrefix::default());
//! assert_eq!(mapping.len(), 3);
//! assert_eq!(
//!     mapping.get("__want__:donor_email"),
//!     Some(&path!("contribution", "donor", "email"))
//! );
//! ```
//!
//! Shape differences between the documents are never errors. Errors are
//! reserved for contract violations (an empty prefix), unreadable input, and
//! accessor misses at call time.

mod codegen;
mod config;
mod diff;
mod error;
mod extract;
mod load;
mod mapper;
mod path;
mod resolve;

pub use codegen::generate_python;
pub use config::{DuplicatePolicy, MapperConfig, DEFAULT_ACCESSOR_PREFIX};
pub use diff::{diff, ChangeKind, ChangeRecord, Diff};
pub use error::{value_type_name, AriadneError, AriadneResult};
pub use extract::{
    extract, map_placeholders, DuplicateTag, Mapping, SentinelPrefix, DEFAULT_SENTINEL_PREFIX,
};
pub use load::load_document;
pub use mapper::Mapper;
pub use path::{Path, Seg};
pub use resolve::{resolve, Accessor};

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
