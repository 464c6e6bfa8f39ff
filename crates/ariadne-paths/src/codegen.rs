//! Python accessor generation.
//!
//! Renders a self-contained Python module with one function per mapping entry.
//! Each function walks its path in the object it is given and raises
//! `JSONPathNotFoundError` (a `KeyError`) when a segment is missing.

use crate::path::is_identifier;
use crate::{AriadneError, AriadneResult, Mapping, Path, Seg, SentinelPrefix};

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

const HEADER: &str = r#"from typing import Any, Dict, List, Union

class JSONPathNotFoundError(KeyError):
    """Raised when a path is not found in the data."""
    pass

def _get_data(data: Union[Dict, List], path: tuple, friendly_name: str) -> Any:
    """Walk `path` in `data`, raising JSONPathNotFoundError on the first missing segment."""
    for key in path:
        try:
            data = data[key]
        except (KeyError, IndexError, TypeError):
            raise JSONPathNotFoundError(
                f"Could not find '{friendly_name}'. The path {path} was not found in the object."
            )
    return data
"#;

/// Render the Python accessor module for `mapping`.
///
/// Functions are named `accessor_prefix` + the tag without `prefix` and come
/// out in tag order. Fails with [`AriadneError::InvalidAccessorName`] when a
/// function name would not be a Python identifier.
pub fn generate_python(
    mapping: &Mapping,
    prefix: &SentinelPrefix,
    accessor_prefix: &str,
) -> AriadneResult<String> {
    let mut out = String::from(HEADER);

    for (tag, path) in mapping.iter() {
        let name = prefix.strip(tag).unwrap_or(tag);
        let func_name = format!("{accessor_prefix}{name}");
        if !is_python_identifier(&func_name) {
            return Err(AriadneError::invalid_accessor_name(tag, func_name));
        }

        let subscripts = python_subscripts(path, "obj");
        let docstring = format!("Gets data for {} from path: {subscripts}", python_str(name))
            .replace('\\', "\\\\")
            .replace('"', "\\\"");

        out.push_str(&format!(
            "\ndef {func_name}(obj: Union[Dict, List]) -> Any:\n    \"\"\"{docstring}\"\"\"\n"
        ));
        out.push_str(&format!("    # JSONPath equivalent: {path}\n"));
        out.push_str(&format!(
            "    return _get_data(obj, {}, {})\n",
            python_tuple(path),
            python_str(name)
        ));
    }

    tracing::debug!(functions = mapping.len(), "generated python accessors");
    Ok(out)
}

fn is_python_identifier(name: &str) -> bool {
    is_identifier(name) && !PYTHON_KEYWORDS.contains(&name)
}

/// A Python string literal for `s`, quoted the way `repr` quotes it.
fn python_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn python_seg(seg: &Seg) -> String {
    match seg {
        Seg::Key(key) => python_str(key),
        Seg::Index(idx) => idx.to_string(),
    }
}

/// A Python tuple literal of the path's segments.
fn python_tuple(path: &Path) -> String {
    let items: Vec<String> = path.iter().map(python_seg).collect();
    match items.as_slice() {
        [] => "()".to_owned(),
        [single] => format!("({single},)"),
        _ => format!("({})", items.join(", ")),
    }
}

/// The subscript chain that reads `path` from the variable `root`.
fn python_subscripts(path: &Path, root: &str) -> String {
    let mut expr = root.to_owned();
    for seg in path {
        expr.push_str(&format!("[{}]", python_seg(seg)));
    }
    expr
}
