//! JSON Pointer (RFC 6901) utilities.
//!
//! Paths are kept in their parsed form, a `Vec<String>` of unescaped
//! segments. The root pointer `""` is the empty path and `"/a/0"` is
//! `["a", "0"]`.
//!
//! # Example
//!
//! ```
//! use atlas_json_pointer::{format_json_pointer, get, parse_json_pointer, top_level_key};
//!
//! let path = parse_json_pointer("/replicationSpecs/0/zoneName");
//! assert_eq!(top_level_key(&path), Some("replicationSpecs"));
//! assert_eq!(format_json_pointer(&path), "/replicationSpecs/0/zoneName");
//!
//! let doc = serde_json::json!({"replicationSpecs": [{"zoneName": "z1"}]});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!("z1")));
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod segments;
pub mod validate;

pub use segments::{contains_segments, ends_with_segments, is_index_segment, top_level_key};
pub use validate::validate_json_pointer;

/// A parsed JSON Pointer.
pub type Path = Vec<String>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("NO_PARENT")]
    NoParent,
    #[error("POINTER_INVALID: {0}")]
    PointerInvalid(String),
    #[error("POINTER_TOO_LONG")]
    PointerTooLong,
}

/// Unescapes a pointer component: `~1` becomes `/`, then `~0` becomes `~`.
///
/// ```
/// use atlas_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a pointer component: `~` becomes `~0`, then `/` becomes `~1`.
///
/// ```
/// use atlas_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a pointer string into unescaped segments.
///
/// The empty string is the root. Anything else is expected to start with
/// `/`; use [`validate_json_pointer`] first when the input is untrusted.
pub fn parse_json_pointer(pointer: &str) -> Path {
    match pointer.strip_prefix('/') {
        Some(rest) => rest.split('/').map(unescape_component).collect(),
        None if pointer.is_empty() => Vec::new(),
        None => pointer.split('/').map(unescape_component).collect(),
    }
}

/// Format segments back into a pointer string. The root path formats as `""`.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::with_capacity(path.iter().map(|s| s.len() + 1).sum());
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// True when `child` lies strictly below `parent`.
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child.starts_with(parent)
}

/// The path of the containing node.
pub fn parent(path: &[String]) -> Result<Path, JsonPointerError> {
    match path.split_last() {
        Some((_, rest)) => Ok(rest.to_vec()),
        None => Err(JsonPointerError::NoParent),
    }
}

/// Resolve `path` inside `val`. `-` never resolves because it names the
/// slot past the end of an array.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get(array_index(step)?)?,
            Value::Object(map) => map.get(step)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable counterpart of [`get`].
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get_mut(array_index(step)?)?,
            Value::Object(map) => map.get_mut(step)?,
            _ => return None,
        };
    }
    Some(current)
}

fn array_index(step: &str) -> Option<usize> {
    if is_index_segment(step) {
        step.parse().ok()
    } else {
        None
    }
}
