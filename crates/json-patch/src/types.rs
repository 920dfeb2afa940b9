//! Core types for the JSON Patch module.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use atlas_json_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    #[error("NOT_FOUND: {0}")]
    NotFound(String),
    #[error("TEST: value at {0} does not match")]
    Test(String),
    #[error("INVALID_INDEX: {0}")]
    InvalidIndex(String),
    #[error("INVALID_TARGET: {0}")]
    InvalidTarget(String),
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}

// ── Operation ─────────────────────────────────────────────────────────────

/// The six RFC 6902 operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Add => "add",
            OperationType::Remove => "remove",
            OperationType::Replace => "replace",
            OperationType::Move => "move",
            OperationType::Copy => "copy",
            OperationType::Test => "test",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON Patch operation.
///
/// Serializes to the RFC 6902 wire form, paths as pointer strings:
/// `{"op":"add","path":"/a/0","value":1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    Add {
        #[serde(with = "pointer")]
        path: Path,
        value: Value,
    },
    Remove {
        #[serde(with = "pointer")]
        path: Path,
    },
    Replace {
        #[serde(with = "pointer")]
        path: Path,
        value: Value,
    },
    Move {
        #[serde(with = "pointer")]
        from: Path,
        #[serde(with = "pointer")]
        path: Path,
    },
    Copy {
        #[serde(with = "pointer")]
        from: Path,
        #[serde(with = "pointer")]
        path: Path,
    },
    Test {
        #[serde(with = "pointer")]
        path: Path,
        value: Value,
    },
}

impl Operation {
    pub fn kind(&self) -> OperationType {
        match self {
            Operation::Add { .. } => OperationType::Add,
            Operation::Remove { .. } => OperationType::Remove,
            Operation::Replace { .. } => OperationType::Replace,
            Operation::Move { .. } => OperationType::Move,
            Operation::Copy { .. } => OperationType::Copy,
            Operation::Test { .. } => OperationType::Test,
        }
    }

    /// The target path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Operation::Add { path, .. }
            | Operation::Remove { path }
            | Operation::Replace { path, .. }
            | Operation::Move { path, .. }
            | Operation::Copy { path, .. }
            | Operation::Test { path, .. } => path,
        }
    }

    /// The carried value for `add`, `replace` and `test`.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Operation::Add { value, .. }
            | Operation::Replace { value, .. }
            | Operation::Test { value, .. } => Some(value),
            Operation::Remove { .. } | Operation::Move { .. } | Operation::Copy { .. } => None,
        }
    }

    /// Whether the operation writes a value (`add` or `replace`).
    pub fn is_write(&self) -> bool {
        matches!(self, Operation::Add { .. } | Operation::Replace { .. })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{} {}", self.kind(), atlas_json_pointer::format_json_pointer(self.path())),
        }
    }
}

/// Serde adapter between `Path` and its pointer string.
mod pointer {
    use atlas_json_pointer::{format_json_pointer, parse_json_pointer, validate_json_pointer, Path};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_json_pointer(path))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Path, D::Error> {
        let pointer = String::deserialize(deserializer)?;
        validate_json_pointer(&pointer).map_err(D::Error::custom)?;
        Ok(parse_json_pointer(&pointer))
    }
}
