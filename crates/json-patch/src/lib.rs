//! JSON Patch (RFC 6902).
//!
//! The six standard operations (`add`, `remove`, `replace`, `move`, `copy`,
//! `test`), their JSON codec, an apply engine, and a structural differ that
//! can emit invertible patches.

pub mod apply;
pub mod codec;
pub mod diff;
pub mod types;

pub use apply::{apply_op, apply_patch};
pub use codec::{from_json, from_json_patch, to_json, to_json_patch};
pub use diff::{diff, diff_with, DiffOptions};
pub use types::{Operation, OperationType, Path, PatchError};
