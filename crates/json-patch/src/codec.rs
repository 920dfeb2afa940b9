//! JSON codec for whole patches.

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Operation, PatchError};

/// Encode a patch as an RFC 6902 JSON array.
pub fn to_json_patch(ops: &[Operation]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

/// Encode one operation.
pub fn to_json(op: &Operation) -> Value {
    // Operation only holds strings and JSON values, so this cannot fail.
    serde_json::to_value(op).unwrap_or(Value::Null)
}

/// Decode an RFC 6902 JSON array.
pub fn from_json_patch(patch: &Value) -> Result<Vec<Operation>, PatchError> {
    let ops = patch
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    ops.iter().map(from_json).collect()
}

/// Decode one operation.
pub fn from_json(op: &Value) -> Result<Operation, PatchError> {
    Operation::deserialize(op).map_err(|e| PatchError::InvalidOp(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_rfc_example() {
        let patch = json!([
            {"op": "test", "path": "/a/b/c", "value": "foo"},
            {"op": "remove", "path": "/a/b/c"},
            {"op": "add", "path": "/a/b/c", "value": ["foo", "bar"]},
            {"op": "replace", "path": "/a/b/c", "value": 42},
            {"op": "move", "from": "/a/b/c", "path": "/a/b/d"},
            {"op": "copy", "from": "/a/b/d", "path": "/a/b/e"}
        ]);
        let ops = from_json_patch(&patch).unwrap();
        let kinds: Vec<&str> = ops.iter().map(|op| op.kind().as_str()).collect();
        assert_eq!(kinds, ["test", "remove", "add", "replace", "move", "copy"]);
        assert_eq!(to_json_patch(&ops), patch);
    }

    #[test]
    fn rejects_unknown_op() {
        let err = from_json(&json!({"op": "flip", "path": "/a"})).unwrap_err();
        assert!(matches!(err, PatchError::InvalidOp(_)));
    }

    #[test]
    fn rejects_non_array_patch() {
        assert!(from_json_patch(&json!({"op": "add"})).is_err());
    }
}
