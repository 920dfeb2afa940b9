//! JSON Patch apply logic.

use atlas_json_pointer::{format_json_pointer, get, get_mut, is_child, is_index_segment};
use serde_json::Value;

use crate::types::{Operation, PatchError};

// ── Path navigation ───────────────────────────────────────────────────────

fn not_found(path: &[String]) -> PatchError {
    PatchError::NotFound(format_json_pointer(path))
}

/// Split `path` into its container and last step, resolving the container.
fn parent_mut<'a>(doc: &'a mut Value, path: &'a [String]) -> Result<(&'a mut Value, &'a str), PatchError> {
    let (key, parent_path) = path
        .split_last()
        .ok_or_else(|| PatchError::InvalidTarget("root".to_string()))?;
    let parent = get_mut(doc, parent_path).ok_or_else(|| not_found(parent_path))?;
    Ok((parent, key.as_str()))
}

fn index(key: &str, path: &[String]) -> Result<usize, PatchError> {
    if !is_index_segment(key) {
        return Err(PatchError::InvalidIndex(format_json_pointer(path)));
    }
    key.parse()
        .map_err(|_| PatchError::InvalidIndex(format_json_pointer(path)))
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, PatchError> {
    if path.is_empty() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let (parent, key) = parent_mut(doc, path)?;
    match parent {
        Value::Object(map) => Ok(map.insert(key.to_string(), value)),
        Value::Array(arr) => {
            if key == "-" {
                arr.push(value);
                return Ok(None);
            }
            let idx = index(key, path)?;
            if idx > arr.len() {
                return Err(PatchError::InvalidIndex(format_json_pointer(path)));
            }
            arr.insert(idx, value);
            Ok(None)
        }
        _ => Err(PatchError::InvalidTarget(format_json_pointer(path))),
    }
}

fn apply_remove(doc: &mut Value, path: &[String]) -> Result<Value, PatchError> {
    let (parent, key) = parent_mut(doc, path)?;
    match parent {
        Value::Object(map) => map.shift_remove(key).ok_or_else(|| not_found(path)),
        Value::Array(arr) => {
            let idx = index(key, path)?;
            if idx >= arr.len() {
                return Err(not_found(path));
            }
            Ok(arr.remove(idx))
        }
        _ => Err(PatchError::InvalidTarget(format_json_pointer(path))),
    }
}

fn apply_replace(doc: &mut Value, path: &[String], value: Value) -> Result<Value, PatchError> {
    let target = get_mut(doc, path).ok_or_else(|| not_found(path))?;
    Ok(std::mem::replace(target, value))
}

fn apply_copy(doc: &mut Value, path: &[String], from: &[String]) -> Result<Option<Value>, PatchError> {
    let value = get(doc, from).ok_or_else(|| not_found(from))?.clone();
    apply_add(doc, path, value)
}

fn apply_move(doc: &mut Value, path: &[String], from: &[String]) -> Result<Option<Value>, PatchError> {
    if path == from {
        return Ok(None);
    }
    if is_child(from, path) {
        return Err(PatchError::InvalidTarget(format_json_pointer(path)));
    }
    let value = apply_remove(doc, from)?;
    apply_add(doc, path, value)
}

fn apply_test(doc: &Value, path: &[String], value: &Value) -> Result<(), PatchError> {
    let actual = get(doc, path).ok_or_else(|| not_found(path))?;
    if actual == value {
        Ok(())
    } else {
        Err(PatchError::Test(format_json_pointer(path)))
    }
}

// ── Public API ────────────────────────────────────────────────────────────

/// Apply a single operation in place, returning the value it displaced.
pub fn apply_op(doc: &mut Value, op: &Operation) -> Result<Option<Value>, PatchError> {
    match op {
        Operation::Add { path, value } => apply_add(doc, path, value.clone()),
        Operation::Remove { path } => apply_remove(doc, path).map(Some),
        Operation::Replace { path, value } => apply_replace(doc, path, value.clone()).map(Some),
        Operation::Copy { path, from } => apply_copy(doc, path, from),
        Operation::Move { path, from } => apply_move(doc, path, from),
        Operation::Test { path, value } => apply_test(doc, path, value).map(|_| None),
    }
}

/// Apply operations in order. Stops at the first failing operation.
pub fn apply_patch(mut doc: Value, ops: &[Operation]) -> Result<Value, PatchError> {
    for op in ops {
        apply_op(&mut doc, op)?;
    }
    Ok(doc)
}

// ── Tests ─────────────────────────────────────────────────────────────────
