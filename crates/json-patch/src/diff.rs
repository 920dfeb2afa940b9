//! JSON Patch diff: generate a patch that turns one document into another.
//!
//! Objects are compared key by key and arrays index by index. Trailing
//! source elements are removed from the highest index down, so every path in
//! the output is valid at the moment its operation runs. Trailing destination
//! elements are added at their final index.
//!
//! In invertible mode each `remove` and `replace` is preceded by a `test`
//! holding the value about to be displaced, which is enough to rebuild the
//! source from the destination.

use serde_json::{Map, Value};

use crate::types::{Operation, Path};

#[derive(Debug, Clone, Copy, Default)]
pub struct DiffOptions {
    /// Emit a `test` with the prior value before every `remove` and `replace`.
    pub invertible: bool,
}

impl DiffOptions {
    pub fn invertible() -> Self {
        Self { invertible: true }
    }
}

// ── Public API ────────────────────────────────────────────────────────────

/// Generate a patch that transforms `src` into `dst`.
pub fn diff(src: &Value, dst: &Value) -> Vec<Operation> {
    diff_with(src, dst, DiffOptions::default())
}

/// [`diff`] with explicit options.
pub fn diff_with(src: &Value, dst: &Value, options: DiffOptions) -> Vec<Operation> {
    let mut differ = Differ { ops: Vec::new(), options };
    let mut path = Vec::new();
    differ.diff_at_path(&mut path, src, dst);
    differ.ops
}

// ── Core recursive differ ─────────────────────────────────────────────────

struct Differ {
    ops: Vec<Operation>,
    options: DiffOptions,
}

impl Differ {
    fn diff_at_path(&mut self, path: &mut Path, src: &Value, dst: &Value) {
        if src == dst {
            return;
        }
        match (src, dst) {
            (Value::Object(s), Value::Object(d)) => self.diff_obj(path, s, d),
            (Value::Array(s), Value::Array(d)) => self.diff_arr(path, s, d),
            _ => self.replace(path, src, dst),
        }
    }

    fn diff_obj(&mut self, path: &mut Path, src: &Map<String, Value>, dst: &Map<String, Value>) {
        for (key, src_val) in src {
            path.push(key.clone());
            match dst.get(key) {
                None => self.remove(path, src_val),
                Some(dst_val) => self.diff_at_path(path, src_val, dst_val),
            }
            path.pop();
        }
        for (key, dst_val) in dst {
            if !src.contains_key(key) {
                path.push(key.clone());
                self.add(path, dst_val);
                path.pop();
            }
        }
    }

    fn diff_arr(&mut self, path: &mut Path, src: &[Value], dst: &[Value]) {
        let common = src.len().min(dst.len());
        for i in (common..src.len()).rev() {
            path.push(i.to_string());
            self.remove(path, &src[i]);
            path.pop();
        }
        for i in 0..common {
            path.push(i.to_string());
            self.diff_at_path(path, &src[i], &dst[i]);
            path.pop();
        }
        for (i, dst_val) in dst.iter().enumerate().skip(common) {
            path.push(i.to_string());
            self.add(path, dst_val);
            path.pop();
        }
    }

    fn add(&mut self, path: &Path, value: &Value) {
        self.ops.push(Operation::Add { path: path.clone(), value: value.clone() });
    }

    fn remove(&mut self, path: &Path, old: &Value) {
        self.test(path, old);
        self.ops.push(Operation::Remove { path: path.clone() });
    }

    fn replace(&mut self, path: &Path, old: &Value, value: &Value) {
        self.test(path, old);
        self.ops.push(Operation::Replace { path: path.clone(), value: value.clone() });
    }

    fn test(&mut self, path: &Path, old: &Value) {
        if self.options.invertible {
            self.ops.push(Operation::Test { path: path.clone(), value: old.clone() });
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
