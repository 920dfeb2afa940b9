//! Per-attribute view of a state-to-plan diff.

use std::collections::HashSet;

use atlas_json_patch::Operation;
use atlas_json_pointer::{format_json_pointer, get, parent, top_level_key, Path};
use indexmap::IndexMap;
use serde_json::Value;

use crate::options::{PatchOptions, StateFilter};

/// Operations of an invertible state-to-plan diff, bucketed by the top-level
/// attribute they touch.
///
/// Buckets keep first-seen order and every bucket keeps the diff's operation
/// order, which pairs each `remove` with the `test` emitted right before it.
#[derive(Debug, Default)]
pub struct AttributeOperations {
    data: IndexMap<String, Vec<Operation>>,
    /// Removals of whole list entries. The plan dropped these on purpose.
    entry_removals: HashSet<Path>,
    filter: StateFilter,
}

impl AttributeOperations {
    /// Bucket `ops`, the invertible diff from `state` to the plan.
    pub fn new(state: &Value, ops: Vec<Operation>, options: &PatchOptions) -> Self {
        let mut data: IndexMap<String, Vec<Operation>> = IndexMap::new();
        let mut entry_removals = HashSet::new();
        for op in ops {
            let Some(attr) = top_level_key(op.path()) else {
                tracing::debug!(op = %op, "skipping operation on document root");
                continue;
            };
            if let Operation::Remove { path } = &op {
                if removes_list_entry(state, path) {
                    entry_removals.insert(path.clone());
                }
            }
            data.entry(attr.to_string()).or_default().push(op);
        }
        Self { data, entry_removals, filter: options.state_filter() }
    }

    /// Operations touching `attr`, in diff order.
    pub fn get(&self, attr: &str) -> &[Operation] {
        self.data.get(attr).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every attribute with at least one operation.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Attributes whose plan value must be sent.
    ///
    /// An `add` or `replace` counts, and so does dropping a whole list entry.
    /// A bucket holding nothing but removals of object fields means the plan
    /// left out values it does not manage (computed fields, unset optionals)
    /// and is left out.
    pub fn changed_attributes(&self) -> Vec<String> {
        self.data
            .iter()
            .filter(|(_, ops)| ops.iter().any(|op| op.is_write() || self.is_entry_removal(op)))
            .map(|(attr, _)| attr.clone())
            .collect()
    }

    /// Patch that restores the state values removed under `attr`.
    ///
    /// Every `remove` of an object field becomes an `add` of the value held by
    /// the most recent `test` before it, unless the options exclude that path.
    /// Removed list entries stay removed.
    pub fn state_patch(&self, attr: &str) -> Vec<Operation> {
        let mut last_value: Option<&Value> = None;
        let mut patch = Vec::new();
        for op in self.get(attr) {
            match op {
                Operation::Test { value, .. } => last_value = Some(value),
                Operation::Remove { path } => {
                    if self.entry_removals.contains(path) {
                        tracing::trace!(path = %format_json_pointer(path), "list entry removed by plan");
                        continue;
                    }
                    if self.filter.ignores(path) {
                        tracing::trace!(path = %format_json_pointer(path), "state value ignored");
                        continue;
                    }
                    match last_value {
                        Some(value) => patch.push(Operation::Add { path: path.clone(), value: value.clone() }),
                        None => tracing::debug!(
                            path = %format_json_pointer(path),
                            "remove without a preceding test, state value is lost"
                        ),
                    }
                }
                _ => {}
            }
        }
        patch
    }

    fn is_entry_removal(&self, op: &Operation) -> bool {
        matches!(op, Operation::Remove { path } if self.entry_removals.contains(path))
    }
}

fn removes_list_entry(state: &Value, path: &[String]) -> bool {
    parent(path).ok().and_then(|p| get(state, &p)).is_some_and(Value::is_array)
}
