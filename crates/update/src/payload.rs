//! Minimal PATCH payloads from a state/plan pair.
//!
//! The computation runs in four steps over JSON snapshots of the request
//! types:
//!
//! 1. An invertible diff from state to plan, bucketed per top-level
//!    attribute ([`AttributeOperations`]).
//! 2. The attributes with an `add`, a `replace` or a dropped list entry,
//!    plus any forced ones.
//! 3. For each of them, the plan's value (a diff from the empty request,
//!    filtered to the attribute) followed by the state fields the plan
//!    left out. List entries the plan dropped stay dropped. The order is
//!    fixed: the API replaces lists wholesale, so the desired shape goes in
//!    first and the recovered fields land on top of it.
//! 4. An empty document means no changes; anything else is deserialized into
//!    the request type.

use atlas_json_patch::{apply_op, diff, diff_with, DiffOptions, Operation};
use atlas_json_pointer::top_level_key;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::attr_ops::AttributeOperations;
use crate::error::UpdateError;
use crate::options::PatchOptions;

const VALUE_TYPE: &str = "serde_json::Value";

/// Outcome of a patch computation.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchPayload<T> {
    /// Nothing the caller manages differs; skip the update call.
    NoChanges,
    /// Send this request. Only the changed attributes are set.
    Changes(T),
}

impl<T> PatchPayload<T> {
    pub fn is_no_changes(&self) -> bool {
        matches!(self, PatchPayload::NoChanges)
    }

    pub fn changes(&self) -> Option<&T> {
        match self {
            PatchPayload::NoChanges => None,
            PatchPayload::Changes(patch) => Some(patch),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            PatchPayload::NoChanges => None,
            PatchPayload::Changes(patch) => Some(patch),
        }
    }
}

/// Compute the partial update that takes `state` to `plan`.
///
/// ```
/// use atlas_update::{compute_patch, PatchPayload};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
/// struct Cluster {
///     #[serde(skip_serializing_if = "Option::is_none")]
///     id: Option<String>,
///     #[serde(skip_serializing_if = "Option::is_none")]
///     name: Option<String>,
/// }
///
/// let state = Cluster { id: Some("c1".into()), name: Some("old".into()) };
/// let plan = Cluster { id: None, name: Some("new".into()) };
/// let patch = compute_patch(&state, &plan).unwrap();
/// assert_eq!(patch, PatchPayload::Changes(Cluster { id: None, name: Some("new".into()) }));
/// assert!(compute_patch(&state, &state).unwrap().is_no_changes());
/// ```
pub fn compute_patch<S, T>(state: &S, plan: &T) -> Result<PatchPayload<T>, UpdateError>
where
    S: Serialize + ?Sized,
    T: Serialize + DeserializeOwned + Default,
{
    compute_patch_with(state, Some(plan), &PatchOptions::default())
}

/// [`compute_patch`] with options. A missing plan yields
/// [`PatchPayload::NoChanges`].
///
/// The destination type must deserialize from a partial object, which holds
/// for the usual request shape of optional fields with
/// `skip_serializing_if = "Option::is_none"` or a container-level
/// `#[serde(default)]`.
pub fn compute_patch_with<S, T>(
    state: &S,
    plan: Option<&T>,
    options: &PatchOptions,
) -> Result<PatchPayload<T>, UpdateError>
where
    S: Serialize + ?Sized,
    T: Serialize + DeserializeOwned + Default,
{
    let type_name = std::any::type_name::<T>();
    let span = tracing::debug_span!("compute_patch", request = type_name);
    let _enter = span.enter();

    let Some(plan) = plan else {
        tracing::debug!("no plan, nothing to update");
        return Ok(PatchPayload::NoChanges);
    };
    let state = to_object(state, std::any::type_name::<S>())?;
    let plan = to_object(plan, type_name)?;
    let empty = to_object(&T::default(), type_name)?;

    let payload = synthesize(type_name, &state, &plan, &empty, options)?;
    materialize(type_name, payload)
}

/// Untyped variant working on JSON objects directly.
///
/// `empty` is the serialized empty request; pass `{}` when every field is
/// optional. Returns `None` when there are no changes.
pub fn compute_patch_value(
    state: &Value,
    plan: &Value,
    empty: &Value,
    options: &PatchOptions,
) -> Result<Option<Value>, UpdateError> {
    for doc in [state, plan, empty] {
        ensure_object(doc, VALUE_TYPE)?;
    }
    let payload = synthesize(VALUE_TYPE, state, plan, empty, options)?;
    Ok(if is_empty_object(&payload) { None } else { Some(payload) })
}

/// True when `value` serializes to `{}` or `null`.
///
/// Use this rather than comparing against `Default` when a field may hold an
/// empty but present value that serialization drops.
pub fn is_zero_values<T: Serialize + ?Sized>(value: &T) -> Result<bool, UpdateError> {
    let json = serde_json::to_value(value).map_err(|source| UpdateError::Serialization {
        type_name: std::any::type_name::<T>(),
        source,
    })?;
    Ok(json.is_null() || is_empty_object(&json))
}

// ── Synthesizer ───────────────────────────────────────────────────────────

fn synthesize(
    type_name: &'static str,
    state: &Value,
    plan: &Value,
    empty: &Value,
    options: &PatchOptions,
) -> Result<Value, UpdateError> {
    let attr_ops = AttributeOperations::new(state, diff_with(state, plan, DiffOptions::invertible()), options);

    let mut changed = attr_ops.changed_attributes();
    for attr in &options.force_update_attr {
        if !changed.contains(attr) {
            changed.push(attr.clone());
        }
    }
    tracing::debug!(changed = ?changed, "changed attributes");

    let mut payload = Value::Object(Map::new());
    if changed.is_empty() {
        return Ok(payload);
    }

    let plan_ops = diff(empty, plan);
    for attr in &changed {
        let attr_patch: Vec<Operation> = plan_ops
            .iter()
            .filter(|op| top_level_key(op.path()) == Some(attr.as_str()))
            .cloned()
            .collect();
        // Adds below a non-optional field need its parent in place.
        if let (Some(seed), Value::Object(doc)) = (empty.get(attr), &mut payload) {
            doc.entry(attr.clone()).or_insert_with(|| seed.clone());
        }
        apply_attr_patch(type_name, attr, &mut payload, &attr_patch)?;
        apply_attr_patch(type_name, attr, &mut payload, &attr_ops.state_patch(attr))?;
    }
    Ok(payload)
}

fn apply_attr_patch(
    type_name: &'static str,
    attr: &str,
    payload: &mut Value,
    ops: &[Operation],
) -> Result<(), UpdateError> {
    for op in ops {
        tracing::trace!(attribute = attr, op = %op, "applying");
        apply_op(payload, op).map_err(|source| UpdateError::PatchApply {
            type_name,
            attribute: attr.to_string(),
            source,
        })?;
    }
    Ok(())
}

// ── Materializer ──────────────────────────────────────────────────────────

fn materialize<T: DeserializeOwned>(type_name: &'static str, payload: Value) -> Result<PatchPayload<T>, UpdateError> {
    if is_empty_object(&payload) {
        tracing::debug!("no changes");
        return Ok(PatchPayload::NoChanges);
    }
    tracing::debug!(payload = %payload, "patch payload");
    serde_json::from_value(payload)
        .map(PatchPayload::Changes)
        .map_err(|source| UpdateError::Deserialization { type_name, source })
}

// ── Helpers ───────────────────────────────────────────────────────────────

fn to_object<V: Serialize + ?Sized>(value: &V, type_name: &'static str) -> Result<Value, UpdateError> {
    let json = serde_json::to_value(value).map_err(|source| UpdateError::Serialization { type_name, source })?;
    ensure_object(&json, type_name)?;
    Ok(json)
}

fn ensure_object(value: &Value, type_name: &'static str) -> Result<(), UpdateError> {
    let found = match value {
        Value::Object(_) => return Ok(()),
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
    };
    Err(UpdateError::NotAnObject { type_name, found })
}

fn is_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(Map::is_empty)
}
