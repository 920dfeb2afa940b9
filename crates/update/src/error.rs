use atlas_json_patch::PatchError;
use thiserror::Error;

/// Failure while computing a partial update payload.
///
/// None of these are transient: each one points at a request type that does
/// not round-trip through JSON the way the caller expects.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("failed to serialize {type_name}: {source}")]
    Serialization {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{type_name} must serialize to a JSON object, got {found}")]
    NotAnObject {
        type_name: &'static str,
        found: &'static str,
    },
    #[error("failed to apply patch for attribute `{attribute}` of {type_name}: {source}")]
    PatchApply {
        type_name: &'static str,
        attribute: String,
        #[source]
        source: PatchError,
    },
    #[error("failed to deserialize patch payload into {type_name}: {source}")]
    Deserialization {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl UpdateError {
    /// The request type the error refers to.
    pub fn type_name(&self) -> &'static str {
        match self {
            UpdateError::Serialization { type_name, .. }
            | UpdateError::NotAnObject { type_name, .. }
            | UpdateError::PatchApply { type_name, .. }
            | UpdateError::Deserialization { type_name, .. } => type_name,
        }
    }
}
