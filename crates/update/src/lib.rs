//! Partial update payloads for PATCH-style APIs.
//!
//! Given the request built from the previously applied state and the one
//! built from the desired plan, [`compute_patch`] returns a request holding
//! only the attributes the plan changes. Values the plan omits but the state
//! holds (server-computed ids, list entries) are carried into every changed
//! attribute, since the API replaces nested objects and lists wholesale.
//!
//! ```
//! use atlas_update::{compute_patch_with, PatchOptions, PatchPayload};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Spec {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     id: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     zone_name: Option<String>,
//! }
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Cluster {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     replication_specs: Option<Vec<Spec>>,
//! }
//!
//! let spec = |id: Option<&str>, zone: &str| Spec { id: id.map(Into::into), zone_name: Some(zone.into()) };
//! let state = Cluster { replication_specs: Some(vec![spec(Some("r1"), "old")]) };
//! let plan = Cluster { replication_specs: Some(vec![spec(None, "new")]) };
//!
//! let patch = compute_patch_with(&state, Some(&plan), &PatchOptions::default()).unwrap();
//! assert_eq!(
//!     patch,
//!     PatchPayload::Changes(Cluster { replication_specs: Some(vec![spec(Some("r1"), "new")]) })
//! );
//! ```

mod attr_ops;
mod error;
mod options;
mod payload;

pub use attr_ops::AttributeOperations;
pub use error::UpdateError;
pub use options::PatchOptions;
pub use payload::{compute_patch, compute_patch_value, compute_patch_with, is_zero_values, PatchPayload};
