//! Knobs that adjust which attributes are sent and which state values are
//! carried into the payload.

use atlas_json_pointer::{contains_segments, ends_with_segments, parse_json_pointer, Path};
use serde::{Deserialize, Serialize};

/// Options for [`compute_patch_with`](crate::compute_patch_with).
///
/// Rules are written as slash-separated attribute paths without array
/// indices, e.g. `"diskSizeGB"` or `"readOnlySpecs/diskSizeGB"`.
///
/// ```
/// use atlas_update::PatchOptions;
///
/// let options = PatchOptions::default()
///     .ignore_in_state_prefix("regionConfigs")
///     .include_in_state_suffix("diskIOPS");
/// assert!(!options.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatchOptions {
    /// State values removed at a path ending with one of these are not carried over.
    pub ignore_in_state_suffix: Vec<String>,
    /// State values removed anywhere below one of these are not carried over.
    pub ignore_in_state_prefix: Vec<String>,
    /// Always carry over state values ending with one of these, overriding both ignore lists.
    pub include_in_state_suffix: Vec<String>,
    /// Top-level attributes sent even when the plan does not change them.
    pub force_update_attr: Vec<String>,
}

impl PatchOptions {
    pub fn ignore_in_state_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.ignore_in_state_suffix.push(suffix.into());
        self
    }

    pub fn ignore_in_state_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ignore_in_state_prefix.push(prefix.into());
        self
    }

    pub fn include_in_state_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.include_in_state_suffix.push(suffix.into());
        self
    }

    pub fn force_update(mut self, attr: impl Into<String>) -> Self {
        self.force_update_attr.push(attr.into());
        self
    }

    /// Fold several option sets into one.
    pub fn merge<'a>(options: impl IntoIterator<Item = &'a PatchOptions>) -> PatchOptions {
        let mut merged = PatchOptions::default();
        for o in options {
            merged.ignore_in_state_suffix.extend(o.ignore_in_state_suffix.iter().cloned());
            merged.ignore_in_state_prefix.extend(o.ignore_in_state_prefix.iter().cloned());
            merged.include_in_state_suffix.extend(o.include_in_state_suffix.iter().cloned());
            merged.force_update_attr.extend(o.force_update_attr.iter().cloned());
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        self == &PatchOptions::default()
    }

    pub(crate) fn state_filter(&self) -> StateFilter {
        let parse = |rules: &[String]| -> Vec<Path> { rules.iter().map(|r| parse_json_pointer(r)).collect() };
        StateFilter {
            ignore_suffix: parse(&self.ignore_in_state_suffix),
            ignore_prefix: parse(&self.ignore_in_state_prefix),
            include_suffix: parse(&self.include_in_state_suffix),
        }
    }
}

/// Parsed form of the state carry-over rules.
#[derive(Debug, Default)]
pub(crate) struct StateFilter {
    ignore_suffix: Vec<Path>,
    ignore_prefix: Vec<Path>,
    include_suffix: Vec<Path>,
}

impl StateFilter {
    /// Whether a state value removed at `path` must stay out of the payload.
    pub(crate) fn ignores(&self, path: &[String]) -> bool {
        if self.include_suffix.iter().any(|s| ends_with_segments(path, s)) {
            return false;
        }
        self.ignore_suffix.iter().any(|s| ends_with_segments(path, s))
            || self.ignore_prefix.iter().any(|p| contains_segments(path, p))
    }
}
