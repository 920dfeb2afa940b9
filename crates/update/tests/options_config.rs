mod common;

use atlas_update::{compute_patch_with, PatchOptions};
use common::*;

#[test]
fn options_load_from_toml() {
    let options: PatchOptions = toml::from_str(
        r#"
        ignoreInStatePrefix = ["regionConfigs"]
        includeInStateSuffix = ["diskIOPS"]
        forceUpdateAttr = ["replicationSpecs"]
        "#,
    )
    .unwrap();
    assert_eq!(
        options,
        PatchOptions::default()
            .ignore_in_state_prefix("regionConfigs")
            .include_in_state_suffix("diskIOPS")
            .force_update("replicationSpecs")
    );
}

#[test]
fn options_load_from_json() {
    let options: PatchOptions =
        serde_json::from_str(r#"{"ignoreInStateSuffix": ["diskSizeGB"]}"#).unwrap();
    assert_eq!(options.ignore_in_state_suffix, ["diskSizeGB"]);
    assert!(options.force_update_attr.is_empty());
}

#[test]
fn missing_keys_default_to_empty() {
    let options: PatchOptions = toml::from_str("").unwrap();
    assert!(options.is_empty());
}

#[test]
fn unknown_keys_are_ignored() {
    let options: PatchOptions = serde_json::from_str(r#"{"ignoreInStateSuffix": [], "retries": 3}"#).unwrap();
    assert!(options.is_empty());
}

#[test]
fn options_serialize_in_camel_case() {
    let json = serde_json::to_value(PatchOptions::default().force_update("labels")).unwrap();
    assert_eq!(json["forceUpdateAttr"], serde_json::json!(["labels"]));
    assert_eq!(json["ignoreInStatePrefix"], serde_json::json!([]));
}

#[test]
fn merged_options_drive_the_patch() {
    let per_resource: PatchOptions = toml::from_str(r#"ignoreInStateSuffix = ["diskSizeGB"]"#).unwrap();
    let per_call = PatchOptions::default().force_update("name");
    let options = PatchOptions::merge([&per_resource, &per_call]);

    let mut state = disk_cluster(50.0, 3, Some(50.0), 0, Some(3500));
    state.name = Some("my-cluster".into());
    let mut plan = disk_cluster(55.0, 3, None, 0, None);
    plan.name = Some("my-cluster".into());

    let patch = compute_patch_with(&state, Some(&plan), &options).unwrap().into_option();
    let mut expected = disk_cluster(55.0, 3, None, 0, Some(3500));
    expected.name = Some("my-cluster".into());
    assert_eq!(patch, Some(expected));
}
