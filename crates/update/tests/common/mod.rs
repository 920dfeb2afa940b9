#![allow(dead_code)]

//! Request types shaped like the cluster API: every field optional and
//! omitted when unset.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_specs: Option<Vec<ReplicationSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<ComponentLabel>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_configs: Option<Vec<CloudRegionConfig>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudRegionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electable_specs: Option<HardwareSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_specs: Option<HardwareSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<i32>,
    #[serde(rename = "diskSizeGB", skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<f64>,
    #[serde(rename = "diskIOPS", skip_serializing_if = "Option::is_none")]
    pub disk_iops: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_table_scan: Option<bool>,
}

/// A replication spec filled with placeholder values for `index`.
pub fn spec(index: usize) -> ReplicationSpec {
    ReplicationSpec {
        id: Some(format!("replicationSpec{index}_id")),
        zone_id: Some(format!("replicationSpec{index}_zoneId")),
        zone_name: Some(format!("replicationSpec{index}_zoneName")),
        region_configs: None,
    }
}

pub fn zone_only(zone_name: &str) -> ReplicationSpec {
    ReplicationSpec { zone_name: Some(zone_name.to_string()), ..Default::default() }
}

pub fn with_specs(specs: Vec<ReplicationSpec>) -> ClusterDescription {
    ClusterDescription { replication_specs: Some(specs), ..Default::default() }
}

/// One spec with one region config holding electable and read-only hardware.
pub fn disk_cluster(
    electable_disk_gb: f64,
    electable_nodes: i32,
    read_only_disk_gb: Option<f64>,
    read_only_nodes: i32,
    disk_iops: Option<i32>,
) -> ClusterDescription {
    with_specs(vec![ReplicationSpec {
        region_configs: Some(vec![CloudRegionConfig {
            electable_specs: Some(HardwareSpec {
                node_count: Some(electable_nodes),
                disk_size_gb: Some(electable_disk_gb),
                disk_iops,
            }),
            read_only_specs: Some(HardwareSpec {
                node_count: Some(read_only_nodes),
                disk_size_gb: read_only_disk_gb,
                disk_iops,
            }),
            ..Default::default()
        }]),
        ..Default::default()
    }])
}
