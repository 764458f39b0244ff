//! Per-node inputs.

use serde::{Deserialize, Serialize};

use super::{NodeId, ReadOnlyConfig};

/// Storage name whose mount hosts the provenance repository.
pub const PROVENANCE_STORAGE: &str = "provenance-repository";

/// One node of the cluster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    /// Node identifier.
    pub id: NodeId,
    /// Topology and storage settings for the node.
    pub node_config: NodeConfig,
    /// Node-specific read-only overrides, if any.
    pub read_only_config: Option<ReadOnlyConfig>,
}

/// Topology and storage settings for a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Whether the node takes part in coordination; defaults to `true`.
    pub is_node: Option<bool>,
    /// Volumes mounted into the node.
    pub storage_configs: Vec<StorageConfig>,
}

impl NodeConfig {
    /// Whether the node is coordination-capable rather than follower-only.
    #[must_use]
    pub fn is_node(&self) -> bool {
        self.is_node.unwrap_or(true)
    }
}

/// A named volume mounted into a node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage name.
    #[serde(deserialize_with = "super::text::lenient")]
    pub name: String,
    /// Mount path inside the node.
    #[serde(deserialize_with = "super::text::lenient")]
    pub mount_path: String,
    /// Requested size, for example `10Gi`.
    #[serde(deserialize_with = "super::text::lenient_optional")]
    pub size: Option<String>,
}
