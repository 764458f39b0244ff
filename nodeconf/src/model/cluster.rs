//! Cluster-wide inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ListenersConfig, NodeId, NodeSpec};

/// Coordination-service namespace path used when none is configured.
pub const DEFAULT_ZK_PATH: &str = "/";

/// Authorizer selected when none is configured.
pub const DEFAULT_AUTHORIZER: &str = "managed-authorizer";

/// Description of a whole cluster.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterSpec {
    /// Cluster name, used in host names and output directory names.
    #[serde(deserialize_with = "super::text::lenient")]
    pub name: String,
    /// Namespace the cluster runs in.
    #[serde(deserialize_with = "super::text::lenient")]
    pub namespace: String,
    /// Coordination-service connection string.
    #[serde(deserialize_with = "super::text::lenient")]
    pub zk_address: String,
    /// Coordination-service namespace path.
    #[serde(deserialize_with = "super::text::lenient_optional")]
    pub zk_path: Option<String>,
    /// Whether node host names resolve through a headless service.
    pub headless_service_enabled: bool,
    /// Internal listener configuration.
    pub listeners: ListenersConfig,
    /// LDAP configuration for login identity.
    pub ldap: LdapConfiguration,
    /// Cluster-wide read-only configuration per domain.
    pub read_only_config: ReadOnlyConfig,
    /// Nodes and their per-node overrides.
    pub nodes: Vec<NodeSpec>,
}

impl ClusterSpec {
    /// Find the node with `id`. When ids repeat, the first match wins.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeSpec> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Node ids in declaration order, without repeats.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut seen = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.contains(&node.id) {
                seen.push(node.id);
            }
        }
        seen
    }

    /// Ids declared by more than one node, in ascending order.
    #[must_use]
    pub fn duplicate_node_ids(&self) -> Vec<NodeId> {
        let mut counts: BTreeMap<NodeId, usize> = BTreeMap::new();
        for node in &self.nodes {
            *counts.entry(node.id).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, _)| id)
            .collect()
    }

    /// Coordination-service path, falling back to [`DEFAULT_ZK_PATH`].
    #[must_use]
    pub fn zk_path(&self) -> &str {
        self.zk_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_ZK_PATH)
    }
}

/// Read-only configuration, one structured config per domain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOnlyConfig {
    /// Node-properties settings.
    pub node_properties: NodePropertiesConfig,
    /// Coordination-service properties settings.
    pub coordination_properties: CoordinationPropertiesConfig,
}

/// Structured settings feeding the node-properties document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodePropertiesConfig {
    /// Raw property text layered over the rendered document.
    #[serde(deserialize_with = "super::text::lenient")]
    pub override_configs: String,
    /// Whether site-to-site traffic is secured.
    pub site_to_site_secure: bool,
    /// Whether cluster protocol traffic is secured.
    pub cluster_secure: bool,
    /// Host name accepted by the web proxy check.
    #[serde(deserialize_with = "super::text::lenient")]
    pub web_proxy_host: String,
    /// Whether clients must present certificates.
    pub need_client_auth: bool,
    /// Authorizer identifier; empty selects [`DEFAULT_AUTHORIZER`].
    #[serde(deserialize_with = "super::text::lenient")]
    pub authorizer: String,
}

impl NodePropertiesConfig {
    /// Authorizer identifier, falling back to [`DEFAULT_AUTHORIZER`].
    #[must_use]
    pub fn authorizer(&self) -> &str {
        if self.authorizer.is_empty() {
            DEFAULT_AUTHORIZER
        } else {
            &self.authorizer
        }
    }
}

/// Structured settings feeding the coordination-service properties document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinationPropertiesConfig {
    /// Raw property text layered over the rendered document.
    #[serde(deserialize_with = "super::text::lenient")]
    pub override_configs: String,
}

/// LDAP login identity settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdapConfiguration {
    /// Whether LDAP login is enabled.
    pub enabled: bool,
    /// LDAP server URL.
    #[serde(deserialize_with = "super::text::lenient")]
    pub url: String,
    /// Base DN for user searches.
    #[serde(deserialize_with = "super::text::lenient")]
    pub search_base: String,
    /// Filter applied to user searches.
    #[serde(deserialize_with = "super::text::lenient")]
    pub search_filter: String,
}
