//! Builders for cluster specs used across test suites.

use nodeconf::model::{
    InternalListener, ListenerType, NodeConfig, NodeSpec, ReadOnlyConfig, StorageConfig,
};
use nodeconf::{ClusterSpec, NodeId};

/// Incrementally builds a [`ClusterSpec`].
///
/// ```
/// use nodeconf_test_helpers::fixtures::ClusterFixture;
///
/// let cluster = ClusterFixture::new("demo")
///     .cluster_properties("custom.key=1")
///     .node(1)
///     .build();
/// assert_eq!(cluster.nodes.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ClusterFixture {
    cluster: ClusterSpec,
}

impl ClusterFixture {
    /// Start a cluster named `name` in namespace `default` with a single
    /// coordination-service address.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            cluster: ClusterSpec {
                name: name.to_owned(),
                namespace: "default".to_owned(),
                zk_address: "zk-0.zk:2181".to_owned(),
                ..ClusterSpec::default()
            },
        }
    }

    /// Enable or disable the headless service.
    #[must_use]
    pub const fn headless(mut self, enabled: bool) -> Self {
        self.cluster.headless_service_enabled = enabled;
        self
    }

    /// Add an internal listener.
    #[must_use]
    pub fn listener(mut self, listener_type: ListenerType, container_port: u16) -> Self {
        self.cluster.listeners.internal_listeners.push(InternalListener {
            name: listener_type.to_string(),
            listener_type,
            container_port,
        });
        self
    }

    /// Set cluster-wide node-properties overrides.
    #[must_use]
    pub fn cluster_properties(mut self, overrides: &str) -> Self {
        overrides.clone_into(&mut self.cluster.read_only_config.node_properties.override_configs);
        self
    }

    /// Set cluster-wide coordination-properties overrides.
    #[must_use]
    pub fn cluster_coordination(mut self, overrides: &str) -> Self {
        overrides.clone_into(
            &mut self
                .cluster
                .read_only_config
                .coordination_properties
                .override_configs,
        );
        self
    }

    /// Set the cluster-wide web proxy host.
    #[must_use]
    pub fn web_proxy_host(mut self, host: &str) -> Self {
        host.clone_into(&mut self.cluster.read_only_config.node_properties.web_proxy_host);
        self
    }

    /// Add a node without overrides.
    #[must_use]
    pub fn node(self, id: i32) -> Self {
        self.node_spec(NodeSpec {
            id: NodeId::new(id),
            ..NodeSpec::default()
        })
    }

    /// Add a node carrying its own read-only config.
    #[must_use]
    pub fn node_with_config(self, id: i32, config: ReadOnlyConfig) -> Self {
        self.node_spec(NodeSpec {
            id: NodeId::new(id),
            node_config: NodeConfig::default(),
            read_only_config: Some(config),
        })
    }

    /// Add a node with node-properties overrides.
    #[must_use]
    pub fn node_properties(self, id: i32, overrides: &str) -> Self {
        let mut config = ReadOnlyConfig::default();
        overrides.clone_into(&mut config.node_properties.override_configs);
        self.node_with_config(id, config)
    }

    /// Add a node with a provenance repository volume.
    #[must_use]
    pub fn node_with_provenance(self, id: i32, mount_path: &str, size: Option<&str>) -> Self {
        self.node_spec(NodeSpec {
            id: NodeId::new(id),
            node_config: NodeConfig {
                is_node: None,
                storage_configs: vec![StorageConfig {
                    name: "provenance-repository".to_owned(),
                    mount_path: mount_path.to_owned(),
                    size: size.map(str::to_owned),
                }],
            },
            read_only_config: None,
        })
    }

    /// Add a fully specified node.
    #[must_use]
    pub fn node_spec(mut self, node: NodeSpec) -> Self {
        self.cluster.nodes.push(node);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> ClusterSpec {
        self.cluster
    }
}
