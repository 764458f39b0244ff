//! Render contexts for each templated domain.

use crate::RenderContext;
use crate::blocks::{listener_block, provenance_storage_block};
use crate::model::{ClusterSpec, NodeConfig, NodeId, NodePropertiesConfig};

/// Slots shared by the coordination-service documents.
///
/// `cluster-name` and `node-id` identify the target for override templates
/// even where the embedded ones ignore them.
pub(super) fn coordination(cluster: &ClusterSpec, node_id: NodeId) -> RenderContext {
    RenderContext::new()
        .with("cluster-name", cluster.name.as_str())
        .with("node-id", node_id.get())
        .with("zookeeper-connect-string", cluster.zk_address.as_str())
        .with("zookeeper-path", cluster.zk_path())
}

/// Slots for the node-properties template.
pub(super) fn node_properties(
    cluster: &ClusterSpec,
    node_id: NodeId,
    node_config: &NodeConfig,
    base: &NodePropertiesConfig,
) -> RenderContext {
    let listeners = listener_block(
        &cluster.listeners,
        node_id,
        &cluster.namespace,
        &cluster.name,
        cluster.headless_service_enabled,
    );
    coordination(cluster, node_id)
        .with("listener-config", listeners)
        .with(
            "provenance-storage",
            provenance_storage_block(&node_config.storage_configs),
        )
        .with("site-to-site-secure", base.site_to_site_secure)
        .with("cluster-secure", base.cluster_secure)
        .with("web-proxy-host", base.web_proxy_host.as_str())
        .with("need-client-auth", base.need_client_auth)
        .with("authorizer", base.authorizer())
        .with("ldap-enabled", cluster.ldap.enabled)
        .with("is-node", node_config.is_node())
}
