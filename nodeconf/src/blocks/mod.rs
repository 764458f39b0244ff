//! Generators for property fragments embedded into rendered documents.
//!
//! Each generator produces `key=value` lines joined by `\n` that the
//! node-properties template splices in through a single slot. An empty
//! string means the fragment contributes nothing.

use crate::model::{
    InternalListener, ListenerType, ListenersConfig, NodeId, PROVENANCE_STORAGE, StorageConfig,
};

/// Property keys for one listener role: host key, then port key.
fn listener_keys(listener_type: &ListenerType) -> Option<(&'static str, &'static str)> {
    match listener_type {
        ListenerType::Http => Some(("nifi.web.http.host", "nifi.web.http.port")),
        ListenerType::Https => Some(("nifi.web.https.host", "nifi.web.https.port")),
        ListenerType::Cluster => Some((
            "nifi.cluster.node.address",
            "nifi.cluster.node.protocol.port",
        )),
        ListenerType::S2s => Some(("nifi.remote.input.host", "nifi.remote.input.socket.port")),
        ListenerType::Other(_) => None,
    }
}

/// Fully qualified host name of a node inside the cluster network.
#[must_use]
pub fn node_host(cluster: &str, node_id: NodeId, namespace: &str, headless: bool) -> String {
    if headless {
        format!("{cluster}-{node_id}-node.{cluster}-headless.{namespace}.svc.cluster.local")
    } else {
        format!("{cluster}-{node_id}-node.{namespace}.svc.cluster.local")
    }
}

/// Host and port lines for every recognised internal listener.
///
/// Listeners with an unknown type are skipped and traced.
#[must_use]
pub fn listener_block(
    listeners: &ListenersConfig,
    node_id: NodeId,
    namespace: &str,
    cluster: &str,
    headless: bool,
) -> String {
    let host = node_host(cluster, node_id, namespace, headless);
    let mut lines = Vec::with_capacity(listeners.internal_listeners.len() * 2);
    for InternalListener {
        name,
        listener_type,
        container_port,
    } in &listeners.internal_listeners
    {
        let Some((host_key, port_key)) = listener_keys(listener_type) else {
            tracing::trace!(
                listener = %name,
                kind = %listener_type,
                "skipping unsupported listener"
            );
            continue;
        };
        lines.push(format!("{host_key}={host}"));
        lines.push(format!("{port_key}={container_port}"));
    }
    lines.join("\n")
}

/// Provenance repository location and size limit.
///
/// Only the storage named [`PROVENANCE_STORAGE`] contributes; the size line
/// is emitted when a size is configured.
#[must_use]
pub fn provenance_storage_block(storage_configs: &[StorageConfig]) -> String {
    let Some(storage) = storage_configs
        .iter()
        .find(|storage| storage.name == PROVENANCE_STORAGE)
    else {
        return String::new();
    };
    let mut lines = vec![format!(
        "nifi.provenance.repository.directory.default={}",
        storage.mount_path
    )];
    if let Some(size) = storage.size.as_deref().filter(|size| !size.is_empty()) {
        lines.push(format!("nifi.provenance.repository.max.storage.size={size}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests;
