//! Tests for property fragment generators.

use rstest::{fixture, rstest};

use super::{listener_block, node_host, provenance_storage_block};
use crate::ConfigLayer;
use crate::model::{InternalListener, ListenerType, ListenersConfig, NodeId, StorageConfig};

#[fixture]
fn listeners() -> ListenersConfig {
    let listener = |name: &str, listener_type, container_port| InternalListener {
        name: name.to_owned(),
        listener_type,
        container_port,
    };
    ListenersConfig {
        internal_listeners: vec![
            listener("https", ListenerType::Https, 8443),
            listener("cluster", ListenerType::Cluster, 6007),
            listener("s2s", ListenerType::S2s, 10000),
            listener("metrics", ListenerType::Other("prometheus".into()), 9090),
        ],
    }
}

#[rstest]
#[case(true, "demo-2-node.demo-headless.ns.svc.cluster.local")]
#[case(false, "demo-2-node.ns.svc.cluster.local")]
fn host_depends_on_headless_service(#[case] headless: bool, #[case] expected: &str) {
    assert_eq!(node_host("demo", NodeId::new(2), "ns", headless), expected);
}

#[rstest]
fn listener_block_skips_unknown_types(listeners: ListenersConfig) {
    let block = listener_block(&listeners, NodeId::new(2), "ns", "demo", false);
    let layer = ConfigLayer::parse(&block);
    let host = "demo-2-node.ns.svc.cluster.local";
    assert_eq!(layer.len(), 6);
    assert_eq!(layer.get("nifi.web.https.host"), Some(host));
    assert_eq!(layer.get("nifi.web.https.port"), Some("8443"));
    assert_eq!(layer.get("nifi.cluster.node.address"), Some(host));
    assert_eq!(layer.get("nifi.cluster.node.protocol.port"), Some("6007"));
    assert_eq!(layer.get("nifi.remote.input.host"), Some(host));
    assert_eq!(layer.get("nifi.remote.input.socket.port"), Some("10000"));
}

#[test]
fn listener_block_is_empty_without_listeners() {
    let block = listener_block(&ListenersConfig::default(), NodeId::new(0), "ns", "demo", true);
    assert!(block.is_empty());
}

#[rstest]
#[case(None, "nifi.provenance.repository.directory.default=/opt/prov")]
#[case(Some(""), "nifi.provenance.repository.directory.default=/opt/prov")]
#[case(
    Some("10Gi"),
    "nifi.provenance.repository.directory.default=/opt/prov\nnifi.provenance.repository.max.storage.size=10Gi"
)]
fn provenance_block_uses_named_storage(#[case] size: Option<&str>, #[case] expected: &str) {
    let storage = vec![
        StorageConfig {
            name: "logs".into(),
            mount_path: "/opt/logs".into(),
            size: Some("1Gi".into()),
        },
        StorageConfig {
            name: "provenance-repository".into(),
            mount_path: "/opt/prov".into(),
            size: size.map(str::to_owned),
        },
    ];
    assert_eq!(provenance_storage_block(&storage), expected);
}

#[test]
fn provenance_block_is_empty_without_storage() {
    assert!(provenance_storage_block(&[]).is_empty());
}
