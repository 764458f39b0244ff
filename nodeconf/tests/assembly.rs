//! End-to-end node assembly: rendering, structured overrides and fill-only
//! layering across every document.

use std::sync::Arc;

use nodeconf::model::{ListenerType, ReadOnlyConfig};
use nodeconf::{
    ConfigDomain, ConfigError, ConfigLayer, IssueStage, NodeConfigAssembler, NodeId, Template,
    TemplateSet,
};
use rstest::{fixture, rstest};
use test_helpers::fixtures::ClusterFixture;
use test_helpers::renderer::FixedRenderer;
use test_helpers::reporter::IssueRecorder;
use test_helpers::text::{is_sorted_by_key, strip_isolates};

const BASE: &str = "nifi.cluster.is.node=true\nnifi.ui.banner.text=default";

#[fixture]
fn renderer() -> Arc<FixedRenderer> {
    Arc::new(
        FixedRenderer::new()
            .with_output("nifi-properties", BASE)
            .with_output("zookeeper-properties", "tickTime=2000\ninitLimit=10"),
    )
}

#[rstest]
fn generated_keys_are_not_replaced_by_overrides(renderer: Arc<FixedRenderer>) {
    let cluster = ClusterFixture::new("demo")
        .cluster_properties("nifi.ui.banner.text=hello")
        .node(0)
        .build();
    let assembler = NodeConfigAssembler::new(&cluster).with_renderer(renderer);

    assert_eq!(assembler.node_properties(NodeId::new(0)), BASE);
}

#[rstest]
fn node_overrides_beat_cluster_overrides(renderer: Arc<FixedRenderer>) {
    let cluster = ClusterFixture::new("demo")
        .cluster_properties("x=1\ny=2")
        .node_properties(0, "y=9")
        .node(1)
        .build();
    let assembler = NodeConfigAssembler::new(&cluster).with_renderer(renderer);

    let node_zero = ConfigLayer::parse(&assembler.node_properties(NodeId::new(0)));
    assert_eq!(node_zero.get("x"), Some("1"));
    assert_eq!(node_zero.get("y"), Some("9"));

    let node_one = ConfigLayer::parse(&assembler.node_properties(NodeId::new(1)));
    assert_eq!(node_one.get("y"), Some("2"));
}

#[rstest]
fn coordination_overrides_layer_independently(renderer: Arc<FixedRenderer>) {
    let cluster = ClusterFixture::new("demo")
        .cluster_coordination("tickTime=5000\nmaxClientCnxns=60")
        .cluster_properties("maxClientCnxns=1")
        .build();
    let assembler = NodeConfigAssembler::new(&cluster).with_renderer(renderer);

    assert_eq!(
        assembler.coordination_properties(NodeId::new(0)),
        "initLimit=10\nmaxClientCnxns=60\ntickTime=2000"
    );
}

#[rstest]
#[case("b.com", "b.com")]
#[case("", "a.com")]
fn node_structured_fields_override_cluster(#[case] node_host: &str, #[case] expected: &str) {
    let mut node_config = ReadOnlyConfig::default();
    node_host.clone_into(&mut node_config.node_properties.web_proxy_host);
    let cluster = ClusterFixture::new("demo")
        .web_proxy_host("a.com")
        .node_with_config(0, node_config)
        .build();
    let assembler = NodeConfigAssembler::new(&cluster);

    let effective = assembler.effective_node_properties(NodeId::new(0));
    assert_eq!(effective.web_proxy_host, expected);
    let layer = ConfigLayer::parse(&assembler.node_properties(NodeId::new(0)));
    assert_eq!(layer.get("nifi.web.proxy.host"), Some(expected));
}

#[rstest]
fn render_only_documents_are_verbatim() {
    let source = "state =\n    <state>\n        b=2\n        a=1\n    </state>\n";
    let templates = TemplateSet::default()
        .with_template(ConfigDomain::StateManagement, Template::new("state", source));
    let cluster = ClusterFixture::new("demo").build();
    let assembler = NodeConfigAssembler::new(&cluster).with_templates(templates);

    assert_eq!(
        assembler.document(ConfigDomain::StateManagement, NodeId::new(0)),
        "<state>\n    b=2\n    a=1\n</state>"
    );
}

#[rstest]
fn render_failures_are_reported_and_isolated() {
    let renderer = Arc::new(
        FixedRenderer::new()
            .with_failure("nifi-properties", "nifi.cluster.is.node=true")
            .with_output("zookeeper-properties", "tickTime=2000"),
    );
    let recorder = IssueRecorder::new();
    let cluster = ClusterFixture::new("demo")
        .cluster_properties("extra=1")
        .node(3)
        .build();
    let assembler = NodeConfigAssembler::new(&cluster)
        .with_renderer(renderer)
        .with_reporter(recorder.reporter());

    let documents = assembler.assemble(NodeId::new(3));

    assert_eq!(
        documents.get(ConfigDomain::NodeProperties),
        Some("extra=1\nnifi.cluster.is.node=true")
    );
    assert_eq!(
        documents.get(ConfigDomain::CoordinationProperties),
        Some("tickTime=2000")
    );
    assert_eq!(
        recorder.summary(),
        vec![(ConfigDomain::NodeProperties, IssueStage::Render)]
    );
    let issue = recorder.issues().remove(0);
    assert_eq!(issue.node_id, NodeId::new(3));
    assert!(matches!(
        issue.error.as_ref(),
        ConfigError::TemplateResolve { template, .. } if template == "nifi-properties"
    ));
}

#[rstest]
fn broken_fluent_templates_keep_other_domains() {
    let templates = TemplateSet::default().with_template(
        ConfigDomain::CoordinationProperties,
        Template::new("zookeeper-properties", "zookeeper-properties = { $unclosed"),
    );
    let recorder = IssueRecorder::new();
    let cluster = ClusterFixture::new("demo")
        .cluster_coordination("tickTime=4000")
        .build();
    let assembler = NodeConfigAssembler::new(&cluster)
        .with_templates(templates)
        .with_reporter(recorder.reporter());

    let documents = assembler.assemble(NodeId::new(0));

    assert_eq!(
        documents.get(ConfigDomain::CoordinationProperties),
        Some("tickTime=4000")
    );
    let properties = documents
        .get(ConfigDomain::NodeProperties)
        .expect("node properties generated");
    assert!(properties.contains("nifi.zookeeper.connect.string=zk-0.zk:2181"));
    assert_eq!(
        recorder.summary(),
        vec![(ConfigDomain::CoordinationProperties, IssueStage::Render)]
    );
}

#[rstest]
fn default_documents_are_sorted_and_isolation_free() {
    let cluster = ClusterFixture::new("demo")
        .headless(true)
        .listener(ListenerType::Https, 8443)
        .listener(ListenerType::Cluster, 6007)
        .node_with_provenance(2, "/opt/nifi/provenance", Some("20Gi"))
        .build();
    let recorder = IssueRecorder::new();
    let assembler = NodeConfigAssembler::new(&cluster).with_reporter(recorder.reporter());
    let documents = assembler.assemble(NodeId::new(2));

    for domain in [
        ConfigDomain::NodeProperties,
        ConfigDomain::CoordinationProperties,
    ] {
        let document = documents.get(domain).expect("layered document generated");
        assert!(is_sorted_by_key(document), "{domain} is not sorted");
        assert_eq!(strip_isolates(document), document);
    }

    let properties = ConfigLayer::parse(
        documents
            .get(ConfigDomain::NodeProperties)
            .expect("node properties generated"),
    );
    let host = "demo-2-node.demo-headless.default.svc.cluster.local";
    assert_eq!(properties.get("nifi.web.https.host"), Some(host));
    assert_eq!(properties.get("nifi.cluster.node.address"), Some(host));
    assert_eq!(properties.get("nifi.cluster.node.protocol.port"), Some("6007"));
    assert_eq!(
        properties.get("nifi.provenance.repository.directory.default"),
        Some("/opt/nifi/provenance")
    );
    assert!(recorder.is_empty(), "unexpected issues: {:?}", recorder.issues());

    let state = documents
        .get(ConfigDomain::StateManagement)
        .expect("state management generated");
    assert!(state.contains("<property name=\"Connect String\">zk-0.zk:2181</property>"));
    assert!(state.contains("<property name=\"Root Node\">/</property>"));
}

#[rstest]
fn nodes_assemble_concurrently(renderer: Arc<FixedRenderer>) {
    let cluster = ClusterFixture::new("demo")
        .cluster_properties("shared=1")
        .node_properties(0, "only=0")
        .node_properties(1, "only=1")
        .build();
    let assembler = NodeConfigAssembler::new(&cluster).with_renderer(renderer.clone());

    let outputs: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = [0, 1]
            .into_iter()
            .map(|id| {
                let assembler = &assembler;
                scope.spawn(move || assembler.node_properties(NodeId::new(id)))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("assembly thread panicked"))
            .collect()
    });

    assert_eq!(outputs, vec![
        format!("{BASE}\nonly=0\nshared=1"),
        format!("{BASE}\nonly=1\nshared=1"),
    ]);
    assert_eq!(renderer.calls(), 2);
}

#[rstest]
fn placeholder_never_renders(renderer: Arc<FixedRenderer>) {
    let cluster = ClusterFixture::new("demo").build();
    let assembler = NodeConfigAssembler::new(&cluster).with_renderer(renderer.clone());

    assert_eq!(
        assembler.document(ConfigDomain::LoginIdentityProviders, NodeId::new(0)),
        ""
    );
    assert_eq!(renderer.calls(), 0);
}
