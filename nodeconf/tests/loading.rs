//! Loading cluster specs from disk and generating their documents.

use anyhow::{Result, ensure};
use nodeconf::{ConfigDomain, ConfigLayer, NodeConfigAssembler, NodeId};
use rstest::rstest;
use test_helpers::figment::{load_spec, with_jail};
use test_helpers::reporter::IssueRecorder;

const SPEC: &str = r#"
name: analytics
namespace: data
zk_address: "zk-0.zk:2181,zk-1.zk:2181"
zk_path: /analytics
listeners:
  internal_listeners:
    - { name: http, type: http, container_port: 8080 }
read_only_config:
  node_properties:
    web_proxy_host: proxy.example.com
    override_configs: |
      nifi.web.http.port=9999
      nifi.custom.cluster=yes
nodes:
  - id: 0
    read_only_config:
      node_properties:
        override_configs: nifi.custom.cluster=node
  - id: 1
    node_config:
      is_node: false
  - id: 1
    node_config:
      is_node: true
"#;

#[rstest]
fn loaded_specs_assemble_every_node() -> Result<()> {
    let cluster = with_jail(|jail| load_spec(jail, "cluster.yaml", SPEC))?;
    ensure!(cluster.duplicate_node_ids() == vec![NodeId::new(1)]);

    let recorder = IssueRecorder::new();
    let assembler = NodeConfigAssembler::new(&cluster).with_reporter(recorder.reporter());

    let node_zero = ConfigLayer::parse(&assembler.node_properties(NodeId::new(0)));
    ensure!(node_zero.get("nifi.web.http.port") == Some("8080"));
    ensure!(node_zero.get("nifi.custom.cluster") == Some("node"));
    ensure!(node_zero.get("nifi.web.proxy.host") == Some("proxy.example.com"));
    ensure!(node_zero.get("nifi.zookeeper.root.node") == Some("/analytics"));

    let node_one = ConfigLayer::parse(&assembler.node_properties(NodeId::new(1)));
    ensure!(node_one.get("nifi.cluster.is.node") == Some("false"));
    ensure!(node_one.get("nifi.custom.cluster") == Some("yes"));

    let documents = assembler.assemble(NodeId::new(0));
    ensure!(documents.len() == ConfigDomain::ALL.len());
    ensure!(recorder.is_empty(), "unexpected issues: {:?}", recorder.issues());
    Ok(())
}

#[rstest]
fn environment_overrides_reach_rendered_documents() -> Result<()> {
    let cluster = with_jail(|jail| {
        jail.set_env(
            "NODECONF_READ_ONLY_CONFIG__NODE_PROPERTIES__WEB_PROXY_HOST",
            "override.example.com",
        );
        jail.set_env("NODECONF_ZK_PATH", "/from-env");
        load_spec(jail, "cluster.yaml", SPEC)
    })?;
    let assembler = NodeConfigAssembler::new(&cluster);
    let layer = ConfigLayer::parse(&assembler.node_properties(NodeId::new(0)));

    ensure!(layer.get("nifi.web.proxy.host") == Some("override.example.com"));
    ensure!(layer.get("nifi.zookeeper.root.node") == Some("/from-env"));
    Ok(())
}
