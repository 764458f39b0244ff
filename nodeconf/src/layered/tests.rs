//! Unit tests for fill-only layering and precedence resolution.

use rstest::{fixture, rstest};

use super::{LayerProvenance, LayerStack, merge_fill_only};
use crate::ConfigLayer;

fn layer(text: &str) -> ConfigLayer {
    ConfigLayer::parse(text)
}

#[fixture]
fn stack() -> LayerStack {
    let mut stack = LayerStack::new();
    stack.push_generated(layer("gen.only=g\nshared=generated"));
    stack.push_cluster_override(layer("cluster.only=c\nshared=cluster\nboth=cluster"));
    stack.push_node_override(layer("node.only=n\nshared=node\nboth=node"));
    stack
}

#[test]
fn fill_only_keeps_destination_values() {
    let mut base = layer("a=1\nb=2");
    merge_fill_only(&mut base, &layer("b=9\nc=3"));
    assert_eq!(base, layer("a=1\nb=2\nc=3"));
}

#[test]
fn fill_only_keeps_empty_destination_values() {
    let mut base = layer("nifi.web.proxy.host=\nb=2");
    merge_fill_only(&mut base, &layer("nifi.web.proxy.host=proxy.example"));
    assert_eq!(base.get("nifi.web.proxy.host"), Some(""));
    assert_eq!(base.to_document(), "b=2\nnifi.web.proxy.host=");
}

#[test]
fn node_overrides_win_over_cluster_overrides() {
    let mut stack = LayerStack::new();
    stack.push_cluster_override(layer("x=1\ny=2"));
    stack.push_node_override(layer("y=9"));
    assert_eq!(stack.effective_overrides(), layer("x=1\ny=9"));
}

#[rstest]
fn generated_keys_are_never_overridden(stack: LayerStack) {
    let resolved = stack.resolve();
    assert_eq!(resolved.get("shared"), Some("generated"));
    assert_eq!(resolved.get("both"), Some("node"));
    assert_eq!(resolved.get("cluster.only"), Some("c"));
    assert_eq!(resolved.get("node.only"), Some("n"));
    assert_eq!(resolved.get("gen.only"), Some("g"));
}

#[rstest]
fn resolution_ignores_push_order(stack: LayerStack) {
    let reversed = vec![
        (
            LayerProvenance::NodeOverride,
            layer("node.only=n\nshared=node\nboth=node"),
        ),
        (
            LayerProvenance::ClusterOverride,
            layer("cluster.only=c\nshared=cluster\nboth=cluster"),
        ),
        (
            LayerProvenance::Generated,
            layer("gen.only=g\nshared=generated"),
        ),
    ];
    let mut other = LayerStack::new();
    other.extend(reversed);
    assert_eq!(other.resolve().to_document(), stack.resolve().to_document());
}

#[test]
fn earliest_layer_of_a_provenance_wins() {
    let mut stack = LayerStack::new();
    stack.push_cluster_override(layer("k=first"));
    stack.push_cluster_override(layer("k=second\nextra=1"));
    assert_eq!(stack.resolve(), layer("k=first\nextra=1"));
}

#[test]
fn empty_stack_resolves_empty() {
    let stack = LayerStack::new();
    assert!(stack.is_empty());
    assert!(stack.resolve().is_empty());
}

#[rstest]
fn provenances_follow_push_order(stack: LayerStack) {
    let seen: Vec<_> = stack.provenances().collect();
    assert_eq!(
        seen,
        vec![
            LayerProvenance::Generated,
            LayerProvenance::ClusterOverride,
            LayerProvenance::NodeOverride,
        ]
    );
}
