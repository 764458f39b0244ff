//! Fill-only layering of flat configuration sources.
//!
//! Three sources feed every layered document: the operator-generated layer
//! rendered from a template, the cluster-wide read-only overrides, and the
//! node-specific read-only overrides. [`LayerStack`] collects them and
//! [`LayerStack::resolve`] applies the precedence policy:
//!
//! 1. node overrides are filled from cluster overrides, so node keys win over
//!    cluster keys;
//! 2. the generated layer is filled from that effective override layer.
//!
//! Both steps use [`merge_fill_only`], which never replaces a key the
//! destination already defines. Overrides therefore only contribute keys the
//! generated layer leaves undefined.
//!
//! ```rust
//! use nodeconf::{ConfigLayer, LayerStack};
//!
//! let mut stack = LayerStack::new();
//! stack.push_generated(ConfigLayer::parse("a=1\nb=2"));
//! stack.push_cluster_override(ConfigLayer::parse("b=9\nc=3"));
//! assert_eq!(stack.resolve().to_document(), "a=1\nb=2\nc=3");
//! ```

mod merge;

pub use merge::{filled_from, merge_fill_only};

use crate::ConfigLayer;

/// Source of a flat configuration layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum LayerProvenance {
    /// Properties rendered by the operator from a template.
    Generated,
    /// Read-only overrides declared for the whole cluster.
    ClusterOverride,
    /// Read-only overrides declared for a single node.
    NodeOverride,
}

/// Accumulates flat layers tagged with their provenance.
#[derive(Clone, Debug, Default)]
pub struct LayerStack {
    layers: Vec<(LayerProvenance, ConfigLayer)>,
}

impl LayerStack {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Push the operator-generated layer.
    pub fn push_generated(&mut self, layer: ConfigLayer) {
        self.push_layer(LayerProvenance::Generated, layer);
    }

    /// Push a cluster-wide override layer.
    pub fn push_cluster_override(&mut self, layer: ConfigLayer) {
        self.push_layer(LayerProvenance::ClusterOverride, layer);
    }

    /// Push a node-specific override layer.
    pub fn push_node_override(&mut self, layer: ConfigLayer) {
        self.push_layer(LayerProvenance::NodeOverride, layer);
    }

    /// Push a layer with an explicit provenance.
    pub fn push_layer(&mut self, provenance: LayerProvenance, layer: ConfigLayer) {
        self.layers.push((provenance, layer));
    }

    /// Provenances of the accumulated layers in push order.
    pub fn provenances(&self) -> impl Iterator<Item = LayerProvenance> + '_ {
        self.layers.iter().map(|(provenance, _)| *provenance)
    }

    /// Whether no layers have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Node overrides filled in from cluster overrides.
    ///
    /// Node keys win over cluster keys; cluster keys fill in keys the node
    /// layer omits.
    #[must_use]
    pub fn effective_overrides(&self) -> ConfigLayer {
        let cluster = self.combined(LayerProvenance::ClusterOverride);
        filled_from(self.combined(LayerProvenance::NodeOverride), &cluster)
    }

    /// Resolve the stack into the final layer.
    ///
    /// The generated layer is authoritative: override keys it already defines
    /// are ignored.
    #[must_use]
    pub fn resolve(&self) -> ConfigLayer {
        filled_from(
            self.combined(LayerProvenance::Generated),
            &self.effective_overrides(),
        )
    }

    /// Combine every layer of `provenance`, earliest pushed wins.
    fn combined(&self, provenance: LayerProvenance) -> ConfigLayer {
        self.layers
            .iter()
            .filter(|(candidate, _)| *candidate == provenance)
            .fold(ConfigLayer::new(), |acc, (_, layer)| filled_from(acc, layer))
    }
}

impl Extend<(LayerProvenance, ConfigLayer)> for LayerStack {
    fn extend<I: IntoIterator<Item = (LayerProvenance, ConfigLayer)>>(&mut self, iter: I) {
        self.layers.extend(iter);
    }
}

#[cfg(test)]
mod tests;
