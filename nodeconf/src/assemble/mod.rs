//! Per-node assembly of configuration documents.
//!
//! [`NodeConfigAssembler`] borrows a [`ClusterSpec`] and produces the
//! documents of every [`ConfigDomain`] for one node. For a layered domain the
//! pipeline is:
//!
//! 1. merge the cluster-wide structured config with the node's, the node
//!    overriding every field it populates;
//! 2. render the domain template against a context built from that merged
//!    config, the cluster topology and the node's storage;
//! 3. parse the cluster-wide and node-specific `override_configs`;
//! 4. resolve the layers fill-only (see [`crate::LayerStack`]) and serialise.
//!
//! Render-only domains stop after step 2 and placeholder domains are always
//! empty. Failures never abort assembly; they are handed to the configured
//! [`IssueReporter`] and the document is built from the layers that remain.

mod context;
mod documents;
mod domain;
mod templates;

use std::fmt;
use std::sync::Arc;

use crate::model::{
    ClusterSpec, CoordinationPropertiesConfig, NodeConfig, NodeId, NodePropertiesConfig,
    NodeSpec, ReadOnlyConfig,
};
use crate::{
    ConfigError, ConfigLayer, FluentRenderer, GenerationIssue, IssueReporter, IssueStage,
    LayerStack, MergeMode, RenderContext, Rendered, TemplateRenderer, default_reporter, merged,
};

pub use documents::NodeDocuments;
pub use domain::{ConfigDomain, DomainKind};
pub use templates::TemplateSet;

/// Builds the configuration documents of individual nodes.
///
/// ```rust
/// use nodeconf::{ClusterSpec, ConfigDomain, NodeConfigAssembler, NodeId};
///
/// let cluster = ClusterSpec {
///     name: "demo".into(),
///     zk_address: "zk:2181".into(),
///     ..ClusterSpec::default()
/// };
/// let documents = NodeConfigAssembler::new(&cluster).assemble(NodeId::new(1));
/// assert_eq!(documents.len(), 4);
/// assert_eq!(documents.get(ConfigDomain::LoginIdentityProviders), Some(""));
/// ```
pub struct NodeConfigAssembler<'a> {
    cluster: &'a ClusterSpec,
    renderer: Arc<dyn TemplateRenderer>,
    templates: TemplateSet,
    reporter: IssueReporter,
}

impl<'a> NodeConfigAssembler<'a> {
    /// Assembler using the embedded templates, [`FluentRenderer`] and the
    /// tracing reporter.
    #[must_use]
    pub fn new(cluster: &'a ClusterSpec) -> Self {
        Self {
            cluster,
            renderer: Arc::new(FluentRenderer::new()),
            templates: TemplateSet::default(),
            reporter: default_reporter(),
        }
    }

    /// Replace the template renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn TemplateRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the template set.
    #[must_use]
    pub fn with_templates(mut self, templates: TemplateSet) -> Self {
        self.templates = templates;
        self
    }

    /// Replace the reporter receiving generation failures.
    #[must_use]
    pub fn with_reporter(mut self, reporter: IssueReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Cluster the assembler reads from.
    #[must_use]
    pub const fn cluster(&self) -> &'a ClusterSpec {
        self.cluster
    }

    /// Name of the document bundle for `node_id`, `<cluster>-config-<id>`.
    #[must_use]
    pub fn config_name(&self, node_id: NodeId) -> String {
        format!("{}-config-{node_id}", self.cluster.name)
    }

    /// Generate every domain's document for `node_id`.
    #[must_use]
    pub fn assemble(&self, node_id: NodeId) -> NodeDocuments {
        ConfigDomain::ALL
            .into_iter()
            .map(|domain| (domain, self.document(domain, node_id)))
            .collect()
    }

    /// Generate the document of one domain for `node_id`.
    #[must_use]
    pub fn document(&self, domain: ConfigDomain, node_id: NodeId) -> String {
        match domain {
            ConfigDomain::NodeProperties => self.node_properties(node_id),
            ConfigDomain::CoordinationProperties => self.coordination_properties(node_id),
            ConfigDomain::StateManagement => self.state_management(node_id),
            ConfigDomain::LoginIdentityProviders => String::new(),
        }
    }

    /// Node-properties document for `node_id`.
    #[must_use]
    pub fn node_properties(&self, node_id: NodeId) -> String {
        let domain = ConfigDomain::NodeProperties;
        let base = self.effective_node_properties(node_id);
        let node_config = self.node_config(node_id);
        let context = context::node_properties(self.cluster, node_id, node_config, &base);
        let generated = self.render(domain, node_id, &context);
        let node_overrides = self
            .node_read_only(node_id)
            .map(|config| config.node_properties.override_configs.as_str());
        resolve_layers(
            &generated,
            &self.cluster.read_only_config.node_properties.override_configs,
            node_overrides,
        )
    }

    /// Coordination-service properties document for `node_id`.
    #[must_use]
    pub fn coordination_properties(&self, node_id: NodeId) -> String {
        let domain = ConfigDomain::CoordinationProperties;
        // Only reports merge failures; no rendered slot reads the base.
        let _base = self.effective_coordination_properties(node_id);
        let context = context::coordination(self.cluster, node_id);
        let generated = self.render(domain, node_id, &context);
        let node_overrides = self
            .node_read_only(node_id)
            .map(|config| config.coordination_properties.override_configs.as_str());
        resolve_layers(
            &generated,
            &self.cluster.read_only_config.coordination_properties.override_configs,
            node_overrides,
        )
    }

    /// State-management document for `node_id`, rendered verbatim.
    #[must_use]
    pub fn state_management(&self, node_id: NodeId) -> String {
        let context = context::coordination(self.cluster, node_id);
        self.render(ConfigDomain::StateManagement, node_id, &context)
    }

    /// Cluster-wide node-properties config with the node's fields applied
    /// over it.
    ///
    /// A failed merge is reported and the cluster-wide config is returned.
    #[must_use]
    pub fn effective_node_properties(&self, node_id: NodeId) -> NodePropertiesConfig {
        let base = &self.cluster.read_only_config.node_properties;
        let node = self
            .node_read_only(node_id)
            .map(|config| &config.node_properties);
        self.structured_base(ConfigDomain::NodeProperties, node_id, base, node)
    }

    /// Cluster-wide coordination-properties config with the node's fields
    /// applied over it.
    ///
    /// A failed merge is reported and the cluster-wide config is returned.
    #[must_use]
    pub fn effective_coordination_properties(
        &self,
        node_id: NodeId,
    ) -> CoordinationPropertiesConfig {
        let base = &self.cluster.read_only_config.coordination_properties;
        let node = self
            .node_read_only(node_id)
            .map(|config| &config.coordination_properties);
        self.structured_base(ConfigDomain::CoordinationProperties, node_id, base, node)
    }

    fn node(&self, node_id: NodeId) -> Option<&'a NodeSpec> {
        self.cluster.node(node_id)
    }

    fn node_read_only(&self, node_id: NodeId) -> Option<&'a ReadOnlyConfig> {
        self.node(node_id)
            .and_then(|node| node.read_only_config.as_ref())
    }

    fn node_config(&self, node_id: NodeId) -> &'a NodeConfig {
        static DEFAULT: NodeConfig = NodeConfig {
            is_node: None,
            storage_configs: Vec::new(),
        };
        self.node(node_id).map_or(&DEFAULT, |node| &node.node_config)
    }

    fn structured_base<T>(
        &self,
        domain: ConfigDomain,
        node_id: NodeId,
        base: &T,
        node: Option<&T>,
    ) -> T
    where
        T: Clone + serde::Serialize + serde::de::DeserializeOwned,
    {
        let Some(node) = node else {
            return base.clone();
        };
        merged(base, node, MergeMode::Override).unwrap_or_else(|error| {
            self.report(domain, node_id, IssueStage::StructuredMerge, error);
            base.clone()
        })
    }

    fn render(
        &self,
        domain: ConfigDomain,
        node_id: NodeId,
        context: &RenderContext,
    ) -> String {
        let Some(template) = self.templates.get(domain) else {
            let error = ConfigError::MissingTemplate {
                template: domain.file_name().to_owned(),
            };
            self.report(domain, node_id, IssueStage::Render, Arc::new(error));
            return String::new();
        };
        let Rendered { text, error } = self.renderer.render(template, context);
        if let Some(error) = error {
            self.report(domain, node_id, IssueStage::Render, Arc::new(error));
        }
        text
    }

    fn report(
        &self,
        domain: ConfigDomain,
        node_id: NodeId,
        stage: IssueStage,
        error: Arc<ConfigError>,
    ) {
        (self.reporter)(&GenerationIssue {
            domain,
            node_id,
            stage,
            error,
        });
    }
}

fn resolve_layers(
    generated: &str,
    cluster_overrides: &str,
    node_overrides: Option<&str>,
) -> String {
    let mut stack = LayerStack::new();
    stack.push_generated(ConfigLayer::parse(generated));
    stack.push_cluster_override(ConfigLayer::parse(cluster_overrides));
    if let Some(text) = node_overrides {
        stack.push_node_override(ConfigLayer::parse(text));
    }
    stack.resolve().to_document()
}

impl fmt::Debug for NodeConfigAssembler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeConfigAssembler")
            .field("cluster", &self.cluster.name)
            .field("templates", &self.templates)
            .field("renderer", &"<renderer>")
            .field("reporter", &"<reporter>")
            .finish()
    }
}
