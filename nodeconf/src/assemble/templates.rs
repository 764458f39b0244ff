//! Templates used for each rendered domain.

use std::collections::BTreeMap;

use crate::Template;

use super::{ConfigDomain, DomainKind};

const NODE_PROPERTIES: &str = include_str!("../../templates/nifi-properties.ftl");
const COORDINATION_PROPERTIES: &str = include_str!("../../templates/zookeeper-properties.ftl");
const STATE_MANAGEMENT: &str = include_str!("../../templates/state-management.ftl");

/// Template per rendered domain.
///
/// `TemplateSet::default()` carries the embedded templates. Individual
/// domains can be replaced with [`TemplateSet::with_template`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateSet {
    templates: BTreeMap<ConfigDomain, Template>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        ConfigDomain::ALL
            .into_iter()
            .filter_map(|domain| {
                let source = embedded_source(domain)?;
                let name = domain.template_name()?;
                Some((domain, Template::new(name, source)))
            })
            .fold(Self::empty(), |set, (domain, template)| {
                set.with_template(domain, template)
            })
    }
}

const fn embedded_source(domain: ConfigDomain) -> Option<&'static str> {
    match domain {
        ConfigDomain::NodeProperties => Some(NODE_PROPERTIES),
        ConfigDomain::CoordinationProperties => Some(COORDINATION_PROPERTIES),
        ConfigDomain::StateManagement => Some(STATE_MANAGEMENT),
        ConfigDomain::LoginIdentityProviders => None,
    }
}

impl TemplateSet {
    /// A set without any templates.
    ///
    /// Rendered domains without a template produce an empty document and
    /// report [`crate::ConfigError::MissingTemplate`].
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Replace the template for `domain`.
    ///
    /// Placeholder domains never render, so templates registered for them
    /// are ignored.
    #[must_use]
    pub fn with_template(mut self, domain: ConfigDomain, template: Template) -> Self {
        if domain.kind() == DomainKind::Placeholder {
            tracing::debug!(file = domain.file_name(), "ignoring template for placeholder domain");
            return self;
        }
        self.templates.insert(domain, template);
        self
    }

    /// Template registered for `domain`.
    #[must_use]
    pub fn get(&self, domain: ConfigDomain) -> Option<&Template> {
        self.templates.get(&domain)
    }
}
