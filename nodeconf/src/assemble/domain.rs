//! Documents produced for each node.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a domain's document is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// Rendered, then combined with read-only override layers.
    Layered,
    /// Rendered and emitted verbatim.
    RenderOnly,
    /// Always empty.
    Placeholder,
}

/// A configuration document generated per node.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigDomain {
    /// `nifi.properties`.
    NodeProperties,
    /// `zookeeper.properties`.
    CoordinationProperties,
    /// `state-management.xml`.
    StateManagement,
    /// `login-identity-providers.xml`.
    LoginIdentityProviders,
}

impl ConfigDomain {
    /// Every domain, in generation order.
    pub const ALL: [Self; 4] = [
        Self::NodeProperties,
        Self::CoordinationProperties,
        Self::StateManagement,
        Self::LoginIdentityProviders,
    ];

    /// File name of the generated document.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::NodeProperties => "nifi.properties",
            Self::CoordinationProperties => "zookeeper.properties",
            Self::StateManagement => "state-management.xml",
            Self::LoginIdentityProviders => "login-identity-providers.xml",
        }
    }

    /// How the document is produced.
    #[must_use]
    pub const fn kind(self) -> DomainKind {
        match self {
            Self::NodeProperties | Self::CoordinationProperties => DomainKind::Layered,
            Self::StateManagement => DomainKind::RenderOnly,
            Self::LoginIdentityProviders => DomainKind::Placeholder,
        }
    }

    /// Name of the default template, and of the Fluent message it defines.
    ///
    /// Placeholder domains have no template.
    #[must_use]
    pub const fn template_name(self) -> Option<&'static str> {
        match self {
            Self::NodeProperties => Some("nifi-properties"),
            Self::CoordinationProperties => Some("zookeeper-properties"),
            Self::StateManagement => Some("state-management"),
            Self::LoginIdentityProviders => None,
        }
    }

    /// Look a domain up by its file name.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|domain| domain.file_name() == name)
    }
}

impl fmt::Display for ConfigDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
