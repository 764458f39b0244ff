//! Listener settings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Listener configuration shared by all nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenersConfig {
    /// Ports each node listens on.
    pub internal_listeners: Vec<InternalListener>,
}

/// One listening port on a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalListener {
    /// Listener name.
    #[serde(deserialize_with = "super::text::lenient")]
    pub name: String,
    /// Listener role.
    #[serde(rename = "type")]
    pub listener_type: ListenerType,
    /// Port inside the container.
    pub container_port: u16,
}

/// Role of an internal listener.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListenerType {
    /// Plain HTTP web listener.
    Http,
    /// TLS web listener.
    Https,
    /// Cluster protocol listener.
    Cluster,
    /// Site-to-site listener.
    S2s,
    /// Any other value; ignored when generating properties.
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for ListenerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => f.write_str("http"),
            Self::Https => f.write_str("https"),
            Self::Cluster => f.write_str("cluster"),
            Self::S2s => f.write_str("s2s"),
            Self::Other(name) => f.write_str(name),
        }
    }
}
