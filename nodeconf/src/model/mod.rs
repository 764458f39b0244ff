//! Input model describing a cluster and its nodes.
//!
//! These types are read-only inputs to the engine. They deserialise from the
//! cluster spec files accepted by [`crate::ClusterSpecLoader`] and every field
//! defaults when omitted, so sparse specs load cleanly.

mod cluster;
mod listeners;
mod node;
mod text;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use cluster::{
    ClusterSpec, CoordinationPropertiesConfig, DEFAULT_AUTHORIZER, DEFAULT_ZK_PATH,
    LdapConfiguration, NodePropertiesConfig, ReadOnlyConfig,
};
pub use listeners::{InternalListener, ListenerType, ListenersConfig};
pub use node::{NodeConfig, NodeSpec, PROVENANCE_STORAGE, StorageConfig};

/// Identifier of a node within a cluster.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(i32);

impl NodeId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
