//! Layered per-node configuration rendering for clustered services.
//!
//! A [`ClusterSpec`] describes a cluster once. [`NodeConfigAssembler`] turns
//! it into the configuration documents of a single node:
//!
//! - structured read-only settings are merged cluster-first, node-second
//!   ([`merged`] in [`MergeMode::Override`]);
//! - each domain template is rendered against the merged settings and the
//!   cluster topology ([`TemplateRenderer`], [`FluentRenderer`]);
//! - raw `key=value` overrides are parsed ([`ConfigLayer`]) and layered
//!   fill-only over the rendered document ([`LayerStack`]).
//!
//! Failures while rendering or merging never abort assembly. They are handed
//! to an [`IssueReporter`] and the affected document is produced from what
//! remains.
//!
//! ```rust
//! use nodeconf::{ClusterSpec, ConfigLayer, NodeConfigAssembler, NodeId};
//!
//! let mut cluster = ClusterSpec {
//!     name: "demo".into(),
//!     zk_address: "zk:2181".into(),
//!     ..ClusterSpec::default()
//! };
//! cluster.read_only_config.node_properties.override_configs =
//!     "nifi.cluster.is.node=false\ncustom.key=1".into();
//!
//! let properties = NodeConfigAssembler::new(&cluster).node_properties(NodeId::new(0));
//! let layer = ConfigLayer::parse(&properties);
//! assert_eq!(layer.get("nifi.cluster.is.node"), Some("true"));
//! assert_eq!(layer.get("custom.key"), Some("1"));
//! ```

use std::sync::Arc;

mod assemble;
pub mod blocks;
mod error;
mod file;
mod layered;
pub mod model;
mod overlay;
mod properties;
mod render;
mod report;
mod result_ext;

pub use assemble::{ConfigDomain, DomainKind, NodeConfigAssembler, NodeDocuments, TemplateSet};
pub use error::{AggregatedErrors, ConfigError};
#[cfg(feature = "yaml")]
pub use file::SaphyrYaml;
pub use file::{ClusterSpecLoader, DEFAULT_ENV_PREFIX};
pub use layered::{LayerProvenance, LayerStack, filled_from, merge_fill_only};
pub use model::{ClusterSpec, NodeId};
pub use overlay::{MergeMode, is_empty_value, merge_into, merged, overlay_value};
pub use properties::ConfigLayer;
pub use render::{FluentRenderer, RenderContext, Rendered, SlotValue, Template, TemplateRenderer};
pub use report::{GenerationIssue, IssueReporter, IssueStage, default_reporter};
pub use result_ext::{ConfigGatherExt, ConfigResultExt};

/// Result type used throughout the crate, sharing errors via [`Arc`].
pub type ConfigResult<T> = Result<T, Arc<ConfigError>>;
