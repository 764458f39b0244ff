//! Reporting of non-fatal generation failures.
//!
//! Assembly never aborts on a broken template or an incompatible structured
//! override. Each failure is handed to an [`IssueReporter`] instead, and the
//! affected document is produced from whatever layers survived.

use std::fmt;
use std::sync::Arc;

use crate::{ConfigDomain, ConfigError, NodeId};

/// Step of document generation at which a failure occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IssueStage {
    /// Combining cluster-wide and node-specific structured configuration.
    StructuredMerge,
    /// Rendering the domain template.
    Render,
}

impl fmt::Display for IssueStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StructuredMerge => "structured-merge",
            Self::Render => "render",
        })
    }
}

/// A failure encountered while generating one document for one node.
#[derive(Clone, Debug)]
pub struct GenerationIssue {
    /// Document being generated.
    pub domain: ConfigDomain,
    /// Node the document belongs to.
    pub node_id: NodeId,
    /// Step that failed.
    pub stage: IssueStage,
    /// Underlying error.
    pub error: Arc<ConfigError>,
}

impl fmt::Display for GenerationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed for {} on node {}: {}",
            self.stage,
            self.domain.file_name(),
            self.node_id,
            self.error
        )
    }
}

/// Callback receiving generation failures.
pub type IssueReporter = Arc<dyn Fn(&GenerationIssue) + Send + Sync>;

/// Reporter that emits each issue as a `tracing` error event.
#[must_use]
pub fn default_reporter() -> IssueReporter {
    Arc::new(|issue: &GenerationIssue| {
        tracing::error!(
            file = issue.domain.file_name(),
            node_id = %issue.node_id,
            stage = %issue.stage,
            error = %issue.error,
            "failed to generate node configuration"
        );
    })
}
