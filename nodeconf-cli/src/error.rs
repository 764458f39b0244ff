//! Error types for the `nodeconf` command.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nodeconf::ConfigError;
use thiserror::Error;

/// Errors surfaced by the `nodeconf` pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// The cluster spec could not be loaded.
    #[error("failed to load cluster spec: {0}")]
    Load(#[from] Arc<ConfigError>),

    /// Serialising documents to JSON failed.
    #[error("failed to serialise documents: {0}")]
    Json(#[from] serde_json::Error),

    /// The spec declares no nodes and none were requested.
    #[error("cluster spec '{0}' declares no nodes; pass --node")]
    NoNodes(Utf8PathBuf),

    /// Documents were generated with reported issues under `--strict`.
    #[error("{count} generation issue(s) reported; see the log for details")]
    GenerationIssues {
        /// Number of reported issues.
        count: usize,
    },

    /// Filesystem access failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing to stdout failed.
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

impl CliError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
