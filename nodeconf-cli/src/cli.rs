//! Command-line interface definitions for `nodeconf`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Output formats supported by `nodeconf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Write one directory per node with one file per document.
    Files,
    /// Print every node's documents to stdout as JSON.
    Json,
}

/// Parsed CLI arguments for `nodeconf`.
#[derive(Debug, Parser)]
#[command(name = "nodeconf")]
#[command(about = "Render per-node configuration documents from a cluster spec")]
#[command(version)]
pub struct Args {
    /// Cluster spec file (TOML, YAML or JSON, chosen by extension).
    #[arg(long, short = 's', value_name = "path")]
    pub spec: Utf8PathBuf,
    /// Node to render (repeat for several nodes; defaults to every node).
    #[arg(long = "node", short = 'n', value_name = "id")]
    pub nodes: Vec<i32>,
    /// Directory receiving the generated documents.
    #[arg(long, short = 'o', value_name = "path", default_value = "out")]
    pub out_dir: Utf8PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Files)]
    pub format: OutputFormat,
    /// Directory with `.ftl` files replacing the built-in templates.
    #[arg(long, value_name = "path")]
    pub templates: Option<Utf8PathBuf>,
    /// Prefix of environment variables overriding spec values.
    #[arg(long, value_name = "prefix", default_value = nodeconf::DEFAULT_ENV_PREFIX)]
    pub env_prefix: String,
    /// Ignore environment overrides.
    #[arg(long = "no-env")]
    pub should_ignore_env: bool,
    /// Fail when any document could not be generated cleanly.
    #[arg(long = "strict")]
    pub is_strict: bool,
}
