//! Library interface for the `nodeconf` command.
//!
//! [`run`] loads a cluster spec, assembles the requested nodes and writes
//! their documents either to per-node directories or as JSON.

pub mod cli;
pub mod error;
pub mod output;
pub mod telemetry;
pub mod templates;

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use camino::Utf8PathBuf;
use nodeconf::{
    ClusterSpec, ClusterSpecLoader, GenerationIssue, IssueReporter, NodeConfigAssembler, NodeId,
    TemplateSet, default_reporter,
};

use crate::cli::{Args, OutputFormat};
use crate::error::CliError;

/// What a run produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Nodes rendered, in request order.
    pub nodes: Vec<NodeId>,
    /// Node directories written in `files` format.
    pub written: Vec<Utf8PathBuf>,
    /// Number of generation issues reported.
    pub issues: usize,
}

/// Execute the command described by `args`, writing JSON output to `stdout`.
///
/// # Errors
///
/// Returns a [`CliError`] when the cluster spec cannot be loaded, output cannot be
/// written, or `--strict` is set and any issue was reported.
pub fn run<W: Write>(args: &Args, stdout: &mut W) -> Result<RunSummary, CliError> {
    let cluster = load_cluster(args)?;
    let nodes = select_nodes(args, &cluster)?;
    let templates = match &args.templates {
        Some(dir) => templates::load_overrides(dir)?,
        None => TemplateSet::default(),
    };

    let issues = Arc::new(AtomicUsize::new(0));
    let assembler = NodeConfigAssembler::new(&cluster)
        .with_templates(templates)
        .with_reporter(counting_reporter(Arc::clone(&issues)));

    let mut summary = RunSummary {
        nodes: nodes.clone(),
        ..RunSummary::default()
    };
    let bundles: BTreeMap<String, _> = nodes
        .iter()
        .map(|&id| (assembler.config_name(id), assembler.assemble(id)))
        .collect();

    match args.format {
        OutputFormat::Files => {
            for (config_name, documents) in &bundles {
                let dir = output::write_node_documents(&args.out_dir, config_name, documents)?;
                summary.written.push(dir);
            }
        }
        OutputFormat::Json => output::write_json(stdout, &bundles)?,
    }

    summary.issues = issues.load(Ordering::SeqCst);
    if args.is_strict && summary.issues > 0 {
        return Err(CliError::GenerationIssues {
            count: summary.issues,
        });
    }
    Ok(summary)
}

fn load_cluster(args: &Args) -> Result<ClusterSpec, CliError> {
    let loader = ClusterSpecLoader::new(args.spec.clone());
    let loader = if args.should_ignore_env {
        loader.without_env()
    } else {
        loader.with_env_prefix(args.env_prefix.as_str())
    };
    let cluster = loader.load()?;
    for id in cluster.duplicate_node_ids() {
        tracing::warn!(node_id = %id, "node id declared more than once; using the first");
    }
    Ok(cluster)
}

fn select_nodes(args: &Args, cluster: &ClusterSpec) -> Result<Vec<NodeId>, CliError> {
    if args.nodes.is_empty() {
        let ids = cluster.node_ids();
        if ids.is_empty() {
            return Err(CliError::NoNodes(args.spec.clone()));
        }
        return Ok(ids);
    }
    let mut ids = Vec::with_capacity(args.nodes.len());
    for id in args.nodes.iter().copied().map(NodeId::new) {
        if cluster.node(id).is_none() {
            tracing::warn!(node_id = %id, "node not declared in spec; rendering defaults");
        }
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

fn counting_reporter(count: Arc<AtomicUsize>) -> IssueReporter {
    let log = default_reporter();
    Arc::new(move |issue: &GenerationIssue| {
        count.fetch_add(1, Ordering::SeqCst);
        log(issue);
    })
}
