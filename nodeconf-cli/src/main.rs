//! CLI entrypoint for `nodeconf`.

use clap::Parser;
use nodeconf_cli::cli::Args;
use nodeconf_cli::error::CliError;
use nodeconf_cli::{run, telemetry};

fn main() -> Result<(), CliError> {
    telemetry::init();
    let args = Args::parse();
    let summary = run(&args, &mut std::io::stdout().lock())?;
    tracing::info!(
        nodes = summary.nodes.len(),
        written = summary.written.len(),
        issues = summary.issues,
        "rendered node configuration"
    );
    Ok(())
}
