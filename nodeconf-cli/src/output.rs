//! Output writers for `nodeconf`.

use std::collections::BTreeMap;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use nodeconf::NodeDocuments;

use crate::error::CliError;

/// Writes every document of one node into `<out_dir>/<config_name>/`.
///
/// Existing files are truncated. Returns the node directory.
///
/// # Errors
///
/// Returns [`CliError::Io`] when a directory or file cannot be created or
/// written.
pub fn write_node_documents(
    out_dir: &Utf8Path,
    config_name: &str,
    documents: &NodeDocuments,
) -> Result<Utf8PathBuf, CliError> {
    let dir = ensure_dir(out_dir)?;
    let node_dir = out_dir.join(config_name);
    dir.create_dir_all(config_name)
        .map_err(|io_err| CliError::io(&node_dir, io_err))?;
    let node_handle = dir
        .open_dir(config_name)
        .map_err(|io_err| CliError::io(&node_dir, io_err))?;

    for (file_name, text) in documents.iter() {
        let path = node_dir.join(file_name);
        let mut file = node_handle
            .open_with(
                file_name,
                OpenOptions::new().write(true).create(true).truncate(true),
            )
            .map_err(|io_err| CliError::io(&path, io_err))?;
        file.write_all(text.as_bytes())
            .map_err(|io_err| CliError::io(&path, io_err))?;
        tracing::debug!(path = %path, bytes = text.len(), "wrote document");
    }

    Ok(node_dir)
}

/// Writes all bundles as one pretty-printed JSON object keyed by config name.
///
/// # Errors
///
/// Returns [`CliError::Json`] when serialisation fails and
/// [`CliError::Stdout`] when the writer rejects the output.
pub fn write_json<W: Write>(
    writer: &mut W,
    bundles: &BTreeMap<String, NodeDocuments>,
) -> Result<(), CliError> {
    let content = serde_json::to_string_pretty(bundles)?;
    writeln!(writer, "{content}").map_err(CliError::Stdout)
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, CliError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority())
                .map_err(|io_err| CliError::io(path, io_err))?;
            Dir::open_ambient_dir(path, ambient_authority())
                .map_err(|io_err| CliError::io(path, io_err))
        }
        Err(open_err) => Err(CliError::io(path, open_err)),
    }
}
