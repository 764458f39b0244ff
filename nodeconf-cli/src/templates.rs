//! Loading of template overrides from a directory.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use nodeconf::{ConfigDomain, Template, TemplateSet};

use crate::error::CliError;

/// Built-in templates with any `<template-name>.ftl` found in `dir` swapped
/// in for the matching domain.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the directory cannot be opened or an
/// existing template file cannot be read.
pub fn load_overrides(dir: &Utf8Path) -> Result<TemplateSet, CliError> {
    let handle =
        Dir::open_ambient_dir(dir, ambient_authority()).map_err(|err| CliError::io(dir, err))?;
    let mut templates = TemplateSet::default();
    for domain in ConfigDomain::ALL {
        let Some(name) = domain.template_name() else {
            continue;
        };
        let file_name = format!("{name}.ftl");
        match handle.read_to_string(&file_name) {
            Ok(source) => {
                tracing::info!(file = %dir.join(&file_name), %domain, "using template override");
                templates = templates.with_template(domain, Template::new(name, source));
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(CliError::io(dir.join(&file_name), err)),
        }
    }
    Ok(templates)
}
