//! YAML cluster specs parsed with `serde-saphyr`.

use std::collections::BTreeMap;

use camino::{Utf8Path, Utf8PathBuf};
use figment::value::{Dict, Value};
use figment::{Metadata, Profile, Provider};
use serde_saphyr::Options;

use super::error::file_error;
use crate::ConfigResult;

/// Figment provider over an already parsed YAML mapping.
///
/// Booleans follow YAML 1.2, so `yes` and `on` stay strings.
#[derive(Debug, Clone)]
pub struct SaphyrYaml {
    path: Utf8PathBuf,
    dict: Dict,
}

impl SaphyrYaml {
    /// Parse `contents`, attributing failures to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::File`] when `contents` is not YAML or its
    /// root is not a mapping.
    pub fn parse(path: &Utf8Path, contents: &str) -> ConfigResult<Self> {
        let options = Options {
            strict_booleans: true,
            ..Options::default()
        };
        let value: Value = serde_saphyr::from_str_with_options(contents, options)
            .map_err(|err| file_error(path, err.to_string()))?;
        let actual = value.to_actual();
        let dict = value
            .into_dict()
            .ok_or_else(|| file_error(path, format!("expected a mapping, found {actual}")))?;
        Ok(Self {
            path: path.to_owned(),
            dict,
        })
    }
}

impl Provider for SaphyrYaml {
    fn metadata(&self) -> Metadata {
        Metadata::from("YAML cluster spec", self.path.as_std_path())
    }

    fn data(&self) -> Result<BTreeMap<Profile, Dict>, figment::Error> {
        Ok(Profile::Default.collect(self.dict.clone()))
    }
}
