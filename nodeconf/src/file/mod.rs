//! Loading of cluster specs from files and the environment.
//!
//! [`ClusterSpecLoader`] reads a spec file, picks a parser from its
//! extension, and layers prefixed environment variables over the result with
//! Figment. Nested fields are addressed with `__`, so
//! `NODECONF_READ_ONLY_CONFIG__NODE_PROPERTIES__WEB_PROXY_HOST` sets
//! `read_only_config.node_properties.web_proxy_host`.

mod error;
mod helpers;
mod parser;
#[cfg(feature = "yaml")]
mod yaml;

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::Env;

use crate::model::ClusterSpec;
use crate::{ConfigGatherExt, ConfigResult};

#[cfg(feature = "yaml")]
pub use yaml::SaphyrYaml;

/// Environment prefix applied by [`ClusterSpecLoader::new`].
pub const DEFAULT_ENV_PREFIX: &str = "NODECONF_";

/// Loads a [`ClusterSpec`] from a file plus environment overrides.
///
/// ```rust,no_run
/// use nodeconf::ClusterSpecLoader;
///
/// # fn run() -> nodeconf::ConfigResult<()> {
/// let cluster = ClusterSpecLoader::new("cluster.yaml").load()?;
/// println!("{} nodes", cluster.nodes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterSpecLoader {
    path: Utf8PathBuf,
    env_prefix: Option<String>,
}

impl ClusterSpecLoader {
    /// Loader for the cluster spec at `path`, honouring [`DEFAULT_ENV_PREFIX`].
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            env_prefix: Some(DEFAULT_ENV_PREFIX.to_owned()),
        }
    }

    /// Read environment overrides from variables starting with `prefix`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Ignore the environment entirely.
    #[must_use]
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Path of the cluster spec file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Build the Figment combining the cluster spec file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::File`] when the file cannot be read or
    /// parsed.
    pub fn figment(&self) -> ConfigResult<Figment> {
        let data = helpers::read_to_string(&self.path)
            .map_err(|err| error::file_error(&self.path, err))?;
        let mut figment = parser::parse_spec_by_format(&self.path, &data)?;
        if let Some(prefix) = &self.env_prefix {
            figment = figment.merge(Env::prefixed(prefix).split("__"));
        }
        Ok(figment)
    }

    /// Load the cluster spec.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::File`] when the file cannot be read or
    /// parsed, and [`crate::ConfigError::Gathering`] when the combined values
    /// do not describe a cluster.
    pub fn load(&self) -> ConfigResult<ClusterSpec> {
        let cluster: ClusterSpec = self.figment()?.extract().into_config_gathering()?;
        tracing::debug!(
            path = %self.path,
            cluster = %cluster.name,
            nodes = cluster.nodes.len(),
            "loaded cluster spec"
        );
        Ok(cluster)
    }
}
