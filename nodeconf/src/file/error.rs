//! Error constructors shared by spec loading helpers.

use std::error::Error;
use std::sync::Arc;

use camino::Utf8Path;

use crate::ConfigError;

/// Construct a [`ConfigError::File`] for a spec path.
pub(super) fn file_error(
    path: &Utf8Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<ConfigError> {
    Arc::new(ConfigError::File {
        path: path.as_std_path().to_path_buf(),
        source: err.into(),
    })
}

#[cfg(not(all(feature = "toml", feature = "yaml")))]
pub(super) fn feature_disabled(path: &Utf8Path, feature: &str) -> Arc<ConfigError> {
    file_error(
        path,
        std::io::Error::other(format!(
            "{feature} feature disabled: enable the '{feature}' feature to support this file format"
        )),
    )
}
