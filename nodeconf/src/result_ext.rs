//! Extensions for mapping errors to `ConfigResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(e.into()))`
//! patterns when converting external error types into the crate's
//! `ConfigResult<T>` alias (`Result<T, Arc<ConfigError>>`).
//!
//! # Examples
//!
//! ```
//! use nodeconf::{ConfigResult, ConfigResultExt};
//!
//! fn serialise() -> ConfigResult<serde_json::Value> {
//!     // serde_json::Error implements Into<ConfigError>
//!     serde_json::to_value(42).into_config()
//! }
//! ```

use crate::{ConfigError, ConfigResult};
use std::sync::Arc;

/// Generic extension for mapping any `Result<T, E>` with `E: Into<ConfigError>`
/// into a `ConfigResult<T>`.
pub trait ConfigResultExt<T, E> {
    /// Convert `Result<T, E>` into `ConfigResult<T>` using `Into<ConfigError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<ConfigError>`.
    fn into_config(self) -> ConfigResult<T>;
}

impl<T, E> ConfigResultExt<T, E> for Result<T, E>
where
    E: Into<ConfigError>,
{
    fn into_config(self) -> ConfigResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Extension tailored to mapping `figment::Error` into a gathering failure.
pub trait ConfigGatherExt<T> {
    /// Convert `Result<T, figment::Error>` into `ConfigResult<T>` as a
    /// [`ConfigError::Gathering`].
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::Gathering` wrapped in `Arc` when the input is
    /// `Err`.
    fn into_config_gathering(self) -> ConfigResult<T>;
}

impl<T> ConfigGatherExt<T> for Result<T, figment::Error> {
    fn into_config_gathering(self) -> ConfigResult<T> {
        self.map_err(|e| Arc::new(ConfigError::gathering(e)))
    }
}
