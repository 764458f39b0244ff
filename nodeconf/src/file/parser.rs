//! Format-specific parsing of spec files.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Format, Json};
#[cfg(feature = "toml")]
use figment::providers::Toml;

use crate::ConfigResult;

use super::error::file_error;
#[cfg(not(all(feature = "toml", feature = "yaml")))]
use super::error::feature_disabled;
#[cfg(feature = "yaml")]
use super::yaml::SaphyrYaml;

/// Parse spec data according to the file extension.
///
/// `.json` selects JSON, `.yaml` and `.yml` select YAML, and anything else is
/// read as TOML. Contents are validated up front so syntax errors carry the
/// file path.
///
/// # Errors
///
/// Returns a [`crate::ConfigError::File`] if the contents fail to parse or the
/// required feature is disabled.
pub(super) fn parse_spec_by_format(path: &Utf8Path, data: &str) -> ConfigResult<Figment> {
    let ext = path.extension().map(str::to_ascii_lowercase);
    let figment = match ext.as_deref() {
        Some("json") => {
            serde_json::from_str::<serde_json::Value>(data).map_err(|e| file_error(path, e))?;
            Figment::from(Json::string(data))
        }
        Some("yaml" | "yml") => {
            #[cfg(feature = "yaml")]
            {
                Figment::from(SaphyrYaml::parse(path, data)?)
            }
            #[cfg(not(feature = "yaml"))]
            {
                return Err(feature_disabled(path, "yaml"));
            }
        }
        _ => {
            #[cfg(feature = "toml")]
            {
                toml::from_str::<toml::Value>(data).map_err(|e| file_error(path, e))?;
                Figment::from(Toml::string(data))
            }
            #[cfg(not(feature = "toml"))]
            {
                return Err(feature_disabled(path, "toml"));
            }
        }
    };

    Ok(figment)
}
