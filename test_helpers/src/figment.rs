//! Helpers for exercising the cluster spec loader inside a `figment::Jail`.
//!
//! A jail gives each test a scratch working directory and restores the
//! environment afterwards, so spec files and `NODECONF_*` variables can be
//! created freely.

use anyhow::{Result, anyhow};
use nodeconf::{ClusterSpec, ClusterSpecLoader};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any displayable error into a [`figment::Error`] so it can cross
/// the jail boundary with `?`.
pub fn figment_error<E: ToString + ?Sized>(err: &E) -> figment::Error {
    figment::Error::from(err.to_string())
}

/// Writes `contents` to `file` inside `jail` and loads it with the default
/// environment prefix.
///
/// # Errors
///
/// Returns a [`figment::Error`] when the file cannot be created or the
/// cluster spec fails to load.
pub fn load_spec(
    jail: &mut figment::Jail,
    file: &str,
    contents: &str,
) -> figment::error::Result<ClusterSpec> {
    jail.create_file(file, contents)?;
    ClusterSpecLoader::new(file)
        .load()
        .map_err(|err| figment_error(err.as_ref()))
}
