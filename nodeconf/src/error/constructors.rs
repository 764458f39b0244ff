//! Constructors and aggregation helpers for `ConfigError`.

use std::sync::Arc;

use figment::Error as FigmentError;

use super::{AggregatedErrors, ConfigError};

impl ConfigError {
    /// Tries to build a [`ConfigError`] from an iterator of errors.
    ///
    /// Returns `None` for an empty iterator, the error itself when exactly one
    /// uniquely owned error is supplied, and [`Self::Aggregate`] otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.is_empty() {
            return None;
        }
        Some(if arcs.len() == 1 {
            let last = arcs.pop()?;
            match Arc::try_unwrap(last) {
                Ok(err) => err,
                Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
            }
        } else {
            Self::Aggregate(Box::new(AggregatedErrors::new(arcs)))
        })
    }

    /// Construct a structured merge error from a [`serde_json::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use nodeconf::ConfigError;
    /// let source = serde_json::from_str::<u8>("\"x\"").unwrap_err();
    /// let e = ConfigError::structured_merge(source);
    /// assert!(matches!(e, ConfigError::StructuredMerge { .. }));
    /// ```
    #[must_use]
    pub const fn structured_merge(source: serde_json::Error) -> Self {
        Self::StructuredMerge { source }
    }

    /// Construct a gathering error from a [`figment::Error`].
    #[must_use]
    pub fn gathering(source: FigmentError) -> Self {
        Self::Gathering(Box::new(source))
    }
}
