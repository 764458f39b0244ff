//! Property documents and the layers they parse into.
//!
//! A property document is a newline-separated list of `key=value` lines.
//! Lines without a `=` separator are skipped rather than failing the whole
//! document. Keys and values are opaque: nothing is trimmed or unescaped.
//!
//! Layers are backed by a [`BTreeMap`], so serialisation always emits lines
//! in ascending key order regardless of how the layer was built, and equal
//! layers serialise to identical bytes.
//!
//! ```rust
//! use nodeconf::ConfigLayer;
//!
//! let layer = ConfigLayer::parse("b=2\nnot a property\na=x=y");
//! assert_eq!(layer.get("a"), Some("x=y"));
//! assert_eq!(layer.to_document(), "a=x=y\nb=2");
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::{Deserialize, Serialize};

const SEPARATOR: char = '=';

/// One source of configuration expressed as a flat key/value mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigLayer(BTreeMap<String, String>);

impl ConfigLayer {
    /// Create an empty layer.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Parse a property document into a layer.
    ///
    /// Each line is split at its first `=`; the remainder, including further
    /// `=` characters, becomes the value. Lines without a separator are
    /// skipped. When a key repeats, the last occurrence wins.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut layer = Self::new();
        for (index, line) in text.split('\n').enumerate() {
            match line.split_once(SEPARATOR) {
                Some((key, value)) => {
                    layer.insert(key, value);
                }
                None if line.is_empty() => {}
                None => {
                    tracing::trace!(line = index + 1, "skipping property line without separator");
                }
            }
        }
        layer
    }

    /// Serialise the layer as a property document.
    ///
    /// Lines are sorted by key and joined with `\n`; no trailing newline is
    /// appended. An empty layer serialises to an empty string.
    #[must_use]
    pub fn to_document(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{key}{SEPARATOR}{value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Insert `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether the layer defines `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries in the layer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the layer holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Consume the layer, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }

    pub(crate) fn entry(&mut self, key: String) -> btree_map::Entry<'_, String, String> {
        self.0.entry(key)
    }
}

impl fmt::Display for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key}{SEPARATOR}{value}")?;
        }
        Ok(())
    }
}

impl From<BTreeMap<String, String>> for ConfigLayer {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigLayer
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for ConfigLayer {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests;
