//! Structured overlay merging for typed configuration objects.
//!
//! Structured configs are serialised to [`serde_json::Value`] trees, merged
//! field by field, and deserialised back into the destination type. Two modes
//! are supported:
//!
//! - [`MergeMode::Fill`] copies a source field only when the destination
//!   field is empty.
//! - [`MergeMode::Override`] copies every non-empty source field, replacing
//!   whatever the destination holds.
//!
//! A value is empty when it is `null`, `false`, zero, an empty string, an
//! empty array, or an object whose values are all empty. As a consequence an
//! override can never reset a populated field back to its empty value.
//!
//! ```rust
//! use nodeconf::{MergeMode, merge_into};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Deserialize, Serialize)]
//! struct Proxy {
//!     host: String,
//!     port: u16,
//! }
//!
//! let mut base = Proxy { host: "a.com".into(), port: 80 };
//! merge_into(&mut base, &Proxy { host: "b.com".into(), port: 0 }, MergeMode::Override)?;
//! assert_eq!(base.host, "b.com");
//! assert_eq!(base.port, 80);
//! # Ok::<_, std::sync::Arc<nodeconf::ConfigError>>(())
//! ```

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{ConfigResult, result_ext::ConfigResultExt};

/// Policy applied when a field is populated on both sides of a merge.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MergeMode {
    /// Keep populated destination fields; fill only empty ones.
    #[default]
    Fill,
    /// Replace destination fields with every non-empty source field.
    Override,
}

/// Merge `src` into `dst` in place.
///
/// On failure `dst` keeps its pre-merge value.
///
/// # Errors
///
/// Returns [`crate::ConfigError::StructuredMerge`] when either side cannot be
/// serialised or the merged tree no longer deserialises into `T`, for example
/// when `src` supplies a scalar where `T` expects a nested object.
pub fn merge_into<T, S>(dst: &mut T, src: &S, mode: MergeMode) -> ConfigResult<()>
where
    T: Serialize + DeserializeOwned,
    S: Serialize + ?Sized,
{
    *dst = merged(dst, src, mode)?;
    Ok(())
}

/// Merge `src` over a copy of `dst`, returning the result.
///
/// # Errors
///
/// See [`merge_into`].
pub fn merged<T, S>(dst: &T, src: &S, mode: MergeMode) -> ConfigResult<T>
where
    T: Serialize + DeserializeOwned,
    S: Serialize + ?Sized,
{
    let mut target = serde_json::to_value(dst).into_config()?;
    let layer = serde_json::to_value(src).into_config()?;
    overlay_value(&mut target, layer, mode);
    serde_json::from_value(target).into_config()
}

/// Overlay `layer` onto `target` according to `mode`, updating `target` in
/// place.
///
/// Objects merge recursively key by key. Keys missing from `target` are
/// inserted when the layer value is non-empty. Arrays and scalars are treated
/// as opaque leaves.
///
/// ```rust
/// use nodeconf::{MergeMode, overlay_value};
/// use serde_json::json;
///
/// let mut acc = json!({"host": "a.com", "tls": {"enabled": false}});
/// overlay_value(&mut acc, json!({"host": "", "tls": {"enabled": true}}), MergeMode::Override);
/// assert_eq!(acc, json!({"host": "a.com", "tls": {"enabled": true}}));
/// ```
pub fn overlay_value(target: &mut Value, layer: Value, mode: MergeMode) {
    match (target, layer) {
        (Value::Object(target_map), Value::Object(layer_map)) => {
            overlay_object(target_map, layer_map, mode);
        }
        (target, layer) => overlay_leaf(target, layer, mode),
    }
}

fn overlay_object(target: &mut Map<String, Value>, layer: Map<String, Value>, mode: MergeMode) {
    for (key, value) in layer {
        match target.get_mut(&key) {
            Some(existing) => overlay_value(existing, value, mode),
            None if is_empty_value(&value) => {}
            None => {
                target.insert(key, value);
            }
        }
    }
}

fn overlay_leaf(target: &mut Value, layer: Value, mode: MergeMode) {
    let replace = match mode {
        MergeMode::Fill => is_empty_value(target),
        MergeMode::Override => !is_empty_value(&layer),
    };
    if replace {
        *target = layer;
    }
}

/// Whether `value` counts as the zero value of its type.
#[must_use]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.values().all(is_empty_value),
    }
}
