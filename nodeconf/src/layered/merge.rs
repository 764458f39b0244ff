//! Fill-only-if-absent merge for flat layers.

use crate::ConfigLayer;

/// Copy entries of `src` into `dst` for keys `dst` does not define.
///
/// Keys present in both keep the value from `dst`, even when that value is
/// empty. Structured fields such as `web_proxy_host` are the way to set a key
/// the template always emits.
///
/// # Examples
///
/// ```rust
/// use nodeconf::{ConfigLayer, merge_fill_only};
///
/// let mut base = ConfigLayer::parse("a=1\nb=2");
/// merge_fill_only(&mut base, &ConfigLayer::parse("b=9\nc=3"));
/// assert_eq!(base.get("b"), Some("2"));
/// assert_eq!(base.get("c"), Some("3"));
/// ```
pub fn merge_fill_only(dst: &mut ConfigLayer, src: &ConfigLayer) {
    for (key, value) in src.iter() {
        dst.entry(key.to_owned())
            .or_insert_with(|| value.to_owned());
    }
}

/// By-value form of [`merge_fill_only`].
#[must_use]
pub fn filled_from(mut dst: ConfigLayer, src: &ConfigLayer) -> ConfigLayer {
    merge_fill_only(&mut dst, src);
    dst
}
