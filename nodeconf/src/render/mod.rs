//! Rendering of structured context into property documents.
//!
//! `TemplateRenderer` abstracts the templating capability so the assembler
//! never depends on a concrete engine. Rendering never fails outright: a
//! renderer returns whatever text it produced together with an optional
//! error, and the caller decides how to report it. A broken template for one
//! document therefore cannot block generation of the others.
//!
//! The default implementation, [`FluentRenderer`], treats a template source as
//! a Fluent resource and formats the message named after the template. Slots
//! from the [`RenderContext`] become Fluent variables, so templates use
//! `{ $slot }` for substitution and select expressions for conditional
//! blocks:
//!
//! ```rust
//! use nodeconf::{FluentRenderer, RenderContext, Template, TemplateRenderer};
//!
//! let template = Template::new(
//!     "example",
//!     "example =\n    host={ $host }\n    secure={ $secure ->\n        [true] yes\n       *[other] no\n    }\n",
//! );
//! let context = RenderContext::new().with("host", "a.com").with("secure", true);
//! let rendered = FluentRenderer::new().render(&template, &context);
//! assert!(rendered.is_ok());
//! assert_eq!(rendered.text, "host=a.com\nsecure=yes");
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use fluent_bundle::{FluentArgs, FluentValue};

use crate::ConfigError;

mod fluent;

pub use fluent::FluentRenderer;

/// Renders a template against a context.
///
/// Implementations must be thread-safe so a single renderer can serve
/// concurrent assemblies for different nodes.
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with the values in `context`.
    ///
    /// Failures are returned in [`Rendered::error`] next to any partial text
    /// produced before the failure.
    fn render(&self, template: &Template, context: &RenderContext) -> Rendered;
}

/// Output of a render call: the produced text and any failure encountered.
#[derive(Debug, Default)]
pub struct Rendered {
    /// Text produced by the renderer, possibly partial or empty.
    pub text: String,
    /// Failure encountered while rendering, if any.
    pub error: Option<ConfigError>,
}

impl Rendered {
    /// A successful render.
    #[must_use]
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: None,
        }
    }

    /// A render that failed after producing `text`.
    #[must_use]
    pub fn failed(text: impl Into<String>, error: ConfigError) -> Self {
        Self {
            text: text.into(),
            error: Some(error),
        }
    }

    /// Whether rendering completed without errors.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Split into text and error.
    #[must_use]
    pub fn into_parts(self) -> (String, Option<ConfigError>) {
        (self.text, self.error)
    }
}

/// A named template source.
///
/// For [`FluentRenderer`] the source is a Fluent resource and the name is the
/// id of the message to format. Dots in the name are normalised to dashes,
/// so `nifi.properties` selects the message `nifi-properties`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    name: String,
    source: Cow<'static, str>,
}

impl Template {
    /// Create a template from a name and source text.
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn message_id(&self) -> Cow<'_, str> {
        normalize_identifier(&self.name)
    }
}

/// Value bound to a context slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotValue {
    /// Free text, including pre-rendered sub-blocks.
    Text(String),
    /// Integer value.
    Number(i64),
    /// Boolean rendered as `true` or `false`.
    Flag(bool),
}

impl SlotValue {
    fn to_fluent(&self) -> FluentValue<'_> {
        match self {
            Self::Text(text) => FluentValue::from(text.as_str()),
            Self::Number(number) => FluentValue::from(*number),
            Self::Flag(true) => FluentValue::from("true"),
            Self::Flag(false) => FluentValue::from("false"),
        }
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
            Self::Flag(flag) => write!(f, "{flag}"),
        }
    }
}

impl From<String> for SlotValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SlotValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<&String> for SlotValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for SlotValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<i64> for SlotValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for SlotValue {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

/// Named slots passed to a template.
///
/// Slot names are normalised like template names (`.` becomes `-`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderContext {
    slots: BTreeMap<String, SlotValue>,
}

impl RenderContext {
    /// Create an empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Bind `value` to `name`, returning the context.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<SlotValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind an optional value; `None` binds an empty string.
    #[must_use]
    pub fn with_optional<V: Into<SlotValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self.with(name, String::new()),
        }
    }

    /// Bind `value` to `name` in place.
    pub fn insert(&mut self, name: &str, value: impl Into<SlotValue>) {
        self.slots
            .insert(normalize_identifier(name).into_owned(), value.into());
    }

    /// Value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SlotValue> {
        self.slots.get(normalize_identifier(name).as_ref())
    }

    /// Number of bound slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slots are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over slots in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlotValue)> {
        self.slots.iter().map(|(name, value)| (name.as_str(), value))
    }

    fn to_fluent_args(&self) -> FluentArgs<'_> {
        let mut args = FluentArgs::with_capacity(self.slots.len());
        for (name, value) in &self.slots {
            args.set(name.as_str(), value.to_fluent());
        }
        args
    }
}

fn normalize_identifier(id: &str) -> Cow<'_, str> {
    if id.contains('.') {
        Cow::Owned(id.replace('.', "-"))
    } else {
        Cow::Borrowed(id)
    }
}

#[cfg(test)]
mod tests;
