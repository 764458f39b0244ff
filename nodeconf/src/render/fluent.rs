//! Fluent-backed template rendering.

use fluent_bundle::{FluentBundle, FluentResource};
use fluent_syntax::ast::{Expression, InlineExpression, Pattern, PatternElement};
use unic_langid::{LanguageIdentifier, langid};

use super::{RenderContext, Rendered, Template, TemplateRenderer};
use crate::ConfigError;

/// Placeables `fluent-bundle` resolves in one `format_pattern` call before
/// giving up with `TooManyPlaceables`.
const PLACEABLE_BUDGET: usize = 100;

/// Renders templates written as Fluent resources.
///
/// A bundle is built per call and the renderer holds no mutable state.
/// Unicode isolation marks are never inserted around placeables.
///
/// Failures degrade instead of aborting:
///
/// - parser errors keep every message that did parse;
/// - a missing message yields empty text;
/// - resolver errors keep the partially formatted text, with unresolved
///   placeables written as `{$name}`.
///
/// Messages with more placeables than `fluent-bundle` resolves in one pass
/// are formatted in consecutive slices and joined, so large property
/// templates render in full.
#[derive(Clone, Debug)]
pub struct FluentRenderer {
    locale: LanguageIdentifier,
}

impl FluentRenderer {
    /// Create a renderer using the `en-US` locale.
    #[must_use]
    pub fn new() -> Self {
        Self::with_locale(langid!("en-US"))
    }

    /// Create a renderer for `locale`.
    #[must_use]
    pub const fn with_locale(locale: LanguageIdentifier) -> Self {
        Self { locale }
    }

    /// Locale used for number formatting and plural selection.
    #[must_use]
    pub const fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }
}

impl Default for FluentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for FluentRenderer {
    fn render(&self, template: &Template, context: &RenderContext) -> Rendered {
        let mut errors = Vec::new();
        let resource = match FluentResource::try_new(template.source().to_owned()) {
            Ok(resource) => resource,
            Err((partial, parse_errors)) => {
                errors.push(ConfigError::TemplateParse {
                    template: template.name().to_owned(),
                    errors: parse_errors,
                });
                partial
            }
        };

        let mut bundle: FluentBundle<&FluentResource> =
            FluentBundle::new(vec![self.locale.clone()]);
        bundle.set_use_isolating(false);
        if let Err(registration_errors) = bundle.add_resource(&resource) {
            errors.push(ConfigError::TemplateRegistration {
                template: template.name().to_owned(),
                errors: registration_errors,
            });
        }

        let id = template.message_id();
        let text = match bundle.get_message(&id).and_then(|message| message.value()) {
            Some(pattern) => {
                let args = context.to_fluent_args();
                let mut resolve_errors = Vec::new();
                let formatted = if pattern_weight(pattern) <= PLACEABLE_BUDGET {
                    bundle
                        .format_pattern(pattern, Some(&args), &mut resolve_errors)
                        .into_owned()
                } else {
                    let mut joined = String::new();
                    for slice in sliced(pattern) {
                        joined.push_str(&bundle.format_pattern(
                            &slice,
                            Some(&args),
                            &mut resolve_errors,
                        ));
                    }
                    joined
                };
                if !resolve_errors.is_empty() {
                    errors.push(ConfigError::TemplateResolve {
                        template: template.name().to_owned(),
                        errors: resolve_errors,
                    });
                }
                formatted
            }
            None => {
                errors.push(ConfigError::MissingTemplate {
                    template: template.name().to_owned(),
                });
                String::new()
            }
        };

        Rendered {
            text,
            error: ConfigError::try_aggregate(errors),
        }
    }
}

/// Split `pattern` into consecutive patterns that each stay within
/// [`PLACEABLE_BUDGET`]. A single element heavier than the budget gets a
/// slice of its own.
fn sliced<'s>(pattern: &Pattern<&'s str>) -> Vec<Pattern<&'s str>> {
    let mut slices = Vec::new();
    let mut current = Vec::new();
    let mut weight = 0;
    for element in &pattern.elements {
        let cost = element_weight(element);
        if !current.is_empty() && weight + cost > PLACEABLE_BUDGET {
            slices.push(Pattern {
                elements: std::mem::take(&mut current),
            });
            weight = 0;
        }
        weight += cost;
        current.push(element.clone());
    }
    if !current.is_empty() {
        slices.push(Pattern { elements: current });
    }
    slices
}

/// Upper bound on the placeables resolved while formatting `pattern`.
fn pattern_weight(pattern: &Pattern<&str>) -> usize {
    pattern.elements.iter().map(element_weight).sum()
}

fn element_weight(element: &PatternElement<&str>) -> usize {
    match element {
        PatternElement::TextElement { .. } => 0,
        PatternElement::Placeable { expression } => 1 + expression_weight(expression),
    }
}

// Only the selected variant is resolved, so the heaviest one bounds a select.
fn expression_weight(expression: &Expression<&str>) -> usize {
    match expression {
        Expression::Select { selector, variants } => {
            inline_weight(selector)
                + variants
                    .iter()
                    .map(|variant| pattern_weight(&variant.value))
                    .max()
                    .unwrap_or(0)
        }
        Expression::Inline(inline) => inline_weight(inline),
    }
}

fn inline_weight(inline: &InlineExpression<&str>) -> usize {
    match inline {
        InlineExpression::Placeable { expression } => expression_weight(expression),
        _ => 0,
    }
}
