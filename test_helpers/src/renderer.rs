//! Scripted template renderer.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use nodeconf::{ConfigError, RenderContext, Rendered, Template, TemplateRenderer};

#[derive(Clone, Debug)]
enum Script {
    Output(String),
    Failure(String),
}

/// Renderer returning canned text per template name.
///
/// Templates without a script render their source verbatim, ignoring the
/// context. Failures return the scripted partial text together with a
/// [`ConfigError::TemplateResolve`].
#[derive(Debug, Default)]
pub struct FixedRenderer {
    scripts: BTreeMap<String, Script>,
    calls: AtomicUsize,
}

impl FixedRenderer {
    /// Renderer without scripts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `text` for the template named `template`.
    #[must_use]
    pub fn with_output(mut self, template: &str, text: &str) -> Self {
        self.scripts
            .insert(template.to_owned(), Script::Output(text.to_owned()));
        self
    }

    /// Fail the template named `template` after producing `partial`.
    #[must_use]
    pub fn with_failure(mut self, template: &str, partial: &str) -> Self {
        self.scripts
            .insert(template.to_owned(), Script::Failure(partial.to_owned()));
        self
    }

    /// Number of render calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TemplateRenderer for FixedRenderer {
    fn render(&self, template: &Template, _context: &RenderContext) -> Rendered {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.scripts.get(template.name()) {
            Some(Script::Output(text)) => Rendered::ok(text.as_str()),
            Some(Script::Failure(partial)) => Rendered::failed(
                partial.as_str(),
                ConfigError::TemplateResolve {
                    template: template.name().to_owned(),
                    errors: Vec::new(),
                },
            ),
            None => Rendered::ok(template.source()),
        }
    }
}
