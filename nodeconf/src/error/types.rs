//! Primary error enum for the configuration engine.

use figment::Error as FigmentError;
use fluent_bundle::FluentError;
use fluent_syntax::parser::ParserError;
use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors that can occur while producing node configuration.
///
/// Assembly never returns these to its caller; they travel through the
/// [`crate::IssueReporter`] side channel instead. Only the cluster spec
/// loader propagates them directly.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The template source could not be parsed in full.
    #[error("failed to parse template '{template}' ({} parser errors)", .errors.len())]
    TemplateParse {
        /// Name of the template being parsed.
        template: String,
        /// Parser errors emitted by Fluent.
        errors: Vec<ParserError>,
    },

    /// Fluent rejected the parsed template while building the bundle.
    #[error("failed to register template '{template}'")]
    TemplateRegistration {
        /// Name of the template being registered.
        template: String,
        /// Errors returned by Fluent during registration.
        errors: Vec<FluentError>,
    },

    /// The template source does not define a message with the template name.
    #[error("template '{template}' defines no message named after it")]
    MissingTemplate {
        /// Name of the missing template message.
        template: String,
    },

    /// Formatting the template produced resolver errors.
    #[error("failed to render template '{template}': {}", describe(.errors))]
    TemplateResolve {
        /// Name of the template being rendered.
        template: String,
        /// Resolver errors emitted by Fluent.
        errors: Vec<FluentError>,
    },

    /// Overlaying one structured configuration onto another failed.
    #[error("failed to merge structured configuration: {source}")]
    StructuredMerge {
        /// Underlying serialisation failure.
        #[source]
        source: serde_json::Error,
    },

    /// Error originating from a cluster spec file.
    #[error("cluster spec file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported by the file loader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error while gathering the cluster spec from providers.
    #[error("failed to gather cluster spec: {0}")]
    Gathering(#[from] Box<FigmentError>),

    /// Multiple errors occurred during a single step.
    #[error("multiple configuration errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

fn describe(errors: &[FluentError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
