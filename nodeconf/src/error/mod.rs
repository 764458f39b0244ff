//! Error types produced while rendering, merging, and loading configuration.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::ConfigError;
