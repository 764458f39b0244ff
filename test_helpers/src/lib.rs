//! Test helpers shared across crates.
//!
//! - [`fixtures`] builds cluster specs without spelling out every field;
//! - [`reporter`] records generation issues for later assertions;
//! - [`renderer`] scripts template output per template name;
//! - [`figment`] runs loader code inside a [`::figment::Jail`];
//! - [`text`] inspects generated property documents.

pub mod figment;
pub mod fixtures;
pub mod renderer;
pub mod reporter;
pub mod text;
