//! Application ports (traits) for external dependencies.
//!
//! Adapters in `projo-adapters` implement these.
//!
//! - `Filesystem`: directory and file creation
//! - `TemplateStore`: template body lookup
//! - `TemplateRenderer`: placeholder substitution

pub mod output;

pub use output::{Filesystem, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::MockFilesystem;
