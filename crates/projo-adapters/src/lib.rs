//! Infrastructure adapters for projo.
//!
//! This crate implements the ports defined in `projo-core::application::ports`.
//! It contains all filesystem I/O and the template engine.

pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::HandlebarsRenderer;
pub use template_store::{BuiltinTemplates, InMemoryStore};
