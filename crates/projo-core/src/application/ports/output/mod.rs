//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::application::error::TemplateFailure;
use crate::domain::{RenderContext, TemplateId};
use crate::error::ProjoResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `projo_adapters::filesystem::LocalFilesystem` (production)
/// - `projo_adapters::filesystem::MemoryFilesystem` (dry runs, testing)
///
/// Paths are absolute; the generate service joins them onto the project root.
/// Both writing operations must be idempotent.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing ancestors.
    ///
    /// Succeeds if the directory already exists. Fails if any component is
    /// an existing non-directory.
    fn create_dir_all(&self, path: &Path) -> ProjoResult<()>;

    /// Create or truncate a file and write `content` to it.
    fn write_file(&self, path: &Path, content: &str) -> ProjoResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template body lookup.
///
/// Implemented by:
/// - `projo_adapters::template_store::BuiltinTemplates` (embedded bodies)
/// - `projo_adapters::template_store::InMemoryStore` (overridable, testing)
pub trait TemplateStore: Send + Sync {
    /// The body for `id`, if the store has one.
    fn body(&self, id: TemplateId) -> Option<&str>;

    /// Every identifier the store can serve.
    fn ids(&self) -> Vec<TemplateId>;
}

/// Port for template rendering.
///
/// Implemented by `projo_adapters::renderer::HandlebarsRenderer`.
pub trait TemplateRenderer: Send + Sync {
    /// Parse `body` and render it against `context`.
    ///
    /// `name` identifies the template in error messages. Any placeholder
    /// that is not a render-context field must fail.
    fn render(
        &self,
        name: &str,
        body: &str,
        context: &RenderContext<'_>,
    ) -> Result<String, TemplateFailure>;
}
