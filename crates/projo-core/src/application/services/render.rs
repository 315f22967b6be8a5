//! Path and body rendering shared by the services.

use crate::{
    application::{
        ApplicationError,
        ports::{TemplateRenderer, TemplateStore},
    },
    domain::{DomainValidator, FileSpec, RelativePath, RenderContext},
    error::ProjoResult,
};

/// Render placeholders in a file path pattern.
///
/// The result must still be a relative path below the project root.
pub(crate) fn render_path(
    renderer: &dyn TemplateRenderer,
    file: &FileSpec,
    context: &RenderContext<'_>,
) -> ProjoResult<RelativePath> {
    let rendered = if file.path.contains("{{") {
        renderer
            .render(&format!("path:{}", file.path), &file.path, context)
            .map_err(|f| ApplicationError::template(&file.path, f))?
    } else {
        file.path.clone()
    };

    Ok(DomainValidator::validate_rendered_path(&rendered)?)
}

/// Look up and render the body of one file.
pub(crate) fn render_body(
    store: &dyn TemplateStore,
    renderer: &dyn TemplateRenderer,
    file: &FileSpec,
    path: &RelativePath,
    context: &RenderContext<'_>,
) -> ProjoResult<String> {
    let body = store
        .body(file.template)
        .ok_or_else(|| ApplicationError::TemplateNotFound {
            id: file.template,
            path: path.to_string(),
        })?;

    Ok(renderer
        .render(file.template.as_str(), body, context)
        .map_err(|f| ApplicationError::template(path.to_string(), f))?)
}
