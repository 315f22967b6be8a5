//! Handlebars-based template renderer.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled:
//! any `{{placeholder}}` that is not a render-context field fails instead of
//! rendering as an empty string. HTML escaping is disabled; the output is
//! source code and configuration, not markup.
//!
//! Parsing and rendering are separate steps so a failure reports which one
//! broke.

use ::handlebars::{Handlebars, no_escape};
use tracing::trace;

use projo_core::{
    application::{TemplateFailure, ports::TemplateRenderer},
    domain::RenderContext,
};

/// Template renderer using Handlebars.
#[derive(Debug, Clone)]
pub struct HandlebarsRenderer {
    hbs: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Create a new renderer with strict mode enabled and escaping off.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(no_escape);
        Self { hbs }
    }
}

impl Default for HandlebarsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(
        &self,
        name: &str,
        body: &str,
        context: &RenderContext<'_>,
    ) -> Result<String, TemplateFailure> {
        // Registration parses; the registry is per call so `&self` stays shared.
        let mut hbs = self.hbs.clone();
        hbs.register_template_string(name, body)
            .map_err(|e| TemplateFailure::parse(e.to_string()))?;

        let out = hbs
            .render(name, context)
            .map_err(|e| TemplateFailure::render(e.to_string()))?;
        trace!(template = name, bytes = out.len(), "Rendered template");
        Ok(out)
    }
}
