//! Catalog Service - archetype listing and template verification.
//!
//! Separated from GenerateService because neither operation writes files.

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    application::{
        ports::{TemplateRenderer, TemplateStore},
        services::render::{render_body, render_path},
    },
    domain::{
        ARCHETYPE_REGISTRY, Archetype, ProjectConfig, RenderContext, catalog::referenced_templates,
        resolve,
    },
    error::ProjoResult,
};

/// Information about an archetype for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchetypeInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub summary: &'static str,
    pub directories: usize,
    pub files: usize,
}

/// Outcome of [`CatalogService::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub archetypes: usize,
    pub files: usize,
    pub templates: usize,
}

/// Service for catalog queries.
pub struct CatalogService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(store: Box<dyn TemplateStore>, renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { store, renderer }
    }

    /// List every archetype in catalog order.
    pub fn list(&self) -> Vec<ArchetypeInfo> {
        ARCHETYPE_REGISTRY
            .iter()
            .map(|def| ArchetypeInfo {
                name: def.archetype.as_str(),
                aliases: def.archetype.aliases(),
                summary: def.summary,
                directories: def.directories.len(),
                files: def.files.len(),
            })
            .collect()
    }

    /// Render every catalog file of every archetype against a probe
    /// configuration.
    ///
    /// Catches placeholder typos and missing bodies without touching the
    /// filesystem. Stops at the first broken template.
    pub fn verify(&self) -> ProjoResult<VerifyReport> {
        let mut files = 0;

        for def in ARCHETYPE_REGISTRY {
            let config = probe_config(def.archetype)?;
            let context = RenderContext::new(&config);
            let structure = resolve(def.archetype);
            structure.validate()?;

            for file in structure.files() {
                let path = render_path(self.renderer.as_ref(), file, &context)?;
                render_body(
                    self.store.as_ref(),
                    self.renderer.as_ref(),
                    file,
                    &path,
                    &context,
                )?;
                debug!(archetype = %def.archetype, path = %path, "Template verified");
                files += 1;
            }
        }

        let templates = referenced_templates();
        info!(files, templates = templates.len(), "All templates verified");
        Ok(VerifyReport {
            archetypes: ARCHETYPE_REGISTRY.len(),
            files,
            templates: templates.len(),
        })
    }
}

fn probe_config(archetype: Archetype) -> ProjoResult<ProjectConfig> {
    Ok(ProjectConfig::builder()
        .name("probe")
        .module("example.com/probe")
        .archetype(archetype)
        .description("Probe project")
        .author("projo")
        .output_path("/tmp")
        .build()?)
}
