//! Generate Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Resolve the archetype to its project structure
//! 2. Create the project root and every directory
//! 3. Render and write every file
//!
//! It stops at the first failure. Output written before the failure is left
//! on disk; re-running overwrites it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer, TemplateStore},
        services::render::{render_body, render_path},
    },
    domain::{
        Archetype, DomainValidator as validator, ProjectConfig, ProjectStructure, RelativePath,
        RenderContext, resolve,
    },
    error::ProjoResult,
};

/// What a generation run would do, computed without writing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    pub name: String,
    pub module: String,
    pub archetype: Archetype,
    pub description: String,
    pub author: String,
    pub toolchain_version: String,
    pub destination: PathBuf,
    /// Whether the destination already exists (files in it may be overwritten).
    pub destination_exists: bool,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Summary of a successful generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub archetype: Archetype,
    pub destination: PathBuf,
    /// Number of catalog directories created.
    pub directories: usize,
    /// Number of files written.
    pub files: usize,
    /// Written files, relative to `destination`.
    pub written_files: Vec<PathBuf>,
}

/// Main generation service.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use projo_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     Box::new(store),      // impl TemplateStore
    ///     Box::new(renderer),   // impl TemplateRenderer
    ///     Box::new(filesystem), // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Describe the run for `config` without writing anything.
    pub fn plan(&self, config: &ProjectConfig) -> ProjoResult<GenerationPlan> {
        let structure = resolve(config.archetype());
        validator::validate_project_structure(&structure)?;

        let context = RenderContext::new(config);
        let files = structure
            .files()
            .map(|f| render_path(self.renderer.as_ref(), f, &context).map(RelativePath::into_path_buf))
            .collect::<ProjoResult<Vec<_>>>()?;
        let destination = config.project_root();

        Ok(GenerationPlan {
            name: config.name().into(),
            module: config.module().into(),
            archetype: config.archetype(),
            description: config.description().into(),
            author: config.author().into(),
            toolchain_version: config.toolchain_version().into(),
            destination_exists: self.filesystem.exists(&destination),
            destination,
            directories: structure
                .directories()
                .map(|d| d.as_path().to_path_buf())
                .collect(),
            files,
        })
    }

    /// Generate the project described by `config`.
    ///
    /// This is the main use case: resolve, validate, materialize.
    #[instrument(
        skip_all,
        fields(
            project = %config.name(),
            archetype = %config.archetype(),
            run_id = tracing::field::Empty,
        )
    )]
    pub fn generate(&self, config: &ProjectConfig) -> ProjoResult<GenerationReport> {
        let structure = resolve(config.archetype());
        validator::validate_project_structure(&structure)?;
        self.materialize(config, &structure)
    }

    /// Materialize an already-resolved structure under `config.project_root()`.
    ///
    /// All directories are created before any file. Each file is rendered
    /// fully in memory and then written in one call, so no handle outlives
    /// its entry.
    pub fn materialize(
        &self,
        config: &ProjectConfig,
        structure: &ProjectStructure,
    ) -> ProjoResult<GenerationReport> {
        let run_id = Uuid::new_v4();
        Span::current().record("run_id", tracing::field::display(run_id));

        let root = config.project_root();
        let context = RenderContext::new(config);
        info!(destination = %root.display(), "Generating project");

        // Paths are rendered up front; they need no I/O.
        let files = structure
            .files()
            .map(|f| render_path(self.renderer.as_ref(), f, &context).map(|p| (f, p)))
            .collect::<ProjoResult<Vec<_>>>()?;

        self.filesystem.create_dir_all(&root)?;
        self.create_directories(&root, structure, files.iter().map(|(_, p)| p))?;

        let mut written_files = Vec::with_capacity(files.len());
        for (file, path) in &files {
            let content = render_body(
                self.store.as_ref(),
                self.renderer.as_ref(),
                file,
                path,
                &context,
            )?;
            self.filesystem.write_file(&root.join(path), &content)?;
            debug!(path = %path, template = %file.template, bytes = content.len(), "Wrote file");
            written_files.push(path.as_path().to_path_buf());
        }

        info!(
            directories = structure.directory_count(),
            files = written_files.len(),
            "Generation completed successfully"
        );

        Ok(GenerationReport {
            run_id,
            generated_at: Utc::now(),
            archetype: structure.archetype(),
            destination: root,
            directories: structure.directory_count(),
            files: written_files.len(),
            written_files,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Create the catalog directories, then any file parent the catalog omits.
    fn create_directories<'a>(
        &self,
        root: &Path,
        structure: &ProjectStructure,
        file_paths: impl Iterator<Item = &'a RelativePath>,
    ) -> ProjoResult<()> {
        for dir in structure.directories() {
            self.filesystem.create_dir_all(&root.join(dir))?;
            debug!(path = %dir, "Created directory");
        }

        let listed: BTreeSet<&Path> = structure.directories().map(RelativePath::as_path).collect();
        let missing: BTreeSet<&Path> = file_paths
            .filter_map(RelativePath::parent)
            .filter(|p| !listed.iter().any(|d| d.starts_with(p)))
            .collect();
        for parent in missing {
            self.filesystem.create_dir_all(&root.join(parent))?;
            debug!(path = %parent.display(), "Created file parent directory");
        }

        Ok(())
    }
}
