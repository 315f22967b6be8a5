//! Archetype catalog registry.
//!
//! Each archetype is described exactly once by its [`ArchetypeDef`]: the
//! directories to create eagerly and the file → template table. Resolution
//! is a table lookup; there is no per-archetype construction code.
//!
//! # Adding a New Archetype
//!
//! 1. Add a variant to `Archetype` in `value_objects.rs`
//! 2. Add one [`ArchetypeDef`] entry to [`ARCHETYPE_REGISTRY`]
//! 3. Add any new `TemplateId`s and their bodies in the template store
//! 4. `resolve` needs no change

use crate::domain::{
    entities::{ProjectStructure, TemplateId},
    value_objects::Archetype,
};

/// Static description of one archetype.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeDef {
    /// The archetype this definition describes.
    pub archetype: Archetype,

    /// One-line summary for `projo list` and help output.
    pub summary: &'static str,

    /// Directories relative to the project root, created in order.
    pub directories: &'static [&'static str],

    /// File path pattern → template.
    pub files: &'static [(&'static str, TemplateId)],
}

/// Single source of truth for archetype catalogs.
pub static ARCHETYPE_REGISTRY: &[ArchetypeDef] = &[
    // ── api ──────────────────────────────────────────────────────────────────
    ArchetypeDef {
        archetype: Archetype::Api,
        summary: "REST API server with HTTP handlers",
        directories: &[
            "cmd/api",
            "internal/handler",
            "internal/service",
            "internal/repository",
            "internal/model",
            "internal/middleware",
            "internal/config",
            "pkg/response",
            "pkg/validator",
            "migrations",
            "docs",
            "scripts",
        ],
        files: &[
            ("go.mod", TemplateId::GoMod),
            ("README.md", TemplateId::Readme),
            (".gitignore", TemplateId::Gitignore),
            ("Makefile", TemplateId::MakefileApi),
            ("cmd/api/main.go", TemplateId::MainApi),
            ("internal/config/config.go", TemplateId::Config),
            ("internal/handler/handler.go", TemplateId::Handler),
            ("internal/service/service.go", TemplateId::Service),
            ("internal/repository/repository.go", TemplateId::Repository),
            ("internal/model/model.go", TemplateId::Model),
            ("internal/middleware/middleware.go", TemplateId::Middleware),
            ("pkg/response/response.go", TemplateId::Response),
            ("docs/API.md", TemplateId::ApiDocs),
        ],
    },
    // ── cli ──────────────────────────────────────────────────────────────────
    ArchetypeDef {
        archetype: Archetype::Cli,
        summary: "Command-line tool",
        directories: &[
            "cmd",
            "internal/command",
            "internal/config",
            "pkg/utils",
            "docs",
        ],
        files: &[
            ("go.mod", TemplateId::GoMod),
            ("README.md", TemplateId::Readme),
            (".gitignore", TemplateId::Gitignore),
            ("Makefile", TemplateId::MakefileCli),
            ("cmd/main.go", TemplateId::MainCli),
            ("internal/command/root.go", TemplateId::CliRoot),
            ("internal/config/config.go", TemplateId::Config),
        ],
    },
    // ── microservice ─────────────────────────────────────────────────────────
    ArchetypeDef {
        archetype: Archetype::Microservice,
        summary: "Microservice with HTTP/gRPC and Docker/K8s configs",
        directories: &[
            "cmd/server",
            "internal/handler",
            "internal/service",
            "internal/repository",
            "internal/model",
            "internal/middleware",
            "internal/config",
            "pkg/grpc",
            "pkg/http",
            "proto",
            "migrations",
            "deployments/docker",
            "deployments/k8s",
            "scripts",
        ],
        files: &[
            ("go.mod", TemplateId::GoMod),
            ("README.md", TemplateId::Readme),
            (".gitignore", TemplateId::Gitignore),
            ("Makefile", TemplateId::MakefileMicroservice),
            ("Dockerfile", TemplateId::Dockerfile),
            ("cmd/server/main.go", TemplateId::MainMicroservice),
            ("internal/config/config.go", TemplateId::Config),
            ("internal/handler/handler.go", TemplateId::Handler),
            ("internal/service/service.go", TemplateId::Service),
            ("internal/repository/repository.go", TemplateId::Repository),
            ("internal/model/model.go", TemplateId::Model),
            ("deployments/k8s/deployment.yaml", TemplateId::K8sDeployment),
            ("deployments/k8s/service.yaml", TemplateId::K8sService),
        ],
    },
    // ── library ──────────────────────────────────────────────────────────────
    ArchetypeDef {
        archetype: Archetype::Library,
        summary: "Reusable Go library package",
        directories: &["internal", "examples", "docs"],
        files: &[
            ("go.mod", TemplateId::GoMod),
            ("README.md", TemplateId::Readme),
            (".gitignore", TemplateId::Gitignore),
            ("Makefile", TemplateId::MakefileLibrary),
            ("{{name}}.go", TemplateId::LibraryMain),
            ("examples/main.go", TemplateId::LibraryExample),
            ("docs/USAGE.md", TemplateId::UsageDocs),
        ],
    },
];

// ── Lookup ───────────────────────────────────────────────────────────────────

/// Find the registry entry for an archetype.
pub fn find_archetype(archetype: Archetype) -> Option<&'static ArchetypeDef> {
    ARCHETYPE_REGISTRY.iter().find(|d| d.archetype == archetype)
}

/// Resolve an archetype to its project structure.
///
/// Total over [`Archetype`]. A missing entry yields an empty structure and an
/// invalid directory literal is kept as an error; `validate` rejects both.
pub fn resolve(archetype: Archetype) -> ProjectStructure {
    let mut structure = ProjectStructure::new(archetype);

    let Some(def) = find_archetype(archetype) else {
        return structure;
    };

    for dir in def.directories {
        structure.push_directory(dir);
    }
    for (path, template) in def.files {
        structure.add_file(*path, *template);
    }

    structure
}

/// Every template any archetype refers to (deduplicated, sorted).
pub fn referenced_templates() -> Vec<TemplateId> {
    let mut ids: Vec<TemplateId> = ARCHETYPE_REGISTRY
        .iter()
        .flat_map(|d| d.files.iter().map(|(_, t)| *t))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
