//! Template identifiers and the render context.
//!
//! The domain never sees template text. Files in a [`ProjectStructure`] refer
//! to a [`TemplateId`]; a `TemplateStore` adapter supplies the body and a
//! `TemplateRenderer` adapter substitutes the [`RenderContext`] into it.
//!
//! ## Placeholders
//!
//! | Placeholder | Source |
//! |-------------|--------|
//! | `{{name}}` | project name |
//! | `{{module}}` | module path |
//! | `{{archetype}}` | canonical archetype tag |
//! | `{{description}}` | free text, may be empty |
//! | `{{author}}` | free text, may be empty |
//! | `{{toolchain_version}}` | e.g. `1.24` |
//! | `{{output_path}}` | absolute output directory |
//!
//! [`ProjectStructure`]: super::project_structure::ProjectStructure

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::config::ProjectConfig, value_objects::Archetype};

/// Identifier of one template body in the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    GoMod,
    Readme,
    Gitignore,
    MakefileApi,
    MakefileCli,
    MakefileMicroservice,
    MakefileLibrary,
    MainApi,
    MainCli,
    MainMicroservice,
    Config,
    Handler,
    Service,
    Repository,
    Model,
    Middleware,
    Response,
    CliRoot,
    ApiDocs,
    Dockerfile,
    K8sDeployment,
    K8sService,
    LibraryMain,
    LibraryExample,
    UsageDocs,
}

impl TemplateId {
    pub const ALL: [TemplateId; 25] = [
        Self::GoMod,
        Self::Readme,
        Self::Gitignore,
        Self::MakefileApi,
        Self::MakefileCli,
        Self::MakefileMicroservice,
        Self::MakefileLibrary,
        Self::MainApi,
        Self::MainCli,
        Self::MainMicroservice,
        Self::Config,
        Self::Handler,
        Self::Service,
        Self::Repository,
        Self::Model,
        Self::Middleware,
        Self::Response,
        Self::CliRoot,
        Self::ApiDocs,
        Self::Dockerfile,
        Self::K8sDeployment,
        Self::K8sService,
        Self::LibraryMain,
        Self::LibraryExample,
        Self::UsageDocs,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoMod => "go-mod",
            Self::Readme => "readme",
            Self::Gitignore => "gitignore",
            Self::MakefileApi => "makefile-api",
            Self::MakefileCli => "makefile-cli",
            Self::MakefileMicroservice => "makefile-microservice",
            Self::MakefileLibrary => "makefile-library",
            Self::MainApi => "main-api",
            Self::MainCli => "main-cli",
            Self::MainMicroservice => "main-microservice",
            Self::Config => "config",
            Self::Handler => "handler",
            Self::Service => "service",
            Self::Repository => "repository",
            Self::Model => "model",
            Self::Middleware => "middleware",
            Self::Response => "response",
            Self::CliRoot => "cli-root",
            Self::ApiDocs => "api-docs",
            Self::Dockerfile => "dockerfile",
            Self::K8sDeployment => "k8s-deployment",
            Self::K8sService => "k8s-service",
            Self::LibraryMain => "library-main",
            Self::LibraryExample => "library-example",
            Self::UsageDocs => "usage-docs",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substitution environment for one generation run.
///
/// A read-only view over [`ProjectConfig`]; the serialized field names are
/// the placeholder names. Nothing else is bindable from a template.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext<'a> {
    name: &'a str,
    module: &'a str,
    archetype: Archetype,
    description: &'a str,
    author: &'a str,
    toolchain_version: &'a str,
    output_path: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self {
            name: config.name(),
            module: config.module(),
            archetype: config.archetype(),
            description: config.description(),
            author: config.author(),
            toolchain_version: config.toolchain_version(),
            output_path: config.output_path().display().to_string(),
        }
    }

    /// Names of every bindable placeholder.
    pub const FIELDS: [&'static str; 7] = [
        "name",
        "module",
        "archetype",
        "description",
        "author",
        "toolchain_version",
        "output_path",
    ];

    /// Look up a placeholder value by exact field name.
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(self.name),
            "module" => Some(self.module),
            "archetype" => Some(self.archetype.as_str()),
            "description" => Some(self.description),
            "author" => Some(self.author),
            "toolchain_version" => Some(self.toolchain_version),
            "output_path" => Some(&self.output_path),
            _ => None,
        }
    }
}
