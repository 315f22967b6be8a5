//! Compile-time embedded template bodies.
//!
//! Each body is a `.hbs` file under `templates/`, loaded with
//! [`include_str!`]. Paths are relative to this source file.
//!
//! ## Adding a new template
//!
//! 1. Place the `.hbs` file under the appropriate `templates/` subdirectory
//! 2. Add a `TemplateId` variant in projo-core
//! 3. Add the match arm in [`builtin_body`]
//!
//! Do NOT use placeholders other than the render-context fields; rendering
//! is strict and `projo list --verify` will fail.

use projo_core::{application::ports::TemplateStore, domain::TemplateId};

macro_rules! template {
    ($path:literal) => {
        include_str!(concat!("../../templates/", $path))
    };
}

/// The template body shipped for `id`.
pub fn builtin_body(id: TemplateId) -> &'static str {
    match id {
        // common
        TemplateId::GoMod => template!("common/go.mod.hbs"),
        TemplateId::Readme => template!("common/README.md.hbs"),
        TemplateId::Gitignore => template!("common/gitignore.hbs"),

        // makefiles
        TemplateId::MakefileApi => template!("makefile/api.hbs"),
        TemplateId::MakefileCli => template!("makefile/cli.hbs"),
        TemplateId::MakefileMicroservice => template!("makefile/microservice.hbs"),
        TemplateId::MakefileLibrary => template!("makefile/library.hbs"),

        // entrypoints
        TemplateId::MainApi => template!("go/main_api.go.hbs"),
        TemplateId::MainCli => template!("go/main_cli.go.hbs"),
        TemplateId::MainMicroservice => template!("go/main_microservice.go.hbs"),

        // service layers
        TemplateId::Config => template!("go/config.go.hbs"),
        TemplateId::Handler => template!("go/handler.go.hbs"),
        TemplateId::Service => template!("go/service.go.hbs"),
        TemplateId::Repository => template!("go/repository.go.hbs"),
        TemplateId::Model => template!("go/model.go.hbs"),
        TemplateId::Middleware => template!("go/middleware.go.hbs"),
        TemplateId::Response => template!("go/response.go.hbs"),
        TemplateId::CliRoot => template!("go/cli_root.go.hbs"),

        // library
        TemplateId::LibraryMain => template!("go/library_main.go.hbs"),
        TemplateId::LibraryExample => template!("go/library_example.go.hbs"),

        // docs
        TemplateId::ApiDocs => template!("docs/API.md.hbs"),
        TemplateId::UsageDocs => template!("docs/USAGE.md.hbs"),

        // deployment
        TemplateId::Dockerfile => template!("deploy/Dockerfile.hbs"),
        TemplateId::K8sDeployment => template!("deploy/k8s_deployment.yaml.hbs"),
        TemplateId::K8sService => template!("deploy/k8s_service.yaml.hbs"),
    }
}

/// The built-in template catalog.
///
/// Stateless; every body is a `&'static str` compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplates {
    fn body(&self, id: TemplateId) -> Option<&str> {
        Some(builtin_body(id))
    }

    fn ids(&self) -> Vec<TemplateId> {
        TemplateId::ALL.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_a_body() {
        for id in TemplateId::ALL {
            assert!(!builtin_body(id).trim().is_empty(), "{id} is empty");
        }
    }

    #[test]
    fn go_mod_declares_module_and_toolchain() {
        let body = builtin_body(TemplateId::GoMod);
        assert!(body.starts_with("module {{module}}"));
        assert!(body.contains("go {{toolchain_version}}"));
    }

    #[test]
    fn bodies_use_only_lowercase_placeholders() {
        for id in TemplateId::ALL {
            assert!(!builtin_body(id).contains("{{."), "{id} uses a dotted placeholder");
        }
    }
}
