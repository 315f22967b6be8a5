//! Core domain layer for projo.
//!
//! Pure data and validation: archetypes, project configuration, the archetype
//! catalog, and the render context. Filesystem access and template rendering
//! happen behind the ports in the application layer.
//!
//! - **No I/O**: resolution is a table lookup
//! - **Immutable entities**: configuration is validated once and never mutated
//! - **Catalogs as data**: see [`catalog::ARCHETYPE_REGISTRY`]
pub mod catalog;
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use catalog::{ARCHETYPE_REGISTRY, ArchetypeDef, find_archetype, resolve};
pub use entities::{
    common::RelativePath,
    config::{DEFAULT_TOOLCHAIN_VERSION, ProjectConfig, ProjectConfigBuilder},
    project_structure::{FileSpec, ProjectStructure},
    template::{RenderContext, TemplateId},
};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::Archetype;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Project Structure Tests
    // ========================================================================

    #[test]
    fn project_structure_builds_correctly() {
        let structure = ProjectStructure::new(Archetype::Cli)
            .with_directory("cmd")
            .unwrap()
            .with_file("cmd/main.go", TemplateId::MainCli);

        assert_eq!(structure.directory_count(), 1);
        assert_eq!(structure.file_count(), 1);
        assert!(structure.validate().is_ok());
    }

    #[test]
    fn project_structure_validates_duplicates() {
        let structure = ProjectStructure::new(Archetype::Cli)
            .with_file("go.mod", TemplateId::GoMod)
            .with_file("go.mod", TemplateId::GoMod);

        assert!(matches!(
            structure.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn project_structure_validates_empty() {
        let structure = ProjectStructure::new(Archetype::Api);
        assert!(matches!(
            structure.validate(),
            Err(DomainError::EmptyStructure { .. })
        ));
    }

    #[test]
    fn project_structure_rejects_absolute_directory() {
        assert!(ProjectStructure::new(Archetype::Api).with_directory("/abs").is_err());
    }

    #[test]
    fn invalid_catalog_directory_surfaces_in_validate() {
        let mut structure =
            ProjectStructure::new(Archetype::Cli).with_file("go.mod", TemplateId::GoMod);
        structure.push_directory("cmd");
        structure.push_directory("/etc");

        assert_eq!(structure.directory_count(), 1);
        assert_eq!(
            structure.validate(),
            Err(DomainError::AbsolutePathNotAllowed {
                path: "/etc".into()
            })
        );
    }

    #[test]
    fn project_structure_rejects_escaping_file_pattern() {
        let structure =
            ProjectStructure::new(Archetype::Api).with_file("../outside.go", TemplateId::Model);
        assert!(matches!(
            structure.validate(),
            Err(DomainError::PathTraversal { .. })
        ));
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn rendered_path_must_stay_relative() {
        assert!(DomainValidator::validate_rendered_path("widget.go").is_ok());
        assert!(DomainValidator::validate_rendered_path("/widget.go").is_err());
        assert!(DomainValidator::validate_rendered_path("../widget.go").is_err());
        assert_eq!(
            DomainValidator::validate_rendered_path("  "),
            Err(DomainError::EmptyPath)
        );
    }

    #[test]
    fn error_categories() {
        assert_eq!(
            DomainError::UnknownArchetype { tag: "x".into() }.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::PathResolution {
                path: "x".into(),
                reason: "y".into()
            }
            .category(),
            ErrorCategory::Path
        );
    }
}
