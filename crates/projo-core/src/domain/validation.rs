use crate::domain::{
    entities::{ProjectStructure, common::RelativePath},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }

    /// Check a file path after its placeholders have been rendered.
    pub fn validate_rendered_path(path: &str) -> Result<RelativePath, DomainError> {
        RelativePath::try_new(path)
    }
}
