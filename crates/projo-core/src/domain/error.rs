// ============================================================================
// domain/error.rs - VALIDATION ERROR DOMAIN
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Archetype;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI formats them more than once)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("unknown archetype '{tag}' (expected one of: api, cli, microservice, library)")]
    UnknownArchetype { tag: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("cannot resolve output path '{}': {reason}", path.display())]
    PathResolution { path: PathBuf, reason: String },

    #[error("Empty path in project structure")]
    EmptyPath,

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathTraversal { path: String },

    // ========================================================================
    // Structure Errors (static catalog bugs)
    // ========================================================================
    #[error("Project structure for '{archetype}' is empty")]
    EmptyStructure { archetype: Archetype },

    #[error("Duplicate path in structure: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownArchetype { tag } => vec![
                format!("'{tag}' is not a project type"),
                "Supported types:".into(),
                "  • api           - REST API server with HTTP handlers".into(),
                "  • cli           - Command-line tool".into(),
                "  • microservice  - HTTP/gRPC service with Docker/K8s configs (alias: micro)"
                    .into(),
                "  • library       - Reusable Go package (alias: lib)".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{field}'"),
                "Example: projo gen --name myapi --module github.com/user/myapi".into(),
            ],
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{name}' is invalid: {reason}"),
                "Use a single directory name without path separators".into(),
                "Examples: myapi, my-tool, orders".into(),
            ],
            Self::PathResolution { path, .. } => vec![
                format!("Could not resolve: {}", path.display()),
                "Pass an absolute path with --output".into(),
                "Check that the current working directory still exists".into(),
            ],
            Self::EmptyStructure { .. } | Self::DuplicatePath { .. } => vec![
                "The built-in archetype catalog is inconsistent".into(),
                "Please report this issue".into(),
            ],
            _ => vec!["See `projo gen --help` for details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownArchetype { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::PathResolution { .. } => ErrorCategory::Path,
            Self::EmptyPath
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathTraversal { .. } => ErrorCategory::Validation,
            Self::EmptyStructure { .. } | Self::DuplicatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Path,
    Internal,
}
