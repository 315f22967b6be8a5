//! Unified error handling for projo-core.
//!
//! Wraps domain and application errors and classifies them into the four
//! failure kinds the CLI reports.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for projo-core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjoError {
    /// Invalid input (bad archetype tag, missing field, unsafe path).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Materialization failures (filesystem, templates).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

/// The failure taxonomy of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized archetype tag or missing/invalid required field.
    Configuration,
    /// The output path cannot be resolved, or a path would leave the root.
    PathResolution,
    /// Directory or file creation failed.
    FileSystem,
    /// A template failed to parse or render.
    Template,
    /// A catalog or wiring bug.
    Internal,
}

impl ProjoError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in projo".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Path => ErrorCategory::Path,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Classify the error into the generation failure taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(
                DomainError::UnknownArchetype { .. }
                | DomainError::MissingRequiredField { .. }
                | DomainError::InvalidProjectName { .. },
            ) => ErrorKind::Configuration,
            Self::Domain(
                DomainError::PathResolution { .. }
                | DomainError::EmptyPath
                | DomainError::AbsolutePathNotAllowed { .. }
                | DomainError::PathTraversal { .. },
            ) => ErrorKind::PathResolution,
            Self::Domain(DomainError::EmptyStructure { .. } | DomainError::DuplicatePath { .. })
            | Self::Internal { .. } => ErrorKind::Internal,
            Self::Application(ApplicationError::FilesystemError { .. }) => ErrorKind::FileSystem,
            Self::Application(
                ApplicationError::Template { .. } | ApplicationError::TemplateNotFound { .. },
            ) => ErrorKind::Template,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Path,
    FileSystem,
    Template,
    Internal,
}

/// Convenient result type alias.
pub type ProjoResult<T> = Result<T, ProjoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{TemplateFailure, TemplatePhase};

    #[test]
    fn unknown_archetype_is_a_configuration_error() {
        let err: ProjoError = "desktop".parse::<crate::domain::Archetype>().unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("desktop"));
    }

    #[test]
    fn path_errors_are_path_resolution() {
        let err: ProjoError = DomainError::PathTraversal {
            path: "../x".into(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::PathResolution);
    }

    #[test]
    fn template_errors_keep_their_message() {
        let err: ProjoError = ApplicationError::Template {
            path: "go.mod".into(),
            phase: TemplatePhase::Render,
            reason: TemplateFailure::render("Variable \"Name\" not found").reason,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Template);
        assert!(err.to_string().starts_with("Template render failed for go.mod"));
        assert!(!err.suggestions().is_empty());
    }
}
