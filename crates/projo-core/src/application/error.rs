//! Application layer errors.
//!
//! These errors represent failures while materializing a project, not
//! validation of its inputs. Input errors are `DomainError` from
//! `crate::domain`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::TemplateId;
use crate::error::ErrorCategory;

/// The step of template processing that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePhase {
    Parse,
    Render,
}

impl fmt::Display for TemplatePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Parse => "parse",
            Self::Render => "render",
        })
    }
}

/// Failure reported by a `TemplateRenderer`.
///
/// Carries no path; the generate service attaches the file being produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{phase} error: {reason}")]
pub struct TemplateFailure {
    pub phase: TemplatePhase,
    pub reason: String,
}

impl TemplateFailure {
    pub fn parse(reason: impl Into<String>) -> Self {
        Self {
            phase: TemplatePhase::Parse,
            reason: reason.into(),
        }
    }

    pub fn render(reason: impl Into<String>) -> Self {
        Self {
            phase: TemplatePhase::Render,
            reason: reason.into(),
        }
    }
}

/// Errors that occur during generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Directory or file creation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// A template body or a file path pattern failed to parse or render.
    #[error("Template {phase} failed for {path}: {reason}")]
    Template {
        path: String,
        phase: TemplatePhase,
        reason: String,
    },

    /// The template store has no body for an identifier.
    #[error("No template body for '{id}' (needed by {path})")]
    TemplateNotFound { id: TemplateId, path: String },
}

impl ApplicationError {
    pub(crate) fn template(path: impl Into<String>, failure: TemplateFailure) -> Self {
        Self::Template {
            path: path.into(),
            phase: failure.phase,
            reason: failure.reason,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no regular file occupies a directory path".into(),
            ],
            Self::Template { path, .. } => vec![
                format!("The built-in template for {path} is broken"),
                "Run `projo list --verify` to check every template".into(),
                "Please report this issue".into(),
            ],
            Self::TemplateNotFound { id, .. } => vec![
                format!("Template '{id}' is not in the template store"),
                "Please report this issue".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::FileSystem,
            Self::Template { .. } | Self::TemplateNotFound { .. } => ErrorCategory::Template,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_error_names_path_and_phase() {
        let err = ApplicationError::template("cmd/main.go", TemplateFailure::parse("unclosed tag"));
        let msg = err.to_string();
        assert!(msg.contains("cmd/main.go"));
        assert!(msg.contains("parse"));
        assert!(msg.contains("unclosed tag"));
    }

    #[test]
    fn filesystem_error_names_path() {
        let err = ApplicationError::FilesystemError {
            path: "/tmp/out/orders".into(),
            reason: "not a directory".into(),
        };
        assert!(err.to_string().contains("/tmp/out/orders"));
        assert_eq!(err.category(), ErrorCategory::FileSystem);
    }
}
