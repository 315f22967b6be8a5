//! Project configuration: the immutable input to one generation run.

use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, value_objects::Archetype};

/// Toolchain version used when the caller does not provide one.
pub const DEFAULT_TOOLCHAIN_VERSION: &str = "1.24";

/// Fully validated configuration for a generation run.
///
/// Only obtainable through [`ProjectConfig::builder`], so every instance
/// satisfies: non-empty name and module, a name that is a single path
/// segment, and an absolute output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    module: String,
    archetype: Archetype,
    description: String,
    author: String,
    toolchain_version: String,
    output_path: PathBuf,
}

impl ProjectConfig {
    pub fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn toolchain_version(&self) -> &str {
        &self.toolchain_version
    }

    /// Absolute directory the project is generated into.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// `output_path/name`.
    pub fn project_root(&self) -> PathBuf {
        self.output_path.join(&self.name)
    }
}

/// Builder for [`ProjectConfig`].
///
/// Unset optional fields get their defaults in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ProjectConfigBuilder {
    name: Option<String>,
    module: Option<String>,
    archetype: Option<Archetype>,
    description: Option<String>,
    author: Option<String>,
    toolchain_version: Option<String>,
    output_path: Option<PathBuf>,
}

impl ProjectConfigBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn toolchain_version(mut self, version: impl Into<String>) -> Self {
        self.toolchain_version = Some(version.into());
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Validate and produce the configuration.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` when name or module is absent or blank
    /// - `InvalidProjectName` when the name is not a single path segment
    /// - `PathResolution` when the output path cannot be made absolute
    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let name = required(self.name, "name")?;
        validate_name(&name)?;
        let module = required(self.module, "module")?;

        let toolchain_version = self
            .toolchain_version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_TOOLCHAIN_VERSION.to_string());

        let output_path = resolve_output_path(self.output_path.unwrap_or_else(|| ".".into()))?;

        Ok(ProjectConfig {
            name,
            module,
            archetype: self.archetype.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            toolchain_version,
            output_path,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DomainError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(DomainError::MissingRequiredField { field })
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name == "." || name == ".." {
        return Err(invalid("name cannot be '.' or '..'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    Ok(())
}

fn resolve_output_path(path: PathBuf) -> Result<PathBuf, DomainError> {
    if path.as_os_str().is_empty() {
        return Err(DomainError::PathResolution {
            path,
            reason: "path is empty".into(),
        });
    }
    std::path::absolute(&path).map_err(|e| DomainError::PathResolution {
        path,
        reason: e.to_string(),
    })
}
