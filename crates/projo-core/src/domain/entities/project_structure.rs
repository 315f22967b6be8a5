use std::collections::HashSet;

use crate::domain::{
    entities::{common::RelativePath, template::TemplateId},
    error::DomainError,
    value_objects::Archetype,
};

/// Resolved directory and file set for one archetype.
///
/// Pure data: produced by the catalog, consumed by the generate service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStructure {
    pub(crate) archetype: Archetype,
    pub(crate) directories: Vec<RelativePath>,
    pub(crate) files: Vec<FileSpec>,
    /// Directory entries refused while building; `validate` reports the first.
    pub(crate) rejected: Vec<DomainError>,
}

/// One file to materialize.
///
/// `path` is a pattern: it may contain placeholders (e.g. `{{name}}.go`)
/// that are rendered before the file is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: String,
    pub template: TemplateId,
}

impl ProjectStructure {
    pub fn new(archetype: Archetype) -> Self {
        Self {
            archetype,
            directories: Vec::new(),
            files: Vec::new(),
            rejected: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: impl Into<std::path::PathBuf>) -> Result<(), DomainError> {
        self.directories.push(RelativePath::try_new(path)?);
        Ok(())
    }

    /// Add a catalog directory, deferring any error to [`Self::validate`].
    pub(crate) fn push_directory(&mut self, path: &str) {
        if let Err(err) = self.add_directory(path) {
            self.rejected.push(err);
        }
    }

    pub fn add_file(&mut self, path: impl Into<String>, template: TemplateId) {
        self.files.push(FileSpec {
            path: path.into(),
            template,
        });
    }

    pub fn with_directory(mut self, path: &str) -> Result<Self, DomainError> {
        self.add_directory(path)?;
        Ok(self)
    }

    pub fn with_file(mut self, path: &str, template: TemplateId) -> Self {
        self.add_file(path, template);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(err) = self.rejected.first() {
            return Err(err.clone());
        }

        if self.directories.is_empty() && self.files.is_empty() {
            return Err(DomainError::EmptyStructure {
                archetype: self.archetype,
            });
        }

        let mut seen = HashSet::new();
        for dir in &self.directories {
            let path = dir.to_string();
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path });
            }
        }

        for file in &self.files {
            // Patterns are checked as written; rendered paths are re-checked
            // by the generate service.
            RelativePath::try_new(&file.path)?;
            if !seen.insert(file.path.clone()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.directories.iter()
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.files.iter()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
