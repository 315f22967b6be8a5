//! In-memory filesystem adapter for dry runs and testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use projo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ProjoError, ProjoResult},
};

/// In-memory filesystem.
///
/// Follows the same rules as [`LocalFilesystem`](super::LocalFilesystem):
/// directories cannot be created over files, and files need an existing
/// parent directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> ProjoResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_poisoned())
    }

    fn write(&self) -> ProjoResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_poisoned())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ProjoResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "Failed to create directory: a file exists at this path".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ProjoResult<()> {
        let mut inner = self.write()?;

        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Failed to write file: path is a directory".into(),
            }
            .into());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Failed to write file: parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

fn lock_poisoned() -> ProjoError {
    ProjoError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/orders/internal/handler"))
            .unwrap();

        assert!(fs.exists(Path::new("/out/orders")));
        assert!(fs.exists(Path::new("/out/orders/internal")));
        assert!(fs.exists(Path::new("/out/orders/internal/handler")));
    }

    #[test]
    fn writes_overwrite() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/go.mod"), "one").unwrap();
        fs.write_file(Path::new("/out/go.mod"), "two").unwrap();

        assert_eq!(fs.read_file(Path::new("/out/go.mod")).as_deref(), Some("two"));
        assert_eq!(fs.list_files(), vec![PathBuf::from("/out/go.mod")]);
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nowhere/go.mod"), "x").is_err());
    }

    #[test]
    fn directory_over_file_fails() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out")).unwrap();
        fs.write_file(Path::new("/out/orders"), "file").unwrap();

        let err = fs.create_dir_all(Path::new("/out/orders/cmd")).unwrap_err();
        assert!(err.to_string().contains("/out/orders"));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.create_dir_all(Path::new("/out")).unwrap();
        assert!(view.exists(Path::new("/out")));
    }
}
