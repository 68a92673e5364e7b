//! Directory-backed remote store
//!
//! Treats a destination folder on a mounted filesystem as the remote store.
//! A missing folder is a fatal store error, not an empty inventory: a
//! partial remote view would make diff and sweep decisions unsafe.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SnapkeepError, SnapkeepResult};

use super::RemoteStore;

/// Remote store over a destination directory
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Create a store over the given destination folder
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The destination folder
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RemoteStore for DirStore {
    fn list(&self) -> SnapkeepResult<Vec<String>> {
        if !self.root.is_dir() {
            return Err(SnapkeepError::Store(format!(
                "destination folder does not exist: {}",
                self.root.display()
            )));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)
            .map_err(|e| SnapkeepError::Store(format!("failed to list {}: {}", self.root.display(), e)))?
        {
            let entry = entry
                .map_err(|e| SnapkeepError::Store(format!("failed to read entry: {}", e)))?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();

        Ok(names)
    }

    fn upload(&self, local: &Path) -> SnapkeepResult<()> {
        let file_name = local.file_name().ok_or_else(|| {
            SnapkeepError::Store(format!("not a file path: {}", local.display()))
        })?;

        fs::copy(local, self.root.join(file_name)).map_err(|e| {
            SnapkeepError::Store(format!("failed to upload {}: {}", local.display(), e))
        })?;

        Ok(())
    }

    fn delete(&self, name: &str) -> SnapkeepResult<()> {
        fs::remove_file(self.root.join(name))
            .map_err(|e| SnapkeepError::Store(format!("failed to delete {}: {}", name, e)))?;
        Ok(())
    }
}
