// ABOUTME: File-backed key-value store keeping one JSON file per key in a data directory
// ABOUTME: Writes go to a temporary sibling file that is renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{validate_key, KeyValueStore};
use recipe_core::constants::storage::FILE_EXTENSION;
use recipe_core::errors::{AppError, AppResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Directory-backed store: key `recipes` lives in `<dir>/recipes.json`
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub async fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::storage(format!(
                "failed to create data directory {}: {e}",
                dir.display()
            ))
            .with_source(e)
        })?;
        debug!(dir = %dir.display(), "Opened file store");
        Ok(Self { dir })
    }

    /// Directory this store writes into
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{FILE_EXTENSION}"))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.{FILE_EXTENSION}.tmp"))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "failed to read {}: {e}",
                path.display()
            ))
            .with_source(e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        validate_key(key)?;
        let path = self.path_for(key);
        let tmp = self.temp_path_for(key);

        fs::write(&tmp, value).await.map_err(|e| {
            AppError::storage(format!("failed to write {}: {e}", tmp.display())).with_source(e)
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            AppError::storage(format!("failed to replace {}: {e}", path.display()))
                .with_source(e)
        })?;

        debug!(key, bytes = value.len(), "Wrote key to file store");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        validate_key(key)?;
        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "failed to remove {}: {e}",
                path.display()
            ))
            .with_source(e)),
        }
    }
}
