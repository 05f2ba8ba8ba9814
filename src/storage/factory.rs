// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Dispatches KeyValueStore calls to the in-memory or file backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FileStore, InMemoryStore, KeyValueStore};
use crate::config::environment::{StorageBackend, StorageConfig};
use recipe_core::errors::AppResult;
use tracing::info;

/// Unified storage interface selected from configuration
#[derive(Clone, Debug)]
pub enum Storage {
    /// Process-local map
    Memory(InMemoryStore),
    /// One file per key on disk
    File(FileStore),
}

impl Storage {
    /// Create the backend named by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the file backend's directory cannot be created
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        match config.backend {
            StorageBackend::Memory => {
                info!("Initializing in-memory storage");
                Ok(Self::Memory(InMemoryStore::new()))
            }
            StorageBackend::File => {
                info!(
                    data_dir = %config.data_dir.display(),
                    "Initializing file storage"
                );
                Ok(Self::File(FileStore::open(&config.data_dir).await?))
            }
        }
    }

    /// Backend kind
    #[must_use]
    pub const fn backend(&self) -> StorageBackend {
        match self {
            Self::Memory(_) => StorageBackend::Memory,
            Self::File(_) => StorageBackend::File,
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for Storage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::File(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            Self::File(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            Self::File(store) => store.remove(key).await,
        }
    }
}
