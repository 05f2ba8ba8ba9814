// ABOUTME: Environment configuration for storage backend selection and deployment mode
// ABOUTME: Handles environment variables and typed parsing with safe fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use recipe_core::constants::storage::DATA_DIR_NAME;
use recipe_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Environment variable selecting the storage backend
pub const STORAGE_BACKEND_VAR: &str = "RECIPE_STORAGE_BACKEND";
/// Environment variable overriding the data directory
pub const DATA_DIR_VAR: &str = "RECIPE_DATA_DIR";
/// Environment variable naming the deployment environment
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Installed for day-to-day use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Which key-value backend holds the recipe collection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map, nothing is written to disk
    Memory,
    /// One file per key in the data directory
    #[default]
    File,
}

impl StorageBackend {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "mem" | "in-memory" => Self::Memory,
            _ => Self::File,
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Backend to use
    pub backend: StorageBackend,
    /// Directory used by the file backend
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// In-memory configuration for tests and throwaway sessions
    #[must_use]
    pub fn memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: default_data_dir(),
        }
    }

    /// File configuration rooted at `dir`
    #[must_use]
    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: dir.into(),
        }
    }

    /// Load storage settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `RECIPE_DATA_DIR` is set but blank
    pub fn from_env() -> AppResult<Self> {
        let backend = env::var(STORAGE_BACKEND_VAR)
            .map(|v| StorageBackend::from_str_or_default(&v))
            .unwrap_or_default();

        let data_dir = match env::var(DATA_DIR_VAR) {
            Ok(dir) if dir.trim().is_empty() => {
                return Err(AppError::config(format!("{DATA_DIR_VAR} must not be blank")));
            }
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_data_dir(),
        };

        Ok(Self { backend, data_dir })
    }
}

/// Application configuration gathered from the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeBoxConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Storage settings
    pub storage: StorageConfig,
}

impl RecipeBoxConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any variable holds an unusable value
    pub fn from_env() -> AppResult<Self> {
        let environment = env::var(ENVIRONMENT_VAR)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();
        let config = Self {
            environment,
            storage: StorageConfig::from_env()?,
        };
        config.log_summary();
        Ok(config)
    }

    /// Override the data directory (CLI `--data-dir`)
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.data_dir = dir.into();
        self
    }

    fn log_summary(&self) {
        info!(
            environment = %self.environment,
            storage.backend = %self.storage.backend,
            storage.data_dir = %self.storage.data_dir.display(),
            "Configuration loaded"
        );
    }
}

/// Platform data directory for the file backend, `./data` when unknown
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("./data").join(DATA_DIR_NAME),
        |dir| dir.join(DATA_DIR_NAME),
    )
}
