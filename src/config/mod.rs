// ABOUTME: Configuration management module for storage and deployment settings
// ABOUTME: Environment-only configuration; CLI flags override individual values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment and storage configuration
pub mod environment;

pub use environment::{Environment, RecipeBoxConfig, StorageBackend, StorageConfig};
