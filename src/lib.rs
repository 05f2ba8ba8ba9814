// ABOUTME: Main library entry point for the Recipe Box collection manager
// ABOUTME: Exposes the recipe store, collection queries, storage backends, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Box
//!
//! A single-user recipe collection: create, edit, list, search, and delete
//! recipes, and scale ingredient amounts to the number of servings you want
//! to cook. The collection persists as JSON in a key-value store under the
//! key `"recipes"`.
//!
//! ## Architecture
//!
//! - **Recipes**: the [`RecipeStore`](recipes::RecipeStore) owns and persists
//!   the collection; [`recipes::query`] holds the pure search, filter,
//!   scaling, and statistics functions
//! - **Storage**: the [`KeyValueStore`](storage::KeyValueStore) trait with
//!   in-memory and file-per-key backends
//! - **Config**: environment-driven settings
//! - **Logging**: `tracing` subscriber setup
//!
//! Model types and errors live in the `recipe-core` crate.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_box::config::RecipeBoxConfig;
//! use recipe_box::recipes::{query, RecipeStore};
//! use recipe_box::storage::Storage;
//! use recipe_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = RecipeBoxConfig::from_env()?;
//!     let store = RecipeStore::open(Storage::new(&config.storage).await?).await?;
//!
//!     let recipes = store.recipes().await;
//!     for recipe in query::search(&recipes, "pasta") {
//!         println!("{} ({} min)", recipe.name, query::total_time(recipe));
//!     }
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Recipe store and collection queries
pub mod recipes;

/// Key-value storage backends
pub mod storage;

pub use recipe_core::errors::{AppError, AppResult, ErrorCode};
pub use recipe_core::models::{Difficulty, Ingredient, Recipe, RecipeDraft, RecipeId};
