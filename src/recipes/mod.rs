// ABOUTME: Recipe collection module: the mutating store and pure collection queries
// ABOUTME: Provides id assignment, starter recipes, scaling, search, and statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! Two layers sit over the [`recipe_core::models`] types:
//!
//! - **Store** ([`RecipeStore`]): owns the ordered collection, assigns ids,
//!   validates input, and writes the full collection back to a
//!   [`KeyValueStore`](crate::storage::KeyValueStore) after every mutation.
//! - **Query** ([`query`]): pure functions for search, category filtering,
//!   serving-size scaling, and aggregate statistics.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_box::recipes::{query, RecipeStore};
//! use recipe_box::storage::InMemoryStore;
//! use recipe_core::models::{Ingredient, RecipeDraft};
//! # async fn example() -> recipe_core::errors::AppResult<()> {
//!
//! let store = RecipeStore::open(InMemoryStore::new()).await?;
//! let tea = store
//!     .create(
//!         RecipeDraft::new("Tea", "Hot tea")
//!             .with_servings(2)
//!             .with_ingredient(Ingredient::new("tea leaves", 2.0, "tsp")),
//!     )
//!     .await?;
//! let doubled = store.set_servings(tea.id, 4).await?;
//! for ingredient in query::scaled_ingredients(&doubled) {
//!     println!("{}", query::format_ingredient_line(&ingredient));
//! }
//! # Ok(())
//! # }
//! ```

/// Monotonic id assignment
pub mod ids;
/// Pure collection queries
pub mod query;
/// Starter collection
pub mod seed;
/// Collection owner and persistence
pub mod store;

pub use ids::IdGenerator;
pub use query::CollectionStats;
pub use seed::boilerplate_recipes;
pub use store::RecipeStore;
