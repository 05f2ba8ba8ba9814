// ABOUTME: Read-only commands for recipe-box
// ABOUTME: Handles list, show, categories, and stats over the loaded collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_box::recipes::{query, RecipeStore};
use recipe_box::storage::Storage;
use recipe_core::constants::query::ALL_CATEGORIES;
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::RecipeId;
use tracing::debug;

use crate::helpers::display::{display_recipe, display_recipe_list, display_stats};

/// List recipes matching an optional search term and category
pub async fn list(
    store: &RecipeStore<Storage>,
    search: Option<String>,
    category: Option<String>,
) -> AppResult<()> {
    let recipes = store.recipes().await;
    let term = search.unwrap_or_default();
    let category = category.unwrap_or_else(|| ALL_CATEGORIES.to_owned());
    debug!(term = %term, category = %category, "Listing recipes");

    let matches = query::combined_filter(&recipes, &term, &category);
    display_recipe_list(&matches);
    Ok(())
}

/// Show one recipe with scaled ingredients
pub async fn show(store: &RecipeStore<Storage>, id: RecipeId) -> AppResult<()> {
    let recipe = store
        .get(id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
    display_recipe(&recipe);
    Ok(())
}

/// Print `All` and every category in first-seen order
pub async fn categories(store: &RecipeStore<Storage>) -> AppResult<()> {
    let recipes = store.recipes().await;
    for category in query::distinct_categories(&recipes) {
        println!("{category}");
    }
    Ok(())
}

/// Print collection statistics
pub async fn stats(store: &RecipeStore<Storage>) -> AppResult<()> {
    let recipes = store.recipes().await;
    display_stats(&query::collection_stats(&recipes));
    Ok(())
}
