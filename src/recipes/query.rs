// ABOUTME: Pure query functions over a recipe collection: search, categories, statistics
// ABOUTME: Also computes serving-scaled ingredient amounts for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Collection queries
//!
//! Every function here borrows its input and returns results in collection
//! order. Callers keep the search text and selected category themselves and
//! pass them in on each call.

use recipe_core::constants::query::ALL_CATEGORIES;
use recipe_core::models::{Ingredient, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Recipes whose name, description, or any ingredient name contains `term`,
/// ignoring case. An empty term matches everything.
#[must_use]
pub fn search<'a>(recipes: &'a [Recipe], term: &str) -> Vec<&'a Recipe> {
    let needle = term.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches_search(recipe, &needle))
        .collect()
}

/// Recipes in `category`; the `"All"` sentinel returns the whole collection.
/// Matching is exact and case-sensitive.
#[must_use]
pub fn filter_by_category<'a>(recipes: &'a [Recipe], category: &str) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| matches_category(recipe, category))
        .collect()
}

/// Recipes passing both the category filter and the search
#[must_use]
pub fn combined_filter<'a>(recipes: &'a [Recipe], term: &str, category: &str) -> Vec<&'a Recipe> {
    let needle = term.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches_category(recipe, category) && matches_search(recipe, &needle))
        .collect()
}

/// `"All"` followed by each category in order of first occurrence
#[must_use]
pub fn distinct_categories(recipes: &[Recipe]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut categories = vec![ALL_CATEGORIES];
    for recipe in recipes {
        let category = recipe.category.as_str();
        // A recipe literally tagged "All" is already covered by the sentinel
        if category != ALL_CATEGORIES && seen.insert(category) {
            categories.push(category);
        }
    }
    categories
}

/// Ratio of current to original servings
#[must_use]
pub fn scaling_multiplier(recipe: &Recipe) -> f64 {
    recipe.scaling_multiplier()
}

/// Ingredients with amounts scaled to the recipe's current servings,
/// rounded to one decimal place
#[must_use]
pub fn scaled_ingredients(recipe: &Recipe) -> Vec<Ingredient> {
    let factor = recipe.scaling_multiplier();
    recipe
        .ingredients
        .iter()
        .map(|ingredient| {
            let mut scaled = ingredient.scaled(factor);
            scaled.amount = round_to_tenth(scaled.amount);
            scaled
        })
        .collect()
}

/// Display line for an ingredient, e.g. `"1.5 cups flour"`
#[must_use]
pub fn format_ingredient_line(ingredient: &Ingredient) -> String {
    format!(
        "{:.1} {} {}",
        ingredient.amount, ingredient.unit, ingredient.name
    )
}

/// Prep plus cook time in minutes
#[must_use]
pub const fn total_time(recipe: &Recipe) -> u32 {
    recipe.total_time_mins()
}

/// Mean total time in minutes; 0 for an empty collection
#[must_use]
pub fn average_total_time(recipes: &[Recipe]) -> f64 {
    if recipes.is_empty() {
        return 0.0;
    }
    let sum: u64 = recipes.iter().map(|r| u64::from(total_time(r))).sum();
    sum as f64 / recipes.len() as f64
}

/// Mean difficulty score (Easy 1, Medium 2, Hard 3); 0 for an empty collection
#[must_use]
pub fn average_difficulty_score(recipes: &[Recipe]) -> f64 {
    if recipes.is_empty() {
        return 0.0;
    }
    let sum: u64 = recipes
        .iter()
        .map(|r| u64::from(r.difficulty.score()))
        .sum();
    sum as f64 / recipes.len() as f64
}

/// Summary figures for a collection, rounded for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    /// Number of recipes
    pub total_recipes: usize,
    /// Average total time, rounded to whole minutes
    pub average_total_time_mins: u64,
    /// Average difficulty score, rounded to one decimal place
    pub average_difficulty: f64,
}

/// Compute [`CollectionStats`] for a collection
#[must_use]
pub fn collection_stats(recipes: &[Recipe]) -> CollectionStats {
    CollectionStats {
        total_recipes: recipes.len(),
        average_total_time_mins: average_total_time(recipes).round() as u64,
        average_difficulty: round_to_tenth(average_difficulty_score(recipes)),
    }
}

fn matches_search(recipe: &Recipe, needle: &str) -> bool {
    needle.is_empty()
        || recipe.name.to_lowercase().contains(needle)
        || recipe.description.to_lowercase().contains(needle)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase().contains(needle))
}

fn matches_category(recipe: &Recipe, category: &str) -> bool {
    category == ALL_CATEGORIES || recipe.category == category
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_core::models::{Difficulty, RecipeDraft};

    fn recipe(id: u64, name: &str, category: &str, difficulty: Difficulty) -> Recipe {
        RecipeDraft::new(name, format!("{name} description"))
            .with_category(category)
            .with_difficulty(difficulty)
            .with_ingredient(Ingredient::new("water", 1.0, "cup"))
            .into_recipe(id)
    }

    #[test]
    fn test_round_to_tenth() {
        assert!((round_to_tenth(1.26) - 1.3).abs() < f64::EPSILON);
        assert!((round_to_tenth(2.0 / 3.0) - 0.7).abs() < f64::EPSILON);
        assert!(round_to_tenth(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_ingredient_line_uses_one_decimal() {
        let line = format_ingredient_line(&Ingredient::new("flour", 1.5, "cups"));
        assert_eq!(line, "1.5 cups flour");
        let line = format_ingredient_line(&Ingredient::new("eggs", 2.0, "pieces"));
        assert_eq!(line, "2.0 pieces eggs");
    }

    #[test]
    fn test_distinct_categories_skips_literal_all() {
        let recipes = vec![
            recipe(1, "A", "All", Difficulty::Easy),
            recipe(2, "B", "Dessert", Difficulty::Easy),
        ];
        assert_eq!(distinct_categories(&recipes), vec!["All", "Dessert"]);
    }

    #[test]
    fn test_collection_stats_rounding() {
        let mut quick = recipe(1, "Quick", "Snack", Difficulty::Easy);
        quick.prep_time = 5;
        quick.cook_time = 0;
        let mut slow = recipe(2, "Slow", "Main Course", Difficulty::Medium);
        slow.prep_time = 10;
        slow.cook_time = 12;
        let mut hard = recipe(3, "Hard", "Main Course", Difficulty::Hard);
        hard.prep_time = 0;
        hard.cook_time = 0;

        let stats = collection_stats(&[quick, slow, hard]);
        assert_eq!(stats.total_recipes, 3);
        // (5 + 22 + 0) / 3 = 9.0
        assert_eq!(stats.average_total_time_mins, 9);
        assert!((stats.average_difficulty - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_collection_stats_empty() {
        let stats = collection_stats(&[]);
        assert_eq!(stats.total_recipes, 0);
        assert_eq!(stats.average_total_time_mins, 0);
        assert!(stats.average_difficulty.abs() < f64::EPSILON);
    }
}
