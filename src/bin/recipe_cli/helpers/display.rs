// ABOUTME: Output formatting helpers for recipe-box
// ABOUTME: Provides consistent display functions for recipe lists, details, and stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_box::recipes::{query, CollectionStats};
use recipe_core::models::Recipe;

/// One line per recipe: id, name, category, difficulty, total time
pub fn display_recipe_list(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("No recipes match.");
        return;
    }
    for recipe in recipes {
        println!(
            "{:>14}  {}  [{} | {} | {} min]",
            recipe.id,
            recipe.name,
            recipe.category,
            recipe.difficulty,
            query::total_time(recipe)
        );
    }
}

/// Full recipe card with ingredients scaled to the current servings
pub fn display_recipe(recipe: &Recipe) {
    println!("\n{}", recipe.name);
    println!("{}", "=".repeat(recipe.name.chars().count().max(20)));
    println!("{}", recipe.description);
    println!();
    println!("   Category:   {}", recipe.category);
    println!("   Difficulty: {}", recipe.difficulty);
    println!(
        "   Time:       {} min prep + {} min cook = {} min",
        recipe.prep_time,
        recipe.cook_time,
        query::total_time(recipe)
    );
    println!(
        "   Servings:   {} (original: {})",
        recipe.current_servings, recipe.original_servings
    );
    if let Some(url) = &recipe.image_url {
        println!("   Image:      {url}");
    }

    println!("\nIngredients:");
    for ingredient in query::scaled_ingredients(recipe) {
        println!("   - {}", query::format_ingredient_line(&ingredient));
    }

    println!("\nInstructions:");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("   {}. {instruction}", step + 1);
    }
}

/// Collection stats panel
pub fn display_stats(stats: &CollectionStats) {
    println!("Collection Stats");
    println!("{}", "=".repeat(30));
    println!("   Total Recipes:  {}", stats.total_recipes);
    println!("   Avg Total Time: {}m", stats.average_total_time_mins);
    println!("   Avg Difficulty: {:.1}", stats.average_difficulty);
}
