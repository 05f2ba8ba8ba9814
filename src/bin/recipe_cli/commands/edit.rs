// ABOUTME: Mutating commands for recipe-box
// ABOUTME: Handles add, edit, servings, delete, and reset through the recipe store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_box::recipes::RecipeStore;
use recipe_box::storage::Storage;
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::{Difficulty, Ingredient, RecipeDraft, RecipeId};
use tracing::info;

use crate::helpers::display::display_recipe;
use crate::helpers::parse::parse_ingredient;

/// Fields accepted by `add`
pub struct AddArgs {
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub servings: Option<u32>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub image_url: Option<String>,
}

/// Fields accepted by `edit`; `None` or empty keeps the current value
pub struct EditArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub servings: Option<u32>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub image_url: Option<String>,
    pub add_ingredients: Vec<String>,
    pub remove_ingredients: Vec<usize>,
    pub add_steps: Vec<String>,
    pub remove_steps: Vec<usize>,
}

/// Create a recipe from command-line fields
pub async fn add(store: &RecipeStore<Storage>, args: AddArgs) -> AppResult<()> {
    let mut draft = RecipeDraft::new(args.name, args.description);
    if let Some(category) = args.category {
        draft = draft.with_category(category);
    }
    if let Some(difficulty) = args.difficulty {
        draft = draft.with_difficulty(difficulty);
    }
    if let Some(servings) = args.servings {
        draft = draft.with_servings(servings);
    }
    if let Some(mins) = args.prep_time {
        draft = draft.with_prep_time(mins);
    }
    if let Some(mins) = args.cook_time {
        draft = draft.with_cook_time(mins);
    }
    if let Some(url) = args.image_url {
        draft = draft.with_image_url(url);
    }
    for raw in &args.ingredients {
        draft = draft.with_ingredient(parse_ingredient(raw)?);
    }
    for step in args.steps {
        draft = draft.with_instruction(step);
    }

    let recipe = store.create(draft).await?;
    println!("Created recipe {} ({})", recipe.id, recipe.name);
    Ok(())
}

/// Change fields of an existing recipe in place
pub async fn edit(store: &RecipeStore<Storage>, id: RecipeId, args: EditArgs) -> AppResult<()> {
    let recipe = store
        .get(id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
    let mut draft = RecipeDraft::from(recipe);

    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(difficulty) = args.difficulty {
        draft.difficulty = difficulty;
    }
    if let Some(servings) = args.servings {
        draft.current_servings = Some(servings);
    }
    if let Some(mins) = args.prep_time {
        draft.prep_time = mins;
    }
    if let Some(mins) = args.cook_time {
        draft.cook_time = mins;
    }
    if let Some(url) = args.image_url {
        draft.image_url = (!url.is_empty()).then_some(url);
    }

    let ingredients = args
        .add_ingredients
        .iter()
        .map(String::as_str)
        .map(parse_ingredient)
        .collect::<AppResult<Vec<_>>>()?;
    edit_ingredient_rows(&mut draft, ingredients, &args.remove_ingredients)?;
    edit_instruction_rows(&mut draft, args.add_steps, &args.remove_steps)?;

    let recipe = store.update(draft.into_recipe(id)).await?;
    println!("Updated recipe {}", recipe.id);
    Ok(())
}

/// Append new rows, then drop rows by their 1-based number before the edit
///
/// Appending first lets the only row of a recipe be replaced; the draft keeps
/// its last row, so removing every row leaves one in place.
fn edit_ingredient_rows(
    draft: &mut RecipeDraft,
    added: Vec<Ingredient>,
    removed: &[usize],
) -> AppResult<()> {
    let indices = removal_indices(removed, draft.ingredients.len(), "ingredient")?;
    for ingredient in added {
        draft.add_ingredient();
        draft.update_ingredient(draft.ingredients.len() - 1, ingredient);
    }
    for index in indices {
        draft.remove_ingredient(index);
    }
    Ok(())
}

fn edit_instruction_rows(
    draft: &mut RecipeDraft,
    added: Vec<String>,
    removed: &[usize],
) -> AppResult<()> {
    let indices = removal_indices(removed, draft.instructions.len(), "step")?;
    for step in added {
        draft.add_instruction();
        draft.update_instruction(draft.instructions.len() - 1, step);
    }
    for index in indices {
        draft.remove_instruction(index);
    }
    Ok(())
}

/// 1-based row numbers to distinct 0-based indices, highest first
fn removal_indices(numbers: &[usize], len: usize, row: &str) -> AppResult<Vec<usize>> {
    let mut indices = numbers
        .iter()
        .map(|&n| {
            if (1..=len).contains(&n) {
                Ok(n - 1)
            } else {
                Err(AppError::invalid_input(format!(
                    "{row} {n} does not exist (recipe has {len})"
                )))
            }
        })
        .collect::<AppResult<Vec<_>>>()?;
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.dedup();
    Ok(indices)
}

/// Set the servings to cook and show the rescaled recipe
pub async fn servings(store: &RecipeStore<Storage>, id: RecipeId, count: i64) -> AppResult<()> {
    let recipe = store.set_servings(id, count).await?;
    display_recipe(&recipe);
    Ok(())
}

/// Replace the whole collection with the starter recipes
pub async fn reset(store: &RecipeStore<Storage>, confirmed: bool) -> AppResult<()> {
    if !confirmed {
        return Err(AppError::invalid_input(
            "reset discards every recipe; pass --yes to confirm",
        ));
    }
    let recipes = store.reset().await?;
    println!("Restored {} starter recipes", recipes.len());
    Ok(())
}

/// Delete a recipe; deleting an unknown id is not an error
pub async fn delete(store: &RecipeStore<Storage>, id: RecipeId) -> AppResult<()> {
    let existed = store.get(id).await.is_some();
    store.delete(id).await?;
    if existed {
        println!("Deleted recipe {id}");
    } else {
        info!(recipe_id = id, "No recipe to delete");
        println!("No recipe with id {id}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RecipeDraft {
        RecipeDraft::new("Tea", "Hot tea")
            .with_ingredient(Ingredient::new("tea leaves", 2.0, "tsp"))
            .with_ingredient(Ingredient::new("water", 500.0, "ml"))
            .with_instruction("Boil")
            .with_instruction("Steep")
    }

    #[test]
    fn test_ingredient_rows_append_then_remove_by_original_number() -> AppResult<()> {
        let mut draft = draft();
        let honey = Ingredient::new("honey", 1.0, "tsp");
        edit_ingredient_rows(&mut draft, vec![honey.clone()], &[1])?;
        let names: Vec<_> = draft.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["water", "honey"]);
        assert_eq!(draft.ingredients[1], honey);
        Ok(())
    }

    #[test]
    fn test_only_row_can_be_replaced() -> AppResult<()> {
        let mut draft = RecipeDraft::new("Tea", "Hot tea").with_instruction("Boil");
        edit_instruction_rows(&mut draft, vec!["Simmer".into()], &[1])?;
        assert_eq!(draft.instructions, vec!["Simmer".to_owned()]);
        Ok(())
    }

    #[test]
    fn test_removing_every_row_keeps_one() -> AppResult<()> {
        let mut draft = draft();
        edit_instruction_rows(&mut draft, Vec::new(), &[2, 1, 2])?;
        assert_eq!(draft.instructions.len(), 1);
        Ok(())
    }

    #[test]
    fn test_out_of_range_row_is_rejected_without_changes() {
        let mut draft = draft();
        let before = draft.clone();
        let result = edit_ingredient_rows(
            &mut draft,
            vec![Ingredient::new("milk", 50.0, "ml")],
            &[3],
        );
        assert!(result.is_err_and(|e| e.is_validation()));
        assert_eq!(draft, before);

        assert!(removal_indices(&[0], 2, "step").is_err());
    }
}
