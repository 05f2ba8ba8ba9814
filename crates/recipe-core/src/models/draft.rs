// ABOUTME: Recipe draft model used as input when creating a recipe
// ABOUTME: Carries blank-form defaults and row-level ingredient/instruction editing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::recipe::{
    validate_ingredients, validate_required_fields, Difficulty, Ingredient, Recipe, RecipeId,
};
use crate::constants::draft_defaults;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// A recipe that has not been assigned an id yet
///
/// `Default` produces the blank form: one empty ingredient row, one empty
/// step, four servings, 15 minutes prep, 30 minutes cooking, medium
/// difficulty, and the "Main Course" category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    /// Recipe name (required)
    pub name: String,
    /// Recipe description (required)
    pub description: String,
    /// Ingredient rows
    pub ingredients: Vec<Ingredient>,
    /// Instruction steps
    pub instructions: Vec<String>,
    /// Servings the amounts are written for
    pub original_servings: u32,
    /// Servings to start at; defaults to `original_servings`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_servings: Option<u32>,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Cooking time in minutes
    pub cook_time: u32,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Free-form category tag
    pub category: String,
    /// Optional image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            ingredients: vec![Ingredient::blank()],
            instructions: vec![String::new()],
            original_servings: draft_defaults::SERVINGS,
            current_servings: None,
            prep_time: draft_defaults::PREP_TIME_MINS,
            cook_time: draft_defaults::COOK_TIME_MINS,
            difficulty: Difficulty::Medium,
            category: draft_defaults::CATEGORY.to_owned(),
            image_url: None,
        }
    }
}

impl RecipeDraft {
    /// Create a draft with the required text fields and no ingredient or step rows
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            ..Self::default()
        }
    }

    /// Set the baseline servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.original_servings = servings;
        self
    }

    /// Start at a serving count different from the baseline
    #[must_use]
    pub const fn with_current_servings(mut self, servings: u32) -> Self {
        self.current_servings = Some(servings);
        self
    }

    /// Set preparation time
    #[must_use]
    pub const fn with_prep_time(mut self, mins: u32) -> Self {
        self.prep_time = mins;
        self
    }

    /// Set cooking time
    #[must_use]
    pub const fn with_cook_time(mut self, mins: u32) -> Self {
        self.cook_time = mins;
        self
    }

    /// Set difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set image location
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add an instruction step
    #[must_use]
    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Append an empty ingredient row
    pub fn add_ingredient(&mut self) {
        self.ingredients.push(Ingredient::blank());
    }

    /// Remove ingredient row `index`; the last remaining row is kept
    pub fn remove_ingredient(&mut self, index: usize) {
        if self.ingredients.len() > 1 && index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    /// Replace ingredient row `index`; out-of-range indices are ignored
    pub fn update_ingredient(&mut self, index: usize, ingredient: Ingredient) {
        if let Some(slot) = self.ingredients.get_mut(index) {
            *slot = ingredient;
        }
    }

    /// Append an empty instruction step
    pub fn add_instruction(&mut self) {
        self.instructions.push(String::new());
    }

    /// Remove step `index`; the last remaining step is kept
    pub fn remove_instruction(&mut self, index: usize) {
        if self.instructions.len() > 1 && index < self.instructions.len() {
            self.instructions.remove(index);
        }
    }

    /// Replace step `index`; out-of-range indices are ignored
    pub fn update_instruction(&mut self, index: usize, step: impl Into<String>) {
        if let Some(slot) = self.instructions.get_mut(index) {
            *slot = step.into();
        }
    }

    /// Check the required fields
    ///
    /// # Errors
    ///
    /// Returns a validation error when `name` or `description` is blank after
    /// trimming, when `original_servings` is zero, or when an ingredient
    /// amount is negative or not finite.
    pub fn validate(&self) -> AppResult<()> {
        validate_required_fields(&self.name, &self.description, self.original_servings)?;
        validate_ingredients(&self.ingredients)
    }

    /// Turn the draft into a stored recipe with the given id
    ///
    /// `current_servings` falls back to `original_servings` and is clamped to
    /// at least 1.
    #[must_use]
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        let current_servings = self
            .current_servings
            .unwrap_or(self.original_servings)
            .max(1);

        Recipe {
            id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            instructions: self.instructions,
            original_servings: self.original_servings,
            current_servings,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            difficulty: self.difficulty,
            category: self.category,
            image_url: self.image_url,
        }
    }
}

impl From<Recipe> for RecipeDraft {
    /// Load a saved recipe into the edit form, keeping its current servings
    fn from(recipe: Recipe) -> Self {
        Self {
            name: recipe.name,
            description: recipe.description,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            original_servings: recipe.original_servings,
            current_servings: Some(recipe.current_servings),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            difficulty: recipe.difficulty,
            category: recipe.category,
            image_url: recipe.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_defaults() {
        let draft = RecipeDraft::default();
        assert_eq!(draft.ingredients, vec![Ingredient::blank()]);
        assert_eq!(draft.instructions, vec![String::new()]);
        assert_eq!(draft.original_servings, 4);
        assert_eq!(draft.prep_time, 15);
        assert_eq!(draft.cook_time, 30);
        assert_eq!(draft.difficulty, Difficulty::Medium);
        assert_eq!(draft.category, "Main Course");
    }

    #[test]
    fn test_remove_keeps_last_row() {
        let mut draft = RecipeDraft::default();
        draft.remove_ingredient(0);
        draft.remove_instruction(0);
        assert_eq!(draft.ingredients.len(), 1);
        assert_eq!(draft.instructions.len(), 1);

        draft.add_ingredient();
        draft.update_ingredient(1, Ingredient::new("rice", 1.0, "cup"));
        draft.remove_ingredient(0);
        assert_eq!(draft.ingredients, vec![Ingredient::new("rice", 1.0, "cup")]);
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let mut draft = RecipeDraft::default();
        draft.update_instruction(5, "Boil");
        draft.update_ingredient(5, Ingredient::new("salt", 1.0, "tsp"));
        draft.add_instruction();
        draft.remove_instruction(9);
        assert_eq!(draft.instructions, vec![String::new(), String::new()]);
        assert_eq!(draft.ingredients, vec![Ingredient::blank()]);
    }

    #[test]
    fn test_into_recipe_defaults_current_servings() {
        let recipe = RecipeDraft::new("Tea", "Hot tea")
            .with_servings(2)
            .into_recipe(1);
        assert_eq!(recipe.current_servings, 2);
        assert_eq!(recipe.original_servings, 2);

        let recipe = RecipeDraft::new("Tea", "Hot tea")
            .with_servings(2)
            .with_current_servings(0)
            .into_recipe(2);
        assert_eq!(recipe.current_servings, 1);
    }

    #[test]
    fn test_validate_trims_required_fields() {
        assert!(RecipeDraft::new("  ", "desc").validate().is_err());
        assert!(RecipeDraft::new("name", "\t\n").validate().is_err());
        assert!(RecipeDraft::new("name", "desc").validate().is_ok());
        assert!(RecipeDraft::new("name", "desc")
            .with_servings(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_negative_amount_row() {
        let mut draft = RecipeDraft::new("Tea", "Hot tea");
        draft.add_ingredient();
        draft.update_ingredient(
            0,
            Ingredient {
                name: "water".into(),
                amount: -1.0,
                unit: "ml".into(),
            },
        );
        assert!(draft.validate().is_err_and(|e| e.is_validation()));
    }

    #[test]
    fn test_recipe_to_draft_and_back_keeps_servings() {
        let recipe = RecipeDraft::new("Tea", "Hot tea")
            .with_servings(2)
            .with_current_servings(5)
            .with_instruction("Steep")
            .into_recipe(9);
        let draft = RecipeDraft::from(recipe.clone());
        assert_eq!(draft.current_servings, Some(5));
        assert_eq!(draft.into_recipe(9), recipe);
    }
}
