// ABOUTME: Data models for the recipe collection: Recipe, Ingredient, and Difficulty
// ABOUTME: Serialized with camelCase field names so stored collections round-trip unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a recipe within a collection
pub type RecipeId = u64;

/// Cooking difficulty, a closed three-value scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    /// Simple recipes, basic techniques
    Easy,
    /// Moderate complexity
    #[default]
    Medium,
    /// Complex recipes, advanced techniques
    Hard,
}

impl Difficulty {
    /// Numeric score used for averaging (Easy 1, Medium 2, Hard 3)
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Display label, identical to the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(AppError::invalid_input(format!(
                "unknown difficulty '{other}' (expected Easy, Medium, or Hard)"
            ))),
        }
    }
}

/// Single ingredient line. A pure value: scaling produces a new ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Human-readable ingredient name
    pub name: String,
    /// Amount in `unit`, never negative
    pub amount: f64,
    /// Free-form measurement unit ("cups", "g", "pinch", ...)
    pub unit: String,
}

impl Ingredient {
    /// Create a new ingredient; negative amounts are stored as zero
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.max(0.0),
            unit: unit.into(),
        }
    }

    /// Empty form row
    #[must_use]
    pub fn blank() -> Self {
        Self::new("", 0.0, "")
    }

    /// Copy of this ingredient with the amount multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            amount: self.amount * factor,
            unit: self.unit.clone(),
        }
    }
}

/// A complete recipe record as stored in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: RecipeId,
    /// Recipe name
    pub name: String,
    /// Recipe description
    pub description: String,
    /// Ingredient lines, display order preserved
    pub ingredients: Vec<Ingredient>,
    /// Cooking instructions in execution order
    pub instructions: Vec<String>,
    /// Servings the ingredient amounts are written for
    pub original_servings: u32,
    /// Servings the user currently wants to cook
    pub current_servings: u32,
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

impl Recipe {
    /// Get total time (prep + cook)
    #[must_use]
    pub const fn total_time_mins(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    /// Ratio of current to original servings
    ///
    /// `original_servings` is validated to be at least 1; a zero value read
    /// from foreign data is treated as 1 rather than dividing by zero.
    #[must_use]
    pub fn scaling_multiplier(&self) -> f64 {
        f64::from(self.current_servings) / f64::from(self.original_servings.max(1))
    }

    /// Check the fields a saved recipe must always carry
    ///
    /// # Errors
    ///
    /// Returns a validation error when `name` or `description` is blank after
    /// trimming, when either servings count is zero, or when an ingredient
    /// amount is negative or not finite.
    pub fn validate(&self) -> AppResult<()> {
        validate_required_fields(&self.name, &self.description, self.original_servings)?;
        if self.current_servings == 0 {
            return Err(AppError::invalid_input(
                "currentServings must be at least 1",
            ));
        }
        validate_ingredients(&self.ingredients)
    }
}

/// Shared validation for drafts and saved recipes
pub(crate) fn validate_required_fields(
    name: &str,
    description: &str,
    original_servings: u32,
) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::missing_field("name"));
    }
    if description.trim().is_empty() {
        return Err(AppError::missing_field("description"));
    }
    if original_servings == 0 {
        return Err(AppError::invalid_input(
            "originalServings must be at least 1",
        ));
    }
    Ok(())
}

/// Every amount must be a finite, non-negative number
pub(crate) fn validate_ingredients(ingredients: &[Ingredient]) -> AppResult<()> {
    for (index, ingredient) in ingredients.iter().enumerate() {
        if !ingredient.amount.is_finite() || ingredient.amount < 0.0 {
            return Err(AppError::invalid_input(format!(
                "ingredient {} ('{}') has invalid amount {}",
                index + 1,
                ingredient.name,
                ingredient.amount
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe {
            id: 7,
            name: "Pancakes".into(),
            description: "Fluffy".into(),
            ingredients: vec![Ingredient::new("flour", 2.0, "cups")],
            instructions: vec!["Mix".into()],
            original_servings: 4,
            current_servings: 6,
            prep_time: 10,
            cook_time: 20,
            difficulty: Difficulty::Easy,
            category: "Breakfast".into(),
            image_url: None,
        }
    }

    #[test]
    fn test_difficulty_scores() {
        assert_eq!(Difficulty::Easy.score(), 1);
        assert_eq!(Difficulty::Medium.score(), 2);
        assert_eq!(Difficulty::Hard.score(), 3);
    }

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!("hard".parse::<Difficulty>().ok(), Some(Difficulty::Hard));
        assert_eq!(" Easy ".parse::<Difficulty>().ok(), Some(Difficulty::Easy));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_negative_amount_is_floored() {
        assert!(Ingredient::new("salt", -1.0, "tsp").amount.abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_time_and_multiplier() {
        let recipe = sample();
        assert_eq!(recipe.total_time_mins(), 30);
        assert!((recipe.scaling_multiplier() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample()).unwrap_or_default();
        assert_eq!(json["originalServings"], 4);
        assert_eq!(json["currentServings"], 6);
        assert_eq!(json["prepTime"], 10);
        assert_eq!(json["difficulty"], "Easy");
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut recipe = sample();
        recipe.name = "   ".into();
        assert!(recipe.validate().is_err());

        let mut recipe = sample();
        recipe.description = String::new();
        assert!(recipe.validate().is_err());

        let mut recipe = sample();
        recipe.original_servings = 0;
        assert!(recipe.validate().is_err());

        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_current_servings() {
        let mut recipe = sample();
        recipe.current_servings = 0;
        let code = recipe.validate().err().map(|e| e.code);
        assert_eq!(code, Some(crate::errors::ErrorCode::InvalidInput));
    }

    #[test]
    fn test_validate_rejects_bad_ingredient_amounts() {
        // Struct literals bypass the clamping in `Ingredient::new`
        for amount in [-5.0, f64::NAN, f64::INFINITY] {
            let mut recipe = sample();
            recipe.ingredients.push(Ingredient {
                name: "sugar".into(),
                amount,
                unit: "g".into(),
            });
            assert!(recipe.validate().is_err_and(|e| e.is_validation()));
        }

        let mut recipe = sample();
        recipe.ingredients[0].amount = 0.0;
        assert!(recipe.validate().is_ok());
    }
}
