// ABOUTME: Benchmark fixtures generating large, realistic recipe collections
// ABOUTME: Deterministic output so runs are comparable across machines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for recipe collections.

use recipe_core::models::{Difficulty, Ingredient, Recipe, RecipeDraft};

const CATEGORIES: &[&str] = &[
    "Main Course",
    "Dessert",
    "Salad",
    "Breakfast",
    "Soup",
    "Snack",
];

const PANTRY: &[(&str, &str)] = &[
    ("flour", "g"),
    ("butter", "g"),
    ("eggs", "pieces"),
    ("milk", "ml"),
    ("garlic", "cloves"),
    ("olive oil", "tbsp"),
    ("chocolate", "g"),
    ("tomatoes", "pieces"),
];

/// Predefined collection sizes
#[derive(Debug, Clone, Copy)]
pub enum CollectionSize {
    /// Typical personal collection
    Typical,
    /// Heavy user
    Large,
}

impl CollectionSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Typical => 50,
            Self::Large => 5_000,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Typical => "50",
            Self::Large => "5000",
        }
    }
}

/// Build one recipe whose fields vary with `index`
#[allow(clippy::cast_possible_truncation)]
fn generate_recipe(index: usize) -> Recipe {
    let difficulty = match index % 3 {
        0 => Difficulty::Easy,
        1 => Difficulty::Medium,
        _ => Difficulty::Hard,
    };
    let mut draft = RecipeDraft::new(
        format!("Recipe {index}"),
        format!("Home-style dish number {index}"),
    )
    .with_category(CATEGORIES[index % CATEGORIES.len()])
    .with_difficulty(difficulty)
    .with_servings((index % 8 + 1) as u32)
    .with_prep_time((index % 45) as u32)
    .with_cook_time((index % 90) as u32);

    for offset in 0..5 {
        let (name, unit) = PANTRY[(index + offset) % PANTRY.len()];
        draft = draft.with_ingredient(Ingredient::new(name, (offset * 50 + 25) as f64, unit));
    }
    draft.with_instruction("Prepare").into_recipe(index as u64 + 1)
}

/// Generate a deterministic collection of the given size
#[must_use]
pub fn generate_collection(size: CollectionSize) -> Vec<Recipe> {
    (0..size.count()).map(generate_recipe).collect()
}
