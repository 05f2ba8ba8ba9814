// ABOUTME: Fixed starter collection installed when storage holds no recipes
// ABOUTME: Deterministic: the same recipes, ids, and order on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::models::{Difficulty, Ingredient, Recipe, RecipeId};

struct SeedRecipe {
    id: RecipeId,
    name: &'static str,
    description: &'static str,
    ingredients: &'static [(&'static str, f64, &'static str)],
    instructions: &'static [&'static str],
    servings: u32,
    prep_time: u32,
    cook_time: u32,
    difficulty: Difficulty,
    category: &'static str,
}

impl SeedRecipe {
    fn build(&self) -> Recipe {
        Recipe {
            id: self.id,
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            ingredients: self
                .ingredients
                .iter()
                .map(|(name, amount, unit)| Ingredient::new(*name, *amount, *unit))
                .collect(),
            instructions: self.instructions.iter().map(|s| (*s).to_owned()).collect(),
            original_servings: self.servings,
            current_servings: self.servings,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            difficulty: self.difficulty,
            category: self.category.to_owned(),
            image_url: None,
        }
    }
}

const SEED_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        id: 1,
        name: "Classic Spaghetti Carbonara",
        description: "Creamy Roman pasta with eggs, pecorino, and crispy pancetta",
        ingredients: &[
            ("spaghetti", 400.0, "g"),
            ("pancetta", 150.0, "g"),
            ("eggs", 4.0, "pieces"),
            ("pecorino romano", 100.0, "g"),
            ("black pepper", 1.0, "tsp"),
        ],
        instructions: &[
            "Boil the spaghetti in salted water until al dente",
            "Fry the pancetta until crispy",
            "Whisk the eggs with the grated pecorino and pepper",
            "Toss the hot pasta with the pancetta, then stir in the egg mixture off the heat",
        ],
        servings: 4,
        prep_time: 10,
        cook_time: 15,
        difficulty: Difficulty::Medium,
        category: "Main Course",
    },
    SeedRecipe {
        id: 2,
        name: "Chocolate Chip Cookies",
        description: "Chewy cookies with crisp edges and plenty of chocolate",
        ingredients: &[
            ("all-purpose flour", 2.25, "cups"),
            ("butter", 1.0, "cup"),
            ("brown sugar", 0.75, "cup"),
            ("eggs", 2.0, "pieces"),
            ("chocolate chips", 2.0, "cups"),
        ],
        instructions: &[
            "Cream the butter and sugar until fluffy",
            "Beat in the eggs",
            "Fold in the flour and chocolate chips",
            "Bake spoonfuls at 375F for 10 minutes",
        ],
        servings: 24,
        prep_time: 15,
        cook_time: 10,
        difficulty: Difficulty::Easy,
        category: "Dessert",
    },
    SeedRecipe {
        id: 3,
        name: "Greek Salad",
        description: "Fresh tomatoes, cucumber, olives, and feta with oregano dressing",
        ingredients: &[
            ("tomatoes", 4.0, "pieces"),
            ("cucumber", 1.0, "piece"),
            ("kalamata olives", 0.5, "cup"),
            ("feta cheese", 200.0, "g"),
            ("olive oil", 3.0, "tbsp"),
        ],
        instructions: &[
            "Chop the tomatoes and cucumber into chunks",
            "Add the olives and crumble the feta on top",
            "Drizzle with olive oil and season with oregano",
        ],
        servings: 4,
        prep_time: 15,
        cook_time: 0,
        difficulty: Difficulty::Easy,
        category: "Salad",
    },
    SeedRecipe {
        id: 4,
        name: "Beef Wellington",
        description: "Beef tenderloin wrapped in mushroom duxelles and puff pastry",
        ingredients: &[
            ("beef tenderloin", 1.0, "kg"),
            ("mushrooms", 500.0, "g"),
            ("prosciutto", 8.0, "slices"),
            ("puff pastry", 1.0, "sheet"),
            ("egg yolk", 1.0, "piece"),
        ],
        instructions: &[
            "Sear the tenderloin on all sides and let it cool",
            "Cook the chopped mushrooms down to a dry paste",
            "Wrap the beef in prosciutto and duxelles, then in pastry",
            "Brush with egg yolk and bake at 400F for 40 minutes",
        ],
        servings: 6,
        prep_time: 45,
        cook_time: 40,
        difficulty: Difficulty::Hard,
        category: "Main Course",
    },
    SeedRecipe {
        id: 5,
        name: "Fluffy Pancakes",
        description: "Thick buttermilk pancakes for a weekend breakfast",
        ingredients: &[
            ("flour", 1.5, "cups"),
            ("buttermilk", 1.25, "cups"),
            ("egg", 1.0, "piece"),
            ("baking powder", 2.0, "tsp"),
            ("butter", 3.0, "tbsp"),
        ],
        instructions: &[
            "Whisk the dry ingredients together",
            "Stir in the buttermilk, egg, and melted butter",
            "Cook ladlefuls on a hot griddle until bubbles form, then flip",
        ],
        servings: 4,
        prep_time: 10,
        cook_time: 15,
        difficulty: Difficulty::Easy,
        category: "Breakfast",
    },
];

/// The starter collection, in display order
#[must_use]
pub fn boilerplate_recipes() -> Vec<Recipe> {
    SEED_RECIPES.iter().map(SeedRecipe::build).collect()
}
