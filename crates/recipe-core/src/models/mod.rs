// ABOUTME: Core data models for the recipe collection
// ABOUTME: Re-exports Recipe, Ingredient, Difficulty, and RecipeDraft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recipe draft used as create input
pub mod draft;
/// Stored recipe records
pub mod recipe;

pub use draft::RecipeDraft;
pub use recipe::{Difficulty, Ingredient, Recipe, RecipeId};
