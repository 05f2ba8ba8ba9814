// ABOUTME: Recipe store owning the canonical collection and persisting every mutation
// ABOUTME: Loads from a key-value store, seeds when empty, and serializes writers with a mutex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ids::IdGenerator;
use super::seed::boilerplate_recipes;
use crate::storage::KeyValueStore;
use recipe_core::constants::storage::RECIPES_KEY;
use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::{Recipe, RecipeDraft, RecipeId};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct StoreState {
    recipes: Vec<Recipe>,
    ids: IdGenerator,
}

/// Sole owner and mutator of the recipe collection
///
/// Each mutation holds the collection lock for its whole
/// read-modify-persist cycle, so concurrent callers never lose an update.
/// When a persist fails the in-memory change is kept and the storage error
/// is returned; the in-memory collection stays authoritative for the session.
#[derive(Debug)]
pub struct RecipeStore<S> {
    storage: S,
    state: Mutex<StoreState>,
}

impl<S: KeyValueStore> RecipeStore<S> {
    /// Create a store with an empty, not yet loaded collection
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Create a store and [`load`](Self::load) it
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or written
    pub async fn open(storage: S) -> AppResult<Self> {
        let store = Self::new(storage);
        store.load().await?;
        Ok(store)
    }

    /// Backing key-value store
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the collection from storage, seeding it when empty
    ///
    /// A missing key, an empty array, or a value that does not parse all
    /// count as empty: the starter collection is installed and persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or written
    pub async fn load(&self) -> AppResult<Vec<Recipe>> {
        let mut state = self.state.lock().await;
        self.load_locked(&mut state).await
    }

    /// Discard the stored collection and reinstall the starter recipes
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be cleared or written
    pub async fn reset(&self) -> AppResult<Vec<Recipe>> {
        let mut state = self.state.lock().await;
        self.storage.remove(RECIPES_KEY).await?;
        info!(key = RECIPES_KEY, "Cleared stored recipes");
        self.load_locked(&mut state).await
    }

    /// Snapshot of the collection in display order
    pub async fn recipes(&self) -> Vec<Recipe> {
        self.state.lock().await.recipes.clone()
    }

    /// Look up one recipe
    pub async fn get(&self, id: RecipeId) -> Option<Recipe> {
        self.state
            .lock()
            .await
            .recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Number of recipes in the collection
    pub async fn len(&self) -> usize {
        self.state.lock().await.recipes.len()
    }

    /// True when the collection holds no recipes
    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.recipes.is_empty()
    }

    /// Validate a draft, assign it a fresh id, and append it
    ///
    /// # Errors
    ///
    /// Returns a validation error when `name` or `description` is blank or an
    /// ingredient amount is invalid, or a storage error if the collection
    /// cannot be persisted
    pub async fn create(&self, draft: RecipeDraft) -> AppResult<Recipe> {
        draft.validate()?;

        let mut state = self.state.lock().await;
        let id = state.ids.next_id();
        let recipe = draft.into_recipe(id);
        state.recipes.push(recipe.clone());

        info!(recipe_id = id, name = %recipe.name, "Created recipe");
        self.persist(&state.recipes).await?;
        Ok(recipe)
    }

    /// Replace the recipe with the same id, keeping its position
    ///
    /// `original_servings` is fixed at creation and must match the stored value.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank required fields, zero servings,
    /// a changed `original_servings`, or a negative or non-finite ingredient
    /// amount; a not-found error if no recipe has `recipe.id`; or a storage
    /// error
    pub async fn update(&self, recipe: Recipe) -> AppResult<Recipe> {
        recipe.validate()?;

        let mut state = self.state.lock().await;
        let slot = state
            .recipes
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {}", recipe.id)))?;
        if slot.original_servings != recipe.original_servings {
            return Err(AppError::invalid_input(format!(
                "originalServings of recipe {} is fixed at {}",
                recipe.id, slot.original_servings
            )));
        }
        slot.clone_from(&recipe);

        info!(recipe_id = recipe.id, "Updated recipe");
        self.persist(&state.recipes).await?;
        Ok(recipe)
    }

    /// Remove the first recipe with `id`; absent ids are a no-op
    ///
    /// Exactly one element is removed even if foreign data carried duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the collection cannot be persisted
    pub async fn delete(&self, id: RecipeId) -> AppResult<()> {
        let mut state = self.state.lock().await;
        match state.recipes.iter().position(|r| r.id == id) {
            Some(index) => {
                state.recipes.remove(index);
                info!(recipe_id = id, "Deleted recipe");
            }
            None => debug!(recipe_id = id, "Delete of absent recipe ignored"),
        }
        self.persist(&state.recipes).await
    }

    /// Set how many servings to cook; values below 1 are clamped to 1
    ///
    /// Only `current_servings` changes.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no recipe has `id`, or a storage error
    pub async fn set_servings(&self, id: RecipeId, servings: i64) -> AppResult<Recipe> {
        let servings = u32::try_from(servings.max(1)).unwrap_or(u32::MAX);

        let mut state = self.state.lock().await;
        let recipe = state
            .recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
        recipe.current_servings = servings;
        let updated = recipe.clone();

        info!(recipe_id = id, servings, "Adjusted servings");
        self.persist(&state.recipes).await?;
        Ok(updated)
    }

    async fn load_locked(&self, state: &mut StoreState) -> AppResult<Vec<Recipe>> {
        let stored = match self.storage.get(RECIPES_KEY).await? {
            Some(raw) => serde_json::from_str::<Vec<Recipe>>(&raw).unwrap_or_else(|e| {
                warn!(key = RECIPES_KEY, error = %e, "Stored recipes are unreadable, reseeding");
                Vec::new()
            }),
            None => Vec::new(),
        };

        let seeded = stored.is_empty();
        state.recipes = if seeded {
            boilerplate_recipes()
        } else {
            stored
        };
        state.ids = IdGenerator::new();
        state.ids.observe(state.recipes.iter().map(|r| r.id));

        if seeded {
            info!(count = state.recipes.len(), "Seeding empty collection");
            self.persist(&state.recipes).await?;
        } else {
            debug!(count = state.recipes.len(), "Loaded recipe collection");
        }

        Ok(state.recipes.clone())
    }

    async fn persist(&self, recipes: &[Recipe]) -> AppResult<()> {
        let json = serde_json::to_string(recipes)?;
        self.storage.set(RECIPES_KEY, &json).await.inspect_err(|e| {
            warn!(key = RECIPES_KEY, error = %e, "Failed to persist recipes");
        })
    }
}
