// ABOUTME: Constants for the recipe collection: storage key, sentinels, and draft defaults
// ABOUTME: Pure data constants shared by the store, query functions, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Storage-related constants
pub mod storage {
    /// Fixed key the recipe collection is persisted under
    pub const RECIPES_KEY: &str = "recipes";

    /// File extension used by the file-per-key store
    pub const FILE_EXTENSION: &str = "json";

    /// Directory name created under the platform data directory
    pub const DATA_DIR_NAME: &str = "recipe-box";
}

/// Query-related constants
pub mod query {
    /// Category sentinel that disables category filtering
    pub const ALL_CATEGORIES: &str = "All";
}

/// Defaults applied to a blank recipe draft
pub mod draft_defaults {
    /// Default number of servings for a new recipe
    pub const SERVINGS: u32 = 4;

    /// Default preparation time in minutes
    pub const PREP_TIME_MINS: u32 = 15;

    /// Default cooking time in minutes
    pub const COOK_TIME_MINS: u32 = 30;

    /// Default free-form category tag
    pub const CATEGORY: &str = "Main Course";
}

/// Service identification for structured logging
pub mod service_names {
    /// Service name reported in log output
    pub const RECIPE_BOX: &str = "recipe-box";
}
