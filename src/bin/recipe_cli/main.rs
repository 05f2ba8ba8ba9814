// ABOUTME: Recipe Box CLI - command-line front end for the recipe collection
// ABOUTME: Handles listing, searching, adding, editing, scaling, and deleting recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List everything, or filter by search term and category
//! recipe-box list
//! recipe-box list --search chocolate --category Dessert
//!
//! # Show a recipe with ingredients scaled to its current servings
//! recipe-box show 1
//!
//! # Cook for six instead of four
//! recipe-box servings 1 6
//!
//! # Add a recipe
//! recipe-box add --name Tea --description "Hot tea" --servings 2 \
//!     --ingredient "2|tsp|tea leaves" --ingredient "500|ml|water" \
//!     --step "Boil the water" --step "Steep for 3 minutes"
//!
//! # Rename, recategorize, swap ingredients, or delete
//! recipe-box edit 1 --category Pasta
//! recipe-box edit 1 --ingredient "200|g|guanciale" --remove-ingredient 2
//! recipe-box delete 1
//!
//! # Start over with the starter recipes
//! recipe-box reset --yes
//!
//! # Categories and stats
//! recipe-box categories
//! recipe-box stats
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use recipe_box::config::RecipeBoxConfig;
use recipe_box::logging::LoggingConfig;
use recipe_box::recipes::RecipeStore;
use recipe_box::storage::Storage;
use recipe_core::models::{Difficulty, RecipeId};
use std::path::PathBuf;
use tracing::info;

use commands::edit::{AddArgs, EditArgs};

#[derive(Parser)]
#[command(
    name = "recipe-box",
    about = "Recipe Box collection manager",
    long_about = "Create, search, scale, and manage a personal recipe collection stored on this device."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to RECIPE_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List recipes, optionally filtered
    List {
        /// Case-insensitive text to find in names, descriptions, or ingredients
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Exact category to show ("All" shows every category)
        #[arg(long, short = 'c')]
        category: Option<String>,
    },

    /// Show one recipe with scaled ingredients
    Show {
        /// Recipe id
        id: RecipeId,
    },

    /// Add a new recipe
    Add {
        /// Recipe name
        #[arg(long)]
        name: String,

        /// Short description
        #[arg(long)]
        description: String,

        /// Category tag (default: Main Course)
        #[arg(long)]
        category: Option<String>,

        /// Easy, Medium, or Hard (default: Medium)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Servings the amounts are written for (default: 4)
        #[arg(long)]
        servings: Option<u32>,

        /// Preparation time in minutes (default: 15)
        #[arg(long)]
        prep_time: Option<u32>,

        /// Cooking time in minutes (default: 30)
        #[arg(long)]
        cook_time: Option<u32>,

        /// Ingredient as AMOUNT|UNIT|NAME (repeatable)
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        /// Instruction step (repeatable, in order)
        #[arg(long = "step")]
        steps: Vec<String>,

        /// Image URL
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Edit fields of an existing recipe
    Edit {
        /// Recipe id
        id: RecipeId,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New difficulty
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Servings to cook (the baseline the amounts are written for is fixed)
        #[arg(long)]
        servings: Option<u32>,

        /// New preparation time in minutes
        #[arg(long)]
        prep_time: Option<u32>,

        /// New cooking time in minutes
        #[arg(long)]
        cook_time: Option<u32>,

        /// New image URL (empty string removes it)
        #[arg(long)]
        image_url: Option<String>,

        /// Append an ingredient as AMOUNT|UNIT|NAME (repeatable)
        #[arg(long = "ingredient")]
        add_ingredients: Vec<String>,

        /// Remove ingredient number N as listed by `show` (repeatable)
        #[arg(long = "remove-ingredient", value_name = "N")]
        remove_ingredients: Vec<usize>,

        /// Append an instruction step (repeatable)
        #[arg(long = "step")]
        add_steps: Vec<String>,

        /// Remove step number N as listed by `show` (repeatable)
        #[arg(long = "remove-step", value_name = "N")]
        remove_steps: Vec<usize>,
    },

    /// Set how many servings to cook (values below 1 become 1)
    Servings {
        /// Recipe id
        id: RecipeId,

        /// Desired servings
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },

    /// Delete a recipe
    Delete {
        /// Recipe id
        id: RecipeId,
    },

    /// Replace the collection with the starter recipes
    Reset {
        /// Confirm discarding every stored recipe
        #[arg(long)]
        yes: bool,
    },

    /// List categories
    Categories,

    /// Show collection statistics
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = RecipeBoxConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    let storage = Storage::new(&config.storage).await?;
    let store = RecipeStore::open(storage).await?;
    info!(count = store.len().await, "Recipe collection ready");

    match cli.command {
        Command::List { search, category } => {
            commands::browse::list(&store, search, category).await?;
        }
        Command::Show { id } => commands::browse::show(&store, id).await?,
        Command::Add {
            name,
            description,
            category,
            difficulty,
            servings,
            prep_time,
            cook_time,
            ingredients,
            steps,
            image_url,
        } => {
            let args = AddArgs {
                name,
                description,
                category,
                difficulty,
                servings,
                prep_time,
                cook_time,
                ingredients,
                steps,
                image_url,
            };
            commands::edit::add(&store, args).await?;
        }
        Command::Edit {
            id,
            name,
            description,
            category,
            difficulty,
            servings,
            prep_time,
            cook_time,
            image_url,
            add_ingredients,
            remove_ingredients,
            add_steps,
            remove_steps,
        } => {
            let args = EditArgs {
                name,
                description,
                category,
                difficulty,
                servings,
                prep_time,
                cook_time,
                image_url,
                add_ingredients,
                remove_ingredients,
                add_steps,
                remove_steps,
            };
            commands::edit::edit(&store, id, args).await?;
        }
        Command::Servings { id, count } => commands::edit::servings(&store, id, count).await?,
        Command::Delete { id } => commands::edit::delete(&store, id).await?,
        Command::Reset { yes } => commands::edit::reset(&store, yes).await?,
        Command::Categories => commands::browse::categories(&store).await?,
        Command::Stats => commands::browse::stats(&store).await?,
    }

    Ok(())
}
