// ABOUTME: Core types and constants for the Recipe Box collection manager
// ABOUTME: Foundation crate with error handling, recipe models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing the shared types for Recipe Box. It has no I/O
//! and no async code, so the model can be reused by any front end.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage key, query sentinel, and draft defaults
//! - **models**: `Recipe`, `Ingredient`, `Difficulty`, `RecipeDraft`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe collection data models
pub mod models;
