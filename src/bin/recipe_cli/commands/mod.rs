// ABOUTME: Re-exports command modules for recipe-box
// ABOUTME: Provides access to recipe editing and collection browsing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod browse;
pub mod edit;
