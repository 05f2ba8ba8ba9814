// ABOUTME: Common benchmark utilities and fixtures for recipe collection benchmarks
// ABOUTME: Provides deterministic collection generators shared by Criterion suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
