// ABOUTME: Criterion benchmarks for collection queries over generated recipe collections
// ABOUTME: Measures search, category filtering, scaling, and statistics latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for collection queries.
//!
//! Measures search and filter latency across collection sizes, plus the
//! per-recipe scaling and whole-collection statistics used by the CLI.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::{generate_collection, CollectionSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_box::recipes::query;
use recipe_box::recipes::RecipeStore;
use recipe_box::storage::InMemoryStore;
use recipe_core::models::RecipeDraft;
use tokio::runtime::Runtime;

const SIZES: [CollectionSize; 2] = [CollectionSize::Typical, CollectionSize::Large];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in SIZES {
        let recipes = generate_collection(size);
        group.throughput(Throughput::Elements(size.count() as u64));

        group.bench_with_input(BenchmarkId::new("ingredient", size.name()), &recipes, |b, r| {
            b.iter(|| query::search(black_box(r), black_box("Chocolate")).len());
        });
        group.bench_with_input(BenchmarkId::new("miss", size.name()), &recipes, |b, r| {
            b.iter(|| query::search(black_box(r), black_box("saffron")).len());
        });
    }

    group.finish();
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in SIZES {
        let recipes = generate_collection(size);
        group.throughput(Throughput::Elements(size.count() as u64));

        group.bench_with_input(BenchmarkId::new("category", size.name()), &recipes, |b, r| {
            b.iter(|| query::filter_by_category(black_box(r), black_box("Dessert")).len());
        });
        group.bench_with_input(BenchmarkId::new("combined", size.name()), &recipes, |b, r| {
            b.iter(|| query::combined_filter(black_box(r), black_box("garlic"), black_box("Soup")).len());
        });
        group.bench_with_input(BenchmarkId::new("categories", size.name()), &recipes, |b, r| {
            b.iter(|| query::distinct_categories(black_box(r)).len());
        });
    }

    group.finish();
}

fn bench_stats_and_scaling(c: &mut Criterion) {
    let recipes = generate_collection(CollectionSize::Large);
    let mut group = c.benchmark_group("aggregate");

    group.bench_function("collection_stats", |b| {
        b.iter(|| query::collection_stats(black_box(&recipes)));
    });

    let mut recipe = recipes[0].clone();
    recipe.current_servings = recipe.original_servings * 3;
    group.bench_function("scaled_ingredients", |b| {
        b.iter(|| query::scaled_ingredients(black_box(&recipe)));
    });

    group.finish();
}

fn bench_store_create(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let store = rt.block_on(async { RecipeStore::open(InMemoryStore::new()).await.unwrap() });

    // Each create re-serializes the whole collection, so this grows with iterations
    c.bench_function("store_create_and_persist", |b| {
        b.iter(|| {
            rt.block_on(async {
                store
                    .create(black_box(RecipeDraft::new("Bench", "Benchmark dish")))
                    .await
                    .unwrap()
            })
        });
    });
}

criterion_group!(
    benches,
    bench_search,
    bench_filters,
    bench_stats_and_scaling,
    bench_store_create
);
criterion_main!(benches);
