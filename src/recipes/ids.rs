// ABOUTME: Monotonic recipe id generator seeded from wall-clock milliseconds
// ABOUTME: Guarantees every issued id exceeds all previously issued and observed ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use recipe_core::models::RecipeId;

/// Issues strictly increasing recipe ids
///
/// Ids start from the current time in milliseconds, which keeps them in the
/// same range as collections written by earlier versions, but two ids issued
/// within the same millisecond still differ.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: RecipeId,
}

impl IdGenerator {
    /// Create a generator that has not seen any ids
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Record ids already present in a collection
    pub fn observe<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = RecipeId>,
    {
        if let Some(max) = ids.into_iter().max() {
            self.last = self.last.max(max);
        }
    }

    /// Next id given the current time in milliseconds
    pub fn next_id_at(&mut self, now_millis: u64) -> RecipeId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// Next id using the system clock
    pub fn next_id(&mut self) -> RecipeId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_id_at(now)
    }

    /// Largest id issued or observed so far
    #[must_use]
    pub const fn last(&self) -> RecipeId {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::IdGenerator;

    #[test]
    fn test_same_millisecond_ids_differ() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id_at(1_000);
        let b = ids.next_id_at(1_000);
        let c = ids.next_id_at(999);
        assert_eq!((a, b, c), (1_000, 1_001, 1_002));
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let mut ids = IdGenerator::new();
        ids.observe([5, 42, 17]);
        assert_eq!(ids.next_id_at(10), 43);
        ids.observe(Vec::new());
        assert_eq!(ids.last(), 43);
    }

    #[test]
    fn test_clock_ids_increase() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id();
        assert!(ids.next_id() > first);
    }
}
