// ABOUTME: Argument parsing helpers for recipe-box
// ABOUTME: Turns "AMOUNT|UNIT|NAME" strings into ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::errors::{AppError, AppResult};
use recipe_core::models::Ingredient;

/// Parse an `--ingredient` value of the form `AMOUNT|UNIT|NAME`
///
/// The unit may be empty (`2||eggs`); the name may contain further `|`.
pub fn parse_ingredient(raw: &str) -> AppResult<Ingredient> {
    let mut parts = raw.splitn(3, '|');
    let (Some(amount), Some(unit), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AppError::invalid_input(format!(
            "ingredient '{raw}' must look like AMOUNT|UNIT|NAME"
        )));
    };

    let amount: f64 = amount.trim().parse().map_err(|_| {
        AppError::invalid_input(format!("ingredient amount '{amount}' is not a number"))
    })?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError::invalid_input(format!(
            "ingredient amount must be a non-negative number, got {amount}"
        )));
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::missing_field("ingredient name"));
    }

    Ok(Ingredient::new(name, amount, unit.trim()))
}

#[cfg(test)]
mod tests {
    use super::parse_ingredient;

    #[test]
    fn test_parse_full_ingredient() {
        let ingredient = parse_ingredient("1.5|cups|flour").ok();
        assert_eq!(
            ingredient.map(|i| (i.amount, i.unit, i.name)),
            Some((1.5, "cups".to_owned(), "flour".to_owned()))
        );
    }

    #[test]
    fn test_parse_allows_empty_unit() {
        let ingredient = parse_ingredient("2||eggs").ok();
        assert_eq!(ingredient.map(|i| i.unit), Some(String::new()));
    }

    #[test]
    fn test_parse_rejects_malformed_values() {
        assert!(parse_ingredient("flour").is_err());
        assert!(parse_ingredient("lots|cups|flour").is_err());
        assert!(parse_ingredient("-1|cups|flour").is_err());
        assert!(parse_ingredient("1|cups| ").is_err());
    }
}
