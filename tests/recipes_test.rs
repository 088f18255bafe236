// ABOUTME: Integration tests for the recipe aggregate and recipe book
// ABOUTME: Tests calorie totals, scaling, reset, clear and name ordering
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tests for the recipes module including:
//! - Construction and insertion order
//! - Calorie aggregation
//! - Scaling and reset semantics
//! - Clearing and the recipe book

use recipe_app::errors::ValidationError;
use recipe_app::recipes::{Ingredient, Recipe, RecipeBook, RecipeStep};

fn apples() -> Ingredient {
    Ingredient::new("Apples", 2.0, "lbs", 52.0, "Fruit").unwrap()
}

fn pancakes() -> Recipe {
    Recipe::new("Pancakes")
        .unwrap()
        .with_ingredient(Ingredient::new("Flour", 1.5, "cups", 100.0, "Grain").unwrap())
        .with_ingredient(Ingredient::new("Milk", 1.25, "cups", 8.0, "Dairy").unwrap())
        .with_ingredient(Ingredient::new("Egg", 1.0, "piece", 72.0, "Protein").unwrap())
        .with_step(RecipeStep::new("Whisk the dry ingredients").unwrap())
        .with_step(RecipeStep::new("Add milk and egg").unwrap())
        .with_step(RecipeStep::new("Cook on a hot griddle").unwrap())
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_recipe_requires_name() {
    assert_eq!(
        Recipe::new("  ").unwrap_err(),
        ValidationError::EmptyField {
            field: "Recipe name"
        }
    );
    assert_eq!(Recipe::new(" Soup ").unwrap().name(), "Soup");
}

#[test]
fn test_insertion_order_preserved() {
    let recipe = pancakes();

    let names: Vec<&str> = recipe.ingredients().iter().map(Ingredient::name).collect();
    assert_eq!(names, ["Flour", "Milk", "Egg"]);

    let steps: Vec<&str> = recipe.steps().iter().map(RecipeStep::description).collect();
    assert_eq!(
        steps,
        ["Whisk the dry ingredients", "Add milk and egg", "Cook on a hot griddle"]
    );
    assert_eq!(recipe.ingredient_count(), 3);
    assert_eq!(recipe.step_count(), 3);
}

// ============================================================================
// Calories
// ============================================================================

#[test]
fn test_apples_example() {
    let mut recipe = Recipe::new("Apples").unwrap().with_ingredient(apples());
    assert_eq!(recipe.total_calories(), 104.0);

    recipe.scale(0.5).unwrap();
    assert_eq!(recipe.ingredients()[0].quantity(), 1.0);
    assert_eq!(recipe.total_calories(), 52.0);

    recipe.reset_quantities();
    assert_eq!(recipe.ingredients()[0].quantity(), 2.0);
}

#[test]
fn test_total_is_sum_of_calories_times_quantity() {
    let recipe = pancakes();
    // 100 * 1.5 + 8 * 1.25 + 72 * 1
    assert!((recipe.total_calories() - 232.0).abs() < 1e-9);
}

#[test]
fn test_adding_ingredient_increases_total_by_its_contribution() {
    let mut recipe = pancakes();
    let before = recipe.total_calories();

    recipe.add_ingredient(Ingredient::new("Butter", 0.5, "tbsp", 102.0, "Fat").unwrap());
    let after = recipe.total_calories();

    assert!((after - before - 51.0).abs() < 1e-9);
}

#[test]
fn test_empty_recipe_totals_zero() {
    assert_eq!(Recipe::new("Nothing").unwrap().total_calories(), 0.0);
}

// ============================================================================
// Scaling and Reset
// ============================================================================

#[test]
fn test_scale_multiplies_every_quantity() {
    let mut recipe = pancakes();
    recipe.scale(2.0).unwrap();

    let quantities: Vec<f64> = recipe.ingredients().iter().map(Ingredient::quantity).collect();
    assert_eq!(quantities, [3.0, 2.5, 2.0]);

    let originals: Vec<f64> = recipe
        .ingredients()
        .iter()
        .map(Ingredient::original_quantity)
        .collect();
    assert_eq!(originals, [1.5, 1.25, 1.0]);
}

#[test]
fn test_reset_after_repeated_scaling() {
    let mut recipe = pancakes();
    for factor in [2.0, 3.0, 0.5, 0.1, 7.25] {
        recipe.scale(factor).unwrap();
    }
    recipe.reset_quantities();

    for ingredient in recipe.ingredients() {
        assert_eq!(ingredient.quantity(), ingredient.original_quantity());
    }
}

#[test]
fn test_scale_rejects_non_positive_and_non_finite_factors() {
    let mut recipe = pancakes();

    for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = recipe.scale(factor).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidScaleFactor { .. }),
            "factor {factor} should be rejected"
        );
    }

    let quantities: Vec<f64> = recipe.ingredients().iter().map(Ingredient::quantity).collect();
    assert_eq!(quantities, [1.5, 1.25, 1.0]);
}

#[test]
fn test_scale_is_all_or_nothing_on_underflow() {
    let small = Ingredient::new("Small", f64::MIN_POSITIVE, "g", 1.0, "Misc").unwrap();
    let mut recipe = Recipe::new("Tiny")
        .unwrap()
        .with_ingredient(Ingredient::new("Big", 1.0, "g", 1.0, "Misc").unwrap())
        .with_ingredient(small);

    let err = recipe.scale(1e-300).unwrap_err();
    assert!(matches!(err, ValidationError::NonPositiveQuantity { .. }));
    assert_eq!(recipe.ingredients()[0].quantity(), 1.0);
    assert_eq!(recipe.ingredients()[1].quantity(), f64::MIN_POSITIVE);
}

#[test]
fn test_scale_and_reset_on_empty_recipe_are_no_ops() {
    let mut recipe = Recipe::new("Empty").unwrap();
    recipe.scale(2.0).unwrap();
    recipe.reset_quantities();
    assert_eq!(recipe.ingredient_count(), 0);
}

// ============================================================================
// Clear
// ============================================================================

#[test]
fn test_clear_empties_ingredients_and_steps() {
    let mut recipe = pancakes();
    recipe.clear();

    assert_eq!(recipe.ingredient_count(), 0);
    assert_eq!(recipe.step_count(), 0);
    assert_eq!(recipe.total_calories(), 0.0);
    assert_eq!(recipe.name(), "Pancakes");
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_recipe_serializes_without_observers() {
    let mut recipe = Recipe::new("Apples").unwrap().with_ingredient(apples());
    recipe.on_calories_exceeded(|_| {});

    let json = serde_json::to_value(&recipe).unwrap();
    assert_eq!(json["name"], "Apples");
    assert_eq!(json["ingredients"][0]["food_group"], "Fruit");
    assert_eq!(json["ingredients"][0]["original_quantity"], 2.0);
    assert!(json.get("observers").is_none());
}

// ============================================================================
// Recipe Book
// ============================================================================

#[test]
fn test_book_orders_by_name_case_insensitively() {
    let mut book = RecipeBook::new();
    assert!(book.is_empty());

    book.add(Recipe::new("pancakes").unwrap());
    book.add(Recipe::new("Apple pie").unwrap());
    let index = book.add(Recipe::new("Muffins").unwrap());

    assert_eq!(index, 1);
    assert_eq!(book.len(), 3);
    assert_eq!(book.names(), ["Apple pie", "Muffins", "pancakes"]);
}

#[test]
fn test_book_keeps_insertion_order_for_equal_names() {
    let mut book = RecipeBook::new();
    book.add(Recipe::new("Soup").unwrap().with_step(RecipeStep::new("first").unwrap()));
    book.add(Recipe::new("soup").unwrap().with_step(RecipeStep::new("second").unwrap()));

    let first_steps: Vec<&str> = book
        .iter()
        .map(|r| r.steps()[0].description())
        .collect();
    assert_eq!(first_steps, ["first", "second"]);
}

#[test]
fn test_book_get_mut_allows_in_place_mutation() {
    let mut book = RecipeBook::new();
    book.add(Recipe::new("Apples").unwrap().with_ingredient(apples()));

    book.get_mut(0).unwrap().scale(3.0).unwrap();
    assert_eq!(book.get(0).unwrap().ingredients()[0].quantity(), 6.0);
    assert!(book.get(1).is_none());
}
