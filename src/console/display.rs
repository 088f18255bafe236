// ABOUTME: Presentation of recipes on the console as colored text or JSON
// ABOUTME: Renders ingredients, numbered steps, calorie totals and threshold warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::constants::CALORIE_THRESHOLD;
use crate::errors::AppResult;
use crate::recipes::{CaloriesExceeded, Ingredient, Recipe, RecipeBook, RecipeStep};

/// Serializable view of a recipe with its computed total
#[derive(Debug, Serialize)]
pub struct RecipeSummary<'a> {
    /// Recipe name
    pub name: &'a str,
    /// Ingredients in display order
    pub ingredients: &'a [Ingredient],
    /// Steps in display order
    pub steps: &'a [RecipeStep],
    /// Total calories at current quantities
    pub total_calories: f64,
    /// Threshold warnings raised while computing the total
    pub warnings: Vec<String>,
}

impl<'a> RecipeSummary<'a> {
    /// Build a summary from a recipe and an already computed total
    #[must_use]
    pub fn new(recipe: &'a Recipe, total_calories: f64, warnings: Vec<String>) -> Self {
        Self {
            name: recipe.name(),
            ingredients: recipe.ingredients(),
            steps: recipe.steps(),
            total_calories,
            warnings,
        }
    }
}

/// Warning line for a calorie threshold event
#[must_use]
pub fn calorie_warning(event: &CaloriesExceeded<'_>) -> String {
    format!(
        "Warning: Total calories of recipe '{}' exceed {CALORIE_THRESHOLD} ({}).",
        event.recipe.name(),
        event.total_calories
    )
}

/// Write name, ingredients and numbered steps
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_recipe(out: &mut impl Write, recipe: &Recipe, color: bool) -> AppResult<()> {
    let title = format!("Recipe: {}", recipe.name());
    if color {
        writeln!(out, "{}", title.green())?;
    } else {
        writeln!(out, "{title}")?;
    }

    if recipe.ingredients().is_empty() {
        writeln!(out, "No ingredients added.")?;
    } else {
        writeln!(out, "Ingredients:")?;
        for ingredient in recipe.ingredients() {
            writeln!(
                out,
                "{} - {} {} ({})",
                ingredient.name(),
                ingredient.quantity(),
                ingredient.unit(),
                ingredient.food_group()
            )?;
        }
    }

    if recipe.steps().is_empty() {
        writeln!(out, "No steps added.")?;
    } else {
        writeln!(out, "Steps:")?;
        for (index, step) in recipe.steps().iter().enumerate() {
            let number = format!("{}. ", index + 1);
            if color {
                write!(out, "{}", number.yellow())?;
            } else {
                write!(out, "{number}")?;
            }
            writeln!(out, "{}", step.description())?;
        }
    }
    Ok(())
}

/// Write the total calories line
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_total(out: &mut impl Write, total_calories: f64) -> AppResult<()> {
    writeln!(out, "Total Calories: {total_calories}")?;
    Ok(())
}

/// Write a summary as one pretty-printed JSON document
///
/// # Errors
///
/// Returns an error if serialization or writing fails
pub fn write_json(out: &mut impl Write, summary: &RecipeSummary<'_>) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)?;
    Ok(())
}

/// Write a numbered list of recipe names in book order
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_recipe_list(out: &mut impl Write, book: &RecipeBook) -> AppResult<()> {
    for (index, name) in book.names().into_iter().enumerate() {
        writeln!(out, "{}. {name}", index + 1)?;
    }
    Ok(())
}
