// ABOUTME: Data models for recipe ingredients and preparation steps
// ABOUTME: Validated constructors keep quantity positive and text fields non-empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::errors::{ValidationError, ValidationResult};

/// Reject empty or whitespace-only text, returning the trimmed value
fn require_text(value: impl Into<String>, field: &'static str) -> ValidationResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty(field));
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_owned())
    }
}

fn require_finite(value: f64, field: &'static str) -> ValidationResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFiniteValue { field })
    }
}

/// Validate a quantity: finite and strictly greater than zero
pub(crate) fn validate_quantity(quantity: f64) -> ValidationResult<f64> {
    let quantity = require_finite(quantity, "Quantity")?;
    if quantity <= 0.0 {
        return Err(ValidationError::NonPositiveQuantity { value: quantity });
    }
    Ok(quantity)
}

/// Single ingredient in a recipe
///
/// `original_quantity` is captured at construction and never changes, so a
/// recipe can always restore the quantities it was authored with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    name: String,
    quantity: f64,
    original_quantity: f64,
    unit: String,
    /// Calories per unit of quantity
    calories: f64,
    food_group: String,
}

impl Ingredient {
    /// Create a validated ingredient
    ///
    /// Text fields are trimmed before being stored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `name`, `unit` or `food_group` is empty or
    /// whitespace-only, if `quantity` is not greater than zero, if `calories` is
    /// negative, or if either number is not finite.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        calories: f64,
        food_group: impl Into<String>,
    ) -> ValidationResult<Self> {
        let name = require_text(name, "Ingredient name")?;
        let unit = require_text(unit, "Ingredient unit")?;
        let food_group = require_text(food_group, "Ingredient food group")?;
        let quantity = validate_quantity(quantity)?;
        let calories = require_finite(calories, "Calories")?;
        if calories < 0.0 {
            return Err(ValidationError::NegativeCalories { value: calories });
        }

        Ok(Self {
            name,
            quantity,
            original_quantity: quantity,
            unit,
            calories,
            food_group,
        })
    }

    /// Ingredient name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current quantity (after any scaling)
    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Quantity at construction time
    #[must_use]
    pub const fn original_quantity(&self) -> f64 {
        self.original_quantity
    }

    /// Measurement unit as entered
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Calories per unit of quantity
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Food group as entered
    #[must_use]
    pub fn food_group(&self) -> &str {
        &self.food_group
    }

    /// Calories contributed at the current quantity
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.calories * self.quantity
    }

    /// Replace the current quantity
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `quantity` is not a finite number greater
    /// than zero. The stored quantity is left unchanged in that case.
    pub fn set_quantity(&mut self, quantity: f64) -> ValidationResult<()> {
        self.quantity = validate_quantity(quantity)?;
        Ok(())
    }

    /// Restore the quantity captured at construction
    pub(crate) fn reset_quantity(&mut self) {
        self.quantity = self.original_quantity;
    }
}

/// One ordered instruction in a recipe's preparation sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeStep {
    description: String,
}

impl RecipeStep {
    /// Create a validated step
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] if `description` is empty or
    /// whitespace-only.
    pub fn new(description: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            description: require_text(description, "Step description")?,
        })
    }

    /// Step text
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Validate a recipe name, returning the trimmed value
pub(crate) fn validate_recipe_name(name: impl Into<String>) -> ValidationResult<String> {
    require_text(name, "Recipe name")
}
