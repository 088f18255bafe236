// ABOUTME: Recipe aggregate owning ordered ingredients and preparation steps
// ABOUTME: Provides calorie totals with threshold notification, scaling, reset and clear
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use tracing::{debug, warn};

use super::models::{validate_quantity, validate_recipe_name, Ingredient, RecipeStep};
use super::observers::{CaloriesExceeded, CaloriesObservers, SubscriptionId};
use crate::constants::CALORIE_THRESHOLD;
use crate::errors::{ValidationError, ValidationResult};

/// A named recipe with ingredients and instructions
///
/// Ingredients and steps keep insertion order, which is also display order.
/// Observers registered with [`Recipe::on_calories_exceeded`] are owned by the
/// recipe and dropped with it.
#[derive(Debug, Serialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<RecipeStep>,
    #[serde(skip)]
    observers: CaloriesObservers,
}

impl Recipe {
    /// Create an empty recipe
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] if `name` is empty or whitespace-only.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: validate_recipe_name(name)?,
            ingredients: Vec::new(),
            steps: Vec::new(),
            observers: CaloriesObservers::default(),
        })
    }

    /// Add an ingredient (builder style)
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.add_ingredient(ingredient);
        self
    }

    /// Add a step (builder style)
    #[must_use]
    pub fn with_step(mut self, step: RecipeStep) -> Self {
        self.add_step(step);
        self
    }

    /// Recipe name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ingredients in insertion order
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Steps in insertion order
    #[must_use]
    pub fn steps(&self) -> &[RecipeStep] {
        &self.steps
    }

    /// Number of ingredients
    #[must_use]
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Number of steps
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Append an already-validated ingredient
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        debug!(
            recipe = %self.name,
            ingredient = %ingredient.name(),
            quantity = ingredient.quantity(),
            "Ingredient added"
        );
        self.ingredients.push(ingredient);
    }

    /// Append an already-validated step
    pub fn add_step(&mut self, step: RecipeStep) {
        debug!(recipe = %self.name, position = self.steps.len() + 1, "Step added");
        self.steps.push(step);
    }

    /// Sum of `calories * quantity` over all ingredients
    ///
    /// When the sum is strictly greater than [`CALORIE_THRESHOLD`], every
    /// registered observer receives a [`CaloriesExceeded`] event, in
    /// registration order, before this returns. This happens on every call
    /// that crosses the threshold.
    pub fn total_calories(&self) -> f64 {
        let total: f64 = self.ingredients.iter().map(Ingredient::total_calories).sum();

        if total > CALORIE_THRESHOLD {
            warn!(
                recipe = %self.name,
                total_calories = total,
                threshold = CALORIE_THRESHOLD,
                observers = self.observers.len(),
                "Recipe exceeds calorie threshold"
            );
            self.observers.notify(&CaloriesExceeded {
                recipe: self,
                total_calories: total,
            });
        }

        total
    }

    /// Multiply every ingredient quantity by `factor`
    ///
    /// Original quantities are untouched, so [`Recipe::reset_quantities`] can
    /// undo any sequence of scalings. Scaling is all-or-nothing: if any
    /// resulting quantity would be invalid, nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidScaleFactor`] if `factor` is not a
    /// finite number greater than zero, or [`ValidationError`] from quantity
    /// validation if a scaled quantity underflows to zero or overflows.
    pub fn scale(&mut self, factor: f64) -> ValidationResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ValidationError::InvalidScaleFactor { factor });
        }

        let scaled = self
            .ingredients
            .iter()
            .map(|ingredient| validate_quantity(ingredient.quantity() * factor))
            .collect::<ValidationResult<Vec<f64>>>()?;

        for (ingredient, quantity) in self.ingredients.iter_mut().zip(scaled) {
            ingredient.set_quantity(quantity)?;
        }

        debug!(recipe = %self.name, factor, "Recipe scaled");
        Ok(())
    }

    /// Restore every ingredient to the quantity it was created with
    pub fn reset_quantities(&mut self) {
        for ingredient in &mut self.ingredients {
            ingredient.reset_quantity();
        }
        debug!(recipe = %self.name, "Quantities reset");
    }

    /// Remove all ingredients and steps
    ///
    /// The name and registered observers are kept.
    pub fn clear(&mut self) {
        self.ingredients.clear();
        self.steps.clear();
        debug!(recipe = %self.name, "Recipe data cleared");
    }

    /// Register an observer for calorie threshold events
    ///
    /// Returns a handle for [`Recipe::remove_calories_observer`].
    pub fn on_calories_exceeded<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&CaloriesExceeded<'_>) + 'static,
    {
        let id = self.observers.subscribe(Box::new(observer));
        debug!(recipe = %self.name, subscription = %id, "Calorie observer registered");
        id
    }

    /// Unregister an observer; returns `false` if the handle was not registered
    pub fn remove_calories_observer(&mut self, id: SubscriptionId) -> bool {
        let removed = self.observers.unsubscribe(id);
        debug!(recipe = %self.name, subscription = %id, removed, "Calorie observer removed");
        removed
    }

    /// Number of registered calorie observers
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
