// ABOUTME: Recipe core: ingredients, steps, the recipe aggregate and calorie notifications
// ABOUTME: Pure data and logic with no console I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes
//!
//! - [`Ingredient`] and [`RecipeStep`] validate themselves at construction.
//! - [`Recipe`] owns them, totals calories, scales and resets quantities, and
//!   notifies observers when the total exceeds
//!   [`CALORIE_THRESHOLD`](crate::constants::CALORIE_THRESHOLD).
//! - [`RecipeBook`] holds every recipe entered in a session, ordered by name.

mod book;
mod models;
mod observers;
mod recipe;

pub use book::RecipeBook;
pub use models::{Ingredient, RecipeStep};
pub use observers::{CaloriesExceeded, CaloriesObserver, SubscriptionId};
pub use recipe::Recipe;
