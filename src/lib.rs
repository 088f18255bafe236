// ABOUTME: Main library entry point for the recipe keeper
// ABOUTME: Exposes the recipe core plus the console, config and logging layers around it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe App
//!
//! Type in recipes (name, ingredients, preparation steps), print them, total
//! their calories, scale ingredient quantities and reset them.
//!
//! ## Modules
//!
//! - **recipes**: validated `Ingredient`/`RecipeStep`, the `Recipe` aggregate with
//!   calorie threshold notifications, and the `RecipeBook`
//! - **console**: the prompting input source, text/JSON display and the menu session
//! - **config**: environment-driven configuration
//! - **logging**: `tracing` subscriber setup
//! - **errors**: `ValidationError` for the core, `AppError` for everything around it
//!
//! ## Example
//!
//! ```
//! use recipe_app::recipes::{Ingredient, Recipe};
//!
//! let mut recipe = Recipe::new("Apples")?
//!     .with_ingredient(Ingredient::new("Apples", 2.0, "lbs", 52.0, "Fruit")?);
//! assert_eq!(recipe.total_calories(), 104.0);
//!
//! recipe.scale(0.5)?;
//! assert_eq!(recipe.total_calories(), 52.0);
//!
//! recipe.reset_quantities();
//! assert_eq!(recipe.ingredients()[0].quantity(), 2.0);
//! # Ok::<(), recipe_app::errors::ValidationError>(())
//! ```

/// Environment-driven configuration
pub mod config;

/// Console input source, presentation and interactive session
pub mod console;

/// Application-wide constants
pub mod constants;

/// Error types for validation and the application layer
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Recipe core: ingredients, steps, recipes and notifications
pub mod recipes;
