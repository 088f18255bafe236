// ABOUTME: Error types for recipe validation and the console application layer
// ABOUTME: Defines ValidationError for the core and AppError for I/O, config and input plumbing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Two layers of errors:
//!
//! - [`ValidationError`] is raised synchronously by the recipe core whenever a
//!   value would break an ingredient, step or recipe invariant. The core never
//!   catches it; callers decide whether to abort or re-prompt.
//! - [`AppError`] is used by the console collaborators and the binary. It wraps
//!   validation failures together with I/O, configuration and serialization
//!   errors.

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Broken invariant detected while building or mutating recipe data
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required text field was empty or whitespace-only
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Human-readable name of the offending field
        field: &'static str,
    },

    /// Quantity was zero or negative
    #[error("Quantity must be greater than zero (got {value})")]
    NonPositiveQuantity {
        /// Rejected quantity
        value: f64,
    },

    /// Calories were negative
    #[error("Calories cannot be negative (got {value})")]
    NegativeCalories {
        /// Rejected calorie value
        value: f64,
    },

    /// A numeric field was NaN or infinite
    #[error("{field} must be a finite number")]
    NonFiniteValue {
        /// Human-readable name of the offending field
        field: &'static str,
    },

    /// Scale factor was zero, negative or not finite
    #[error("Scale factor must be a finite number greater than zero (got {factor})")]
    InvalidScaleFactor {
        /// Rejected factor
        factor: f64,
    },
}

impl ValidationError {
    /// Create an "empty field" error
    #[must_use]
    pub const fn empty(field: &'static str) -> Self {
        Self::EmptyField { field }
    }
}

/// Result type for core recipe operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Application-level error for the console layer and the binary
#[derive(Debug, Error)]
pub enum AppError {
    /// Recipe data failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Reading from or writing to the console failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rendering a recipe as JSON failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input ended while a prompt was still waiting for an answer
    #[error("Input closed while waiting for: {prompt}")]
    InputClosed {
        /// Prompt that was pending when input ended
        prompt: String,
    },

    /// A recipe number chosen from the menu does not exist
    #[error("No recipe at position {position} (there are {available})")]
    RecipeNotFound {
        /// 1-based position the user asked for
        position: usize,
        /// Number of recipes currently stored
        available: usize,
    },
}

impl AppError {
    /// Create an "input closed" error for the given prompt
    #[must_use]
    pub fn input_closed(prompt: impl Into<String>) -> Self {
        Self::InputClosed {
            prompt: prompt.into(),
        }
    }
}

/// Result type for console and binary operations
pub type AppResult<T> = Result<T, AppError>;
