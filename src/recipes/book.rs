// ABOUTME: In-memory collection of recipes entered during a session
// ABOUTME: Keeps recipes ordered by name for listing and selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

use super::recipe::Recipe;

/// Recipes ordered by name (case-insensitive, insertion order for ties)
#[derive(Debug, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

fn by_name(a: &Recipe, b: &Recipe) -> Ordering {
    a.name().to_lowercase().cmp(&b.name().to_lowercase())
}

impl RecipeBook {
    /// Create an empty book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a recipe at its sorted position and return that 0-based index
    pub fn add(&mut self, recipe: Recipe) -> usize {
        let index = self
            .recipes
            .partition_point(|existing| by_name(existing, &recipe) != Ordering::Greater);
        self.recipes.insert(index, recipe);
        index
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether no recipe has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipe at a 0-based position in name order
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    /// Mutable recipe at a 0-based position in name order
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Recipe> {
        self.recipes.get_mut(index)
    }

    /// Recipes in name order
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Recipe names in name order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.recipes.iter().map(Recipe::name).collect()
    }
}
