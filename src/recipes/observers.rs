// ABOUTME: Calorie threshold notification registry owned by each recipe
// ABOUTME: Synchronous, FIFO-ordered callbacks with explicit subscribe/unsubscribe handles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::recipe::Recipe;

/// Opaque handle returned by [`Recipe::on_calories_exceeded`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Event delivered when a recipe's total calories exceed the threshold
#[derive(Debug, Clone, Copy)]
pub struct CaloriesExceeded<'a> {
    /// Recipe whose total crossed the threshold
    pub recipe: &'a Recipe,
    /// Total that was computed
    pub total_calories: f64,
}

/// Callback invoked with each [`CaloriesExceeded`] event
pub type CaloriesObserver = Box<dyn Fn(&CaloriesExceeded<'_>)>;

/// Registered observers in subscription order
///
/// Registering the same closure twice yields two subscriptions and two
/// deliveries per event.
#[derive(Default)]
pub(crate) struct CaloriesObservers {
    entries: Vec<(SubscriptionId, CaloriesObserver)>,
}

impl CaloriesObservers {
    pub(crate) fn subscribe(&mut self, observer: CaloriesObserver) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&self, event: &CaloriesExceeded<'_>) {
        for (_, observer) in &self.entries {
            observer(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for CaloriesObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, _)| id))
            .finish()
    }
}
