// ABOUTME: Interactive menu loop tying the input source, recipe book and display together
// ABOUTME: Enter, display, scale, reset and clear recipes until the user exits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::mem;
use std::rc::Rc;
use std::str::FromStr;

use tracing::info;

use super::display::{self, RecipeSummary};
use super::input::{self, Prompter};
use crate::config::{DisplayConfig, OutputFormat};
use crate::errors::{AppError, AppResult};
use crate::logging::SessionLogger;
use crate::recipes::{Recipe, RecipeBook};

const MENU_PROMPT: &str = "Choose an option: ";
const INVALID_MENU_CHOICE: &str = "Invalid option. Please choose 1-6.";

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Enter a new recipe
    EnterRecipe,
    /// Display every recipe with its calorie total
    DisplayRecipes,
    /// Scale one recipe's quantities
    ScaleRecipe,
    /// Reset one recipe's quantities
    ResetQuantities,
    /// Clear one recipe's ingredients and steps
    ClearRecipe,
    /// Leave the program
    Exit,
}

impl MenuChoice {
    const ALL: [Self; 6] = [
        Self::EnterRecipe,
        Self::DisplayRecipes,
        Self::ScaleRecipe,
        Self::ResetQuantities,
        Self::ClearRecipe,
        Self::Exit,
    ];

    /// Menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnterRecipe => "Enter a new recipe",
            Self::DisplayRecipes => "Display recipes",
            Self::ScaleRecipe => "Scale a recipe",
            Self::ResetQuantities => "Reset quantities",
            Self::ClearRecipe => "Clear recipe data",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: usize = s.trim().parse().map_err(|_| ())?;
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(())
    }
}

/// Warnings collected from recipe observers until the session prints them
type WarningQueue = Rc<RefCell<Vec<String>>>;

/// One interactive console session
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    book: RecipeBook,
    display: DisplayConfig,
    warnings: WarningQueue,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading from `reader` and writing to `writer`
    pub fn new(reader: R, writer: W, display: DisplayConfig) -> Self {
        Self {
            prompter: Prompter::new(reader, writer),
            book: RecipeBook::new(),
            display,
            warnings: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Recipes entered so far
    pub const fn book(&self) -> &RecipeBook {
        &self.book
    }

    /// Finish the session, returning the recipes and the output writer
    pub fn into_parts(self) -> (RecipeBook, W) {
        let (_, writer) = self.prompter.into_parts();
        (self.book, writer)
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InputClosed`] if input ends in the middle of an
    /// operation, or [`AppError::Io`] on console failure
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.print_menu()?;
            let choice = match self
                .prompter
                .ask_parsed::<MenuChoice>(MENU_PROMPT, INVALID_MENU_CHOICE)
            {
                Ok(choice) => choice,
                Err(AppError::InputClosed { .. }) => {
                    info!("Input closed at main menu, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            match choice {
                MenuChoice::EnterRecipe => self.enter_recipe()?,
                MenuChoice::DisplayRecipes => self.display_recipes()?,
                MenuChoice::ScaleRecipe => self.scale_recipe()?,
                MenuChoice::ResetQuantities => self.reset_quantities()?,
                MenuChoice::ClearRecipe => self.clear_recipe()?,
                MenuChoice::Exit => {
                    self.prompter.say("Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    fn print_menu(&mut self) -> AppResult<()> {
        self.prompter.say("")?;
        self.prompter.say("Menu:")?;
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            self.prompter.say(format!("{}. {}", index + 1, choice.label()))?;
        }
        Ok(())
    }

    /// Read a recipe and store it with the threshold warning observer attached
    fn enter_recipe(&mut self) -> AppResult<()> {
        let Some(mut recipe) = input::read_recipe(&mut self.prompter)? else {
            self.prompter.say("Recipe name cannot be empty. No recipe added.")?;
            return Ok(());
        };

        let warnings = Rc::clone(&self.warnings);
        recipe.on_calories_exceeded(move |event| {
            warnings.borrow_mut().push(display::calorie_warning(event));
        });

        SessionLogger::log_recipe_action(recipe.name(), "created");
        self.book.add(recipe);
        self.prompter.say("Recipe saved.")?;
        Ok(())
    }

    fn display_recipes(&mut self) -> AppResult<()> {
        if self.book.is_empty() {
            return self.prompter.say("No recipes entered yet.");
        }

        for recipe in self.book.iter() {
            let out = self.prompter.writer_mut();
            match self.display.format {
                OutputFormat::Text => {
                    display::write_recipe(out, recipe, self.display.color)?;
                    let total = recipe.total_calories();
                    for warning in mem::take(&mut *self.warnings.borrow_mut()) {
                        writeln!(out, "{warning}")?;
                    }
                    display::write_total(out, total)?;
                    writeln!(out)?;
                }
                OutputFormat::Json => {
                    let total = recipe.total_calories();
                    let warnings = mem::take(&mut *self.warnings.borrow_mut());
                    display::write_json(out, &RecipeSummary::new(recipe, total, warnings))?;
                }
            }
        }
        Ok(())
    }

    /// Ask which recipe to act on; `None` when there are no recipes
    fn select_recipe(&mut self) -> AppResult<Option<usize>> {
        if self.book.is_empty() {
            self.prompter.say("No recipes entered yet.")?;
            return Ok(None);
        }

        display::write_recipe_list(self.prompter.writer_mut(), &self.book)?;
        let available = self.book.len();
        loop {
            let position: usize = self
                .prompter
                .ask_parsed("Select a recipe number: ", "Please enter a recipe number.")?;
            if (1..=available).contains(&position) {
                return Ok(Some(position - 1));
            }
            let e = AppError::RecipeNotFound {
                position,
                available,
            };
            self.prompter.say(e.to_string())?;
        }
    }

    fn selected_recipe(&mut self, index: usize) -> AppResult<&mut Recipe> {
        let available = self.book.len();
        self.book.get_mut(index).ok_or(AppError::RecipeNotFound {
            position: index + 1,
            available,
        })
    }

    fn scale_recipe(&mut self) -> AppResult<()> {
        let Some(index) = self.select_recipe()? else {
            return Ok(());
        };

        loop {
            let factor: f64 = self.prompter.ask_parsed(
                "Enter scale factor (e.g. 0.5, 2, 3): ",
                "Invalid factor. Please enter a number.",
            )?;
            let recipe = self.selected_recipe(index)?;
            match recipe.scale(factor) {
                Ok(()) => {
                    let name = recipe.name().to_owned();
                    SessionLogger::log_recipe_action(&name, "scaled");
                    return self
                        .prompter
                        .say(format!("Recipe '{name}' scaled by a factor of {factor}."));
                }
                Err(e) => self.prompter.say(format!("{e}. Please try again."))?,
            }
        }
    }

    fn reset_quantities(&mut self) -> AppResult<()> {
        let Some(index) = self.select_recipe()? else {
            return Ok(());
        };
        let recipe = self.selected_recipe(index)?;
        recipe.reset_quantities();
        let name = recipe.name().to_owned();
        SessionLogger::log_recipe_action(&name, "reset");
        self.prompter
            .say(format!("Quantities of '{name}' reset to original values."))
    }

    fn clear_recipe(&mut self) -> AppResult<()> {
        let Some(index) = self.select_recipe()? else {
            return Ok(());
        };
        if !self
            .prompter
            .confirm("Are you sure you want to clear all data? (yes/no): ")?
        {
            return self.prompter.say("Clear cancelled.");
        }

        let recipe = self.selected_recipe(index)?;
        recipe.clear();
        let name = recipe.name().to_owned();
        SessionLogger::log_recipe_action(&name, "cleared");
        self.prompter.say(format!("Data for '{name}' cleared."))
    }
}
