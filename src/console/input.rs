// ABOUTME: Console input source with prompt-and-reread loops
// ABOUTME: Turns raw lines into validated ingredients, steps and recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::constants::keywords;
use crate::errors::{AppError, AppResult};
use crate::logging::SessionLogger;
use crate::recipes::{Ingredient, Recipe, RecipeStep};

/// Line-oriented prompter over any reader/writer pair
///
/// Every prompt is written without a trailing newline and flushed before
/// reading. Answers are trimmed. End of input is reported as
/// [`AppError::InputClosed`] so retry loops can never spin forever.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap a reader and a writer
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Output side, for collaborators that render directly
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Give back the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Write a full line
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if writing fails
    pub fn say(&mut self, line: impl AsRef<str>) -> AppResult<()> {
        writeln!(self.writer, "{}", line.as_ref())?;
        Ok(())
    }

    /// Show `prompt` and read one trimmed line
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InputClosed`] at end of input, [`AppError::Io`] on I/O failure
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(AppError::input_closed(prompt.trim()));
        }
        Ok(line.trim().to_owned())
    }

    /// Ask until the answer parses as `T`, printing `invalid_message` after each miss
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InputClosed`] at end of input, [`AppError::Io`] on I/O failure
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str, invalid_message: &str) -> AppResult<T> {
        loop {
            let answer = self.ask(prompt)?;
            if let Ok(value) = answer.parse() {
                return Ok(value);
            }
            SessionLogger::log_rejected_input(prompt, "unparseable");
            self.say(invalid_message)?;
        }
    }

    /// Ask until the answer is an integer greater than zero
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InputClosed`] at end of input, [`AppError::Io`] on I/O failure
    pub fn ask_count(&mut self, prompt: &str) -> AppResult<usize> {
        const INVALID: &str = "Invalid input. Please enter a valid number greater than 0.";
        loop {
            let count: usize = self.ask_parsed(prompt, INVALID)?;
            if count > 0 {
                return Ok(count);
            }
            SessionLogger::log_rejected_input(prompt, "zero count");
            self.say(INVALID)?;
        }
    }

    /// Ask a yes/no question; `yes`/`y` and `no`/`n` are accepted in any case
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InputClosed`] at end of input, [`AppError::Io`] on I/O failure
    pub fn confirm(&mut self, prompt: &str) -> AppResult<bool> {
        loop {
            let answer = self.ask(prompt)?.to_lowercase();
            if keywords::YES.contains(&answer.as_str()) {
                return Ok(true);
            }
            if keywords::NO.contains(&answer.as_str()) {
                return Ok(false);
            }
            self.say("Please answer yes or no.")?;
        }
    }
}

fn is_done(answer: &str) -> bool {
    answer.eq_ignore_ascii_case(keywords::DONE)
}

/// Read a whole recipe: name, ingredients and steps
///
/// Returns `None` when the user leaves the name blank.
///
/// # Errors
///
/// Returns [`AppError::InputClosed`] at end of input, [`AppError::Io`] on I/O failure
pub fn read_recipe<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> AppResult<Option<Recipe>> {
    let name = prompter.ask("Recipe Name: ")?;
    let mut recipe = match Recipe::new(name) {
        Ok(recipe) => recipe,
        Err(_) => return Ok(None),
    };

    read_ingredients(prompter, &mut recipe)?;
    read_steps(prompter, &mut recipe)?;
    Ok(Some(recipe))
}

/// Read up to a user-chosen number of ingredients into `recipe`
///
/// Typing `done` as a name stops early. An ingredient that fails validation
/// is reported and entered again.
///
/// # Errors
///
/// Returns [`AppError::InputClosed`] at end of input, [`AppError::Io`] on I/O failure
pub fn read_ingredients<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    recipe: &mut Recipe,
) -> AppResult<()> {
    let count = prompter.ask_count("Enter the number of ingredients: ")?;

    for position in 1..=count {
        prompter.say(format!("Enter details for ingredient {position}:"))?;
        loop {
            let name = prompter.ask("Ingredient Name: ")?;
            if is_done(&name) {
                return Ok(());
            }
            let quantity: f64 = prompter.ask_parsed(
                "Ingredient Quantity: ",
                "Invalid quantity. Please enter a valid number.",
            )?;
            let unit = prompter.ask("Ingredient Unit: ")?;
            let food_group = prompter.ask("Ingredient Food Group: ")?;
            let calories: f64 = prompter.ask_parsed(
                "Ingredient Calories: ",
                "Invalid calories. Please enter a valid number.",
            )?;

            match Ingredient::new(name, quantity, unit, calories, food_group) {
                Ok(ingredient) => {
                    recipe.add_ingredient(ingredient);
                    prompter.say("Ingredient added successfully.")?;
                    break;
                }
                Err(e) => {
                    SessionLogger::log_rejected_input("ingredient", &e.to_string());
                    prompter.say(format!(
                        "Invalid ingredient: {e}. Please re-enter ingredient {position}."
                    ))?;
                }
            }
        }
    }
    Ok(())
}

/// Read up to a user-chosen number of steps into `recipe`
///
/// Typing `done` as a description stops early; a blank description is re-asked.
///
/// # Errors
///
/// Returns [`AppError::InputClosed`] at end of input, [`AppError::Io`] on I/O failure
pub fn read_steps<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    recipe: &mut Recipe,
) -> AppResult<()> {
    let count = prompter.ask_count("Enter the number of steps: ")?;

    for position in 1..=count {
        prompter.say(format!("Enter details for step {position}:"))?;
        loop {
            let description = prompter.ask("Step Description: ")?;
            if is_done(&description) {
                return Ok(());
            }
            match RecipeStep::new(description) {
                Ok(step) => {
                    recipe.add_step(step);
                    prompter.say("Step added successfully.")?;
                    break;
                }
                Err(e) => {
                    SessionLogger::log_rejected_input("step", &e.to_string());
                    prompter.say(format!("Invalid step: {e}."))?;
                }
            }
        }
    }
    Ok(())
}
