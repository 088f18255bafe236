// ABOUTME: End-to-end tests for the interactive menu session
// ABOUTME: Scripts whole console dialogues and checks output and stored recipes
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::Cursor;

use recipe_app::config::{DisplayConfig, OutputFormat};
use recipe_app::console::{MenuChoice, Session};
use recipe_app::errors::{AppError, AppResult};
use recipe_app::recipes::RecipeBook;

const PLAIN: DisplayConfig = DisplayConfig {
    color: false,
    format: OutputFormat::Text,
};

const APPLES: &str = "1\nApples\n1\nApples\n2\nlbs\nFruit\n52\n1\nSlice the apples\n";
const CHEESE: &str = "1\nCheese\n1\nCheddar\n2\nslices\nDairy\n200\n1\nMelt\n";

fn run(script: &str, display: DisplayConfig) -> (AppResult<()>, RecipeBook, String) {
    let mut session = Session::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), display);
    let result = session.run();
    let (book, out) = session.into_parts();
    (result, book, String::from_utf8(out).unwrap())
}

#[test]
fn test_menu_choice_parsing() {
    assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::EnterRecipe));
    assert_eq!(" 6 ".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    assert!("0".parse::<MenuChoice>().is_err());
    assert!("7".parse::<MenuChoice>().is_err());
    assert!("scale".parse::<MenuChoice>().is_err());
}

#[test]
fn test_enter_and_display_recipe() {
    let script = format!("{APPLES}2\n6\n");
    let (result, book, out) = run(&script, PLAIN);

    result.unwrap();
    assert_eq!(book.len(), 1);
    assert!(out.contains(concat!(
        "Recipe: Apples\nIngredients:\nApples - 2 lbs (Fruit)\n",
        "Steps:\n1. Slice the apples\nTotal Calories: 104\n",
    )));
    assert!(!out.contains("Warning:"));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_warning_printed_before_total_when_over_threshold() {
    let script = format!("{CHEESE}2\n6\n");
    let (_, _, out) = run(&script, PLAIN);

    assert!(out.contains(
        "Warning: Total calories of recipe 'Cheese' exceed 300 (400).\nTotal Calories: 400\n"
    ));
}

#[test]
fn test_warning_repeats_on_every_display() {
    let script = format!("{CHEESE}2\n2\n6\n");
    let (_, _, out) = run(&script, PLAIN);
    assert_eq!(out.matches("Warning: Total calories").count(), 2);
}

#[test]
fn test_recipes_displayed_in_name_order() {
    let script = format!("{CHEESE}{APPLES}2\n6\n");
    let (_, book, out) = run(&script, PLAIN);

    assert_eq!(book.names(), ["Apples", "Cheese"]);
    let apples_at = out.find("Recipe: Apples").unwrap();
    let cheese_at = out.find("Recipe: Cheese").unwrap();
    assert!(apples_at < cheese_at);
}

#[test]
fn test_scale_rejects_zero_then_scales_and_resets() {
    let script = format!("{APPLES}3\n1\n0\n0.5\n2\n4\n1\n2\n6\n");
    let (result, book, out) = run(&script, PLAIN);

    result.unwrap();
    assert!(out.contains(
        "Scale factor must be a finite number greater than zero (got 0). Please try again."
    ));
    assert!(out.contains("Recipe 'Apples' scaled by a factor of 0.5."));
    assert!(out.contains("Apples - 1 lbs (Fruit)\n"));
    assert!(out.contains("Total Calories: 52\n"));
    assert!(out.contains("Quantities of 'Apples' reset to original values."));
    assert_eq!(book.get(0).unwrap().ingredients()[0].quantity(), 2.0);
}

#[test]
fn test_clear_requires_confirmation() {
    let script = format!("{APPLES}5\n1\nno\n5\n1\nyes\n2\n6\n");
    let (_, book, out) = run(&script, PLAIN);

    assert!(out.contains("Clear cancelled."));
    assert!(out.contains("Data for 'Apples' cleared."));
    assert!(out.contains(
        "Recipe: Apples\nNo ingredients added.\nNo steps added.\nTotal Calories: 0\n"
    ));

    let recipe = book.get(0).unwrap();
    assert_eq!(recipe.ingredient_count(), 0);
    assert_eq!(recipe.step_count(), 0);
}

#[test]
fn test_recipe_selection_out_of_range_is_re_asked() {
    let script = format!("{APPLES}4\n5\n1\n6\n");
    let (result, _, out) = run(&script, PLAIN);

    result.unwrap();
    assert!(out.contains("No recipe at position 5 (there are 1)"));
    assert!(out.contains("Quantities of 'Apples' reset to original values."));
}

#[test]
fn test_actions_without_recipes() {
    let (result, book, out) = run("2\n3\n4\n5\n6\n", PLAIN);

    result.unwrap();
    assert!(book.is_empty());
    assert_eq!(out.matches("No recipes entered yet.").count(), 4);
}

#[test]
fn test_invalid_menu_option_and_blank_recipe_name() {
    let (result, book, out) = run("9\n1\n\n6\n", PLAIN);

    result.unwrap();
    assert!(book.is_empty());
    assert!(out.contains("Invalid option. Please choose 1-6."));
    assert!(out.contains("Recipe name cannot be empty. No recipe added."));
}

#[test]
fn test_end_of_input_at_menu_ends_session() {
    let (result, book, _) = run(APPLES, PLAIN);
    result.unwrap();
    assert_eq!(book.len(), 1);
}

#[test]
fn test_end_of_input_mid_recipe_is_an_error() {
    let (result, book, _) = run("1\nSoup\n1\nWater\n", PLAIN);
    assert!(matches!(result, Err(AppError::InputClosed { .. })));
    assert!(book.is_empty());
}

#[test]
fn test_json_display() {
    let display = DisplayConfig {
        color: false,
        format: OutputFormat::Json,
    };
    let script = format!("{CHEESE}2\n6\n");
    let (_, _, out) = run(&script, display);

    let start = out.find("{\n").unwrap();
    let end = out.rfind("}\n").unwrap() + 1;
    let summary: serde_json::Value = serde_json::from_str(&out[start..end]).unwrap();

    assert_eq!(summary["name"], "Cheese");
    assert_eq!(summary["total_calories"], 400.0);
    assert_eq!(summary["ingredients"][0]["unit"], "slices");
    assert_eq!(summary["steps"][0]["description"], "Melt");
    assert_eq!(
        summary["warnings"][0],
        "Warning: Total calories of recipe 'Cheese' exceed 300 (400)."
    );
}
