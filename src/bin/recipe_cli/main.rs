// ABOUTME: Recipe CLI - interactive console for entering, scaling and printing recipes
// ABOUTME: Parses flags, loads configuration, sets up logging and runs the menu session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Start an interactive session
//! recipe-cli
//!
//! # Plain output without colors, debug logs on stderr
//! recipe-cli --no-color --verbose
//!
//! # Print recipes as JSON documents
//! recipe-cli --format json
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_app::{config::AppConfig, config::OutputFormat, console::Session};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe keeper console",
    long_about = "Type in recipes, print them with calorie totals, \
                  scale ingredient quantities and reset them."
)]
struct Cli {
    /// Enable debug logging (written to stderr)
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Recipe output format (overrides RECIPE_OUTPUT_FORMAT)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    if cli.verbose {
        config.logging = config.logging.verbose();
    }
    if cli.no_color {
        config.display.color = false;
    }
    if let Some(format) = cli.format {
        config.display.format = format;
    }

    config.logging.init()?;
    info!(
        color = config.display.color,
        format = %config.display.format,
        "Starting recipe session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config.display);

    if let Err(e) = session.run() {
        error!(error = %e, "Recipe session ended with an error");
        let (_, mut out) = session.into_parts();
        writeln!(out, "An error occurred: {e}")?;
        return Ok(ExitCode::FAILURE);
    }

    let (book, _) = session.into_parts();
    info!(recipes = book.len(), "Recipe session finished");
    Ok(ExitCode::SUCCESS)
}
