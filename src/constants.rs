// ABOUTME: Application-wide constants for the recipe keeper
// ABOUTME: Holds the calorie warning threshold, environment variable names and console keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded values and the names of environment variables read by
//! [`crate::config`].

/// Total calories above which a recipe notifies its observers
///
/// The comparison is strict: a recipe totalling exactly this value does not notify.
pub const CALORIE_THRESHOLD: f64 = 300.0;

/// Service names used in structured logging
pub mod service_names {
    /// Name reported by the logging layer at startup
    pub const RECIPE_APP: &str = "recipe-app";
}

/// Tracing targets of this package's crates
pub mod log_targets {
    /// Library crate target
    pub const LIBRARY: &str = "recipe_app";
    /// Console binary target
    pub const CLI: &str = "recipe_cli";
}

/// Environment variables understood by the configuration loader
pub mod env_vars {
    /// Log filter directive, same syntax as `tracing_subscriber::EnvFilter`
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format: `pretty`, `compact` or `json`
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line number in log lines when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Enable or disable colored recipe output (`true`/`false`)
    pub const RECIPE_COLOR: &str = "RECIPE_COLOR";
    /// Conventional opt-out for terminal colors, any value disables color
    pub const NO_COLOR: &str = "NO_COLOR";
    /// Recipe output format: `text` or `json`
    pub const RECIPE_OUTPUT_FORMAT: &str = "RECIPE_OUTPUT_FORMAT";
}

/// Keywords recognised by the console input source
pub mod keywords {
    /// Typed as an ingredient name or step description to stop entering that list
    pub const DONE: &str = "done";
    /// Accepted affirmative answers to yes/no prompts
    pub const YES: [&str; 2] = ["yes", "y"];
    /// Accepted negative answers to yes/no prompts
    pub const NO: [&str; 2] = ["no", "n"];
}
