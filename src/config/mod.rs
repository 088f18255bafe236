// ABOUTME: Configuration management for the recipe console application
// ABOUTME: Loads logging and display settings from environment variables with typed parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! Settings come from environment variables (see
//! [`env_vars`](crate::constants::env_vars)); command-line flags applied by the
//! binary take precedence over them.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::env_vars;
use crate::logging::LoggingConfig;

/// How recipes are rendered on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document per recipe
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Parse(format!(
                "Unknown output format '{other}' (expected text or json)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Recipe display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Colorize recipe names and step numbers
    pub color: bool,
    /// Output format for displayed recipes
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Recipe display settings
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from environment variables on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a recognised variable holds a value that
    /// cannot be parsed, or [`ConfigError::EnvVar`] if it is not valid unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self {
            logging: LoggingConfig::from_env(),
            display: DisplayConfig::default(),
        };

        apply_env_var(env_vars::RECIPE_COLOR, &mut config.display.color)?;
        apply_env_var(env_vars::RECIPE_OUTPUT_FORMAT, &mut config.display.format)?;

        // NO_COLOR wins over RECIPE_COLOR when set to anything non-empty
        if env::var_os(env_vars::NO_COLOR).is_some_and(|v| !v.is_empty()) {
            config.display.color = false;
        }

        debug!(
            color = config.display.color,
            format = %config.display.format,
            "Configuration loaded from environment"
        );
        Ok(config)
    }
}

/// Overwrite `target` with the parsed value of `env_var_name` when it is set
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the variable is set but does not parse,
/// or [`ConfigError::EnvVar`] if it is not valid unicode.
pub fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
    match env::var(env_var_name) {
        Ok(val) => {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
            Ok(())
        }
        Err(env::VarError::NotPresent) => Ok(()),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
