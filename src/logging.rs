// ABOUTME: Logging configuration and structured logging setup for the recipe console
// ABOUTME: Builds a tracing subscriber writing to stderr so logs never mix with the dialogue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging built on `tracing` and `tracing-subscriber`

use std::env;
use std::fmt;
use std::io;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::constants::{env_vars, log_targets, service_names};

/// Default level for an interactive session: quiet unless something is wrong
const DEFAULT_LEVEL: &str = "warn";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for machine consumption
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact single-line format
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: service_names::RECIPE_APP.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    ///
    /// Unrecognised `LOG_FORMAT` values fall back to the compact format.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var(env_vars::RUST_LOG).unwrap_or(defaults.level),
            format: env::var(env_vars::LOG_FORMAT)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.format),
            include_location: env::var(env_vars::LOG_INCLUDE_LOCATION).is_ok(),
            ..defaults
        }
    }

    /// Raise the level to `debug` (used by `--verbose`)
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.level = "debug".into();
        self
    }

    /// Filter directives for the subscriber
    ///
    /// A bare level applies to the library and the `recipe_cli` binary while
    /// dependencies stay at `warn`. Full directives are used verbatim.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        if self.level.contains('=') || self.level.contains(',') {
            return self.level.clone();
        }
        format!(
            "{DEFAULT_LEVEL},{}={level},{}={level}",
            log_targets::LIBRARY,
            log_targets::CLI,
            level = self.level
        )
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(self.filter_directives())
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber has already been installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    tracing_fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    tracing_fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    tracing_fmt::layer()
                        .compact()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = %self.format,
            "Recipe app starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level,
                "format": self.format.to_string(),
                "location": self.include_location,
            }
        });
        debug!("Logging configured: {}", config_summary);
    }
}

/// Application-specific logging helpers for console session events
pub struct SessionLogger;

impl SessionLogger {
    /// Log a recipe-level action taken from the menu
    pub fn log_recipe_action(recipe: &str, action: &str) {
        info!(recipe = %recipe, session.action = %action, "Recipe action");
    }

    /// Log an input that was rejected and re-prompted
    pub fn log_rejected_input(prompt: &str, reason: &str) {
        debug!(input.prompt = %prompt, input.reason = %reason, "Input rejected, re-prompting");
    }
}
