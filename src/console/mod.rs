// ABOUTME: Console collaborators around the recipe core
// ABOUTME: Input source (prompting), presentation (text/JSON) and the interactive session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Console layer. Everything here is generic over `BufRead`/`Write` so it runs
//! the same against a terminal or an in-memory buffer.

/// Recipe rendering
pub mod display;
/// Prompt-and-reread input source
pub mod input;
/// Interactive menu loop
pub mod session;

pub use display::RecipeSummary;
pub use input::Prompter;
pub use session::{MenuChoice, Session};
