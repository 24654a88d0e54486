//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be driven by a mock in tests
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] which records everything for assertions
//!
//! # Example
//!
//! ```
//! use rehost::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Saved");
//! assert!(ui.has_success("Saved"));
//! ```

pub mod mock;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use prompts::prompt_text;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, RehostTheme};

use crate::error::Result;

/// Trait for user interface interactions.
pub trait UserInterface {
    /// Display a plain line (command output; shown in every mode).
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a labelled value.
    fn show_field(&mut self, key: &str, value: &str);

    /// Ask for a line of text, offering `default`.
    fn prompt_text(&mut self, key: &str, question: &str, default: &str) -> Result<String>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
