//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::error::{RehostError, Result};

use super::{prompt_text, should_use_colors, OutputMode, RehostTheme, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: RehostTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            RehostTheme::new()
        } else {
            RehostTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        let mut stderr = Term::stderr();
        writeln!(stderr, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_field(&mut self, key: &str, value: &str) {
        writeln!(self.term, "{}", self.theme.format_field(key, value)).ok();
    }

    fn prompt_text(&mut self, _key: &str, question: &str, default: &str) -> Result<String> {
        if !self.is_interactive() {
            return Err(RehostError::Other(anyhow::anyhow!(
                "cannot prompt for '{}' without a terminal",
                question
            )));
        }
        prompt_text(question, default, &self.term)
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}
