//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Prompt answers are pre-configured by key.

use std::collections::HashMap;

use crate::error::{RehostError, Result};

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    fields: Vec<(String, String)>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create an interactive MockUI.
    pub fn new() -> Self {
        Self {
            interactive: true,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Simulate a terminal with or without interactivity.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Value shown for a field label, if any.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether any message contains `msg`.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_field(&mut self, key: &str, value: &str) {
        self.fields.push((key.to_string(), value.to_string()));
    }

    fn prompt_text(&mut self, key: &str, _question: &str, default: &str) -> Result<String> {
        if !self.interactive {
            return Err(RehostError::Other(anyhow::anyhow!(
                "cannot prompt for '{}' without a terminal",
                key
            )));
        }
        self.prompts_shown.push(key.to_string());
        Ok(self
            .prompt_responses
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_output() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.warning("careful");
        ui.error("broken");
        ui.show_field("BaseUrl", "https://x.tld");

        assert!(ui.has_message("hello"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
        assert_eq!(ui.field("BaseUrl"), Some("https://x.tld"));
    }

    #[test]
    fn prompt_uses_response_then_default() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("base_url", "https://y.tld");

        assert_eq!(ui.prompt_text("base_url", "Base URL", "").unwrap(), "https://y.tld");
        assert_eq!(ui.prompt_text("api_url", "API URL", "keep").unwrap(), "keep");
        assert_eq!(ui.prompts_shown(), ["base_url", "api_url"]);
    }

    #[test]
    fn non_interactive_prompt_fails() {
        let mut ui = MockUI::new();
        ui.set_interactive(false);
        assert!(ui.prompt_text("base_url", "Base URL", "").is_err());
    }
}
