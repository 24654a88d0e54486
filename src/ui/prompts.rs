//! Interactive prompts.

use console::Term;
use dialoguer::Input;

use crate::error::{RehostError, Result};

fn map_dialoguer_err(e: dialoguer::Error) -> RehostError {
    RehostError::Io(e.into())
}

/// Ask for a line of text; an empty answer is allowed and clears the value.
pub fn prompt_text(question: &str, default: &str, term: &Term) -> Result<String> {
    let input = Input::<String>::new()
        .with_prompt(question)
        .allow_empty(true);

    let input = if default.is_empty() {
        input
    } else {
        input.default(default.to_string())
    };

    input.interact_text_on(term).map_err(map_dialoguer_err)
}
