//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod completions;
pub mod dispatcher;
pub mod edit;
pub mod path;
pub mod reset;
pub mod resolve;
pub mod set;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::error::{RehostError, Result};
use crate::ui::UserInterface;

/// Report a rejected override to the user; pass any other error through.
fn report_invalid(err: RehostError, ui: &mut dyn UserInterface) -> Result<CommandResult> {
    match err {
        RehostError::InvalidOverride { .. } => {
            ui.error(&err.to_string());
            Ok(CommandResult::failure(1))
        }
        other => Err(other),
    }
}
