//! Reset command implementation.
//!
//! The `rehost reset` command removes the override document so the vendor
//! endpoints are used again.

use crate::error::Result;
use crate::settings::Settings;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    settings: Settings,
}

impl ResetCommand {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = self.settings.source();
        let had_document = source.exists();

        source.reset()?;

        if had_document {
            ui.success("Removed endpoint overrides");
        } else {
            ui.message("No endpoint overrides to remove.");
        }
        Ok(CommandResult::success())
    }
}
