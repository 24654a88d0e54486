//! The `rehost path` command prints where the override document lives.

use crate::error::Result;
use crate::settings::Settings;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The path command implementation.
pub struct PathCommand {
    settings: Settings,
}

impl PathCommand {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Command for PathCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.settings.source().path() {
            Some(path) => {
                ui.message(&path.display().to_string());
                Ok(CommandResult::success())
            }
            None => {
                ui.error("No config directory available; pass --dir or set REHOST_DIR.");
                Ok(CommandResult::failure(2))
            }
        }
    }
}
