//! Edit command implementation.
//!
//! The `rehost edit` command prompts for each editable field, pre-filled
//! with the current value, and saves the result.

use crate::error::Result;
use crate::overrides::OverrideEditor;
use crate::settings::Settings;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report_invalid;

/// The edit command implementation.
pub struct EditCommand {
    settings: Settings,
}

impl EditCommand {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Command for EditCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !ui.is_interactive() {
            ui.error("Editing needs a terminal; use 'rehost set' instead.");
            return Ok(CommandResult::failure(2));
        }

        let source = self.settings.source();
        let mut editor = OverrideEditor::open(&source);

        {
            let fields = editor.fields_mut();
            fields.base_url = ui.prompt_text("base_url", "Base URL", &fields.base_url)?;
            fields.api_url = ui.prompt_text("api_url", "API URL (optional)", &fields.api_url)?;
            fields.api_client_id =
                ui.prompt_text("api_client_id", "Client ID (optional)", &fields.api_client_id)?;
            fields.api_client_secret = ui.prompt_text(
                "api_client_secret",
                "Client secret (optional)",
                &fields.api_client_secret,
            )?;
        }

        if let Err(e) = editor.save() {
            return report_invalid(e, ui);
        }

        ui.success("Saved endpoint overrides");
        ui.message("Changes take effect the next time endpoints are resolved.");
        Ok(CommandResult::success())
    }
}
