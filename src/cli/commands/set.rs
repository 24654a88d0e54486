//! Set command implementation.
//!
//! The `rehost set` command writes a fresh override document from flags.

use crate::cli::args::SetArgs;
use crate::error::Result;
use crate::overrides::EditableOverrides;
use crate::settings::Settings;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report_invalid;

/// The set command implementation.
pub struct SetCommand {
    settings: Settings,
    args: SetArgs,
}

impl SetCommand {
    pub fn new(settings: Settings, args: SetArgs) -> Self {
        Self { settings, args }
    }

    fn fields(&self) -> EditableOverrides {
        EditableOverrides {
            base_url: self.args.base_url.clone(),
            api_url: self.args.api_url.clone().unwrap_or_default(),
            api_client_id: self.args.client_id.clone().unwrap_or_default(),
            api_client_secret: self.args.client_secret.clone().unwrap_or_default(),
        }
    }
}

impl Command for SetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = self.settings.source();
        if let Err(e) = source.save(&self.fields()) {
            return report_invalid(e, ui);
        }

        let location = source
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| source.file_name().to_string());
        ui.success(&format!("Saved endpoint overrides to {}", location));
        ui.message("Changes take effect the next time endpoints are resolved.");
        Ok(CommandResult::success())
    }
}
