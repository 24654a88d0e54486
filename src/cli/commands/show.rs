//! Show command implementation.
//!
//! The `rehost show` command prints the editable override fields.

use crate::cli::args::ShowArgs;
use crate::error::Result;
use crate::secrets::SecretMasker;
use crate::settings::Settings;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    settings: Settings,
    args: ShowArgs,
}

impl ShowCommand {
    pub fn new(settings: Settings, args: ShowArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = self.settings.source();
        if let Some(path) = source.path() {
            ui.message(&format!("# {}", path.display()));
        }

        let fields = source.load_for_editing();
        let secret = if self.args.show_secrets {
            fields.api_client_secret.clone()
        } else {
            SecretMasker::new().mask_value(&fields.api_client_secret)
        };

        ui.show_field("BaseUrl", &fields.base_url);
        ui.show_field("APIUrl", &fields.api_url);
        ui.show_field("APIClientID", &fields.api_client_id);
        ui.show_field("APIClientSecret", &secret);
        Ok(CommandResult::success())
    }
}
