//! Resolve command implementation.
//!
//! The `rehost resolve` command loads the override document, resolves it
//! against the vendor endpoints, and prints the effective configuration.

use crate::cli::args::ResolveArgs;
use crate::endpoint::{EndpointConfiguration, EndpointHolder};
use crate::error::{RehostError, Result};
use crate::overrides::{install_resolved, NotAppliedReason, ResolutionOutcome};
use crate::secrets::SecretMasker;
use crate::settings::Settings;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report_invalid;

/// The resolve command implementation.
pub struct ResolveCommand {
    settings: Settings,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(settings: Settings, args: ResolveArgs) -> Self {
        Self { settings, args }
    }

    fn report_outcome(&self, outcome: ResolutionOutcome, ui: &mut dyn UserInterface) {
        match outcome {
            ResolutionOutcome::Applied => ui.success("Endpoint overrides applied"),
            ResolutionOutcome::NotApplied(NotAppliedReason::NotFound) => {}
            ResolutionOutcome::NotApplied(NotAppliedReason::Disabled) => {
                ui.warning("Override document is disabled; using vendor endpoints")
            }
            ResolutionOutcome::NotApplied(reason) => ui.warning(&format!(
                "Override document ignored ({}); using vendor endpoints",
                reason
            )),
        }
    }

    fn print(&self, config: &EndpointConfiguration, ui: &mut dyn UserInterface) -> Result<()> {
        let redacted;
        let config = if self.args.show_secrets {
            config
        } else {
            redacted = SecretMasker::new().redact(config);
            &redacted
        };

        if self.args.json {
            let json =
                serde_json::to_string_pretty(config).map_err(|e| RehostError::Other(e.into()))?;
            ui.message(&json);
        } else if self.args.yaml {
            let yaml = serde_yaml::to_string(config).map_err(|e| RehostError::Other(e.into()))?;
            ui.message(&yaml);
        } else {
            let optional = |value: &Option<String>| value.clone().unwrap_or_default();
            ui.show_field("WebsiteUrl", &config.website_url);
            ui.show_field("APIUrl", &config.api_url);
            ui.show_field("SpectatorUrl", &config.spectator_url);
            ui.show_field("MultiplayerUrl", &config.multiplayer_url);
            ui.show_field("MetadataUrl", &config.metadata_url);
            ui.show_field(
                "BeatmapSubmissionServiceUrl",
                &config.beatmap_submission_service_url,
            );
            ui.show_field("APIClientID", &optional(&config.api_client_id));
            ui.show_field("APIClientSecret", &optional(&config.api_client_secret));
        }
        Ok(())
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let vendor = EndpointConfiguration::vendor();
        let holder = EndpointHolder::new(vendor.clone());

        let outcome = match install_resolved(&self.settings.source(), &vendor, &holder) {
            Ok(outcome) => outcome,
            Err(e) => return report_invalid(e, ui),
        };

        self.report_outcome(outcome, ui);
        self.print(&holder.current(), ui)?;
        Ok(CommandResult::success())
    }
}
