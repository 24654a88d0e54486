//! Override resolution.
//!
//! [`resolve`] merges a loaded override document onto a baseline
//! configuration. Precedence, highest first:
//!
//! 1. An explicit per-field override (`websiteUrl`, `apiUrl`, `spectatorUrl`, ...)
//! 2. The root alias (`baseUrl`, then `domainUrl`, then `serverUrl`)
//! 3. A sub-service URL derived from the resolved API root
//! 4. The baseline value
//!
//! Resolution works on a copy of the baseline. The copy is only handed back
//! when every field validated, so a failed resolution has no visible effect.

use std::fmt;

use tracing::{debug, info, warn};

use crate::endpoint::{
    join_suffix, normalize_url, EndpointConfiguration, EndpointHolder, SubService, TrailingSlash,
};
use crate::error::Result;

use super::document::{populated, OverrideDocument};
use super::source::{LoadedDocument, OverrideSource};
use super::store::OverrideStore;

/// Why an override document had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotAppliedReason {
    /// No document (or an empty one).
    NotFound,
    /// The document could not be parsed.
    ParseFailure,
    /// The document sets `enabled: false`.
    Disabled,
    /// The document could not be read.
    IoFailure,
}

impl NotAppliedReason {
    /// Machine-readable reason.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::ParseFailure => "parse failure",
            Self::Disabled => "disabled",
            Self::IoFailure => "io failure",
        }
    }
}

impl fmt::Display for NotAppliedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the overrides took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Applied,
    NotApplied(NotAppliedReason),
}

impl ResolutionOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl fmt::Display for ResolutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::NotApplied(reason) => write!(f, "not applied ({})", reason),
        }
    }
}

/// Effective configuration plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub configuration: EndpointConfiguration,
    pub outcome: ResolutionOutcome,
}

impl Resolution {
    fn not_applied(defaults: &EndpointConfiguration, reason: NotAppliedReason) -> Self {
        info!("Endpoint overrides not applied: {}", reason);
        Self {
            configuration: defaults.clone(),
            outcome: ResolutionOutcome::NotApplied(reason),
        }
    }
}

/// Resolve the effective configuration.
///
/// `defaults` is never modified.
///
/// # Errors
///
/// Returns `InvalidOverride` naming the first field that is not an absolute
/// URL.
pub fn resolve(defaults: &EndpointConfiguration, loaded: &LoadedDocument) -> Result<Resolution> {
    let doc = match loaded {
        LoadedDocument::Missing => {
            return Ok(Resolution::not_applied(defaults, NotAppliedReason::NotFound))
        }
        LoadedDocument::Malformed(_) => {
            return Ok(Resolution::not_applied(
                defaults,
                NotAppliedReason::ParseFailure,
            ))
        }
        LoadedDocument::Unreadable(_) => {
            return Ok(Resolution::not_applied(defaults, NotAppliedReason::IoFailure))
        }
        LoadedDocument::Found(doc) if !doc.enabled => {
            return Ok(Resolution::not_applied(defaults, NotAppliedReason::Disabled))
        }
        LoadedDocument::Found(doc) => doc,
    };

    match apply(defaults.clone(), doc) {
        Ok(configuration) => {
            info!(
                "Endpoint overrides applied: website={} api={}",
                configuration.website_url, configuration.api_url
            );
            Ok(Resolution {
                configuration,
                outcome: ResolutionOutcome::Applied,
            })
        }
        Err(e) => {
            warn!("Endpoint overrides rejected: {}", e);
            Err(e)
        }
    }
}

/// Load overrides from `source`, resolve them against `defaults` and install
/// the result into `holder`.
///
/// On error the holder keeps its previous snapshot.
pub fn install_resolved<S: OverrideStore>(
    source: &OverrideSource<S>,
    defaults: &EndpointConfiguration,
    holder: &EndpointHolder,
) -> Result<ResolutionOutcome> {
    let resolution = resolve(defaults, &source.load())?;
    holder.install(resolution.configuration);
    Ok(resolution.outcome)
}

fn apply(
    mut config: EndpointConfiguration,
    doc: &OverrideDocument,
) -> Result<EndpointConfiguration> {
    // Provided-ness comes from the document as written, before the alias
    // fills in the specific roots.
    let named_root = doc.named_root_alias();
    if let Some((alias, value)) = named_root {
        debug!("Root override from {}: {}", alias, value);
    }
    let base_url = named_root.map(|(_, value)| value);
    let website_override = populated(doc.website_url.as_ref());
    let api_override = populated(doc.api_url.as_ref());
    let root_touched = base_url.is_some() || website_override.is_some() || api_override.is_some();

    if let Some(id) = populated(doc.api_client_id.as_ref()) {
        config.api_client_id = Some(id.to_string());
    }
    if let Some(secret) = populated(doc.api_client_secret.as_ref()) {
        config.api_client_secret = Some(secret.to_string());
    }

    if let Some(website) = website_override.or(base_url) {
        config.website_url = normalize_url("WebsiteUrl", website, TrailingSlash::Strip)?;
    }
    if let Some(api) = api_override.or(base_url) {
        config.api_url = normalize_url("APIUrl", api, TrailingSlash::Strip)?;
    }

    if root_touched {
        for service in SubService::ALL {
            if populated(doc.sub_service(service)).is_none() {
                *config.sub_service_mut(service) = join_suffix(&config.api_url, service.suffix());
            }
        }
    }

    // Explicit per-service values go last so they always beat derived ones.
    for service in SubService::ALL {
        if let Some(raw) = populated(doc.sub_service(service)) {
            *config.sub_service_mut(service) =
                normalize_url(service.field_name(), raw, service.trailing_slash())?;
        }
    }

    Ok(config)
}
