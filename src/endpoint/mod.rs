//! Endpoint configuration model.
//!
//! - [`EndpointConfiguration`] is the resolved set of service endpoints
//! - [`SubService`] describes the realtime/API-adjacent services that can be
//!   derived from the API root
//! - [`normalize`] holds the URL normalization rules
//! - [`holder`] holds the process-wide snapshot

pub mod holder;
pub mod normalize;

pub use holder::EndpointHolder;
pub use normalize::{join_suffix, normalize_url, require_https, TrailingSlash};

use serde::Serialize;

/// Vendor website and API root.
pub const VENDOR_ROOT: &str = "https://osu.ppy.sh";

/// Vendor OAuth client id.
pub const VENDOR_CLIENT_ID: &str = "5";

/// The endpoints a client talks to.
///
/// Built once from [`EndpointConfiguration::vendor`] and replaced wholesale
/// by a resolved copy; never edited field by field while readers exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfiguration {
    /// Website root, no trailing slash.
    pub website_url: String,

    /// API root, no trailing slash.
    pub api_url: String,

    /// Spectator hub endpoint.
    pub spectator_url: String,

    /// Multiplayer hub endpoint.
    pub multiplayer_url: String,

    /// Metadata hub endpoint.
    pub metadata_url: String,

    /// Beatmap submission service root, no trailing slash.
    pub beatmap_submission_service_url: String,

    /// OAuth client id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_client_id: Option<String>,

    /// OAuth client secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_client_secret: Option<String>,
}

impl EndpointConfiguration {
    /// The official backend.
    ///
    /// Each sub-service URL equals the API root joined with that
    /// sub-service's derivation suffix.
    pub fn vendor() -> Self {
        let mut config = Self {
            website_url: VENDOR_ROOT.to_string(),
            api_url: VENDOR_ROOT.to_string(),
            spectator_url: String::new(),
            multiplayer_url: String::new(),
            metadata_url: String::new(),
            beatmap_submission_service_url: String::new(),
            api_client_id: Some(VENDOR_CLIENT_ID.to_string()),
            api_client_secret: None,
        };
        for service in SubService::ALL {
            *config.sub_service_mut(service) = join_suffix(VENDOR_ROOT, service.suffix());
        }
        config
    }

    /// Current URL of a sub-service.
    pub fn sub_service(&self, service: SubService) -> &str {
        match service {
            SubService::Spectator => &self.spectator_url,
            SubService::Multiplayer => &self.multiplayer_url,
            SubService::Metadata => &self.metadata_url,
            SubService::BeatmapSubmission => &self.beatmap_submission_service_url,
        }
    }

    /// Mutable access to a sub-service URL.
    pub fn sub_service_mut(&mut self, service: SubService) -> &mut String {
        match service {
            SubService::Spectator => &mut self.spectator_url,
            SubService::Multiplayer => &mut self.multiplayer_url,
            SubService::Metadata => &mut self.metadata_url,
            SubService::BeatmapSubmission => &mut self.beatmap_submission_service_url,
        }
    }
}

impl Default for EndpointConfiguration {
    fn default() -> Self {
        Self::vendor()
    }
}

/// A service whose endpoint can be derived from the API root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubService {
    Spectator,
    Multiplayer,
    Metadata,
    BeatmapSubmission,
}

impl SubService {
    /// Every sub-service, in resolution order.
    pub const ALL: [SubService; 4] = [
        SubService::Spectator,
        SubService::Multiplayer,
        SubService::Metadata,
        SubService::BeatmapSubmission,
    ];

    /// Field name used in diagnostics.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Spectator => "SpectatorUrl",
            Self::Multiplayer => "MultiplayerUrl",
            Self::Metadata => "MetadataUrl",
            Self::BeatmapSubmission => "BeatmapSubmissionServiceUrl",
        }
    }

    /// Path appended to the API root when deriving this service.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Spectator => "/signalr/spectator",
            Self::Multiplayer => "/signalr/multiplayer",
            Self::Metadata => "/signalr/metadata",
            Self::BeatmapSubmission => "/beatmap-submission",
        }
    }

    /// How explicit overrides of this service are normalized.
    ///
    /// Hub endpoints are not roots, so a trailing slash is meaningful there.
    pub fn trailing_slash(self) -> TrailingSlash {
        match self {
            Self::BeatmapSubmission => TrailingSlash::Strip,
            _ => TrailingSlash::Keep,
        }
    }
}
