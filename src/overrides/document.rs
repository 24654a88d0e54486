//! On-disk override document schema.
//!
//! The document is hand-edited, so reading is lenient: JSON5 syntax
//! (comments, trailing commas, unquoted keys) and case-insensitive keys.
//! Writing produces plain pretty-printed JSON with camelCase keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::endpoint::SubService;

/// Schema keys in their canonical spelling.
const SCHEMA_KEYS: [&str; 12] = [
    "enabled",
    "baseUrl",
    "domainUrl",
    "serverUrl",
    "websiteUrl",
    "apiUrl",
    "apiClientId",
    "apiClientSecret",
    "beatmapSubmissionServiceUrl",
    "spectatorUrl",
    "multiplayerUrl",
    "metadataUrl",
];

/// A root alias: display name plus accessor onto the document.
type RootAlias = (&'static str, fn(&OverrideDocument) -> Option<&String>);

/// Root aliases in priority order; the first populated one wins.
pub const ROOT_ALIASES: [RootAlias; 3] = [
    ("BaseUrl", base_url),
    ("DomainUrl", domain_url),
    ("ServerUrl", server_url),
];

fn base_url(doc: &OverrideDocument) -> Option<&String> {
    doc.base_url.as_ref()
}

fn domain_url(doc: &OverrideDocument) -> Option<&String> {
    doc.domain_url.as_ref()
}

fn server_url(doc: &OverrideDocument) -> Option<&String> {
    doc.server_url.as_ref()
}

/// Sparse set of endpoint overrides.
///
/// Every field except `enabled` is optional. Blank strings are treated the
/// same as absent fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideDocument {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_client_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_client_secret: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beatmap_submission_service_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spectator_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplayer_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_url: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl Default for OverrideDocument {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: None,
            domain_url: None,
            server_url: None,
            website_url: None,
            api_url: None,
            api_client_id: None,
            api_client_secret: None,
            beatmap_submission_service_url: None,
            spectator_url: None,
            multiplayer_url: None,
            metadata_url: None,
        }
    }
}

impl OverrideDocument {
    /// Parse document text.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the text is not a JSON5
    /// object or a known key holds a value of the wrong type.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let value: Value = json5::from_str(content).map_err(|e| e.to_string())?;
        let Value::Object(map) = value else {
            return Err("expected an object at the top level".to_string());
        };

        serde_json::from_value(Value::Object(canonicalize_keys(map))).map_err(|e| e.to_string())
    }

    /// Serialize for writing to disk.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// First populated root alias, trimmed.
    pub fn root_alias(&self) -> Option<&str> {
        self.named_root_alias().map(|(_, value)| value)
    }

    /// First populated root alias with the name it was given under.
    pub fn named_root_alias(&self) -> Option<(&'static str, &str)> {
        ROOT_ALIASES
            .iter()
            .find_map(|(name, accessor)| populated(accessor(self)).map(|value| (*name, value)))
    }

    /// Explicit override for a sub-service, if any.
    pub fn sub_service(&self, service: SubService) -> Option<&String> {
        match service {
            SubService::Spectator => self.spectator_url.as_ref(),
            SubService::Multiplayer => self.multiplayer_url.as_ref(),
            SubService::Metadata => self.metadata_url.as_ref(),
            SubService::BeatmapSubmission => self.beatmap_submission_service_url.as_ref(),
        }
    }
}

/// Trimmed value of an optional field, or `None` when absent or blank.
pub fn populated(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Rewrite known keys to their canonical spelling, ignoring case.
///
/// Unknown keys pass through untouched and are ignored by deserialization.
fn canonicalize_keys(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| {
            let canonical = SCHEMA_KEYS
                .iter()
                .find(|known| known.eq_ignore_ascii_case(&key))
                .map(|known| known.to_string())
                .unwrap_or(key);
            (canonical, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_defaults_to_true() {
        let doc = OverrideDocument::parse("{}").unwrap();
        assert!(doc.enabled);
        assert_eq!(doc, OverrideDocument::default());
    }

    #[test]
    fn keys_match_case_insensitively() {
        let doc = OverrideDocument::parse(
            r#"{ "BASEURL": "https://x.tld", "ApiClientID": "7", "Enabled": false }"#,
        )
        .unwrap();
        assert_eq!(doc.base_url.as_deref(), Some("https://x.tld"));
        assert_eq!(doc.api_client_id.as_deref(), Some("7"));
        assert!(!doc.enabled);
    }

    #[test]
    fn accepts_comments_and_trailing_commas() {
        let doc = OverrideDocument::parse(
            r#"
            {
                // point everything at the test box
                "serverUrl": "https://test.tld",
                /* realtime */ spectatorUrl: "wss://test.tld/spec/",
            }
            "#,
        )
        .unwrap();
        assert_eq!(doc.server_url.as_deref(), Some("https://test.tld"));
        assert_eq!(doc.spectator_url.as_deref(), Some("wss://test.tld/spec/"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let doc = OverrideDocument::parse(r#"{ "theme": "dark", "apiUrl": "https://a" }"#).unwrap();
        assert_eq!(doc.api_url.as_deref(), Some("https://a"));
    }

    #[test]
    fn null_values_are_absent() {
        let doc = OverrideDocument::parse(r#"{ "apiUrl": null }"#).unwrap();
        assert!(doc.api_url.is_none());
    }

    #[test]
    fn rejects_non_object_and_wrong_types() {
        assert!(OverrideDocument::parse("[1, 2]").is_err());
        assert!(OverrideDocument::parse(r#"{ "apiUrl": 42 }"#).is_err());
        assert!(OverrideDocument::parse("{ not json").is_err());
    }

    #[test]
    fn root_alias_uses_priority_order() {
        let doc = OverrideDocument {
            base_url: Some("  ".into()),
            domain_url: Some(" https://domain.tld ".into()),
            server_url: Some("https://server.tld".into()),
            ..Default::default()
        };
        assert_eq!(doc.root_alias(), Some("https://domain.tld"));

        let doc = OverrideDocument {
            server_url: Some("https://server.tld".into()),
            ..Default::default()
        };
        assert_eq!(doc.root_alias(), Some("https://server.tld"));
        assert_eq!(OverrideDocument::default().root_alias(), None);
    }

    #[test]
    fn base_url_beats_other_aliases() {
        let doc = OverrideDocument {
            base_url: Some("https://base.tld".into()),
            domain_url: Some("https://domain.tld".into()),
            server_url: Some("https://server.tld".into()),
            ..Default::default()
        };
        assert_eq!(doc.root_alias(), Some("https://base.tld"));
        assert_eq!(
            doc.named_root_alias(),
            Some(("BaseUrl", "https://base.tld"))
        );

        let doc = OverrideDocument {
            domain_url: Some("https://domain.tld".into()),
            server_url: Some("https://server.tld".into()),
            ..Default::default()
        };
        assert_eq!(
            doc.named_root_alias(),
            Some(("DomainUrl", "https://domain.tld"))
        );
    }

    #[test]
    fn writes_only_populated_fields() {
        let doc = OverrideDocument {
            base_url: Some("https://x.tld".into()),
            ..Default::default()
        };
        let json = doc.to_pretty_json().unwrap();
        assert!(json.contains("\"enabled\": true"));
        assert!(json.contains("\"baseUrl\": \"https://x.tld\""));
        assert!(!json.contains("apiUrl"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn populated_trims_and_skips_blank() {
        let blank = Some(" \t".to_string());
        let value = Some(" v ".to_string());
        assert_eq!(populated(blank.as_ref()), None);
        assert_eq!(populated(value.as_ref()), Some("v"));
        assert_eq!(populated(None), None);
    }
}
