//! Integration tests for override resolution through the public API.

use rehost::endpoint::{EndpointConfiguration, SubService};
use rehost::overrides::{
    resolve, FileStore, LoadedDocument, NotAppliedReason, OverrideDocument, OverrideSource,
    ResolutionOutcome, OVERRIDE_FILE_NAME,
};
use rehost::RehostError;
use std::fs;
use tempfile::TempDir;

fn source_with(content: &str) -> (TempDir, OverrideSource<FileStore>) {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(OVERRIDE_FILE_NAME), content).unwrap();
    let source = OverrideSource::new(FileStore::new(temp.path()), OVERRIDE_FILE_NAME);
    (temp, source)
}

fn resolve_text(content: &str) -> rehost::Result<rehost::overrides::Resolution> {
    let (_temp, source) = source_with(content);
    resolve(&EndpointConfiguration::vendor(), &source.load())
}

#[test]
fn inert_documents_leave_defaults() {
    let vendor = EndpointConfiguration::vendor();
    let cases = [
        ("{ not valid", NotAppliedReason::ParseFailure),
        (r#"{ "enabled": false, "baseUrl": "https://x.tld" }"#, NotAppliedReason::Disabled),
        ("", NotAppliedReason::NotFound),
    ];

    for (content, reason) in cases {
        let resolution = resolve_text(content).unwrap();
        assert_eq!(resolution.configuration, vendor, "content: {content:?}");
        assert_eq!(resolution.outcome, ResolutionOutcome::NotApplied(reason));
    }

    let temp = TempDir::new().unwrap();
    let source = OverrideSource::new(FileStore::new(temp.path()), OVERRIDE_FILE_NAME);
    let resolution = resolve(&vendor, &source.load()).unwrap();
    assert_eq!(
        resolution.outcome,
        ResolutionOutcome::NotApplied(NotAppliedReason::NotFound)
    );
}

#[test]
fn base_url_alone_derives_everything() {
    let config = resolve_text(r#"{ "BaseUrl": "https://x.tld" }"#)
        .unwrap()
        .configuration;

    assert_eq!(config.website_url, "https://x.tld");
    assert_eq!(config.api_url, "https://x.tld");
    for service in SubService::ALL {
        assert_eq!(
            config.sub_service(service),
            format!("https://x.tld{}", service.suffix())
        );
    }
}

#[test]
fn explicit_spectator_wins_over_derivation() {
    let config = resolve_text(
        r#"{
            // custom realtime box
            baseUrl: "https://x.tld",
            spectatorUrl: "wss://custom.tld/spec",
        }"#,
    )
    .unwrap()
    .configuration;

    assert_eq!(config.spectator_url, "wss://custom.tld/spec");
    assert_eq!(config.multiplayer_url, "https://x.tld/signalr/multiplayer");
    assert_eq!(config.metadata_url, "https://x.tld/signalr/metadata");
    assert_eq!(
        config.beatmap_submission_service_url,
        "https://x.tld/beatmap-submission"
    );
}

#[test]
fn website_only_strips_slash_and_keeps_api() {
    let vendor = EndpointConfiguration::vendor();
    let config = resolve_text(r#"{ "websiteUrl": "https://a.tld/" }"#)
        .unwrap()
        .configuration;

    assert_eq!(config.website_url, "https://a.tld");
    assert_eq!(config.api_url, vendor.api_url);
    for service in SubService::ALL {
        assert_eq!(config.sub_service(service), vendor.sub_service(service));
    }
}

#[test]
fn invalid_api_url_is_rejected() {
    let err = resolve_text(r#"{ "apiUrl": "not-a-url" }"#).unwrap_err();
    match err {
        RehostError::InvalidOverride { field, message } => {
            assert_eq!(field, "APIUrl");
            assert_eq!(message, "APIUrl must be an absolute URL");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn resolution_from_parsed_document() {
    let doc = OverrideDocument {
        domain_url: Some("https://d.tld".into()),
        api_url: Some("https://api.d.tld/".into()),
        api_client_id: Some("99".into()),
        ..Default::default()
    };
    let resolution = resolve(
        &EndpointConfiguration::vendor(),
        &LoadedDocument::Found(doc),
    )
    .unwrap();

    assert!(resolution.outcome.is_applied());
    assert_eq!(resolution.configuration.website_url, "https://d.tld");
    assert_eq!(resolution.configuration.api_url, "https://api.d.tld");
    assert_eq!(
        resolution.configuration.spectator_url,
        "https://api.d.tld/signalr/spectator"
    );
    assert_eq!(resolution.configuration.api_client_id.as_deref(), Some("99"));
}
