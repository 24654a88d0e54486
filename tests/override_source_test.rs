//! Integration tests for loading, saving and resetting the override document.

use rehost::overrides::{
    EditableOverrides, FileStore, LoadedDocument, OverrideEditor, OverrideSource,
    OVERRIDE_FILE_NAME,
};
use std::fs;
use tempfile::TempDir;

fn source_in(temp: &TempDir) -> OverrideSource<FileStore> {
    OverrideSource::new(FileStore::new(temp.path().join("cfg")), OVERRIDE_FILE_NAME)
}

#[test]
fn save_and_reload_for_editing() {
    let temp = TempDir::new().unwrap();
    let source = source_in(&temp);
    let fields = EditableOverrides {
        base_url: "  https://x.tld  ".into(),
        api_url: "https://api.x.tld".into(),
        api_client_id: " client ".into(),
        api_client_secret: "secret".into(),
    };

    source.save(&fields).unwrap();
    let reloaded = source.load_for_editing();

    assert_eq!(reloaded.base_url, "https://x.tld");
    assert_eq!(reloaded.api_url, "https://api.x.tld");
    assert_eq!(reloaded.api_client_id, "client");
    assert_eq!(reloaded.api_client_secret, "secret");
}

#[test]
fn saved_document_is_pretty_and_enabled() {
    let temp = TempDir::new().unwrap();
    let source = source_in(&temp);
    source
        .save(&EditableOverrides {
            base_url: "https://x.tld".into(),
            ..Default::default()
        })
        .unwrap();

    let written = fs::read_to_string(source.path().unwrap()).unwrap();
    assert!(written.starts_with("{\n"));
    assert!(written.contains("\"enabled\": true"));
    assert!(!written.contains("apiUrl"));
}

#[test]
fn failed_save_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let source = source_in(&temp);

    let result = source.save(&EditableOverrides {
        base_url: "https://x.tld".into(),
        api_url: "relative/path".into(),
        ..Default::default()
    });

    assert!(result.is_err());
    assert!(!source.path().unwrap().exists());
}

#[test]
fn failed_save_keeps_previous_document() {
    let temp = TempDir::new().unwrap();
    let source = source_in(&temp);
    source
        .save(&EditableOverrides {
            base_url: "https://keep.tld".into(),
            ..Default::default()
        })
        .unwrap();

    assert!(source
        .save(&EditableOverrides {
            base_url: "http://insecure.tld".into(),
            ..Default::default()
        })
        .is_err());

    assert_eq!(source.load_for_editing().base_url, "https://keep.tld");
}

#[test]
fn reset_then_load_is_missing() {
    let temp = TempDir::new().unwrap();
    let source = source_in(&temp);
    source
        .save(&EditableOverrides {
            base_url: "https://x.tld".into(),
            ..Default::default()
        })
        .unwrap();

    source.reset().unwrap();

    assert_eq!(source.load(), LoadedDocument::Missing);
    source.reset().unwrap();
}

#[test]
fn hand_edited_document_is_accepted() {
    let temp = TempDir::new().unwrap();
    let source = source_in(&temp);
    fs::create_dir_all(temp.path().join("cfg")).unwrap();
    fs::write(
        source.path().unwrap(),
        r#"
        {
            // written by hand
            SERVERURL: "https://hand.tld",
            "ApiClientSecret": "x",
        }
        "#,
    )
    .unwrap();

    let editor = OverrideEditor::open(&source);
    assert_eq!(editor.fields().base_url, "https://hand.tld");
    assert_eq!(editor.fields().api_client_secret, "x");
}
