//! In-memory model behind an override editing surface.

use crate::error::Result;

use super::source::{EditableOverrides, OverrideSource};
use super::store::OverrideStore;

/// Holds the fields an operator is editing and persists them on request.
///
/// Saved changes take effect the next time overrides are resolved.
pub struct OverrideEditor<'a, S> {
    source: &'a OverrideSource<S>,
    fields: EditableOverrides,
}

impl<'a, S: OverrideStore> OverrideEditor<'a, S> {
    /// Open an editor pre-filled from the current document.
    pub fn open(source: &'a OverrideSource<S>) -> Self {
        Self {
            fields: source.load_for_editing(),
            source,
        }
    }

    pub fn fields(&self) -> &EditableOverrides {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut EditableOverrides {
        &mut self.fields
    }

    /// Persist the current fields.
    pub fn save(&self) -> Result<()> {
        self.source.save(&self.fields)
    }

    /// Delete the document and blank every field.
    pub fn reset(&mut self) -> Result<()> {
        self.source.reset()?;
        self.fields = EditableOverrides::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::store::MemoryStore;
    use crate::overrides::OVERRIDE_FILE_NAME;

    #[test]
    fn open_prefills_from_document() {
        let store = MemoryStore::with_file(
            OVERRIDE_FILE_NAME,
            r#"{ "domainUrl": "https://d.tld", "apiClientSecret": "s" }"#,
        );
        let source = OverrideSource::new(store, OVERRIDE_FILE_NAME);
        let editor = OverrideEditor::open(&source);

        assert_eq!(editor.fields().base_url, "https://d.tld");
        assert_eq!(editor.fields().api_client_secret, "s");
    }

    #[test]
    fn edit_save_reopen() {
        let source = OverrideSource::new(MemoryStore::new(), OVERRIDE_FILE_NAME);
        let mut editor = OverrideEditor::open(&source);
        assert!(editor.fields().is_blank());

        editor.fields_mut().base_url = "https://x.tld/".into();
        editor.fields_mut().api_client_id = "77".into();
        editor.save().unwrap();

        let reopened = OverrideEditor::open(&source);
        assert_eq!(reopened.fields().base_url, "https://x.tld");
        assert_eq!(reopened.fields().api_client_id, "77");
    }

    #[test]
    fn failed_save_keeps_fields_and_store() {
        let source = OverrideSource::new(MemoryStore::new(), OVERRIDE_FILE_NAME);
        let mut editor = OverrideEditor::open(&source);
        editor.fields_mut().api_url = "https://api.tld".into();

        assert!(editor.save().is_err());
        assert_eq!(editor.fields().api_url, "https://api.tld");
        assert!(source.store().contents(OVERRIDE_FILE_NAME).is_none());
    }

    #[test]
    fn reset_clears_fields_and_document() {
        let store = MemoryStore::with_file(OVERRIDE_FILE_NAME, r#"{ "baseUrl": "https://x.tld" }"#);
        let source = OverrideSource::new(store, OVERRIDE_FILE_NAME);
        let mut editor = OverrideEditor::open(&source);

        editor.reset().unwrap();
        assert!(editor.fields().is_blank());
        assert!(source.store().contents(OVERRIDE_FILE_NAME).is_none());
    }
}
