//! Loading and persisting the override document.
//!
//! Loading never fails: a missing, unreadable or malformed document simply
//! yields no overrides, with the cause logged and carried in
//! [`LoadedDocument`]. Saving validates everything before touching the store.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::endpoint::{normalize_url, require_https, TrailingSlash};
use crate::error::{RehostError, Result};

use super::document::{populated, OverrideDocument};
use super::store::OverrideStore;

/// Default name of the override document.
pub const OVERRIDE_FILE_NAME: &str = "endpoints.json";

/// Outcome of a soft load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedDocument {
    /// No document, an empty one, or no resolvable location.
    Missing,
    /// The document exists but could not be parsed.
    Malformed(String),
    /// The document exists but could not be read.
    Unreadable(String),
    /// A parsed document.
    Found(OverrideDocument),
}

impl LoadedDocument {
    /// The parsed document, if there is one.
    pub fn document(&self) -> Option<&OverrideDocument> {
        match self {
            Self::Found(doc) => Some(doc),
            _ => None,
        }
    }
}

/// The subset of overrides exposed for editing.
///
/// Blank strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableOverrides {
    pub base_url: String,
    pub api_url: String,
    pub api_client_id: String,
    pub api_client_secret: String,
}

impl EditableOverrides {
    /// Whether every field is blank.
    pub fn is_blank(&self) -> bool {
        [
            &self.base_url,
            &self.api_url,
            &self.api_client_id,
            &self.api_client_secret,
        ]
        .iter()
        .all(|v| v.trim().is_empty())
    }

    fn from_document(doc: &OverrideDocument) -> Self {
        let text = |value: Option<&String>| populated(value).unwrap_or_default().to_string();
        Self {
            base_url: doc.root_alias().unwrap_or_default().to_string(),
            api_url: text(doc.api_url.as_ref()),
            api_client_id: text(doc.api_client_id.as_ref()),
            api_client_secret: text(doc.api_client_secret.as_ref()),
        }
    }
}

/// Reads and writes the override document through an [`OverrideStore`].
#[derive(Debug)]
pub struct OverrideSource<S> {
    store: S,
    file_name: String,
    require_https: bool,
}

impl<S: OverrideStore> OverrideSource<S> {
    /// Source for `file_name` inside `store`. HTTPS is required on save.
    pub fn new(store: S, file_name: impl Into<String>) -> Self {
        Self {
            store,
            file_name: file_name.into(),
            require_https: true,
        }
    }

    /// Toggle the HTTPS requirement applied by [`save`](Self::save).
    pub fn with_https_required(mut self, required: bool) -> Self {
        self.require_https = required;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Document name within the store.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Resolved location of the document, if the store has one.
    pub fn path(&self) -> Option<PathBuf> {
        self.store.locate(&self.file_name)
    }

    /// Whether the document currently exists in the store.
    pub fn exists(&self) -> bool {
        self.store.exists(&self.file_name)
    }

    /// Load the document for resolution.
    pub fn load(&self) -> LoadedDocument {
        let Some(path) = self.path() else {
            warn!("No location available for override document '{}'", self.file_name);
            return LoadedDocument::Missing;
        };

        if !self.exists() {
            debug!("No override document at {}", path.display());
            return LoadedDocument::Missing;
        }

        let content = match self.store.read(&self.file_name) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read override document {}: {}", path.display(), e);
                return LoadedDocument::Unreadable(e.to_string());
            }
        };

        if content.trim().is_empty() {
            info!("Override document {} is empty; ignoring", path.display());
            return LoadedDocument::Missing;
        }

        match OverrideDocument::parse(&content) {
            Ok(doc) => {
                debug!("Loaded override document from {}", path.display());
                LoadedDocument::Found(doc)
            }
            Err(message) => {
                let err = RehostError::OverrideParseError { path, message };
                warn!("{}", err);
                LoadedDocument::Malformed(err.to_string())
            }
        }
    }

    /// Load the editable subset; blank when there is no usable document.
    pub fn load_for_editing(&self) -> EditableOverrides {
        self.load()
            .document()
            .map(EditableOverrides::from_document)
            .unwrap_or_default()
    }

    /// Validate `fields` and write a fresh, enabled document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOverride` if `base_url` is blank, either URL is not
    /// absolute, or HTTPS is required and not used. Nothing is written in
    /// that case. Store failures surface as `Io`.
    pub fn save(&self, fields: &EditableOverrides) -> Result<()> {
        let doc = self.validated_document(fields)?;
        let content = doc
            .to_pretty_json()
            .map_err(|e| RehostError::Other(e.into()))?;

        self.store.write(&self.file_name, &content)?;

        match self.path() {
            Some(path) => info!("Saved endpoint overrides to {}", path.display()),
            None => info!("Saved endpoint overrides to '{}'", self.file_name),
        }
        Ok(())
    }

    /// Delete the document. Succeeds when it is already gone.
    pub fn reset(&self) -> Result<()> {
        if self.exists() {
            self.store.delete(&self.file_name)?;
            info!("Removed endpoint overrides '{}'", self.file_name);
        } else {
            debug!("No endpoint overrides to remove");
        }
        Ok(())
    }

    fn validated_document(&self, fields: &EditableOverrides) -> Result<OverrideDocument> {
        if fields.base_url.trim().is_empty() {
            return Err(RehostError::invalid("BaseUrl", "BaseUrl is required"));
        }

        let base_url = self.normalize_root("BaseUrl", &fields.base_url)?;
        let api_url = match non_blank(&fields.api_url) {
            Some(raw) => Some(self.normalize_root("APIUrl", raw)?),
            None => None,
        };

        Ok(OverrideDocument {
            enabled: true,
            base_url: Some(base_url),
            api_url,
            api_client_id: non_blank(&fields.api_client_id).map(str::to_string),
            api_client_secret: non_blank(&fields.api_client_secret).map(str::to_string),
            ..OverrideDocument::default()
        })
    }

    fn normalize_root(&self, field: &'static str, raw: &str) -> Result<String> {
        let url = normalize_url(field, raw, TrailingSlash::Strip)?;
        if self.require_https {
            require_https(field, &url)?;
        }
        Ok(url)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}
