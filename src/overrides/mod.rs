//! Endpoint overrides: the on-disk document and how it is resolved.
//!
//! - [`document`] defines the document schema and lenient parsing
//! - [`store`] abstracts where the document lives
//! - [`source`] loads, saves and resets the document
//! - [`resolver`] merges a loaded document onto a baseline configuration
//! - [`editor`] models an editing session over the editable subset
//!
//! # Example
//!
//! ```
//! use rehost::endpoint::EndpointConfiguration;
//! use rehost::overrides::{resolve, MemoryStore, OverrideSource, OVERRIDE_FILE_NAME};
//!
//! let store = MemoryStore::with_file(
//!     OVERRIDE_FILE_NAME,
//!     r#"{ baseUrl: "https://example.tld", /* everything else derived */ }"#,
//! );
//! let source = OverrideSource::new(store, OVERRIDE_FILE_NAME);
//!
//! let resolution = resolve(&EndpointConfiguration::vendor(), &source.load()).unwrap();
//! assert!(resolution.outcome.is_applied());
//! assert_eq!(
//!     resolution.configuration.spectator_url,
//!     "https://example.tld/signalr/spectator"
//! );
//! ```

pub mod document;
pub mod editor;
pub mod resolver;
pub mod source;
pub mod store;

pub use document::{OverrideDocument, ROOT_ALIASES};
pub use editor::OverrideEditor;
pub use resolver::{install_resolved, resolve, NotAppliedReason, Resolution, ResolutionOutcome};
pub use source::{EditableOverrides, LoadedDocument, OverrideSource, OVERRIDE_FILE_NAME};
pub use store::{FileStore, MemoryStore, OverrideStore};
