//! rehost - redirect a client's service endpoints to a self-hosted backend.
//!
//! A client normally talks to the vendor's official servers. An operator can
//! drop an override document next to it that names a different backend;
//! rehost resolves that document against the vendor defaults into the
//! endpoint set the client should use.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`endpoint`] - The endpoint configuration model and URL rules
//! - [`error`] - Error types and result aliases
//! - [`overrides`] - Override document loading, saving and resolution
//! - [`secrets`] - Credential masking for display
//! - [`settings`] - Runtime settings for the tool itself
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use rehost::endpoint::EndpointConfiguration;
//! use rehost::overrides::{resolve, LoadedDocument, OverrideDocument};
//!
//! let doc = OverrideDocument::parse(r#"{ "BaseUrl": "https://example.tld/" }"#).unwrap();
//! let loaded = LoadedDocument::Found(doc);
//! let resolution = resolve(&EndpointConfiguration::vendor(), &loaded).unwrap();
//!
//! assert_eq!(resolution.configuration.website_url, "https://example.tld");
//! assert_eq!(
//!     resolution.configuration.beatmap_submission_service_url,
//!     "https://example.tld/beatmap-submission"
//! );
//! ```

pub mod cli;
pub mod endpoint;
pub mod error;
pub mod overrides;
pub mod secrets;
pub mod settings;
pub mod ui;

pub use error::{RehostError, Result};
