//! Runtime settings for the tool itself.
//!
//! Each value comes from a command-line flag, falling back to an
//! environment variable, falling back to a built-in default:
//!
//! | Setting       | Flag           | Environment           | Default                   |
//! |---------------|----------------|-----------------------|---------------------------|
//! | store dir     | `--dir`        | `REHOST_DIR`          | `<config dir>/rehost`     |
//! | document name | `--file`       | `REHOST_FILE`         | `endpoints.json`          |
//! | allow http    | `--allow-http` | `REHOST_ALLOW_HTTP`   | off (HTTPS required)      |

use std::path::PathBuf;

use crate::cli::Cli;
use crate::overrides::{FileStore, OverrideSource, OVERRIDE_FILE_NAME};

/// Where the override document lives and how saves are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the document; `None` uses the platform default.
    pub store_dir: Option<PathBuf>,
    /// Document file name.
    pub file_name: String,
    /// Whether saved roots must use `https`.
    pub require_https: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_dir: None,
            file_name: OVERRIDE_FILE_NAME.to_string(),
            require_https: true,
        }
    }
}

impl Settings {
    /// Collect settings from parsed arguments (env fallbacks are applied by clap).
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            store_dir: cli.dir.clone(),
            file_name: cli
                .file
                .clone()
                .unwrap_or_else(|| OVERRIDE_FILE_NAME.to_string()),
            require_https: !cli.allow_http,
        }
    }

    /// The store these settings point at.
    pub fn store(&self) -> FileStore {
        match &self.store_dir {
            Some(dir) => FileStore::new(dir),
            None => FileStore::default_location(),
        }
    }

    /// An override source for these settings.
    pub fn source(&self) -> OverrideSource<FileStore> {
        OverrideSource::new(self.store(), self.file_name.clone())
            .with_https_required(self.require_https)
    }
}
