//! Backing storage for the override document.
//!
//! [`OverrideSource`](super::OverrideSource) only needs a handful of raw text
//! operations keyed by file name, captured by [`OverrideStore`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Raw text storage addressed by name.
pub trait OverrideStore {
    /// Where `name` lives, if the store can resolve a location at all.
    fn locate(&self, name: &str) -> Option<PathBuf>;

    /// Whether `name` currently exists.
    fn exists(&self, name: &str) -> bool;

    /// Read the full contents of `name`.
    fn read(&self, name: &str) -> io::Result<String>;

    /// Replace the contents of `name`.
    fn write(&self, name: &str, contents: &str) -> io::Result<()>;

    /// Remove `name`.
    fn delete(&self, name: &str) -> io::Result<()>;
}

/// Directory-backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: Option<PathBuf>,
}

impl FileStore {
    /// Store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Store under the platform config directory (`<config>/rehost`).
    ///
    /// The root is unresolved when the platform has no config directory;
    /// reads then find nothing and writes fail.
    pub fn default_location() -> Self {
        Self::from_root(dirs::config_dir().map(|dir| dir.join("rehost")))
    }

    /// Store with an optional root; `None` models an unresolvable location.
    pub fn from_root(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// The directory this store writes to.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn require(&self, name: &str) -> io::Result<PathBuf> {
        self.locate(name).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "no storage directory could be resolved",
            )
        })
    }
}

impl OverrideStore for FileStore {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        self.root.as_ref().map(|root| root.join(name))
    }

    fn exists(&self, name: &str) -> bool {
        self.locate(name).is_some_and(|path| path.is_file())
    }

    fn read(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.require(name)?)
    }

    /// Write using the temp-file-then-rename pattern so a crash never leaves
    /// a half-written document behind.
    fn write(&self, name: &str, contents: &str) -> io::Result<()> {
        let path = self.require(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &path)
    }

    fn delete(&self, name: &str) -> io::Result<()> {
        fs::remove_file(self.require(name)?)
    }
}

/// In-memory store, for tests and embedders that keep settings elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<String, String>>,
    unreadable: bool,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one file.
    pub fn with_file(name: &str, contents: &str) -> Self {
        let store = Self::new();
        store
            .files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), contents.to_string());
        store
    }

    /// Make every read fail with a permission error.
    pub fn unreadable(mut self) -> Self {
        self.unreadable = true;
        self
    }

    /// Current contents of `name`.
    pub fn contents(&self, name: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}

impl OverrideStore for MemoryStore {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        Some(PathBuf::from("memory").join(name))
    }

    fn exists(&self, name: &str) -> bool {
        self.contents(name).is_some()
    }

    fn read(&self, name: &str) -> io::Result<String> {
        if self.unreadable {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is unreadable",
            ));
        }
        self.contents(name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }

    fn write(&self, name: &str, contents: &str) -> io::Result<()> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn delete(&self, name: &str) -> io::Result<()> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }
}
