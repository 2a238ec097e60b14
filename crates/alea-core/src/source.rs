//! Wordlist content resolution.
//!
//! The core never touches a storage layout directly: callers inject a
//! [`WordlistSource`] that turns a filename-like identifier into raw text.
//! Deployments hand the core a [`DirSource`] pointing at their wordlist
//! directory; tests and embedded setups use [`InMemorySource`].

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Resolves a wordlist identifier to its raw text content.
pub trait WordlistSource {
    /// Return the full UTF-8 text behind `identifier`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the identifier does not resolve to
    /// readable content.
    fn read(&self, identifier: &str) -> io::Result<String>;
}

/// Reads `{dir}/{identifier}` from the filesystem.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// A source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl WordlistSource for DirSource {
    fn read(&self, identifier: &str) -> io::Result<String> {
        std::fs::read_to_string(self.dir.join(identifier))
    }
}

/// Map-backed source for tests and embedded wordlists.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    entries: HashMap<String, String>,
}

impl InMemorySource {
    /// An empty source — every read fails until content is registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `identifier`, replacing any prior entry.
    pub fn insert(&mut self, identifier: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(identifier.into(), content.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, identifier: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(identifier, content);
        self
    }
}

impl WordlistSource for InMemorySource {
    fn read(&self, identifier: &str) -> io::Result<String> {
        self.entries.get(identifier).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no content registered for '{identifier}'"),
            )
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
