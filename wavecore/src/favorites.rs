//! Favorites list persisted as a flat text file, one track path per line.

use crate::storage::Result;
use std::path::{Path, PathBuf};

/// Deduplicated set of favorite tracks, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    path: PathBuf,
    entries: Vec<String>,
    /// Off when the file on disk could not be read faithfully. Additions
    /// then stay in memory and the file is never rewritten.
    read_only: bool,
}

impl Favorites {
    /// Empty set bound to `path`. Nothing is written until the first addition.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
            read_only: false,
        }
    }

    /// Empty set that never touches `path`.
    pub fn read_only(path: PathBuf) -> Self {
        Self {
            read_only: true,
            ..Self::new(path)
        }
    }

    /// Load favorites from `path`. A missing file yields an empty set.
    ///
    /// A file that is not valid UTF-8 is decoded lossily and the set comes
    /// back read-only, so the damaged entries are never written over.
    pub fn load(path: &Path) -> Result<Self> {
        let mut favorites = Self::new(path.to_path_buf());
        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no favorites file yet, starting empty");
                return Ok(favorites);
            }
            Err(e) => return Err(e.into()),
        };

        let contents = String::from_utf8_lossy(&bytes);
        if std::str::from_utf8(&bytes).is_err() {
            tracing::warn!(
                path = %path.display(),
                "favorites file is not valid UTF-8, new favorites will not be saved"
            );
            favorites.read_only = true;
        }

        for line in contents.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() || favorites.contains(line) {
                continue;
            }
            favorites.entries.push(line.to_string());
        }
        tracing::info!(path = %path.display(), count = favorites.len(), "loaded favorites");
        Ok(favorites)
    }

    /// Overwrite the file with every entry, one per line.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut contents = String::new();
        for entry in &self.entries {
            contents.push_str(entry);
            contents.push('\n');
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Add `track` and rewrite the file. Returns `false` if it was already a favorite.
    ///
    /// On a failed write the entry is dropped again, so a later attempt retries.
    pub fn add_and_persist(&mut self, track: &str) -> Result<bool> {
        if self.contains(track) {
            tracing::info!(track, "already a favorite");
            return Ok(false);
        }
        self.entries.push(track.to_string());
        if self.read_only {
            tracing::warn!(track, path = %self.path.display(), "favorites are read-only, kept for this session");
            return Ok(true);
        }
        if let Err(e) = self.save() {
            self.entries.pop();
            return Err(e);
        }
        tracing::info!(track, count = self.entries.len(), "added favorite");
        Ok(true)
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn contains(&self, track: &str) -> bool {
        self.entries.iter().any(|e| e == track)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
