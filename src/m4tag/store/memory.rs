//! In-memory store for tests. Seeded with path → record entries; opening an
//! unseeded path fails the same way a missing file does.

use super::TagStore;
use crate::error::{Result, TagError};
use crate::record::TagRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, TagRecord>,
    fetches: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with an existing record.
    pub fn with_file(mut self, path: impl Into<PathBuf>, record: TagRecord) -> Self {
        self.files.insert(path.into(), record);
        self
    }

    /// Inspect a stored record without going through the trait.
    pub fn record(&self, path: impl AsRef<Path>) -> Option<&TagRecord> {
        self.files.get(path.as_ref())
    }

    /// How many fetches have been issued, across all files.
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }
}

impl TagStore for InMemoryStore {
    type Handle = PathBuf;

    fn open_for_modify(&mut self, path: &Path) -> Result<Self::Handle> {
        if self.files.contains_key(path) {
            Ok(path.to_path_buf())
        } else {
            Err(TagError::OpenFailed(path.to_path_buf()))
        }
    }

    fn fetch_tags(&mut self, handle: &Self::Handle) -> Result<TagRecord> {
        self.fetches += 1;
        self.files
            .get(handle)
            .cloned()
            .ok_or_else(|| TagError::Store(format!("stale handle: {}", handle.display())))
    }

    fn store_tags(&mut self, handle: &mut Self::Handle, record: &TagRecord) -> Result<()> {
        self.files.insert(handle.clone(), record.clone());
        Ok(())
    }

    fn close(&mut self, _handle: Self::Handle) -> Result<()> {
        Ok(())
    }
}
