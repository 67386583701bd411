//! # Storage Layer
//!
//! The container file is an external collaborator behind the [`TagStore`]
//! trait: open for modification, fetch the current record, store the
//! mutated record, close. Two implementations:
//!
//! - [`fs::FileStore`]: production backend over lofty's MP4 ilst support
//! - [`memory::InMemoryStore`]: in-memory backend for tests
//!
//! The applier is generic over the trait, so the whole mutation engine is
//! exercised in tests without touching real MP4 files.

use crate::error::Result;
use crate::record::TagRecord;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Container collaborator contract. One handle per file, opened, mutated
/// and closed strictly sequentially.
pub trait TagStore {
    type Handle;

    /// Open a file for modification. Failure aborts the whole batch.
    fn open_for_modify(&mut self, path: &Path) -> Result<Self::Handle>;

    /// Read the current tag record.
    fn fetch_tags(&mut self, handle: &Self::Handle) -> Result<TagRecord>;

    /// Persist a record. All-or-nothing from the engine's perspective.
    fn store_tags(&mut self, handle: &mut Self::Handle, record: &TagRecord) -> Result<()>;

    /// Release the handle.
    fn close(&mut self, handle: Self::Handle) -> Result<()>;
}
