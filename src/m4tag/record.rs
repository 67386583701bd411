//! # Tag Record
//!
//! Canonical in-memory representation of one file's metadata: a scalar slot
//! per field, the track/disk pairs, the numeric genre type and an optional
//! artwork attachment. Fetched from and written back to the storage backend;
//! owned exclusively by the applier while a file is being processed.

use crate::field::FieldId;
use crate::pairing::Pairing;
use std::collections::BTreeMap;

/// A single scalar slot value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Text(String),
    UInt(u64),
}

/// Binary attachment payload. The format is declared, never sniffed;
/// `Undefined` is what the engine writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtFormat {
    Undefined,
    Jpeg,
    Png,
    Bmp,
    Gif,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub data: Vec<u8>,
    pub format: ArtFormat,
}

impl Artwork {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRecord {
    values: BTreeMap<FieldId, TagValue>,
    /// Numeric genre type, mutually exclusive with the `Genre` text slot.
    pub genre_type: Option<u16>,
    pub track: Option<Pairing>,
    pub disk: Option<Pairing>,
    pub artwork: Option<Artwork>,
}

impl TagRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, TagValue::Text(value.into()));
    }

    pub fn set_uint(&mut self, field: FieldId, value: u64) {
        self.values.insert(field, TagValue::UInt(value));
    }

    pub fn text(&self, field: FieldId) -> Option<&str> {
        match self.values.get(&field) {
            Some(TagValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn uint(&self, field: FieldId) -> Option<u64> {
        match self.values.get(&field) {
            Some(TagValue::UInt(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn get(&self, field: FieldId) -> Option<&TagValue> {
        self.values.get(&field)
    }

    /// Scalar slots currently set, in field order.
    pub fn scalars(&self) -> impl Iterator<Item = (FieldId, &TagValue)> {
        self.values.iter().map(|(f, v)| (*f, v))
    }

    /// Clear one field. This is the single clearing path shared by the
    /// removal phase and by clear-then-set assignments: either half of a
    /// pair clears the whole pair, genre clears both of its
    /// representations, artwork drops the attachment.
    pub fn clear(&mut self, field: FieldId) {
        match field {
            FieldId::TrackIndex | FieldId::TrackTotal => self.track = None,
            FieldId::DiskIndex | FieldId::DiskTotal => self.disk = None,
            FieldId::Genre => {
                self.values.remove(&FieldId::Genre);
                self.genre_type = None;
            }
            FieldId::Artwork => self.artwork = None,
            _ => {
                self.values.remove(&field);
            }
        }
    }
}
