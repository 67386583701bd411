//! File-backed store over lofty. The engine's [`TagRecord`] maps onto
//! lofty's generic `Tag`/`ItemKey` surface; iTunes-specific atoms without a
//! dedicated `ItemKey` go through `ItemKey::Unknown` under their atom name.
//! Items the record does not model are carried through untouched.

use super::TagStore;
use crate::error::{Result, TagError};
use crate::field::{Catalog, FieldId, Kind};
use crate::pairing::Pairing;
use crate::record::{ArtFormat, Artwork, TagRecord};

use lofty::config::WriteOptions;
use lofty::picture::{Picture, PictureType};
use lofty::prelude::*;
use lofty::read_from_path;
use lofty::tag::{ItemKey, ItemValue, Tag, TagItem, TagType};

use std::path::{Path, PathBuf};

/// An opened file: its path plus the tag read from it. The tag is kept so
/// that storing preserves items the record does not model.
pub struct FileHandle {
    path: PathBuf,
    tag: Tag,
}

impl std::fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileHandle")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Production store over real MP4 files.
#[derive(Debug, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl TagStore for FileStore {
    type Handle = FileHandle;

    fn open_for_modify(&mut self, path: &Path) -> Result<Self::Handle> {
        let tagged_file =
            read_from_path(path).map_err(|_| TagError::OpenFailed(path.to_path_buf()))?;

        // Work on the primary tag; files without one get a fresh ilst.
        let tag = match tagged_file.primary_tag() {
            Some(tag) => tag.clone(),
            None => tagged_file
                .first_tag()
                .cloned()
                .unwrap_or_else(|| Tag::new(TagType::Mp4Ilst)),
        };

        Ok(FileHandle {
            path: path.to_path_buf(),
            tag,
        })
    }

    fn fetch_tags(&mut self, handle: &Self::Handle) -> Result<TagRecord> {
        Ok(record_from_tag(&handle.tag))
    }

    fn store_tags(&mut self, handle: &mut Self::Handle, record: &TagRecord) -> Result<()> {
        let mut tag = handle.tag.clone();
        apply_record(&mut tag, record);
        tag.save_to_path(&handle.path, WriteOptions::default())
            .map_err(|e| TagError::Store(format!("{}: {e}", handle.path.display())))?;
        handle.tag = tag;
        Ok(())
    }

    fn close(&mut self, handle: Self::Handle) -> Result<()> {
        drop(handle);
        Ok(())
    }
}

/// ItemKey for a scalar field. Pairs, artwork and the numeric genre type
/// are handled outside this mapping.
fn item_key(field: FieldId) -> ItemKey {
    match field {
        FieldId::Album => ItemKey::AlbumTitle,
        FieldId::Artist => ItemKey::TrackArtist,
        FieldId::Tempo => ItemKey::Bpm,
        FieldId::Comment => ItemKey::Comment,
        FieldId::Copyright => ItemKey::CopyrightMessage,
        FieldId::EncodedBy => ItemKey::EncodedBy,
        FieldId::Tool => ItemKey::EncoderSoftware,
        FieldId::Genre => ItemKey::Genre,
        FieldId::Grouping => ItemKey::ContentGroup,
        FieldId::Lyrics => ItemKey::Lyrics,
        FieldId::Description => ItemKey::Description,
        FieldId::Category => ItemKey::PodcastSeriesCategory,
        FieldId::Podcast => ItemKey::FlagPodcast,
        FieldId::AlbumArtist => ItemKey::AlbumArtist,
        FieldId::Song => ItemKey::TrackTitle,
        FieldId::TvShow => ItemKey::ShowName,
        FieldId::Rating => ItemKey::ParentalAdvisory,
        FieldId::Composer => ItemKey::Composer,
        FieldId::ReleaseDate => ItemKey::RecordingDate,
        FieldId::SortSong => ItemKey::TrackTitleSortOrder,
        FieldId::SortArtist => ItemKey::TrackArtistSortOrder,
        FieldId::SortAlbumArtist => ItemKey::AlbumArtistSortOrder,
        FieldId::SortAlbum => ItemKey::AlbumTitleSortOrder,
        FieldId::SortComposer => ItemKey::ComposerSortOrder,
        FieldId::SortTvShow => ItemKey::ShowNameSortOrder,
        // iTunes atoms lofty has no dedicated key for.
        FieldId::HdVideo => ItemKey::Unknown("hdvd".to_string()),
        FieldId::MediaType => ItemKey::Unknown("stik".to_string()),
        FieldId::ContentId => ItemKey::Unknown("cnID".to_string()),
        FieldId::LongDescription => ItemKey::Unknown("ldes".to_string()),
        FieldId::GenreId => ItemKey::Unknown("geID".to_string()),
        FieldId::TvEpisode => ItemKey::Unknown("tves".to_string()),
        FieldId::TvSeason => ItemKey::Unknown("tvsn".to_string()),
        FieldId::TvNetwork => ItemKey::Unknown("tvnn".to_string()),
        FieldId::TvEpisodeId => ItemKey::Unknown("tven".to_string()),
        FieldId::PlaylistId => ItemKey::Unknown("plID".to_string()),
        FieldId::Xid => ItemKey::Unknown("xid ".to_string()),
        FieldId::ArtistId => ItemKey::Unknown("atID".to_string()),
        FieldId::ComposerId => ItemKey::Unknown("cmID".to_string()),
        FieldId::PurchaseDate => ItemKey::Unknown("purd".to_string()),
        FieldId::TrackIndex
        | FieldId::TrackTotal
        | FieldId::DiskIndex
        | FieldId::DiskTotal
        | FieldId::Artwork => unreachable!("not a scalar item"),
    }
}

const GENRE_TYPE_KEY: &str = "gnre";

fn is_scalar(field: FieldId) -> bool {
    !matches!(
        field.spec().kind,
        Kind::PairedUInt(..) | Kind::Binary
    )
}

fn record_from_tag(tag: &Tag) -> TagRecord {
    let mut record = TagRecord::new();

    for field in FieldId::ALL {
        if !is_scalar(field) {
            continue;
        }
        let Some(raw) = tag.get_string(&item_key(field)) else {
            continue;
        };
        match field.spec().kind {
            Kind::Text | Kind::Enum(Catalog::Genre) => record.set_text(field, raw),
            Kind::UInt | Kind::Enum(_) => {
                if let Ok(n) = raw.parse::<u64>() {
                    record.set_uint(field, n);
                }
            }
            Kind::PairedUInt(..) | Kind::Binary => {}
        }
    }

    let genre_type_key = ItemKey::Unknown(GENRE_TYPE_KEY.to_string());
    if let Some(raw) = tag.get_string(&genre_type_key) {
        if let Ok(code) = raw.parse::<u16>() {
            record.genre_type = Some(code);
        }
    }

    if tag.track().is_some() || tag.track_total().is_some() {
        record.track = Some(Pairing::new(
            tag.track().unwrap_or(0) as u16,
            tag.track_total().unwrap_or(0) as u16,
        ));
    }
    if tag.disk().is_some() || tag.disk_total().is_some() {
        record.disk = Some(Pairing::new(
            tag.disk().unwrap_or(0) as u16,
            tag.disk_total().unwrap_or(0) as u16,
        ));
    }

    if let Some(picture) = tag.pictures().first() {
        record.artwork = Some(Artwork {
            data: picture.data().to_vec(),
            format: ArtFormat::Undefined,
        });
    }

    record
}

fn apply_record(tag: &mut Tag, record: &TagRecord) {
    for field in FieldId::ALL {
        if !is_scalar(field) {
            continue;
        }
        let key = item_key(field);
        tag.remove_key(&key);
        match record.get(field) {
            // `insert_text` validates keys against the tag type and rejects
            // `ItemKey::Unknown`; lofty requires the unchecked insert for those.
            Some(crate::record::TagValue::Text(s)) => {
                tag.insert_unchecked(TagItem::new(key, ItemValue::Text(s.clone())));
            }
            Some(crate::record::TagValue::UInt(n)) => {
                tag.insert_unchecked(TagItem::new(key, ItemValue::Text(n.to_string())));
            }
            None => {}
        }
    }

    let genre_type_key = ItemKey::Unknown(GENRE_TYPE_KEY.to_string());
    tag.remove_key(&genre_type_key);
    if let Some(code) = record.genre_type {
        tag.insert_unchecked(TagItem::new(
            genre_type_key,
            ItemValue::Text(code.to_string()),
        ));
    }

    match record.track {
        Some(pair) => {
            tag.set_track(u32::from(pair.index));
            tag.set_track_total(u32::from(pair.total));
        }
        None => {
            tag.remove_track();
            tag.remove_track_total();
        }
    }
    match record.disk {
        Some(pair) => {
            tag.set_disk(u32::from(pair.index));
            tag.set_disk_total(u32::from(pair.total));
        }
        None => {
            tag.remove_disk();
            tag.remove_disk_total();
        }
    }

    while !tag.pictures().is_empty() {
        tag.remove_picture(0);
    }
    if let Some(art) = &record.artwork {
        tag.push_picture(Picture::new_unchecked(
            PictureType::Other,
            None,
            None,
            art.data.clone(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldId;

    #[test]
    fn record_round_trips_through_a_lofty_tag() {
        let mut record = TagRecord::new();
        record.set_text(FieldId::Album, "Blue Train");
        record.set_text(FieldId::Artist, "John Coltrane");
        record.set_uint(FieldId::Tempo, 120);
        record.genre_type = Some(8);
        record.track = Some(Pairing::new(1, 7));
        record.artwork = Some(Artwork {
            data: vec![1, 2, 3],
            format: ArtFormat::Undefined,
        });

        let mut tag = Tag::new(TagType::Mp4Ilst);
        apply_record(&mut tag, &record);
        let back = record_from_tag(&tag);

        assert_eq!(back.text(FieldId::Album), Some("Blue Train"));
        assert_eq!(back.text(FieldId::Artist), Some("John Coltrane"));
        assert_eq!(back.uint(FieldId::Tempo), Some(120));
        assert_eq!(back.genre_type, Some(8));
        assert_eq!(back.track, Some(Pairing::new(1, 7)));
        assert_eq!(back.artwork.as_ref().map(|a| a.data.clone()), Some(vec![1, 2, 3]));
    }

    #[test]
    fn cleared_slots_remove_their_items() {
        let mut record = TagRecord::new();
        record.set_text(FieldId::Comment, "scratch");
        record.track = Some(Pairing::new(2, 9));

        let mut tag = Tag::new(TagType::Mp4Ilst);
        apply_record(&mut tag, &record);

        record.clear(FieldId::Comment);
        record.clear(FieldId::TrackIndex);
        apply_record(&mut tag, &record);

        let back = record_from_tag(&tag);
        assert_eq!(back.text(FieldId::Comment), None);
        assert_eq!(back.track, None);
    }

    #[test]
    fn open_failure_reports_the_path() {
        let mut store = FileStore::new();
        match store.open_for_modify(Path::new("/no/such/file.m4a")) {
            Err(TagError::OpenFailed(p)) => {
                assert_eq!(p, PathBuf::from("/no/such/file.m4a"));
            }
            other => panic!("expected OpenFailed, got {other:?}"),
        }
    }
}
