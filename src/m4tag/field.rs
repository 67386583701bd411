//! # Field Registry
//!
//! Static table describing every supported tag field: its value kind, its
//! one-letter code and its long name. The long names double as removal
//! aliases and as the CLI flag names, so the removal parser, the request
//! builder and the argument surface all share one source of truth.

use std::fmt;

/// Identifier for every tag field the engine knows how to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Album,
    Artist,
    Tempo,
    Comment,
    Copyright,
    DiskIndex,
    DiskTotal,
    EncodedBy,
    Tool,
    Genre,
    Grouping,
    HdVideo,
    MediaType,
    ContentId,
    LongDescription,
    GenreId,
    Lyrics,
    Description,
    TvEpisode,
    TvSeason,
    TvNetwork,
    TvEpisodeId,
    Category,
    PlaylistId,
    Artwork,
    Podcast,
    AlbumArtist,
    Song,
    TvShow,
    TrackIndex,
    TrackTotal,
    Xid,
    Rating,
    Composer,
    ReleaseDate,
    ArtistId,
    ComposerId,
    SortSong,
    SortArtist,
    SortAlbumArtist,
    SortAlbum,
    SortComposer,
    SortTvShow,
    PurchaseDate,
}

/// Which compound field a paired sub-field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pair {
    Track,
    Disk,
}

/// Index or total component of a paired field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRole {
    Index,
    Total,
}

/// Which external catalogue an enumerated field resolves against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Genre,
    MediaType,
    ContentRating,
}

/// Value kind of a field, driving parse/validate/assign behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Free text, stored verbatim.
    Text,
    /// Unsigned integer, validated when the request is built.
    UInt,
    /// Token resolved against a closed catalogue.
    Enum(Catalog),
    /// One half of a track/disk pair.
    PairedUInt(Pair, PairRole),
    /// Binary attachment loaded from a file path.
    Binary,
}

/// Registry entry for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub kind: Kind,
    /// One-letter code, usable in removal specs and as the CLI short flag.
    /// The sort-order family is long-form only.
    pub short: Option<char>,
    /// Long name: removal alias and CLI flag.
    pub long: &'static str,
}

impl FieldId {
    /// Every field, in assignment order.
    pub const ALL: [FieldId; 44] = [
        FieldId::Album,
        FieldId::Artist,
        FieldId::Tempo,
        FieldId::Comment,
        FieldId::Copyright,
        FieldId::DiskIndex,
        FieldId::DiskTotal,
        FieldId::EncodedBy,
        FieldId::Tool,
        FieldId::Genre,
        FieldId::Grouping,
        FieldId::HdVideo,
        FieldId::MediaType,
        FieldId::ContentId,
        FieldId::LongDescription,
        FieldId::GenreId,
        FieldId::Lyrics,
        FieldId::Description,
        FieldId::TvEpisode,
        FieldId::TvSeason,
        FieldId::TvNetwork,
        FieldId::TvEpisodeId,
        FieldId::Category,
        FieldId::PlaylistId,
        FieldId::Artwork,
        FieldId::Podcast,
        FieldId::AlbumArtist,
        FieldId::Song,
        FieldId::TvShow,
        FieldId::TrackIndex,
        FieldId::TrackTotal,
        FieldId::Xid,
        FieldId::Rating,
        FieldId::Composer,
        FieldId::ReleaseDate,
        FieldId::ArtistId,
        FieldId::ComposerId,
        FieldId::SortSong,
        FieldId::SortArtist,
        FieldId::SortAlbumArtist,
        FieldId::SortAlbum,
        FieldId::SortComposer,
        FieldId::SortTvShow,
        FieldId::PurchaseDate,
    ];

    /// Registry lookup. Exhaustive and infallible: every field has exactly
    /// one entry.
    pub fn spec(self) -> FieldSpec {
        use Catalog::*;
        use Kind::*;

        match self {
            FieldId::Album => entry(Text, Some('A'), "album"),
            FieldId::Artist => entry(Text, Some('a'), "artist"),
            FieldId::Tempo => entry(UInt, Some('b'), "tempo"),
            FieldId::Comment => entry(Text, Some('c'), "comment"),
            FieldId::Copyright => entry(Text, Some('C'), "copyright"),
            FieldId::DiskIndex => {
                entry(PairedUInt(Pair::Disk, PairRole::Index), Some('d'), "disk")
            }
            FieldId::DiskTotal => {
                entry(PairedUInt(Pair::Disk, PairRole::Total), Some('D'), "disks")
            }
            FieldId::EncodedBy => entry(Text, Some('e'), "encodedby"),
            FieldId::Tool => entry(Text, Some('E'), "tool"),
            FieldId::Genre => entry(Enum(Genre), Some('g'), "genre"),
            FieldId::Grouping => entry(Text, Some('G'), "grouping"),
            FieldId::HdVideo => entry(UInt, Some('H'), "hdvideo"),
            FieldId::MediaType => entry(Enum(MediaType), Some('i'), "type"),
            FieldId::ContentId => entry(UInt, Some('I'), "contentid"),
            FieldId::LongDescription => entry(Text, Some('l'), "longdesc"),
            FieldId::GenreId => entry(UInt, Some('j'), "genreid"),
            FieldId::Lyrics => entry(Text, Some('L'), "lyrics"),
            FieldId::Description => entry(Text, Some('m'), "description"),
            FieldId::TvEpisode => entry(UInt, Some('M'), "episode"),
            FieldId::TvSeason => entry(UInt, Some('n'), "season"),
            FieldId::TvNetwork => entry(Text, Some('N'), "network"),
            FieldId::TvEpisodeId => entry(Text, Some('o'), "episodeid"),
            FieldId::Category => entry(Text, Some('O'), "category"),
            FieldId::PlaylistId => entry(UInt, Some('p'), "playlistid"),
            FieldId::Artwork => entry(Binary, Some('P'), "picture"),
            FieldId::Podcast => entry(UInt, Some('B'), "podcast"),
            FieldId::AlbumArtist => entry(Text, Some('R'), "albumartist"),
            FieldId::Song => entry(Text, Some('s'), "song"),
            FieldId::TvShow => entry(Text, Some('S'), "show"),
            FieldId::TrackIndex => {
                entry(PairedUInt(Pair::Track, PairRole::Index), Some('t'), "track")
            }
            FieldId::TrackTotal => entry(
                PairedUInt(Pair::Track, PairRole::Total),
                Some('T'),
                "tracks",
            ),
            FieldId::Xid => entry(Text, Some('x'), "xid"),
            FieldId::Rating => entry(Enum(ContentRating), Some('X'), "rating"),
            FieldId::Composer => entry(Text, Some('w'), "writer"),
            FieldId::ReleaseDate => entry(Text, Some('y'), "year"),
            FieldId::ArtistId => entry(UInt, Some('z'), "artistid"),
            FieldId::ComposerId => entry(UInt, Some('Z'), "composerid"),
            FieldId::SortSong => entry(Text, None, "sortname"),
            FieldId::SortArtist => entry(Text, None, "sortartist"),
            FieldId::SortAlbumArtist => entry(Text, None, "sortalbumartist"),
            FieldId::SortAlbum => entry(Text, None, "sortalbum"),
            FieldId::SortComposer => entry(Text, None, "sortcomposer"),
            FieldId::SortTvShow => entry(Text, None, "sorttvshow"),
            FieldId::PurchaseDate => entry(Text, None, "purchasedate"),
        }
    }

    /// Field matching a one-letter removal code, if any.
    pub fn from_short(code: char) -> Option<FieldId> {
        FieldId::ALL
            .iter()
            .copied()
            .find(|f| f.spec().short == Some(code))
    }

    /// Field matching a long alias, if any.
    pub fn from_long(name: &str) -> Option<FieldId> {
        FieldId::ALL.iter().copied().find(|f| f.spec().long == name)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().long)
    }
}

const fn entry(kind: Kind, short: Option<char>, long: &'static str) -> FieldSpec {
    FieldSpec { kind, short, long }
}
