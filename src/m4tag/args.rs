use clap::Parser;
use m4tag::field::FieldId;
use std::path::PathBuf;

/// Adds, modifies and removes iTunes-style tags on MP4 files.
///
/// Numeric flags are parsed by the engine, not by clap, so a malformed
/// integer is reported as the same usage error regardless of which client
/// produced it.
#[derive(Parser, Debug)]
#[command(name = "m4tag", version)]
#[command(about = "Adds or modifies iTunes-compatible tags on MP4 files")]
pub struct Cli {
    /// Set the album title
    #[arg(short = 'A', long)]
    pub album: Option<String>,

    /// Set the artist information
    #[arg(short = 'a', long)]
    pub artist: Option<String>,

    /// Set the tempo (beats per minute)
    #[arg(short = 'b', long)]
    pub tempo: Option<String>,

    /// Set a general comment
    #[arg(short = 'c', long)]
    pub comment: Option<String>,

    /// Set the copyright information
    #[arg(short = 'C', long)]
    pub copyright: Option<String>,

    /// Set the disk number
    #[arg(short = 'd', long)]
    pub disk: Option<String>,

    /// Set the number of disks
    #[arg(short = 'D', long)]
    pub disks: Option<String>,

    /// Set the name of the person or company who encoded the file
    #[arg(short = 'e', long)]
    pub encodedby: Option<String>,

    /// Set the software used for encoding
    #[arg(short = 'E', long)]
    pub tool: Option<String>,

    /// Set the genre name
    #[arg(short = 'g', long)]
    pub genre: Option<String>,

    /// Set the grouping name
    #[arg(short = 'G', long)]
    pub grouping: Option<String>,

    /// Set the HD flag (0/1)
    #[arg(short = 'H', long)]
    pub hdvideo: Option<String>,

    /// Set the media type (tvshow, movie, normal, ...)
    #[arg(short = 'i', long = "type")]
    pub media_type: Option<String>,

    /// Set the content ID
    #[arg(short = 'I', long)]
    pub contentid: Option<String>,

    /// Set the genre ID
    #[arg(short = 'j', long)]
    pub genreid: Option<String>,

    /// Set the long description
    #[arg(short = 'l', long)]
    pub longdesc: Option<String>,

    /// Set the lyrics
    #[arg(short = 'L', long)]
    pub lyrics: Option<String>,

    /// Set the short description
    #[arg(short = 'm', long)]
    pub description: Option<String>,

    /// Set the episode number
    #[arg(short = 'M', long)]
    pub episode: Option<String>,

    /// Set the season number
    #[arg(short = 'n', long)]
    pub season: Option<String>,

    /// Set the TV network
    #[arg(short = 'N', long)]
    pub network: Option<String>,

    /// Set the TV episode ID
    #[arg(short = 'o', long)]
    pub episodeid: Option<String>,

    /// Set the category
    #[arg(short = 'O', long)]
    pub category: Option<String>,

    /// Set the playlist ID
    #[arg(short = 'p', long)]
    pub playlistid: Option<String>,

    /// Set the picture from an image file
    #[arg(short = 'P', long)]
    pub picture: Option<String>,

    /// Set the podcast flag (0/1)
    #[arg(short = 'B', long)]
    pub podcast: Option<String>,

    /// Set the album artist
    #[arg(short = 'R', long)]
    pub albumartist: Option<String>,

    /// Set the song title
    #[arg(short = 's', long)]
    pub song: Option<String>,

    /// Set the TV show
    #[arg(short = 'S', long)]
    pub show: Option<String>,

    /// Set the track number
    #[arg(short = 't', long)]
    pub track: Option<String>,

    /// Set the number of tracks
    #[arg(short = 'T', long)]
    pub tracks: Option<String>,

    /// Set the globally-unique xid (vendor:scheme:id)
    #[arg(short = 'x', long)]
    pub xid: Option<String>,

    /// Set the rating (none, clean, explicit)
    #[arg(short = 'X', long)]
    pub rating: Option<String>,

    /// Set the composer information
    #[arg(short = 'w', long)]
    pub writer: Option<String>,

    /// Set the release date
    #[arg(short = 'y', long)]
    pub year: Option<String>,

    /// Set the artist ID
    #[arg(short = 'z', long)]
    pub artistid: Option<String>,

    /// Set the composer ID
    #[arg(short = 'Z', long)]
    pub composerid: Option<String>,

    /// Set the sort name
    #[arg(long)]
    pub sortname: Option<String>,

    /// Set the sort artist
    #[arg(long)]
    pub sortartist: Option<String>,

    /// Set the sort album artist
    #[arg(long)]
    pub sortalbumartist: Option<String>,

    /// Set the sort album
    #[arg(long)]
    pub sortalbum: Option<String>,

    /// Set the sort composer
    #[arg(long)]
    pub sortcomposer: Option<String>,

    /// Set the sort TV show
    #[arg(long)]
    pub sorttvshow: Option<String>,

    /// Set the purchase date
    #[arg(long)]
    pub purchasedate: Option<String>,

    /// Remove tags by code or name (e.g. "-r cs" or "-r comment,song")
    #[arg(short = 'r', long)]
    pub remove: Option<String>,

    /// MP4 files to modify
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Requested field assignments, in declaration order.
    pub fn modifications(&self) -> Vec<(FieldId, String)> {
        let flags: [(FieldId, &Option<String>); 44] = [
            (FieldId::Album, &self.album),
            (FieldId::Artist, &self.artist),
            (FieldId::Tempo, &self.tempo),
            (FieldId::Comment, &self.comment),
            (FieldId::Copyright, &self.copyright),
            (FieldId::DiskIndex, &self.disk),
            (FieldId::DiskTotal, &self.disks),
            (FieldId::EncodedBy, &self.encodedby),
            (FieldId::Tool, &self.tool),
            (FieldId::Genre, &self.genre),
            (FieldId::Grouping, &self.grouping),
            (FieldId::HdVideo, &self.hdvideo),
            (FieldId::MediaType, &self.media_type),
            (FieldId::ContentId, &self.contentid),
            (FieldId::LongDescription, &self.longdesc),
            (FieldId::GenreId, &self.genreid),
            (FieldId::Lyrics, &self.lyrics),
            (FieldId::Description, &self.description),
            (FieldId::TvEpisode, &self.episode),
            (FieldId::TvSeason, &self.season),
            (FieldId::TvNetwork, &self.network),
            (FieldId::TvEpisodeId, &self.episodeid),
            (FieldId::Category, &self.category),
            (FieldId::PlaylistId, &self.playlistid),
            (FieldId::Artwork, &self.picture),
            (FieldId::Podcast, &self.podcast),
            (FieldId::AlbumArtist, &self.albumartist),
            (FieldId::Song, &self.song),
            (FieldId::TvShow, &self.show),
            (FieldId::TrackIndex, &self.track),
            (FieldId::TrackTotal, &self.tracks),
            (FieldId::Xid, &self.xid),
            (FieldId::Rating, &self.rating),
            (FieldId::Composer, &self.writer),
            (FieldId::ReleaseDate, &self.year),
            (FieldId::ArtistId, &self.artistid),
            (FieldId::ComposerId, &self.composerid),
            (FieldId::SortSong, &self.sortname),
            (FieldId::SortArtist, &self.sortartist),
            (FieldId::SortAlbumArtist, &self.sortalbumartist),
            (FieldId::SortAlbum, &self.sortalbum),
            (FieldId::SortComposer, &self.sortcomposer),
            (FieldId::SortTvShow, &self.sorttvshow),
            (FieldId::PurchaseDate, &self.purchasedate),
        ];

        flags
            .into_iter()
            .filter_map(|(field, value)| value.as_ref().map(|v| (field, v.clone())))
            .collect()
    }
}
