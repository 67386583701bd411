//! # Enum Resolver
//!
//! Wraps the three closed vocabularies (genre, media type, content rating)
//! behind one lookup contract. Genre gets the special three-branch fallback;
//! the other two resolve in a single step and fall back to their undefined
//! sentinel rather than failing.

use crate::field::Catalog;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Sentinel for a genre token that matched nothing. Genre type 0 is
/// reserved in the ilst numbering (codes are ID3v1 index + 1).
pub const GENRE_UNDEFINED: u16 = 0;
/// Sentinel media type (`stik`) code.
pub const MEDIA_TYPE_UNDEFINED: u16 = 255;
/// Sentinel content rating (`rtng`) code.
pub const RATING_UNDEFINED: u16 = 255;

/// ID3v1 genre names. The ilst genre type code is the array index + 1.
static GENRE_NAMES: [&str; 80] = [
    "Blues",
    "Classic Rock",
    "Country",
    "Dance",
    "Disco",
    "Funk",
    "Grunge",
    "Hip-Hop",
    "Jazz",
    "Metal",
    "New Age",
    "Oldies",
    "Other",
    "Pop",
    "R&B",
    "Rap",
    "Reggae",
    "Rock",
    "Techno",
    "Industrial",
    "Alternative",
    "Ska",
    "Death Metal",
    "Pranks",
    "Soundtrack",
    "Euro-Techno",
    "Ambient",
    "Trip-Hop",
    "Vocal",
    "Jazz+Funk",
    "Fusion",
    "Trance",
    "Classical",
    "Instrumental",
    "Acid",
    "House",
    "Game",
    "Sound Clip",
    "Gospel",
    "Noise",
    "AlternRock",
    "Bass",
    "Soul",
    "Punk",
    "Space",
    "Meditative",
    "Instrumental Pop",
    "Instrumental Rock",
    "Ethnic",
    "Gothic",
    "Darkwave",
    "Techno-Industrial",
    "Electronic",
    "Pop-Folk",
    "Eurodance",
    "Dream",
    "Southern Rock",
    "Comedy",
    "Cult",
    "Gangsta",
    "Top 40",
    "Christian Rap",
    "Pop/Funk",
    "Jungle",
    "Native American",
    "Cabaret",
    "New Wave",
    "Psychedelic",
    "Rave",
    "Showtunes",
    "Trailer",
    "Lo-Fi",
    "Tribal",
    "Acid Punk",
    "Acid Jazz",
    "Polka",
    "Retro",
    "Musical",
    "Rock & Roll",
    "Hard Rock",
];

static GENRE_LOOKUP: Lazy<HashMap<String, u16>> = Lazy::new(|| {
    GENRE_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| (name.to_ascii_lowercase(), (i + 1) as u16))
        .collect()
});

/// Media type (`stik`) tokens and codes.
static MEDIA_TYPES: [(&str, u16); 8] = [
    ("oldmovie", 0),
    ("normal", 1),
    ("audiobook", 2),
    ("musicvideo", 6),
    ("movie", 9),
    ("tvshow", 10),
    ("booklet", 11),
    ("ringtone", 14),
];

/// Content rating (`rtng`) tokens and codes.
static RATINGS: [(&str, u16); 3] = [("none", 0), ("clean", 2), ("explicit", 4)];

/// Resolved genre value. Exactly one representation is persisted at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreValue {
    /// Numeric genre type code.
    Code(u16),
    /// Free-text genre, used when the token matched nothing.
    Text(String),
}

/// Case-insensitive catalogue lookup.
pub fn resolve(catalog: Catalog, token: &str) -> Option<u16> {
    match catalog {
        Catalog::Genre => GENRE_LOOKUP.get(&token.to_ascii_lowercase()).copied(),
        Catalog::MediaType => scan(&MEDIA_TYPES, token),
        Catalog::ContentRating => scan(&RATINGS, token),
    }
}

/// Undefined sentinel of a catalogue, used when a token resolves to nothing.
pub fn undefined_code(catalog: Catalog) -> u16 {
    match catalog {
        Catalog::Genre => GENRE_UNDEFINED,
        Catalog::MediaType => MEDIA_TYPE_UNDEFINED,
        Catalog::ContentRating => RATING_UNDEFINED,
    }
}

/// Genre fallback chain: numeric code, then catalogue name, then free text.
pub fn resolve_genre(raw: &str) -> GenreValue {
    if let Ok(code) = raw.parse::<u16>() {
        return GenreValue::Code(code);
    }
    match resolve(Catalog::Genre, raw) {
        Some(code) => GenreValue::Code(code),
        None => GenreValue::Text(raw.to_string()),
    }
}

fn scan(table: &[(&str, u16)], token: &str) -> Option<u16> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|&(_, code)| code)
}
