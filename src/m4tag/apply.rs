//! # Mutation Applier
//!
//! Orchestrates one batch: for each file, open → fetch → removals → paired
//! merges → remaining assignments → store → close. Files are processed
//! strictly sequentially and independently; a file that fails to open
//! aborts the rest of the batch, while a file that opens is always stored
//! (artwork read failures only cost that one assignment).

use crate::artwork;
use crate::catalog::{self, GenreValue};
use crate::error::{Result, TagError};
use crate::field::{Catalog, FieldId, Kind, Pair};
use crate::pairing;
use crate::record::TagRecord;
use crate::removal::RemovalSet;
use crate::request::RawRequest;
use crate::store::TagStore;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

/// A message for the caller to surface. The engine never prints.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a successful batch.
#[derive(Debug, Default)]
pub struct RunReport {
    pub modified: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

/// Run one batch of modifications over an ordered file list.
///
/// Usage errors (empty file list, nothing requested) are rejected before
/// any file is opened.
pub fn run<S: TagStore>(
    store: &mut S,
    request: &RawRequest,
    removals: &RemovalSet,
    files: &[PathBuf],
) -> Result<RunReport> {
    if files.is_empty() {
        return Err(TagError::NoFiles);
    }
    if request.is_empty() && removals.is_empty() {
        return Err(TagError::NoModifications);
    }

    let mut report = RunReport::default();
    for path in files {
        apply_file(store, request, removals, path, &mut report)?;
        report.modified.push(path.clone());
    }
    Ok(report)
}

fn apply_file<S: TagStore>(
    store: &mut S,
    request: &RawRequest,
    removals: &RemovalSet,
    path: &Path,
    report: &mut RunReport,
) -> Result<()> {
    let mut handle = store.open_for_modify(path)?;
    let mut record = store.fetch_tags(&handle)?;

    // Phase order matters: removals first, then paired merges reading the
    // record's then-current state, then everything else. A field both
    // removed and assigned in one run ends up assigned; a track/disk pair
    // removed and partially re-requested re-derives from whatever the
    // removal left behind. Both follow from the phase order and are kept
    // as-is.
    for field in removals {
        record.clear(*field);
    }

    merge_pair(&mut record, request, Pair::Track);
    merge_pair(&mut record, request, Pair::Disk);

    for field in request.fields() {
        assign(&mut record, request, field, report);
    }

    store.store_tags(&mut handle, &record)?;
    store.close(handle)?;
    report
        .messages
        .push(CmdMessage::success(format!("Updated {}", path.display())));
    Ok(())
}

fn merge_pair(record: &mut TagRecord, request: &RawRequest, pair: Pair) {
    let (index_field, total_field, slot) = match pair {
        Pair::Track => (
            FieldId::TrackIndex,
            FieldId::TrackTotal,
            &mut record.track,
        ),
        Pair::Disk => (FieldId::DiskIndex, FieldId::DiskTotal, &mut record.disk),
    };
    let index = request.number(index_field).map(|n| n as u16);
    let total = request.number(total_field).map(|n| n as u16);
    if index.is_none() && total.is_none() {
        return;
    }
    *slot = Some(pairing::merge(*slot, index, total));
}

fn assign(record: &mut TagRecord, request: &RawRequest, field: FieldId, report: &mut RunReport) {
    match field.spec().kind {
        // Pairs were merged in their own phase.
        Kind::PairedUInt(..) => {}
        Kind::Text => {
            if let Some(value) = request.text(field) {
                record.set_text(field, value);
            }
        }
        Kind::UInt => {
            if let Some(value) = request.number(field) {
                record.set_uint(field, value);
            }
        }
        Kind::Enum(Catalog::Genre) => {
            let Some(raw) = request.text(field) else {
                return;
            };
            // Clear both representations, then set exactly one.
            record.clear(FieldId::Genre);
            match catalog::resolve_genre(raw) {
                GenreValue::Code(code) => record.genre_type = Some(code),
                GenreValue::Text(text) => record.set_text(FieldId::Genre, text),
            }
        }
        Kind::Enum(cat) => {
            let Some(raw) = request.text(field) else {
                return;
            };
            let code = catalog::resolve(cat, raw).unwrap_or_else(|| catalog::undefined_code(cat));
            record.set_uint(field, u64::from(code));
        }
        Kind::Binary => {
            let Some(raw) = request.text(field) else {
                return;
            };
            match artwork::load(Path::new(raw)) {
                // Replace policy: any existing attachment is dropped.
                Ok(art) => record.artwork = Some(art),
                Err(_) => {
                    report
                        .messages
                        .push(CmdMessage::warning(format!("Art file {raw} not found")));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::Pairing;
    use crate::record::{ArtFormat, Artwork};
    use crate::removal;
    use crate::store::memory::InMemoryStore;
    use std::io::Write;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn request(entries: &[(FieldId, &str)]) -> RawRequest {
        RawRequest::build(entries.iter().map(|&(f, v)| (f, v))).unwrap()
    }

    #[test]
    fn scalar_assignments_round_trip() {
        let mut store = InMemoryStore::new().with_file("a.m4a", TagRecord::new());
        let req = request(&[
            (FieldId::Album, "Maggot Brain"),
            (FieldId::Artist, "Funkadelic"),
            (FieldId::Tempo, "95"),
        ]);

        run(&mut store, &req, &RemovalSet::new(), &paths(&["a.m4a"])).unwrap();

        let record = store.record("a.m4a").unwrap();
        assert_eq!(record.text(FieldId::Album), Some("Maggot Brain"));
        assert_eq!(record.text(FieldId::Artist), Some("Funkadelic"));
        assert_eq!(record.uint(FieldId::Tempo), Some(95));
    }

    #[test]
    fn compact_and_verbose_removal_specs_are_equivalent() {
        let mut seed = TagRecord::new();
        seed.set_text(FieldId::Comment, "old comment");
        seed.set_text(FieldId::Song, "old song");
        seed.set_text(FieldId::Album, "keep me");

        for spec in ["cs", "comment,song"] {
            let mut store = InMemoryStore::new().with_file("a.m4a", seed.clone());
            let removals = removal::parse(spec);
            run(
                &mut store,
                &RawRequest::default(),
                &removals,
                &paths(&["a.m4a"]),
            )
            .unwrap();

            let record = store.record("a.m4a").unwrap();
            assert_eq!(record.text(FieldId::Comment), None, "spec {spec:?}");
            assert_eq!(record.text(FieldId::Song), None, "spec {spec:?}");
            assert_eq!(record.text(FieldId::Album), Some("keep me"));
        }
    }

    #[test]
    fn partial_pair_request_merges_with_the_old_pair() {
        let mut seed = TagRecord::new();
        seed.track = Some(Pairing::new(3, 12));
        let mut store = InMemoryStore::new().with_file("a.m4a", seed);

        let req = request(&[(FieldId::TrackTotal, "20")]);
        run(&mut store, &req, &RemovalSet::new(), &paths(&["a.m4a"])).unwrap();

        assert_eq!(
            store.record("a.m4a").unwrap().track,
            Some(Pairing::new(3, 20))
        );
    }

    #[test]
    fn unrequested_pair_is_left_untouched() {
        let mut seed = TagRecord::new();
        seed.disk = Some(Pairing::new(1, 2));
        let mut store = InMemoryStore::new().with_file("a.m4a", seed);

        let req = request(&[(FieldId::Album, "X")]);
        run(&mut store, &req, &RemovalSet::new(), &paths(&["a.m4a"])).unwrap();

        assert_eq!(
            store.record("a.m4a").unwrap().disk,
            Some(Pairing::new(1, 2))
        );
    }

    #[test]
    fn removed_pair_with_partial_request_rederives_from_zero() {
        // Remove track and request only the total in the same run: the
        // merge reads the post-removal state, so the index comes out 0.
        let mut seed = TagRecord::new();
        seed.track = Some(Pairing::new(3, 12));
        let mut store = InMemoryStore::new().with_file("a.m4a", seed);

        let req = request(&[(FieldId::TrackTotal, "20")]);
        let removals = removal::parse("track");
        run(&mut store, &req, &removals, &paths(&["a.m4a"])).unwrap();

        assert_eq!(
            store.record("a.m4a").unwrap().track,
            Some(Pairing::new(0, 20))
        );
    }

    #[test]
    fn genre_numeric_input_stores_a_code_only() {
        let mut seed = TagRecord::new();
        seed.set_text(FieldId::Genre, "leftover text");
        let mut store = InMemoryStore::new().with_file("a.m4a", seed);

        let req = request(&[(FieldId::Genre, "17")]);
        run(&mut store, &req, &RemovalSet::new(), &paths(&["a.m4a"])).unwrap();

        let record = store.record("a.m4a").unwrap();
        assert_eq!(record.genre_type, Some(17));
        assert_eq!(record.text(FieldId::Genre), None);
    }

    #[test]
    fn genre_name_input_resolves_through_the_catalogue() {
        let mut store = InMemoryStore::new().with_file("a.m4a", TagRecord::new());
        let req = request(&[(FieldId::Genre, "Rock")]);
        run(&mut store, &req, &RemovalSet::new(), &paths(&["a.m4a"])).unwrap();

        let record = store.record("a.m4a").unwrap();
        assert_eq!(record.genre_type, Some(18));
        assert_eq!(record.text(FieldId::Genre), None);
    }

    #[test]
    fn genre_unknown_input_stores_text_and_clears_the_code() {
        let mut seed = TagRecord::new();
        seed.genre_type = Some(18);
        let mut store = InMemoryStore::new().with_file("a.m4a", seed);

        let req = request(&[(FieldId::Genre, "Chiptune Polka")]);
        run(&mut store, &req, &RemovalSet::new(), &paths(&["a.m4a"])).unwrap();

        let record = store.record("a.m4a").unwrap();
        assert_eq!(record.genre_type, None);
        assert_eq!(record.text(FieldId::Genre), Some("Chiptune Polka"));
    }

    #[test]
    fn unknown_media_type_resolves_to_the_undefined_code() {
        let mut store = InMemoryStore::new().with_file("a.m4a", TagRecord::new());
        let req = request(&[(FieldId::MediaType, "hologram")]);
        run(&mut store, &req, &RemovalSet::new(), &paths(&["a.m4a"])).unwrap();

        assert_eq!(
            store.record("a.m4a").unwrap().uint(FieldId::MediaType),
            Some(255)
        );
    }

    #[test]
    fn rating_token_resolves_to_its_code() {
        let mut store = InMemoryStore::new().with_file("a.m4a", TagRecord::new());
        let req = request(&[(FieldId::Rating, "explicit")]);
        run(&mut store, &req, &RemovalSet::new(), &paths(&["a.m4a"])).unwrap();

        assert_eq!(
            store.record("a.m4a").unwrap().uint(FieldId::Rating),
            Some(4)
        );
    }

    #[test]
    fn new_artwork_replaces_the_existing_attachment() {
        let mut art_file = tempfile::NamedTempFile::new().unwrap();
        art_file.write_all(b"new image bytes").unwrap();

        let mut seed = TagRecord::new();
        seed.artwork = Some(Artwork {
            data: b"old image".to_vec(),
            format: ArtFormat::Undefined,
        });
        let path = art_file.path().to_str().unwrap().to_string();
        let mut store = InMemoryStore::new().with_file("a.m4a", seed);

        let req = request(&[(FieldId::Artwork, path.as_str())]);
        let report = run(&mut store, &req, &RemovalSet::new(), &paths(&["a.m4a"])).unwrap();

        let record = store.record("a.m4a").unwrap();
        assert_eq!(
            record.artwork.as_ref().map(|a| a.data.as_slice()),
            Some(b"new image bytes".as_slice())
        );
        assert!(report
            .messages
            .iter()
            .all(|m| m.level != MessageLevel::Warning));
    }

    #[test]
    fn unreadable_artwork_warns_and_still_stores_the_file() {
        let mut store = InMemoryStore::new().with_file("a.m4a", TagRecord::new());
        let req = request(&[
            (FieldId::Artwork, "/no/such/cover.png"),
            (FieldId::Album, "still applied"),
        ]);

        let report = run(&mut store, &req, &RemovalSet::new(), &paths(&["a.m4a"])).unwrap();

        let record = store.record("a.m4a").unwrap();
        assert_eq!(record.artwork, None);
        assert_eq!(record.text(FieldId::Album), Some("still applied"));
        assert!(report
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn assignment_wins_over_removal_of_the_same_field() {
        let mut seed = TagRecord::new();
        seed.set_text(FieldId::Comment, "old");
        let mut store = InMemoryStore::new().with_file("a.m4a", seed);

        let req = request(&[(FieldId::Comment, "new")]);
        let removals = removal::parse("comment");
        run(&mut store, &req, &removals, &paths(&["a.m4a"])).unwrap();

        assert_eq!(
            store.record("a.m4a").unwrap().text(FieldId::Comment),
            Some("new")
        );
    }

    #[test]
    fn open_failure_aborts_the_rest_of_the_batch() {
        let mut untouched = TagRecord::new();
        untouched.set_text(FieldId::Album, "before");
        let mut store = InMemoryStore::new()
            .with_file("a.m4a", TagRecord::new())
            .with_file("c.m4a", untouched.clone());

        let req = request(&[(FieldId::Album, "after")]);
        let err = run(
            &mut store,
            &req,
            &RemovalSet::new(),
            &paths(&["a.m4a", "b.m4a", "c.m4a"]),
        )
        .unwrap_err();

        match err {
            TagError::OpenFailed(p) => assert_eq!(p, PathBuf::from("b.m4a")),
            other => panic!("expected OpenFailed, got {other:?}"),
        }
        // A was modified, B was never fetched, C was never attempted.
        assert_eq!(
            store.record("a.m4a").unwrap().text(FieldId::Album),
            Some("after")
        );
        assert_eq!(store.record("c.m4a").unwrap(), &untouched);
        assert_eq!(store.fetch_count(), 1);
    }

    #[test]
    fn empty_file_list_is_a_usage_error() {
        let mut store = InMemoryStore::new();
        let req = request(&[(FieldId::Album, "X")]);
        let err = run(&mut store, &req, &RemovalSet::new(), &[]).unwrap_err();
        assert!(matches!(err, TagError::NoFiles));
    }

    #[test]
    fn no_modifications_is_rejected_before_any_open() {
        let mut store = InMemoryStore::new().with_file("a.m4a", TagRecord::new());
        let err = run(
            &mut store,
            &RawRequest::default(),
            &RemovalSet::new(),
            &paths(&["a.m4a"]),
        )
        .unwrap_err();
        assert!(matches!(err, TagError::NoModifications));
        assert_eq!(store.fetch_count(), 0);
    }

    #[test]
    fn removal_only_run_is_a_valid_modification() {
        let mut seed = TagRecord::new();
        seed.set_text(FieldId::Lyrics, "la la la");
        let mut store = InMemoryStore::new().with_file("a.m4a", seed);

        let removals = removal::parse("L");
        run(
            &mut store,
            &RawRequest::default(),
            &removals,
            &paths(&["a.m4a"]),
        )
        .unwrap();

        assert_eq!(store.record("a.m4a").unwrap().text(FieldId::Lyrics), None);
    }

    #[test]
    fn artwork_removal_drops_the_attachment() {
        let mut seed = TagRecord::new();
        seed.artwork = Some(Artwork {
            data: vec![9, 9, 9],
            format: ArtFormat::Undefined,
        });
        let mut store = InMemoryStore::new().with_file("a.m4a", seed);

        let removals = removal::parse("picture");
        run(
            &mut store,
            &RawRequest::default(),
            &removals,
            &paths(&["a.m4a"]),
        )
        .unwrap();

        assert_eq!(store.record("a.m4a").unwrap().artwork, None);
    }
}
