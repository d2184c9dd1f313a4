use super::*;
use crate::format::render;
use crate::metadata::{MetaField, MetadataSource};
use std::path::PathBuf;
use std::time::Duration;

fn t(title: &str, artist: Option<&str>) -> Track {
    Track {
        path: PathBuf::from(format!("/tmp/music/{title}.mp3")),
        title: title.into(),
        artist: artist.map(Into::into),
        album: None,
        track_number: Some("7".into()),
        file_type: Some("MP3".into()),
        duration: Some(Duration::from_millis(187_400)),
        playtime: Duration::ZERO,
    }
}

#[test]
fn library_answers_string_lookups_per_track() {
    let lib = Library::new(vec![t("Airbag", Some("Radiohead")), t("Intro", None)]);

    assert_eq!(lib.lookup_string(0, MetaField::Artist).as_deref(), Some("Radiohead"));
    assert_eq!(lib.lookup_string(0, MetaField::Title).as_deref(), Some("Airbag"));
    assert_eq!(lib.lookup_string(0, MetaField::Track).as_deref(), Some("7"));
    assert_eq!(lib.lookup_string(0, MetaField::FileType).as_deref(), Some("MP3"));
    assert_eq!(lib.lookup_string(0, MetaField::Album), None);
    assert_eq!(lib.lookup_string(1, MetaField::Artist), None);
}

#[test]
fn unknown_track_has_no_metadata() {
    let lib = Library::new(vec![t("Airbag", Some("Radiohead"))]);
    assert_eq!(lib.lookup_string(5, MetaField::Title), None);
    assert_eq!(lib.total_duration(5), 0.0);
    assert_eq!(lib.elapsed_playtime(5), 0);
}

#[test]
fn set_playtime_feeds_elapsed_directive() {
    let mut lib = Library::new(vec![t("Airbag", Some("Radiohead"))]);
    lib.set_playtime(0, Duration::from_millis(65_900));
    lib.set_playtime(9, Duration::from_secs(1));

    assert_eq!(lib.elapsed_playtime(0), 65);
    let r = render("%a - %t [%C/%T]", &lib, 0, 1024);
    assert_eq!(r.as_str(), "Radiohead - Airbag [1:05/3:07]");
}

#[test]
fn ids_cover_every_track() {
    let lib = Library::new(vec![t("A", None), t("B", None)]);
    assert_eq!(lib.ids().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(lib.len(), 2);
    assert!(!lib.is_empty());
    assert_eq!(lib.get(1).map(|t| t.title.as_str()), Some("B"));
}

#[test]
fn meta_field_keys_match_host_names() {
    let keys: Vec<&str> = [
        MetaField::Album,
        MetaField::Artist,
        MetaField::Title,
        MetaField::Track,
        MetaField::FileType,
    ]
    .into_iter()
    .map(MetaField::key)
    .collect();
    assert_eq!(keys, vec!["album", "artist", "title", "track", "filetype"]);
}

#[test]
fn poisoned_shared_library_still_serves_metadata() {
    use std::sync::{Arc, Mutex};

    let mut lib = Library::new(vec![t("Airbag", Some("Radiohead"))]);
    lib.set_playtime(0, Duration::from_secs(65));
    let shared = Arc::new(Mutex::new(lib));

    let poisoner = shared.clone();
    let _ = std::thread::spawn(move || {
        let _guard = poisoner.lock().unwrap();
        panic!("poison the library lock");
    })
    .join();
    assert!(shared.is_poisoned());

    assert_eq!(
        shared.lookup_string(0, MetaField::Artist).as_deref(),
        Some("Radiohead")
    );
    assert_eq!(shared.elapsed_playtime(0), 65);
    assert_eq!(
        render("%a %C/%T", &*shared, 0, 64).as_str(),
        "Radiohead 1:05/3:07"
    );
}
