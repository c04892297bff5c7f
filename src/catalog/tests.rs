use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::*;
use crate::config::CatalogSettings;

#[test]
fn make_display_prefers_title_dash_artist() {
    assert_eq!(make_display("Song", Some("Artist")), "Song – Artist");
    assert_eq!(make_display("Song", Some("  Artist  ")), "Song – Artist");
    assert_eq!(make_display("Song", None), "Song");
    assert_eq!(make_display("Song", Some("")), "Song");
    assert_eq!(make_display("Song", Some("   ")), "Song");
}

fn t(title: &str) -> Track {
    Track {
        path: PathBuf::new(),
        title: title.into(),
        artist: None,
        artwork: None,
        duration: None,
        display: title.into(),
    }
}

#[test]
fn sort_by_title_is_case_insensitive_and_stable_under_repeat() {
    let mut tracks = vec![t("delta"), t("Alpha"), t("charlie"), t("Beta")];
    sort_by_title(&mut tracks);

    let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "charlie", "delta"]);

    for pair in tracks.windows(2) {
        assert!(pair[0].title.to_lowercase() <= pair[1].title.to_lowercase());
    }
}

#[test]
fn scan_filters_non_audio_and_sorts_by_title() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("A.ogg"), b"not a real ogg").unwrap();
    fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();

    let tracks = scan(dir.path(), &CatalogSettings::default());
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "A");
    assert_eq!(tracks[1].title, "b");
}

#[test]
fn scan_resolves_artwork_from_sibling_cover_dir() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join("song.mp3"), b"x").unwrap();
    fs::create_dir(dir.path().join("cover")).unwrap();
    fs::write(dir.path().join("cover").join("song.jpeg"), b"x").unwrap();

    let tracks = scan(dir.path(), &CatalogSettings::default());
    assert_eq!(tracks.len(), 1);
    assert_eq!(
        tracks[0].artwork.as_deref(),
        Some(dir.path().join("cover").join("song.jpeg").as_path())
    );
}

#[test]
fn scan_of_empty_dir_yields_empty_catalog() {
    let dir = tempdir().unwrap();
    let tracks = scan(dir.path(), &CatalogSettings::default());
    assert!(tracks.is_empty());
}

#[test]
fn manifest_resolves_paths_against_manifest_dir_by_default() {
    let dir = tempdir().unwrap();
    let manifest_path = dir.path().join("playlist.toml");
    fs::write(
        &manifest_path,
        r#"
[[track]]
title = "Zeta"
artist = "Someone"
src = "zeta.mp3"
cover = "cover/zeta.jpeg"

[[track]]
title = "alpha"
src = "alpha.mp3"
"#,
    )
    .unwrap();

    let tracks = load_manifest(&manifest_path, None).unwrap();
    assert_eq!(tracks.len(), 2);

    // Sorted by title, case-insensitive.
    assert_eq!(tracks[0].title, "alpha");
    assert_eq!(tracks[1].title, "Zeta");

    assert_eq!(tracks[0].path, dir.path().join("alpha.mp3"));
    assert_eq!(tracks[1].path, dir.path().join("zeta.mp3"));
    assert_eq!(
        tracks[1].artwork.as_deref(),
        Some(dir.path().join("cover/zeta.jpeg").as_path())
    );
    assert_eq!(tracks[1].display, "Zeta – Someone");
}

#[test]
fn manifest_base_key_and_override_take_precedence() {
    let dir = tempdir().unwrap();
    let manifest_path = dir.path().join("playlist.toml");
    fs::write(
        &manifest_path,
        r#"
base = "assets"

[[track]]
title = "One"
src = "one.mp3"
"#,
    )
    .unwrap();

    // Relative manifest base resolves against the manifest directory.
    let tracks = load_manifest(&manifest_path, None).unwrap();
    assert_eq!(tracks[0].path, dir.path().join("assets").join("one.mp3"));

    // A configured base wins over the manifest's own.
    let tracks = load_manifest(&manifest_path, Some(Path::new("/srv/media"))).unwrap();
    assert_eq!(tracks[0].path, Path::new("/srv/media").join("one.mp3"));
}

#[test]
fn manifest_rejects_invalid_toml() {
    let dir = tempdir().unwrap();
    let manifest_path = dir.path().join("playlist.toml");
    fs::write(&manifest_path, "not toml at all [[[").unwrap();

    assert!(load_manifest(&manifest_path, None).is_err());
}

#[test]
fn is_manifest_only_matches_toml_files() {
    let dir = tempdir().unwrap();
    let toml_path = dir.path().join("playlist.toml");
    fs::write(&toml_path, "").unwrap();

    assert!(is_manifest(&toml_path));
    assert!(!is_manifest(dir.path()));
    assert!(!is_manifest(&dir.path().join("missing.toml")));
}
