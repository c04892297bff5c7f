use super::*;
use crate::audio::{FALLBACK_VOLUME, PlaybackHandle, PlaybackInfo};
use crate::catalog::Track;
use std::sync::{Arc, Mutex};

fn t(title: &str) -> Track {
    Track {
        path: std::path::PathBuf::new(),
        title: title.into(),
        artist: None,
        artwork: None,
        duration: None,
        display: title.into(),
    }
}

#[test]
fn cursor_wraps_both_ways() {
    let mut app = App::new(vec![t("Alpha"), t("Beta"), t("Gamma")]);
    assert_eq!(app.selected, 0);

    app.prev();
    assert_eq!(app.selected, 2);

    app.next();
    assert_eq!(app.selected, 0);
    app.next();
    assert_eq!(app.selected, 1);
}

#[test]
fn cursor_is_inert_on_an_empty_catalog() {
    let mut app = App::new(Vec::new());
    assert!(!app.has_tracks());

    app.next();
    app.prev();
    app.set_selected(5);
    assert_eq!(app.selected, 0);
}

#[test]
fn set_selected_clamps_to_catalog_bounds() {
    let mut app = App::new(vec![t("Alpha"), t("Beta")]);
    app.set_selected(99);
    assert_eq!(app.selected, 1);
}

#[test]
fn toggle_shuffle_flips_the_flag_only() {
    let mut app = App::new(vec![t("Alpha"), t("Beta")]);
    app.set_selected(1);

    app.toggle_shuffle();
    assert!(app.shuffle);
    assert_eq!(app.selected, 1);

    app.toggle_shuffle();
    assert!(!app.shuffle);
}

#[test]
fn active_index_reads_the_playback_handle() {
    let mut app = App::new(vec![t("Alpha"), t("Beta")]);
    assert_eq!(app.active_index(), None);

    let handle: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo::default()));
    handle.lock().unwrap().index = Some(1);
    app.set_playback_handle(handle);
    assert_eq!(app.active_index(), Some(1));
}

#[test]
fn volume_entry_commits_through_the_parse_fallback() {
    let mut app = App::new(vec![t("Alpha")]);

    app.begin_volume_entry();
    assert!(app.entering_volume());
    for c in "abc".chars() {
        app.push_volume_char(c);
    }
    let gain = app.commit_volume_entry();
    assert!(!app.entering_volume());
    assert_eq!(gain, FALLBACK_VOLUME);
    assert_eq!(app.volume.level, FALLBACK_VOLUME);
}

#[test]
fn volume_entry_of_zero_mutes() {
    let mut app = App::new(vec![t("Alpha")]);

    app.begin_volume_entry();
    app.push_volume_char('0');
    let gain = app.commit_volume_entry();
    assert_eq!(gain, 0.0);
    assert!(app.volume.muted);
}

#[test]
fn volume_entry_backspace_and_cancel() {
    let mut app = App::new(vec![t("Alpha")]);
    app.volume.set_level(0.7);

    app.begin_volume_entry();
    app.push_volume_char('0');
    app.push_volume_char('9');
    app.pop_volume_char();
    app.push_volume_char('.');
    app.push_volume_char('2');
    assert_eq!(app.volume_input.as_deref(), Some("0.2"));

    app.cancel_volume_entry();
    assert!(!app.entering_volume());
    assert_eq!(app.volume.level, 0.7);
}
