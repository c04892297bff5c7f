use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use walkdir::WalkDir;

use crate::config::CatalogSettings;

use super::model::{Track, make_display, sort_by_title};

fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
        })
        .unwrap_or(false)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

const ARTWORK_EXTENSIONS: [&str; 3] = ["jpeg", "jpg", "png"];

/// Look for cover art next to a media file: `<dir>/cover/<stem>.<ext>`.
fn find_artwork(media_path: &Path) -> Option<PathBuf> {
    let dir = media_path.parent()?;
    let stem = media_path.file_stem()?;
    for ext in ARTWORK_EXTENSIONS {
        let candidate = dir.join("cover").join(stem).with_extension(ext);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Scan `dir` for audio files and build a title-sorted catalog.
///
/// Titles, artists and durations come from tags when readable; otherwise the
/// file stem stands in for the title. Unreadable entries are skipped rather
/// than reported.
pub fn scan(dir: &Path, settings: &CatalogSettings) -> Vec<Track> {
    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);
    if !settings.recursive {
        walker = walker.max_depth(1);
    } else if let Some(depth) = settings.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut tracks: Vec<Track> = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, &settings.extensions) {
            continue;
        }

        let default_title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();

        let mut title = default_title;
        let mut artist: Option<String> = None;
        let mut duration: Option<Duration> = None;

        if let Ok(tagged) = lofty::read_from_path(path) {
            duration = Some(tagged.properties().duration());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.get_string(&ItemKey::TrackTitle) {
                    if !v.trim().is_empty() {
                        title = v.trim().to_string();
                    }
                }
                if let Some(v) = tag.get_string(&ItemKey::TrackArtist) {
                    let v = v.trim();
                    if !v.is_empty() {
                        artist = Some(v.to_string());
                    }
                }
            }
        }

        let display = make_display(&title, artist.as_deref());
        let artwork = find_artwork(path);

        tracks.push(Track {
            path: path.to_path_buf(),
            title,
            artist,
            artwork,
            duration,
            display,
        });
    }

    sort_by_title(&mut tracks);
    tracks
}
