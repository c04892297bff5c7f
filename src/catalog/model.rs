use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub artwork: Option<PathBuf>,
    pub duration: Option<Duration>,
    pub display: String,
}

/// Build the playlist label for a track: `Title – Artist`, or just the
/// title when no artist is known.
pub fn make_display(title: &str, artist: Option<&str>) -> String {
    match artist {
        Some(a) if !a.trim().is_empty() => format!("{} – {}", title.trim(), a.trim()),
        _ => title.trim().to_string(),
    }
}

/// Order tracks by title, case-insensitively. Called once per catalog load;
/// the resulting index is the track's identity for the rest of the run.
pub fn sort_by_title(tracks: &mut [Track]) {
    tracks.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
}
