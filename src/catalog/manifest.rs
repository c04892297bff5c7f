//! Playlist manifests: an explicit TOML track list with a base path.
//!
//! A manifest lets a playlist live apart from its assets; every `src` and
//! `cover` entry is resolved against a single base directory so the whole
//! set can be relocated by changing one path.
//!
//! ```toml
//! base = "assets/music"
//!
//! [[track]]
//! title = "About Sophie"
//! artist = "Keaton Henson"
//! src = "About Sophie - Keaton Henson.mp3"
//! cover = "cover/About Sophie - Keaton Henson.jpeg"
//! ```

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::model::{Track, make_display, sort_by_title};

#[derive(Debug, Deserialize)]
struct Manifest {
    /// Base directory prepended to every `src`/`cover` path. Relative bases
    /// are resolved against the manifest's own directory.
    base: Option<PathBuf>,
    #[serde(default, rename = "track")]
    tracks: Vec<ManifestTrack>,
}

#[derive(Debug, Deserialize)]
struct ManifestTrack {
    title: String,
    artist: Option<String>,
    src: PathBuf,
    cover: Option<PathBuf>,
}

/// Return true when `path` looks like a playlist manifest rather than a
/// directory to scan.
pub fn is_manifest(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false)
}

/// Load a title-sorted catalog from the manifest at `path`.
///
/// Base-path precedence: `base_override` (from configuration), then the
/// manifest's own `base` key, then the manifest's directory.
pub fn load_manifest(path: &Path, base_override: Option<&Path>) -> Result<Vec<Track>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let manifest: Manifest = toml::from_str(&text)?;

    let manifest_dir = path.parent().unwrap_or(Path::new("")).to_path_buf();
    let base: PathBuf = match (base_override, manifest.base) {
        (Some(b), _) => b.to_path_buf(),
        (None, Some(b)) if b.is_absolute() => b,
        (None, Some(b)) => manifest_dir.join(b),
        (None, None) => manifest_dir,
    };

    let mut tracks: Vec<Track> = manifest
        .tracks
        .into_iter()
        .map(|t| {
            let display = make_display(&t.title, t.artist.as_deref());
            Track {
                path: base.join(&t.src),
                title: t.title,
                artist: t.artist,
                artwork: t.cover.map(|c| base.join(c)),
                duration: None,
                display,
            }
        })
        .collect();

    sort_by_title(&mut tracks);
    Ok(tracks)
}
