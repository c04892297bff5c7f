//! Audio-related small types and handles.
//!
//! This module defines the command enum and the shared playback info
//! the playback thread publishes for the UI.

use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug)]
pub enum AudioCmd {
    /// Start playing the track at the given index.
    Play(usize),
    /// Toggle pause/resume.
    TogglePause,
    /// Skip to the next track (sequential or shuffled).
    Next,
    /// Go to the previous track. Always sequential.
    Prev,
    /// Toggle shuffle mode in the playback thread.
    ToggleShuffle,
    /// Set the effective sink gain (mute folds into 0.0 here).
    SetVolume(f32),
    /// Quit the playback thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

#[derive(Debug, Clone)]
/// Runtime playback information shared with the UI.
pub struct PlaybackInfo {
    /// Currently loaded track index in the catalog (if any).
    pub index: Option<usize>,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Total duration of the current track, once known.
    pub duration: Option<Duration>,
    /// Whether playback is currently active.
    pub playing: bool,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            index: None,
            elapsed: Duration::ZERO,
            duration: None,
            playing: false,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
