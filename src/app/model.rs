//! Application model types: `App` and `PlaybackState`.
//!
//! The `App` struct holds the catalog, the cursor, and the transport-related
//! flags used by the UI and runtime. It decides; the UI and the playback
//! thread apply.

use crate::audio::{PlaybackHandle, VolumeState};
use crate::catalog::Track;

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    /// Cursor position in the playlist. Distinct from the active (loaded)
    /// track, which the playback thread publishes through `playback_handle`.
    pub selected: usize,
    pub playback: PlaybackState,
    pub playback_handle: Option<PlaybackHandle>,

    pub shuffle: bool,
    pub volume: VolumeState,
    /// Text buffer for volume entry mode; `Some` while the user is typing.
    pub volume_input: Option<String>,

    pub follow_playback: bool,
    pub pending_follow_index: Option<usize>,

    pub current_source: Option<String>,
}

impl App {
    /// Create a new `App` with the provided list of `tracks`.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            selected: 0,
            playback: PlaybackState::Stopped,
            playback_handle: None,
            shuffle: false,
            volume: VolumeState::default(),
            volume_input: None,
            follow_playback: true,
            pending_follow_index: None,
            current_source: None,
        }
    }

    /// Return true if the catalog contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// Attach a `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Record the catalog source (directory or manifest) for the status line.
    pub fn set_current_source(&mut self, source: String) {
        self.current_source = Some(source);
    }

    /// The currently loaded track index, as last published by playback.
    pub fn active_index(&self) -> Option<usize> {
        self.playback_handle
            .as_ref()
            .and_then(|h| h.lock().ok())
            .and_then(|info| info.index)
    }

    /// Toggle shuffle mode. Does not touch the cursor or the active track.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    /// Enable following playback (cursor follows currently playing track).
    pub fn follow_playback_on(&mut self) {
        self.follow_playback = true;
    }
    /// Disable follow-playback and clear any pending follow index.
    pub fn follow_playback_off(&mut self) {
        self.follow_playback = false;
        self.pending_follow_index = None;
    }
    /// Set an index to follow once playback information becomes available.
    pub fn set_pending_follow_index(&mut self, idx: usize) {
        self.pending_follow_index = Some(idx);
    }
    /// Clear the pending follow index.
    pub fn clear_pending_follow_index(&mut self) {
        self.pending_follow_index = None;
    }

    /// Move the cursor to `idx`, clamped to the catalog.
    pub fn set_selected(&mut self, idx: usize) {
        if self.tracks.is_empty() {
            self.selected = 0;
        } else {
            self.selected = idx.min(self.tracks.len() - 1);
        }
    }

    /// Move the cursor to the next track, wrapping at the end.
    pub fn next(&mut self) {
        if !self.tracks.is_empty() {
            self.selected = (self.selected + 1) % self.tracks.len();
        }
    }

    /// Move the cursor to the previous track, wrapping at the start.
    pub fn prev(&mut self) {
        if !self.tracks.is_empty() {
            self.selected = (self.selected + self.tracks.len() - 1) % self.tracks.len();
        }
    }

    // Volume entry mode: free-form text committed through the parse-or-
    // fallback rule, so garbage input degrades to a sane level instead of
    // an error.

    /// Enter volume entry mode with an empty buffer.
    pub fn begin_volume_entry(&mut self) {
        self.volume_input = Some(String::new());
    }
    /// Return true while volume entry mode is active.
    pub fn entering_volume(&self) -> bool {
        self.volume_input.is_some()
    }
    /// Append a character to the volume entry buffer.
    pub fn push_volume_char(&mut self, c: char) {
        if let Some(buf) = self.volume_input.as_mut() {
            buf.push(c);
        }
    }
    /// Remove the last character from the volume entry buffer.
    pub fn pop_volume_char(&mut self) {
        if let Some(buf) = self.volume_input.as_mut() {
            buf.pop();
        }
    }
    /// Leave volume entry mode without applying the buffer.
    pub fn cancel_volume_entry(&mut self) {
        self.volume_input = None;
    }
    /// Apply the typed volume and leave entry mode. Returns the new gain to
    /// send to the playback thread.
    pub fn commit_volume_entry(&mut self) -> f32 {
        if let Some(buf) = self.volume_input.take() {
            self.volume.set_from_input(&buf);
        }
        self.volume.gain()
    }
}
