use crate::app::{App, PlaybackState};
use crate::audio::{AudioCmd, AudioPlayer};
use crate::config::Settings;

/// Apply configured defaults before the first frame: cursor mode, shuffle,
/// initial volume (through the volume rules, so a configured 0 starts muted)
/// and the widget's boot behavior of starting the first track.
pub fn apply_defaults(app: &mut App, audio_player: &AudioPlayer, settings: &Settings) {
    app.follow_playback = settings.ui.follow_playback;

    if settings.playback.shuffle {
        app.toggle_shuffle();
        let _ = audio_player.send(AudioCmd::ToggleShuffle);
    }

    app.volume.set_level(settings.audio.volume);
    let _ = audio_player.send(AudioCmd::SetVolume(app.volume.gain()));

    if settings.playback.autoplay && app.has_tracks() {
        app.set_pending_follow_index(0);
        let _ = audio_player.send(AudioCmd::Play(0));
        // If the start fails, the first playback sync resets this to Paused.
        app.playback = PlaybackState::Playing;
    }
}
