use std::error::Error;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, PlaybackState};
use crate::audio::{AudioCmd, AudioPlayer};
use crate::config::Settings;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pending_gg: bool,
}

/// Main terminal event loop: handles input, UI drawing and sync with the
/// playback thread. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
) -> Result<(), Box<dyn Error>> {
    let mut state = EventLoopState { pending_gg: false };

    loop {
        // Mirror playback into the app model; the indicator always reflects
        // what the playback thread actually did, including swallowed start
        // failures. Clone the Arc handle to avoid borrowing `app` immutably
        // across mutations.
        if let Some(handle) = app.playback_handle.as_ref().cloned() {
            if let Ok(info) = handle.lock() {
                let idx_opt = info.index;
                let is_playing = info.playing;
                drop(info);

                if let Some(idx) = idx_opt {
                    if app.follow_playback {
                        if let Some(pending) = app.pending_follow_index {
                            if pending == idx {
                                app.clear_pending_follow_index();
                                if app.selected != idx {
                                    app.set_selected(idx);
                                }
                            }
                        } else if app.selected != idx {
                            app.set_selected(idx);
                        }
                    }
                }
                app.playback = match (idx_opt, is_playing) {
                    (None, _) => PlaybackState::Stopped,
                    (Some(_), true) => PlaybackState::Playing,
                    (Some(_), false) => PlaybackState::Paused,
                };
            }
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, audio_player, &mut state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Handle one key press. Returns true when the app should quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    state: &mut EventLoopState,
) -> bool {
    if app.entering_volume() {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => app.cancel_volume_entry(),
            KeyCode::Backspace => app.pop_volume_char(),
            KeyCode::Enter => {
                let gain = app.commit_volume_entry();
                let _ = audio_player.send(AudioCmd::SetVolume(gain));
            }
            KeyCode::Char(c) => {
                if !c.is_control() {
                    app.push_volume_char(c);
                }
            }
            _ => {}
        }

        return false;
    }

    match key.code {
        KeyCode::Char('q') => {
            state.pending_gg = false;
            audio_player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return true;
        }
        KeyCode::Char('s') => {
            state.pending_gg = false;
            app.toggle_shuffle();
            let _ = audio_player.send(AudioCmd::ToggleShuffle);
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.follow_playback_off();
                app.set_selected(0);
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            if app.has_tracks() {
                app.follow_playback_off();
                app.set_selected(app.tracks.len() - 1);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.follow_playback_off();
            app.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.follow_playback_off();
            app.prev();
        }
        KeyCode::Enter => {
            state.pending_gg = false;
            if app.has_tracks() {
                app.follow_playback_on();
                app.set_pending_follow_index(app.selected);
                let _ = audio_player.send(AudioCmd::Play(app.selected));
                app.playback = PlaybackState::Playing;
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            state.pending_gg = false;
            match app.playback {
                PlaybackState::Stopped => {
                    if app.has_tracks() {
                        app.follow_playback_on();
                        app.set_pending_follow_index(app.selected);
                        let _ = audio_player.send(AudioCmd::Play(app.selected));
                        app.playback = PlaybackState::Playing;
                    }
                }
                PlaybackState::Playing => {
                    let _ = audio_player.send(AudioCmd::TogglePause);
                    app.playback = PlaybackState::Paused;
                }
                PlaybackState::Paused => {
                    let _ = audio_player.send(AudioCmd::TogglePause);
                    app.playback = PlaybackState::Playing;
                }
            }
        }
        KeyCode::Char('l') => {
            state.pending_gg = false;
            if app.has_tracks() {
                app.follow_playback_on();
                let _ = audio_player.send(AudioCmd::Next);
                app.playback = PlaybackState::Playing;
            }
        }
        KeyCode::Char('h') => {
            state.pending_gg = false;
            if app.has_tracks() {
                app.follow_playback_on();
                let _ = audio_player.send(AudioCmd::Prev);
                app.playback = PlaybackState::Playing;
            }
        }
        KeyCode::Char('m') => {
            state.pending_gg = false;
            app.volume.toggle_mute();
            let _ = audio_player.send(AudioCmd::SetVolume(app.volume.gain()));
        }
        KeyCode::Char('-') => {
            state.pending_gg = false;
            app.volume.step(-0.05);
            let _ = audio_player.send(AudioCmd::SetVolume(app.volume.gain()));
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            state.pending_gg = false;
            app.volume.step(0.05);
            let _ = audio_player.send(AudioCmd::SetVolume(app.volume.gain()));
        }
        KeyCode::Char('v') => {
            state.pending_gg = false;
            app.begin_volume_entry();
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }

    false
}
