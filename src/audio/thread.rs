use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::catalog::Track;
use crate::config::AudioSettings;

use super::picker::{advance, prev_index};
use super::sink::create_sink;
use super::types::{AudioCmd, PlaybackHandle};

pub(super) fn spawn_audio_thread(
    tracks: Vec<Track>,
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        // Spawn a ticker thread to update playback_info.elapsed periodically.
        let info_for_ticker = playback_info.clone();
        thread::spawn(move || {
            loop {
                thread::sleep(Duration::from_millis(500));
                let mut info = info_for_ticker.lock().unwrap();
                if info.playing {
                    info.elapsed += Duration::from_millis(500);
                }
            }
        });

        let mut engine = Engine {
            stream,
            tracks,
            playback_info,
            sink: None,
            index: None,
            paused: true,
            shuffle: false,
            gain: audio_settings.volume.clamp(0.0, 1.0),
        };

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    AudioCmd::Play(i) => {
                        if i < engine.tracks.len() {
                            engine.play(i);
                        }
                    }
                    AudioCmd::TogglePause => engine.toggle_pause(),
                    AudioCmd::Next => {
                        let count = engine.tracks.len();
                        let target = match engine.index {
                            Some(i) => advance(i, count, engine.shuffle, &mut rand::rng()),
                            None if count > 0 => Some(0),
                            None => None,
                        };
                        if let Some(i) = target {
                            engine.play(i);
                        }
                    }
                    AudioCmd::Prev => {
                        let count = engine.tracks.len();
                        let target = match engine.index {
                            Some(i) => prev_index(i, count),
                            None if count > 0 => Some(0),
                            None => None,
                        };
                        if let Some(i) = target {
                            engine.play(i);
                        }
                    }
                    AudioCmd::ToggleShuffle => {
                        engine.shuffle = !engine.shuffle;
                    }
                    AudioCmd::SetVolume(gain) => {
                        engine.gain = gain.clamp(0.0, 1.0);
                        if let Some(ref s) = engine.sink {
                            s.set_volume(engine.gain);
                        }
                    }
                    AudioCmd::Quit { fade_out_ms } => {
                        engine.quit(fade_out_ms);
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // End-of-track check: the sink drained while playback was
                    // active, so advance. The playlist wraps (or shuffles)
                    // forever instead of stopping after the last track.
                    let ended = !engine.paused
                        && engine.sink.as_ref().map(|s| s.empty()).unwrap_or(false);
                    if ended {
                        if let Some(i) = engine.index {
                            let next =
                                advance(i, engine.tracks.len(), engine.shuffle, &mut rand::rng());
                            if let Some(next) = next {
                                engine.play(next);
                            }
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

/// Playback state owned by the audio thread.
struct Engine {
    stream: OutputStream,
    tracks: Vec<Track>,
    playback_info: PlaybackHandle,
    sink: Option<Sink>,
    index: Option<usize>,
    paused: bool,
    shuffle: bool,
    gain: f32,
}

impl Engine {
    /// Load and start the track at `i`.
    ///
    /// A failed start (unreadable or undecodable file) is swallowed: the
    /// index still becomes current so the active row moves, but `playing`
    /// is published as false and stays that way until the user acts again.
    fn play(&mut self, i: usize) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }

        let track = &self.tracks[i];
        self.index = Some(i);

        match create_sink(&self.stream, track, self.gain) {
            Ok((sink, decoded_duration)) => {
                sink.play();
                self.sink = Some(sink);
                self.paused = false;

                if let Ok(mut info) = self.playback_info.lock() {
                    info.index = Some(i);
                    info.elapsed = Duration::ZERO;
                    info.duration = track.duration.or(decoded_duration);
                    info.playing = true;
                }
            }
            Err(_) => {
                self.paused = true;

                if let Ok(mut info) = self.playback_info.lock() {
                    info.index = Some(i);
                    info.elapsed = Duration::ZERO;
                    info.duration = track.duration;
                    info.playing = false;
                }
            }
        }
    }

    fn toggle_pause(&mut self) {
        let Some(ref s) = self.sink else {
            return;
        };

        if self.paused {
            s.play();
        } else {
            s.pause();
        }
        self.paused = !self.paused;

        if let Ok(mut info) = self.playback_info.lock() {
            info.playing = !self.paused;
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(ref s) = self.sink {
            fade_out_sink(s, self.gain, fade_out_ms);
            s.stop();
        }
        if let Ok(mut info) = self.playback_info.lock() {
            info.playing = false;
        }
    }
}

fn fade_out_sink(sink: &Sink, from_gain: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 || from_gain == 0.0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from_gain * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
