//! Utilities for creating `rodio` sinks from `Track` values.
//!
//! Opening or decoding a track can fail (missing file, unsupported codec);
//! the error is returned so the playback thread can swallow it and leave the
//! play/pause indicator showing the real, paused state.

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::catalog::Track;

/// Create a paused `Sink` for `track` at the given gain, reporting the
/// decoder's total duration when it knows one.
pub(super) fn create_sink(
    stream: &OutputStream,
    track: &Track,
    gain: f32,
) -> Result<(Sink, Option<Duration>), Box<dyn Error + Send + Sync>> {
    let file = File::open(&track.path)?;
    let source = Decoder::new(BufReader::new(file))?;
    let duration = source.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(gain);
    sink.append(source);
    sink.pause();
    Ok((sink, duration))
}
