//! Audio subsystem: playback thread, transport policy and volume rules.
//!
//! The `AudioPlayer` handle owns a dedicated playback thread driving a rodio
//! sink; the rest of the app talks to it over an `AudioCmd` channel and
//! observes it through a shared `PlaybackInfo` handle.

mod picker;
mod player;
mod sink;
mod thread;
mod types;
mod volume;

pub use picker::*;
pub use player::*;
pub use types::*;
pub use volume::*;
