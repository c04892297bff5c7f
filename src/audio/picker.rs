//! Transport policy: which track plays after the current one.
//!
//! Pure index arithmetic, kept apart from the playback thread so the
//! selection rules can be tested without an audio device. All helpers
//! return `None` for an empty catalog; callers treat that as a no-op.

use rand::Rng;

/// Sequential successor: `(current + 1) % count`, wrapping at the end.
pub fn next_index(current: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some((current + 1) % count)
}

/// Sequential predecessor: `(current - 1 + count) % count`, wrapping at 0.
pub fn prev_index(current: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some((current + count - 1) % count)
}

/// Uniform random pick, excluding `current` via rejection sampling when more
/// than one track exists. With a single track the exclusion short-circuits
/// and the same track replays.
pub fn shuffle_index<R: Rng + ?Sized>(current: usize, count: usize, rng: &mut R) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let mut pick = rng.random_range(0..count);
    while pick == current && count > 1 {
        pick = rng.random_range(0..count);
    }
    Some(pick)
}

/// The track that follows `current`, honoring the shuffle flag. Used both for
/// the manual next control and for end-of-track auto-advance; the playlist
/// never stops, it wraps or shuffles indefinitely.
pub fn advance<R: Rng + ?Sized>(
    current: usize,
    count: usize,
    shuffled: bool,
    rng: &mut R,
) -> Option<usize> {
    if shuffled {
        shuffle_index(current, count, rng)
    } else {
        next_index(current, count)
    }
}
