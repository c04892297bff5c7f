//! Volume and mute rules.
//!
//! The level and the mute flag are coupled: dragging the level to exactly
//! zero force-mutes, and unmuting at level zero restores a small audible
//! default so the player never ends up "unmuted but silent".

/// Level substituted for unparsable input and when unmuting from silence.
pub const FALLBACK_VOLUME: f32 = 0.1;

/// Parse free-form volume input. Unparsable or non-finite text falls back to
/// [`FALLBACK_VOLUME`]; the result is clamped to `[0, 1]`.
pub fn parse_volume(input: &str) -> f32 {
    let v = input
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(FALLBACK_VOLUME);
    v.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeState {
    /// Requested level in `[0, 1]`, rounded to two decimals.
    pub level: f32,
    pub muted: bool,
}

impl Default for VolumeState {
    fn default() -> Self {
        Self {
            level: FALLBACK_VOLUME,
            muted: false,
        }
    }
}

impl VolumeState {
    /// Set the level, clamped and rounded to two decimals so repeated steps
    /// can land on exactly zero. Level zero forces mute; anything else
    /// forces unmute.
    pub fn set_level(&mut self, level: f32) {
        self.level = (level.clamp(0.0, 1.0) * 100.0).round() / 100.0;
        self.muted = self.level == 0.0;
    }

    /// Apply free-form text input through [`parse_volume`].
    pub fn set_from_input(&mut self, input: &str) {
        self.set_level(parse_volume(input));
    }

    /// Nudge the level by `delta` (positive or negative).
    pub fn step(&mut self, delta: f32) {
        self.set_level(self.level + delta);
    }

    /// Flip the mute flag. Unmuting while the level still reads zero
    /// restores [`FALLBACK_VOLUME`].
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        if !self.muted && self.level == 0.0 {
            self.level = FALLBACK_VOLUME;
        }
    }

    /// The gain actually applied to the sink.
    pub fn gain(&self) -> f32 {
        if self.muted { 0.0 } else { self.level }
    }
}
