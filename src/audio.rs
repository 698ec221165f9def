//! Background-music playback state.
//!
//! Browsers refuse to start audio with sound until a user gesture happens,
//! so the track stays in [`Playback::NotStarted`] until a gesture-driven
//! start attempt actually resolves. A rejected attempt leaves the state
//! untouched and the next gesture simply tries again.

/// Volume the track starts at once playback is allowed.
pub const START_VOLUME: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    NotStarted,
    Playing { muted: bool },
}

impl Playback {
    pub fn is_started(self) -> bool {
        !matches!(self, Playback::NotStarted)
    }

    /// The mute glyph shows muted until the track is actually playing.
    pub fn is_muted(self) -> bool {
        match self {
            Playback::NotStarted => true,
            Playback::Playing { muted } => muted,
        }
    }

    /// State after a play() promise resolves. Always unmuted; a second
    /// resolution while already playing changes nothing.
    pub fn start_succeeded(self) -> Playback {
        match self {
            Playback::NotStarted => Playback::Playing { muted: false },
            playing => playing,
        }
    }

    /// State after the mute button is pressed while already playing.
    /// Pressing it before playback started is handled by the caller as a
    /// start attempt instead, since that press is the autoplay unlock.
    pub fn toggled(self) -> Playback {
        match self {
            Playback::NotStarted => Playback::NotStarted,
            Playback::Playing { muted } => Playback::Playing { muted: !muted },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_started_and_muted() {
        let state = Playback::NotStarted;
        assert!(!state.is_started());
        assert!(state.is_muted());
    }

    #[test]
    fn successful_start_is_unmuted() {
        let state = Playback::NotStarted.start_succeeded();
        assert_eq!(state, Playback::Playing { muted: false });
        assert!(!state.is_muted());
    }

    #[test]
    fn second_start_is_a_no_op() {
        let state = Playback::NotStarted.start_succeeded();
        let muted = state.toggled();
        assert_eq!(muted.start_succeeded(), muted);
        assert_eq!(state.start_succeeded(), state);
    }

    #[test]
    fn toggle_cycles_mute_once_playing() {
        let playing = Playback::Playing { muted: false };
        let muted = playing.toggled();
        assert_eq!(muted, Playback::Playing { muted: true });
        assert_eq!(muted.toggled(), playing);
    }

    #[test]
    fn failed_start_leaves_state_unchanged() {
        // The rejection path never calls a transition at all; the state
        // value a caller holds on to is still the initial one.
        let state = Playback::NotStarted;
        assert_eq!(state, Playback::NotStarted);
        assert!(state.is_muted());
    }
}
