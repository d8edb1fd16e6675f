//! Audio player state machine.
//!
//! The component owns an `<audio>` element; this module owns every decision
//! about what to do with it. State transitions return an [`AudioAction`]
//! that the component mirrors onto the element, which keeps the skip and
//! toggle logic testable without a DOM.

/// One playlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    /// Display title
    pub title: &'static str,
    /// Audio source path
    pub src: &'static str,
}

/// What the component should do to the `<audio>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioAction {
    /// Call `play()`
    Play,
    /// Call `pause()`
    Pause,
    /// Point the element at the track and leave it paused
    Load {
        /// Playlist index to load
        index: usize,
    },
    /// Point the element at the track and start it
    LoadAndPlay {
        /// Playlist index to load
        index: usize,
    },
}

/// Which track is loaded and whether the visitor wants sound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Playback is on as far as the visitor is concerned
    pub enabled: bool,
    /// Index of the loaded track
    pub current: usize,
}

impl PlaybackState {
    /// Handle the header sound toggle, which keys off the enabled flag
    /// alone.
    pub fn toggle(&mut self) -> AudioAction {
        if self.enabled {
            self.enabled = false;
            AudioAction::Pause
        } else {
            self.enabled = true;
            AudioAction::Play
        }
    }

    /// Handle the play/pause button.
    ///
    /// `element_paused` is the live element state, which can disagree with
    /// `enabled` after a track runs out on its own. Pressing play then
    /// resumes instead of pausing an already-silent element.
    pub fn play_pause(&mut self, element_paused: bool) -> AudioAction {
        if element_paused {
            self.enabled = true;
            AudioAction::Play
        } else {
            self.enabled = false;
            AudioAction::Pause
        }
    }

    /// Skip forward, wrapping past the end.
    pub fn next(&mut self, playlist_len: usize) -> Option<AudioAction> {
        if playlist_len == 0 {
            return None;
        }
        self.current = (self.current + 1) % playlist_len;
        Some(self.step_action())
    }

    /// Skip backward, wrapping past the start.
    pub fn prev(&mut self, playlist_len: usize) -> Option<AudioAction> {
        if playlist_len == 0 {
            return None;
        }
        self.current = (self.current + playlist_len - 1) % playlist_len;
        Some(self.step_action())
    }

    /// Skipping keeps the current listening state: a playing player keeps
    /// playing on the new track, a paused one just swaps the source.
    fn step_action(&self) -> AudioAction {
        if self.enabled {
            AudioAction::LoadAndPlay {
                index: self.current,
            }
        } else {
            AudioAction::Load {
                index: self.current,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates() {
        let mut state = PlaybackState::default();
        assert_eq!(state.toggle(), AudioAction::Play);
        assert!(state.enabled);
        assert_eq!(state.toggle(), AudioAction::Pause);
        assert!(!state.enabled);
    }

    #[test]
    fn toggle_ignores_element_state() {
        // After a track ends the element is paused but enabled is still
        // set, and the toggle turns sound off rather than resuming.
        let mut state = PlaybackState {
            enabled: true,
            current: 1,
        };
        assert_eq!(state.toggle(), AudioAction::Pause);
        assert!(!state.enabled);
    }

    #[test]
    fn play_pause_follows_the_element() {
        let mut state = PlaybackState::default();
        assert_eq!(state.play_pause(true), AudioAction::Play);
        assert!(state.enabled);
        assert_eq!(state.play_pause(false), AudioAction::Pause);
        assert!(!state.enabled);
    }

    #[test]
    fn play_resumes_after_track_ends() {
        let mut state = PlaybackState {
            enabled: true,
            current: 2,
        };
        // The element paused itself when the track ran out.
        assert_eq!(state.play_pause(true), AudioAction::Play);
        assert!(state.enabled);
    }

    #[test]
    fn next_wraps_forward() {
        let mut state = PlaybackState {
            enabled: true,
            current: 2,
        };
        assert_eq!(state.next(3), Some(AudioAction::LoadAndPlay { index: 0 }));
        assert_eq!(state.current, 0);
    }

    #[test]
    fn prev_wraps_backward() {
        let mut state = PlaybackState::default();
        assert_eq!(state.prev(3), Some(AudioAction::Load { index: 2 }));
        assert_eq!(state.current, 2);
    }

    #[test]
    fn paused_skip_only_loads() {
        let mut state = PlaybackState::default();
        assert_eq!(state.next(3), Some(AudioAction::Load { index: 1 }));
        assert!(!state.enabled);
    }

    #[test]
    fn empty_playlist_is_inert() {
        let mut state = PlaybackState::default();
        assert_eq!(state.next(0), None);
        assert_eq!(state.prev(0), None);
        assert_eq!(state.current, 0);
    }
}
