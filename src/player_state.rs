//! YouTube iframe player states and their display labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State reported by the YouTube iframe API `onStateChange` event.
///
/// Codes the API may add later (or that we never handle, such as 4) are read
/// as [`PlayerState::Paused`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlayerState {
    Unstarted,
    Ended,
    Playing,
    #[default]
    Paused,
    Buffering,
    VideoCued,
}

impl PlayerState {
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => PlayerState::Unstarted,
            0 => PlayerState::Ended,
            1 => PlayerState::Playing,
            2 => PlayerState::Paused,
            3 => PlayerState::Buffering,
            5 => PlayerState::VideoCued,
            _unmatched => PlayerState::default(),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            PlayerState::Unstarted => -1,
            PlayerState::Ended => 0,
            PlayerState::Playing => 1,
            PlayerState::Paused => 2,
            PlayerState::Buffering => 3,
            PlayerState::VideoCued => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerState::Unstarted => "unstarted",
            PlayerState::Ended => "ended",
            PlayerState::Playing => "playing",
            PlayerState::Paused => "paused",
            PlayerState::Buffering => "buffering",
            PlayerState::VideoCued => "video cued",
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<i32> for PlayerState {
    fn from(code: i32) -> Self {
        PlayerState::from_code(code)
    }
}

/// The part of an `onStateChange` event we read: `{ data: <code> }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStateEvent {
    pub data: i32,
}

/// Map a YouTube player event to its human readable state.
pub fn get_youtube_player_state(event: &PlayerStateEvent) -> &'static str {
    PlayerState::from_code(event.data).label()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_for_known_codes() {
        let table = [
            (-1, "unstarted"),
            (0, "ended"),
            (1, "playing"),
            (2, "paused"),
            (3, "buffering"),
            (5, "video cued"),
        ];
        for (code, label) in table {
            assert_eq!(get_youtube_player_state(&PlayerStateEvent { data: code }), label);
        }
    }

    #[test]
    fn unmatched_codes_read_as_paused() {
        for code in [4, 6, 99, -2, i32::MAX, i32::MIN] {
            assert_eq!(PlayerState::from_code(code), PlayerState::Paused);
        }
    }

    #[test]
    fn code_round_trips_for_known_states() {
        for code in [-1, 0, 1, 2, 3, 5] {
            assert_eq!(PlayerState::from_code(code).code(), code);
        }
    }

    #[test]
    fn event_deserializes_from_iframe_shape() {
        let event: PlayerStateEvent =
            serde_json::from_str(r#"{"data": 1, "target": {}}"#).unwrap();
        assert_eq!(PlayerState::from(event.data), PlayerState::Playing);
        assert_eq!(PlayerState::Playing.to_string(), "playing");
    }
}
