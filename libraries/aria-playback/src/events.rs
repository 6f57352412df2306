//! Playback events
//!
//! Event-based communication for UI synchronization. The controller queues
//! events as it transitions; the embedding application drains them with
//! [`crate::PlaybackController::take_events`] after each handled input.

use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A different track became current
    TrackChanged {
        /// Playlist index of the new track
        index: usize,
        /// ID of the new track
        track_id: String,
    },

    /// Playing state flipped
    StateChanged {
        /// Whether the output is (believed to be) playing
        playing: bool,
    },

    /// Tracks were appended or removed
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// Volume level or mute changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        muted: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_round_trip_through_json() {
        let event = PlaybackEvent::TrackChanged {
            index: 3,
            track_id: "abc".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        let back: PlaybackEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn state_change_serializes_with_named_fields() {
        let json = serde_json::to_string(&PlaybackEvent::StateChanged { playing: true }).unwrap();
        assert_eq!(json, r#"{"StateChanged":{"playing":true}}"#);
    }
}
