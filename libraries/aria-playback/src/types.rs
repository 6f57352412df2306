//! Core types for playback control

use serde::{Deserialize, Serialize};

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the playlist ends
    #[default]
    Off,

    /// Wrap traversal to the opposite end on exhaustion
    All,

    /// Replay the current track indefinitely
    One,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 80)
    pub volume: u8,

    /// Initial shuffle state (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: 80,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}

/// Equalizer settings forwarded verbatim to an [`crate::AudioGraph`]
///
/// The core does no signal processing; these are user-input values passed
/// through to whatever wires the audio graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EqSettings {
    /// Master gain percentage (0-200)
    pub master_percent: f32,

    /// Bass gain in decibels (-15..+15)
    pub bass_db: f32,

    /// Mid gain in decibels (-15..+15)
    pub mid_db: f32,

    /// Treble gain in decibels (-15..+15)
    pub treble_db: f32,
}

impl Default for EqSettings {
    fn default() -> Self {
        Self {
            master_percent: 100.0,
            bass_db: 0.0,
            mid_db: 0.0,
            treble_db: 0.0,
        }
    }
}
