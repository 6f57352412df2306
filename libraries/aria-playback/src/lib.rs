//! Aria Player Playback
//!
//! Playlist sequencing and playback control for Aria Player.
//!
//! This crate provides:
//! - In-memory playlist store (arrival order, index-repairing removal)
//! - Sequencer state machine (shuffle order, repeat one/all wraparound)
//! - Playback controller orchestrating an [`AudioOutput`] capability
//! - Volume mapping (0-100 to a 0.0-1.0 output scale, mute/unmute)
//! - Playback events for UI synchronization
//!
//! # Architecture
//!
//! Everything here is single-threaded and event-driven: the embedding
//! application owns one [`PlaybackController`] and calls into it from its
//! event loop (user controls, output "ended"/time updates). No locks, no
//! background threads. Audio hardware is behind the [`AudioOutput`] trait;
//! the equalizer graph is behind [`AudioGraph`] and stays entirely outside
//! this crate's logic.
//!
//! # Example
//!
//! ```rust
//! use aria_playback::{PlaybackConfig, PlaybackController, RepeatMode};
//! use aria_playback::output::AudioOutput;
//! use aria_core::{SourceHandle, TrackMeta};
//!
//! # struct NoopOutput;
//! # impl AudioOutput for NoopOutput {
//! #     fn load(&mut self, _: &SourceHandle) {}
//! #     fn play(&mut self) -> aria_playback::Result<()> { Ok(()) }
//! #     fn pause(&mut self) {}
//! #     fn seek(&mut self, _: f64) {}
//! #     fn current_time(&self) -> f64 { 0.0 }
//! #     fn duration(&self) -> f64 { 0.0 }
//! #     fn set_volume(&mut self, _: f32) {}
//! # }
//! let mut controller = PlaybackController::new(NoopOutput, PlaybackConfig::default());
//!
//! controller.append_tracks(vec![
//!     TrackMeta::new("First", SourceHandle::new("/music/first.mp3")),
//!     TrackMeta::new("Second", SourceHandle::new("/music/second.mp3")),
//! ]);
//!
//! controller.set_repeat(RepeatMode::All);
//! controller.toggle_play(); // no current track: starts at index 0
//! assert_eq!(controller.current_index(), Some(0));
//! ```

mod controller;
mod error;
mod events;
pub mod output;
mod playlist;
mod sequencer;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use output::{AudioGraph, AudioOutput};
pub use playlist::Playlist;
pub use sequencer::Sequencer;
pub use types::{EqSettings, PlaybackConfig, RepeatMode};
pub use volume::Volume;
