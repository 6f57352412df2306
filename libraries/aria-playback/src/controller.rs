//! Playback controller
//!
//! Orchestrates the playlist store, the sequencer and an [`AudioOutput`]
//! from a single-threaded event loop. Every user input and output
//! notification is one call into the controller; the controller mutates its
//! state, drives the output, and queues [`PlaybackEvent`]s for the
//! embedding application to drain afterwards with
//! [`PlaybackController::take_events`].
//!
//! Playback indices out of range are no-ops, not errors: stale UI inputs
//! racing a playlist mutation are expected and harmless. An output `play`
//! refusal (autoplay policy, device busy) is swallowed and the controller
//! simply stays paused.

use crate::error::Result;
use crate::events::PlaybackEvent;
use crate::output::AudioOutput;
use crate::playlist::Playlist;
use crate::sequencer::Sequencer;
use crate::types::{PlaybackConfig, RepeatMode};
use crate::volume::Volume;
use aria_core::TrackMeta;
use tracing::debug;

/// Playback orchestration over an audio output
pub struct PlaybackController<O: AudioOutput> {
    output: O,
    playlist: Playlist,
    sequencer: Sequencer,

    /// Whether the output is (believed to be) playing
    playing: bool,

    volume: Volume,

    /// Events queued since the last drain
    pending_events: Vec<PlaybackEvent>,
}

impl<O: AudioOutput> PlaybackController<O> {
    /// Create a controller driving `output`, applying `config`'s initial
    /// volume, shuffle and repeat settings
    pub fn new(output: O, config: PlaybackConfig) -> Self {
        Self::with_sequencer(output, config, Sequencer::new())
    }

    /// Create a controller with a fixed shuffle seed, for deterministic
    /// traversal in tests
    pub fn with_seed(output: O, config: PlaybackConfig, seed: u64) -> Self {
        Self::with_sequencer(output, config, Sequencer::with_seed(seed))
    }

    fn with_sequencer(mut output: O, config: PlaybackConfig, mut sequencer: Sequencer) -> Self {
        let volume = Volume::new(config.volume);
        output.set_volume(volume.gain());
        sequencer.set_repeat(config.repeat);
        sequencer.set_shuffle(config.shuffle, 0);

        Self {
            output,
            playlist: Playlist::new(),
            sequencer,
            playing: false,
            volume,
            pending_events: Vec::new(),
        }
    }

    // ===== Transport =====

    /// Load and start the track at playlist `index`.
    ///
    /// Out-of-range indices are ignored. The track becomes current even
    /// when the output refuses to start; the controller then stays paused
    /// on it.
    pub fn play_index(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index) else {
            return;
        };
        debug!(index, title = %track.title, "starting track");

        let track_id = track.id.to_string();
        self.output.load(&track.source);
        self.sequencer.set_current(Some(index));
        let started = self.output.play().is_ok();
        self.set_playing(started);
        self.pending_events
            .push(PlaybackEvent::TrackChanged { index, track_id });
    }

    /// Toggle play/pause.
    ///
    /// With no current track this starts the playlist from index 0.
    pub fn toggle_play(&mut self) {
        match self.sequencer.current() {
            None => self.play_index(0),
            Some(_) if self.playing => {
                self.output.pause();
                self.set_playing(false);
            }
            Some(_) => {
                let started = self.output.play().is_ok();
                self.set_playing(started);
            }
        }
    }

    /// Skip forward to whatever the sequencer picks next.
    ///
    /// No-op when traversal is exhausted.
    pub fn next(&mut self) {
        if let Some(index) = self.sequencer.next(self.playlist.len()) {
            self.play_index(index);
        }
    }

    /// Skip back to the previous track.
    ///
    /// Unlike track-ended handling this never replays under repeat-one;
    /// the sequencer's `prev` always moves when it can.
    pub fn previous(&mut self) {
        if let Some(index) = self.sequencer.prev(self.playlist.len()) {
            self.play_index(index);
        }
    }

    /// Seek relative to the current position, clamped into the track
    pub fn seek_by(&mut self, delta: f64) {
        let target = (self.output.current_time() + delta).clamp(0.0, self.output.duration());
        self.output.seek(target);
    }

    /// Handle the output reporting that the current track finished.
    ///
    /// Repeat-one rewinds and replays without consulting the sequencer.
    /// Otherwise the sequencer picks the follow-up; exhaustion pauses and
    /// stays terminal until the next user action.
    pub fn on_ended(&mut self) {
        if self.sequencer.repeat() == RepeatMode::One && self.sequencer.current().is_some() {
            self.output.seek(0.0);
            let started = self.output.play().is_ok();
            self.set_playing(started);
            return;
        }

        match self.sequencer.next(self.playlist.len()) {
            Some(index) => self.play_index(index),
            None => {
                debug!("playlist exhausted, stopping");
                self.output.pause();
                self.set_playing(false);
            }
        }
    }

    // ===== Playlist mutation =====

    /// Append tracks to the end of the playlist
    pub fn append_tracks(&mut self, tracks: Vec<TrackMeta>) {
        if tracks.is_empty() {
            return;
        }
        self.playlist.append(tracks);
        self.sequencer.on_tracks_appended(self.playlist.len());
        self.pending_events.push(PlaybackEvent::PlaylistChanged {
            length: self.playlist.len(),
        });
    }

    /// Remove the track at `index`, repairing sequencer state in lockstep.
    ///
    /// Removing the last remaining track also pauses the output.
    pub fn remove_track(&mut self, index: usize) -> Result<TrackMeta> {
        let removed = self.playlist.remove(index)?;
        self.sequencer.on_track_removed(index, self.playlist.len());

        if self.playlist.is_empty() {
            self.output.pause();
            self.set_playing(false);
        }
        self.pending_events.push(PlaybackEvent::PlaylistChanged {
            length: self.playlist.len(),
        });
        Ok(removed)
    }

    // ===== Modes and volume =====

    /// Enable or disable shuffle
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.sequencer.set_shuffle(shuffle, self.playlist.len());
    }

    /// Set the repeat mode
    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.sequencer.set_repeat(repeat);
    }

    /// Set the volume level (0-100, mapped linearly onto output gain)
    pub fn set_volume(&mut self, level: u8) {
        self.volume.set_level(level);
        self.output.set_volume(self.volume.gain());
        self.push_volume_event();
    }

    /// Toggle mute, preserving the volume level
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.output.set_volume(self.volume.gain());
        self.push_volume_event();
    }

    // ===== Accessors =====

    /// Current playlist index, if a track is active
    pub fn current_index(&self) -> Option<usize> {
        self.sequencer.current()
    }

    /// Metadata of the current track
    pub fn current_track(&self) -> Option<&TrackMeta> {
        self.sequencer
            .current()
            .and_then(|index| self.playlist.get(index))
    }

    /// Whether the output is (believed to be) playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The playlist store
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// The sequencer
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// The volume controller
    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    /// The audio output
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Drain every event queued since the last drain
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    fn set_playing(&mut self, playing: bool) {
        if self.playing != playing {
            self.playing = playing;
            self.pending_events
                .push(PlaybackEvent::StateChanged { playing });
        }
    }

    fn push_volume_event(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            muted: self.volume.is_muted(),
        });
    }
}
