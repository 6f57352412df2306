//! In-memory playlist store
//!
//! Owns the ordered track collection. Tracks keep arrival order and are
//! never reordered except by removal, which renumbers every entry past the
//! removed position. Removal must be paired with sequencer repair
//! ([`crate::Sequencer::on_track_removed`]); the controller does both in
//! lockstep.

use crate::error::{PlaybackError, Result};
use aria_core::TrackMeta;

/// Ordered track collection
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<TrackMeta>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Append tracks at the end, preserving the given order.
    ///
    /// Track ids are uuid-generated at load time; within one store that
    /// makes collisions negligible without a hard uniqueness check.
    pub fn append(&mut self, tracks: Vec<TrackMeta>) {
        self.tracks.extend(tracks);
    }

    /// Remove the track at `index`.
    ///
    /// Every remaining index greater than `index` decreases by one. Returns
    /// the removed track, or `IndexOutOfBounds` for an invalid index.
    pub fn remove(&mut self, index: usize) -> Result<TrackMeta> {
        if index >= self.tracks.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }
        Ok(self.tracks.remove(index))
    }

    /// Track at `index`
    pub fn get(&self, index: usize) -> Option<&TrackMeta> {
        self.tracks.get(index)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All tracks in playlist order
    pub fn tracks(&self) -> &[TrackMeta] {
        &self.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_core::SourceHandle;

    fn track(title: &str) -> TrackMeta {
        TrackMeta::new(title, SourceHandle::new(format!("/music/{title}.mp3")))
    }

    #[test]
    fn create_empty_playlist() {
        let playlist = Playlist::new();
        assert_eq!(playlist.len(), 0);
        assert!(playlist.is_empty());
    }

    #[test]
    fn append_preserves_arrival_order() {
        let mut playlist = Playlist::new();
        playlist.append(vec![track("a"), track("b")]);
        playlist.append(vec![track("c")]);

        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.get(0).unwrap().title, "a");
        assert_eq!(playlist.get(1).unwrap().title, "b");
        assert_eq!(playlist.get(2).unwrap().title, "c");
    }

    #[test]
    fn remove_renumbers_later_entries() {
        let mut playlist = Playlist::new();
        playlist.append(vec![track("a"), track("b"), track("c")]);

        let removed = playlist.remove(1).unwrap();
        assert_eq!(removed.title, "b");
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.get(0).unwrap().title, "a");
        assert_eq!(playlist.get(1).unwrap().title, "c");
    }

    #[test]
    fn remove_out_of_range_is_an_error() {
        let mut playlist = Playlist::new();
        playlist.append(vec![track("a")]);

        assert!(matches!(
            playlist.remove(5),
            Err(PlaybackError::IndexOutOfBounds(5))
        ));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn appended_tracks_have_unique_ids() {
        let mut playlist = Playlist::new();
        playlist.append(vec![track("a"), track("a"), track("a")]);

        let ids: std::collections::HashSet<_> =
            playlist.tracks().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 3);
    }
}
