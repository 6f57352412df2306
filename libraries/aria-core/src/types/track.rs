/// Track domain types
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Opaque reference to a track's audio data
///
/// The bytes behind the handle are owned by whoever produced them (file
/// input, object URL, platform loader). The core only passes the handle to
/// the audio output and must not assume it outlives the session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceHandle(String);

impl SourceHandle {
    /// Create a handle from its string form
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Cover-art blob extracted from an embedded tag
///
/// The image bytes are shared, never decoded. MIME comes straight from the
/// tag's picture frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRef {
    /// Raw image bytes
    pub data: Arc<[u8]>,
    /// MIME type (e.g. "image/jpeg", "image/png")
    pub mime_type: String,
}

impl ArtworkRef {
    /// Create new artwork from raw bytes and a MIME string
    pub fn new(data: impl Into<Arc<[u8]>>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// A playlist entry with resolved metadata
#[derive(Debug, Clone, PartialEq)]
pub struct TrackMeta {
    /// Unique track identifier
    pub id: TrackId,

    /// Handle to the audio data for the output to load
    pub source: SourceHandle,

    /// Track title (always present after resolution)
    pub title: String,

    /// Artist name
    pub artist: Option<String>,

    /// Album name
    pub album: Option<String>,

    /// Embedded cover art, if the tag carried any
    pub artwork: Option<ArtworkRef>,
}

impl TrackMeta {
    /// Create a track with minimal metadata
    pub fn new(title: impl Into<String>, source: SourceHandle) -> Self {
        Self {
            id: TrackId::generate(),
            source,
            title: title.into(),
            artist: None,
            album: None,
            artwork: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = TrackMeta::new("Test Song", SourceHandle::new("/music/song.mp3"));
        assert_eq!(track.title, "Test Song");
        assert_eq!(track.source.as_str(), "/music/song.mp3");
        assert!(track.artist.is_none());
        assert!(track.artwork.is_none());
    }

    #[test]
    fn artwork_shares_bytes() {
        let art = ArtworkRef::new(vec![0xFF, 0xD8, 0xFF], "image/jpeg");
        let clone = art.clone();
        assert!(Arc::ptr_eq(&art.data, &clone.data));
        assert_eq!(clone.mime_type, "image/jpeg");
    }
}
