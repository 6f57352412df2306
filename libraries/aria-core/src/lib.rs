//! Aria Player Core
//!
//! Shared domain types for Aria Player.
//!
//! This crate defines the track record and the opaque handles the rest of the
//! player passes around:
//! - [`TrackMeta`]: a playlist entry (id, source handle, resolved tag fields)
//! - [`TrackId`]: uuid-backed track identity
//! - [`SourceHandle`]: reference to a track's audio data, owned elsewhere
//! - [`ArtworkRef`]: shared cover-art bytes tagged with a MIME type
//!
//! # Example
//!
//! ```rust
//! use aria_core::{SourceHandle, TrackMeta};
//!
//! let track = TrackMeta::new("My Favorite Song", SourceHandle::new("/music/song.mp3"));
//! assert_eq!(track.title, "My Favorite Song");
//! assert!(track.artist.is_none());
//! ```

pub mod types;

pub use types::{ArtworkRef, SourceHandle, TrackId, TrackMeta};
