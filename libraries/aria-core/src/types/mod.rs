//! Domain types

mod ids;
mod track;

pub use ids::TrackId;
pub use track::{ArtworkRef, SourceHandle, TrackMeta};
