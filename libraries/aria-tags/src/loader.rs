//! Bounded-prefix track loading
//!
//! Tag data lives at the front of the file, so only a capped prefix is ever
//! read. That keeps load latency independent of file size and bounds memory
//! per track during a batch import.

use crate::error::{Result, TagError};
use crate::id3;
use crate::resolver;
use aria_core::{SourceHandle, TrackMeta};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Maximum number of bytes read per file (1 MiB). Real-world tag data,
/// artwork included, fits well below this.
pub const TAG_PREFIX_LEN: usize = 1024 * 1024;

/// Read at most [`TAG_PREFIX_LEN`] bytes from the start of a file.
pub fn read_tag_prefix(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(TagError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let mut buf = Vec::new();
    file.take(TAG_PREFIX_LEN as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Load one file into a playlist-ready [`TrackMeta`].
///
/// Reads the bounded prefix, parses the embedded tag, and resolves the
/// result against the file name. Malformed or absent tags never fail the
/// load; only I/O does.
pub fn load_track(path: &Path) -> Result<TrackMeta> {
    let prefix = read_tag_prefix(path)?;
    let parsed = id3::parse(&prefix);

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let resolved = resolver::resolve(&parsed, filename);

    if parsed.is_empty() {
        debug!(file = %path.display(), "no usable tag, resolved from filename");
    }

    let mut track = TrackMeta::new(
        resolved.title.clone(),
        SourceHandle::new(path.display().to_string()),
    );
    track.artist = resolved.has_known_artist().then(|| resolved.artist.clone());
    track.album = resolved.has_known_album().then(|| resolved.album.clone());
    track.artwork = parsed.artwork;

    Ok(track)
}
