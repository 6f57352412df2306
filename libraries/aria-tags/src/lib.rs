//! Aria Player Tags
//!
//! Embedded tag parsing and metadata resolution for Aria Player.
//!
//! This crate provides:
//! - ID3v2.3/2.4 frame parsing from a bounded in-memory prefix
//! - Cover-art (APIC) extraction as raw bytes + MIME
//! - Filename-fallback metadata resolution with display placeholders
//! - Bounded-prefix file loading (tag latency independent of file size)
//!
//! Parsing never fails: a buffer that is not a tag, or a tag that is
//! truncated or malformed, degrades to a partial or empty [`ParsedTag`], and
//! the resolver's filename fallback guarantees a usable record either way.
//!
//! # Example
//!
//! ```rust
//! use aria_tags::{parse, resolve};
//!
//! // Not a tag at all: empty parse, filename carries the metadata.
//! let parsed = parse(b"not a tag");
//! assert!(parsed.is_empty());
//!
//! let meta = resolve(&parsed, "Artist - Song Title.mp3");
//! assert_eq!(meta.title, "Song Title");
//! assert_eq!(meta.artist, "Artist");
//! assert!(meta.has_known_artist());
//! ```

mod error;
mod id3;
mod loader;
mod resolver;
mod text;

pub use error::{Result, TagError};
pub use id3::{parse, ParsedTag};
pub use loader::{load_track, read_tag_prefix, TAG_PREFIX_LEN};
pub use resolver::{resolve, ResolvedMeta, UNKNOWN_ALBUM, UNKNOWN_ARTIST};
