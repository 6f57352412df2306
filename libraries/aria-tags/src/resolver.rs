//! Metadata resolution
//!
//! Merges parsed tag data with a filename-derived fallback into the final
//! record the playlist stores. The filename convention "Artist - Title.ext"
//! fills in whatever the tag left blank; placeholders cover the rest, so a
//! resolved record is always usable.

use crate::id3::ParsedTag;

/// Placeholder for a track with no resolvable artist
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Placeholder for a track with no resolvable album
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// Separator between artist and title in fallback filenames
const FILENAME_SEPARATOR: &str = " - ";

/// Fully resolved display metadata for one track
///
/// Every field is populated: title from the tag or the filename, artist and
/// album from the tag, the filename (artist only), or their placeholder
/// literals. Whether a field is "known" is judged against the placeholder,
/// see [`ResolvedMeta::artist_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMeta {
    /// Track title
    pub title: String,
    /// Artist name, possibly [`UNKNOWN_ARTIST`]
    pub artist: String,
    /// Album name, possibly [`UNKNOWN_ALBUM`]
    pub album: String,
}

impl ResolvedMeta {
    /// Whether the artist is an actual value rather than the placeholder
    pub fn has_known_artist(&self) -> bool {
        is_known(&self.artist, UNKNOWN_ARTIST)
    }

    /// Whether the album is an actual value rather than the placeholder
    pub fn has_known_album(&self) -> bool {
        is_known(&self.album, UNKNOWN_ALBUM)
    }

    /// Compact artist line: "Artist: name" when known, bare placeholder text
    /// when not.
    pub fn artist_line(&self) -> String {
        field_line("Artist", &self.artist, UNKNOWN_ARTIST)
    }

    /// Compact album line: "Album: name" when known, bare placeholder text
    /// when not.
    pub fn album_line(&self) -> String {
        field_line("Album", &self.album, UNKNOWN_ALBUM)
    }

    /// Fully labeled multi-line description for detailed display (tooltips),
    /// placeholders included.
    pub fn detail_text(&self) -> String {
        format!(
            "Title: {}\nArtist: {}\nAlbum: {}",
            self.title, self.artist, self.album
        )
    }
}

/// A field counts as known only when its trimmed lowercase value differs
/// from the placeholder literal.
fn is_known(value: &str, placeholder: &str) -> bool {
    value.trim().to_lowercase() != placeholder.to_lowercase()
}

fn field_line(label: &str, value: &str, placeholder: &str) -> String {
    if is_known(value, placeholder) {
        format!("{}: {}", label, value)
    } else {
        placeholder.to_string()
    }
}

/// Resolve parsed tag data against a filename fallback.
///
/// Fallback rules: strip the final extension, then split on " - "; two or
/// more segments give a fallback artist (first segment) and title (the rest,
/// rejoined); otherwise the whole stem is the fallback title with no
/// fallback artist.
pub fn resolve(parsed: &ParsedTag, filename: &str) -> ResolvedMeta {
    let stem = strip_extension(filename);
    let (fallback_artist, fallback_title) = split_filename(stem);

    let title = non_empty(parsed.title.as_deref())
        .map(str::to_owned)
        .unwrap_or(fallback_title);

    let artist = non_empty(parsed.artist.as_deref())
        .map(str::to_owned)
        .or(fallback_artist)
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

    let album = non_empty(parsed.album.as_deref())
        .map(str::to_owned)
        .unwrap_or_else(|| UNKNOWN_ALBUM.to_string());

    ResolvedMeta {
        title,
        artist,
        album,
    }
}

/// Trimmed value when non-empty
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Drop the final ".ext" segment, if any
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(0) | None => filename,
        Some(dot) => &filename[..dot],
    }
}

/// Split "Artist - Title" into fallback fields
fn split_filename(stem: &str) -> (Option<String>, String) {
    let segments: Vec<&str> = stem.split(FILENAME_SEPARATOR).collect();
    if segments.len() >= 2 {
        (
            Some(segments[0].to_string()),
            segments[1..].join(FILENAME_SEPARATOR),
        )
    } else {
        (None, stem.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(title: Option<&str>, artist: Option<&str>, album: Option<&str>) -> ParsedTag {
        ParsedTag {
            title: title.map(str::to_owned),
            artist: artist.map(str::to_owned),
            album: album.map(str::to_owned),
            artwork: None,
        }
    }

    #[test]
    fn tag_fields_win_over_filename() {
        let meta = resolve(
            &tag(Some("Song"), Some("Artist"), Some("Album")),
            "Other - Name.mp3",
        );
        assert_eq!(meta.title, "Song");
        assert_eq!(meta.artist, "Artist");
        assert_eq!(meta.album, "Album");
    }

    #[test]
    fn filename_with_separator_splits_artist_and_title() {
        let meta = resolve(&ParsedTag::default(), "Artist - Song Title.mp3");
        assert_eq!(meta.artist, "Artist");
        assert_eq!(meta.title, "Song Title");
        assert_eq!(meta.album, UNKNOWN_ALBUM);
    }

    #[test]
    fn filename_with_multiple_separators_rejoins_title() {
        let meta = resolve(&ParsedTag::default(), "Artist - Song - Live.mp3");
        assert_eq!(meta.artist, "Artist");
        assert_eq!(meta.title, "Song - Live");
    }

    #[test]
    fn filename_without_separator_is_title_only() {
        let meta = resolve(&ParsedTag::default(), "JustATitle.mp3");
        assert_eq!(meta.title, "JustATitle");
        assert_eq!(meta.artist, UNKNOWN_ARTIST);
    }

    #[test]
    fn whitespace_tag_values_fall_back() {
        let meta = resolve(&tag(Some("   "), Some(""), None), "Fallback.mp3");
        assert_eq!(meta.title, "Fallback");
        assert_eq!(meta.artist, UNKNOWN_ARTIST);
    }

    #[test]
    fn tag_values_are_trimmed() {
        let meta = resolve(&tag(Some("  Song  "), None, None), "x.mp3");
        assert_eq!(meta.title, "Song");
    }

    #[test]
    fn dotfile_stem_is_kept_whole() {
        let meta = resolve(&ParsedTag::default(), ".hidden");
        assert_eq!(meta.title, ".hidden");
    }

    #[test]
    fn display_lines_for_known_fields() {
        let meta = resolve(&tag(Some("Song"), Some("Artist"), Some("Album")), "x.mp3");
        assert_eq!(meta.artist_line(), "Artist: Artist");
        assert_eq!(meta.album_line(), "Album: Album");
    }

    #[test]
    fn display_lines_for_unknown_fields_are_bare_placeholders() {
        let meta = resolve(&ParsedTag::default(), "JustATitle.mp3");
        assert!(!meta.has_known_artist());
        assert!(!meta.has_known_album());
        assert_eq!(meta.artist_line(), UNKNOWN_ARTIST);
        assert_eq!(meta.album_line(), UNKNOWN_ALBUM);
    }

    #[test]
    fn placeholder_valued_tag_counts_as_unknown() {
        // A tag literally saying "unknown artist" is still not "known".
        let meta = resolve(&tag(None, Some("  unknown ARTIST "), None), "x.mp3");
        assert!(!meta.has_known_artist());
        assert_eq!(meta.artist_line(), UNKNOWN_ARTIST);
    }

    #[test]
    fn detail_text_is_always_fully_labeled() {
        let meta = resolve(&ParsedTag::default(), "JustATitle.mp3");
        assert_eq!(
            meta.detail_text(),
            "Title: JustATitle\nArtist: Unknown Artist\nAlbum: Unknown Album"
        );
    }
}
