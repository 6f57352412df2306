//! ID3v2 frame parsing
//!
//! Decodes a raw byte buffer (a bounded prefix of an audio file) into a
//! [`ParsedTag`]. Only the frames the player displays are interpreted
//! (TIT2/TPE1/TALB and APIC cover art); everything else is skipped by its
//! declared size.
//!
//! The parser is deliberately infallible. Wrong magic, truncated frames,
//! zero-id padding, bad sizes: all of these stop parsing and return whatever
//! was collected so far. Metadata is cosmetic, so degradation always beats
//! propagation here.

use crate::text;
use aria_core::ArtworkRef;

/// Tag magic at offset 0
const MAGIC: &[u8; 3] = b"ID3";

/// Tag header length (magic + version + revision + flags + size)
const HEADER_LEN: usize = 10;

/// Frame header length (id + size + flags)
const FRAME_HEADER_LEN: usize = 10;

/// Header flag bit: an extended header follows the tag header
const FLAG_EXTENDED_HEADER: u8 = 0x40;

/// Metadata collected from a tag
///
/// Fields are `None` when the tag carried no (non-empty) value for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTag {
    /// Track title (TIT2)
    pub title: Option<String>,
    /// Artist (TPE1)
    pub artist: Option<String>,
    /// Album (TALB)
    pub album: Option<String>,
    /// Cover art (APIC)
    pub artwork: Option<ArtworkRef>,
}

impl ParsedTag {
    /// Check whether the parse produced nothing at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.artwork.is_none()
    }
}

/// Parse an ID3v2.3/2.4 tag from the start of `buf`.
///
/// Returns an empty [`ParsedTag`] when the buffer does not start with the
/// tag magic. Never errors; truncated or malformed structure yields a
/// partial result.
pub fn parse(buf: &[u8]) -> ParsedTag {
    let mut tag = ParsedTag::default();

    if buf.len() < HEADER_LEN || &buf[0..3] != MAGIC {
        return tag;
    }

    let version = buf[3];
    let flags = buf[5];
    let body_len = synchsafe_u32(&buf[6..10]) as usize;
    // The declared body can overrun the bounded prefix we were given.
    let tag_end = buf.len().min(HEADER_LEN + body_len);

    let mut pos = HEADER_LEN;

    if flags & FLAG_EXTENDED_HEADER != 0 {
        if pos + 4 > tag_end {
            return tag;
        }
        let ext_len = frame_size(version, &buf[pos..pos + 4]) as usize;
        // Skip the size field plus the declared extent; the extended header
        // content is never interpreted.
        pos += 4 + ext_len;
    }

    while pos + FRAME_HEADER_LEN <= tag_end {
        let id = &buf[pos..pos + 4];
        if id == [0, 0, 0, 0] {
            // Padding region, nothing but zeroes from here on.
            break;
        }

        let size = frame_size(version, &buf[pos + 4..pos + 8]) as usize;
        // 2 frame flag bytes at pos+8 are ignored.
        let body_start = pos + FRAME_HEADER_LEN;
        let Some(body_end) = body_start.checked_add(size) else {
            break;
        };
        if body_end > tag_end {
            // Truncated frame; keep whatever was already collected.
            break;
        }

        let body = &buf[body_start..body_end];
        match id {
            b"TIT2" => set_text(&mut tag.title, body),
            b"TPE1" => set_text(&mut tag.artist, body),
            b"TALB" => set_text(&mut tag.album, body),
            b"APIC" => {
                if let Some(artwork) = parse_apic(body) {
                    tag.artwork = Some(artwork);
                }
            }
            _ => {}
        }

        pos = body_end;
    }

    tag
}

/// Store a decoded text frame, overwriting only with non-empty text.
fn set_text(slot: &mut Option<String>, body: &[u8]) {
    let Some((&encoding, payload)) = body.split_first() else {
        return;
    };
    let decoded = text::decode(encoding, payload);
    if !decoded.is_empty() {
        *slot = Some(decoded);
    }
}

/// Parse an APIC frame body into a cover-art blob.
///
/// Layout: encoding selector, NUL-terminated ASCII MIME string, picture-type
/// byte, NUL-terminated description (double NUL for 16-bit encodings), then
/// the raw image payload. The image bytes are never decoded. Any missing
/// terminator yields no artwork.
fn parse_apic(body: &[u8]) -> Option<ArtworkRef> {
    let (&encoding, rest) = body.split_first()?;

    // The MIME string is ASCII with a single NUL terminator regardless of
    // the encoding selector (which covers the description only).
    let mime_end = rest.iter().position(|&b| b == 0)?;
    let mime = String::from_utf8_lossy(&rest[..mime_end]).into_owned();
    let after_mime = &rest[mime_end + 1..];

    // Picture-type byte: not used for anything.
    let (_pic_type, after_type) = after_mime.split_first()?;

    let wide = matches!(encoding, text::ENCODING_UTF16_BOM | text::ENCODING_UTF16_BE);
    let payload_start = if wide {
        after_type.windows(2).position(|w| w == [0, 0])? + 2
    } else {
        after_type.iter().position(|&b| b == 0)? + 1
    };

    let data = &after_type[payload_start..];
    Some(ArtworkRef::new(data.to_vec(), mime))
}

/// Frame/extended-header size field: synchsafe under v2.4, plain big-endian
/// under v2.3.
fn frame_size(version: u8, bytes: &[u8]) -> u32 {
    if version == 4 {
        synchsafe_u32(bytes)
    } else {
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

/// Decode a synchsafe 28-bit integer (7 significant bits per byte, MSB
/// first).
fn synchsafe_u32(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .take(4)
        .fold(0u32, |acc, &b| (acc << 7) | u32::from(b & 0x7F))
}
