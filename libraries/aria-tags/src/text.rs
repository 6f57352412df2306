//! Frame text decoding
//!
//! ID3v2 text frames carry a one-byte encoding selector ahead of the payload:
//! 0 = Latin-1, 1 = UTF-16 with BOM, 2 = UTF-16BE without BOM, 3 = UTF-8.
//! Decoding never fails; bad input degrades to a lossy UTF-8 reading, and an
//! unreadable payload yields an empty string.

/// Latin-1 selector byte
pub const ENCODING_LATIN1: u8 = 0;
/// UTF-16 with byte-order mark
pub const ENCODING_UTF16_BOM: u8 = 1;
/// UTF-16 big-endian, no mark
pub const ENCODING_UTF16_BE: u8 = 2;
/// UTF-8
pub const ENCODING_UTF8: u8 = 3;

/// Decode a text payload for the given encoding selector.
///
/// Trailing NUL padding is stripped from the result.
pub fn decode(encoding: u8, bytes: &[u8]) -> String {
    let decoded = match encoding {
        ENCODING_LATIN1 => bytes.iter().map(|&b| b as char).collect(),
        ENCODING_UTF16_BOM => decode_utf16(bytes, false),
        // 2.4 allows BE without a mark; synthesize one by defaulting BE.
        ENCODING_UTF16_BE => decode_utf16(bytes, true),
        // UTF-8, and the fallback for selectors the format doesn't define.
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };
    decoded.trim_end_matches('\0').to_string()
}

/// Decode UTF-16, honoring a leading byte-order mark when present.
///
/// Without a mark, `default_be` picks the byte order. A validation failure
/// falls back to reading the raw bytes as lossy UTF-8 rather than erroring.
fn decode_utf16(bytes: &[u8], default_be: bool) -> String {
    let (big_endian, payload) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (true, rest),
        [0xFF, 0xFE, rest @ ..] => (false, rest),
        _ => (default_be, bytes),
    };

    // A trailing odd byte is padding noise; ignore it.
    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| {
            if big_endian {
                u16::from_be_bytes([pair[0], pair[1]])
            } else {
                u16::from_le_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    match String::from_utf16(&units) {
        Ok(s) => s,
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
