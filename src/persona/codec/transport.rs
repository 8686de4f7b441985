//! Byte-level transport primitives: base64 and URI-component percent escaping.
//!
//! These are the two reversible layers wrapped around every payload. The
//! escaping rule matches the one browsers apply to a single query component,
//! so payloads produced by older encoders decode byte-for-byte.

use std::borrow::Cow;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use log::trace;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::persona::types::error::{ProfileError, Result};

/// Characters left unescaped in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Standard alphabet; writes no padding, accepts it either way, tolerates
/// non-zero trailing bits the way browser decoders do.
const PAYLOAD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Base64-encodes the UTF-8 bytes of `text` without trailing `=`.
pub fn encode_base64(text: &str) -> String {
    PAYLOAD.encode(text.as_bytes())
}

/// Appends `=` until the length is a multiple of four.
pub fn restore_padding(encoded: &str) -> Cow<'_, str> {
    let missing = (4 - encoded.len() % 4) % 4;
    if missing == 0 {
        return Cow::Borrowed(encoded);
    }
    trace!("Restoring {} padding character(s)", missing);
    let mut padded = String::with_capacity(encoded.len() + missing);
    padded.push_str(encoded);
    padded.extend(std::iter::repeat_n('=', missing));
    Cow::Owned(padded)
}

/// Decodes a (padded or unpadded) base64 string.
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    Ok(PAYLOAD.decode(encoded)?)
}

/// Decodes base64 after discarding ASCII whitespace.
pub fn decode_base64_forgiving(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    decode_base64(&compact)
}

/// Interprets decoded bytes as text.
///
/// Bytes that are not UTF-8 are read one character per byte, which is how
/// payloads written before UTF-8-safe escaping was introduced must be read.
pub fn bytes_to_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            trace!("Payload is not UTF-8 ({}), reading bytes as Latin-1", e.utf8_error());
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Escapes `text` as a single URI component.
pub fn escape_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Reverses one layer of URI-component escaping.
///
/// Strict: a `%` that does not start a two-hex-digit escape, or escapes that
/// do not assemble into UTF-8, are errors rather than passed through.
pub fn unescape_component(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return Err(ProfileError::InvalidPercentEncoding(format!(
                    "malformed escape at byte {}",
                    i
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(text)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| ProfileError::InvalidPercentEncoding(e.to_string()))
}

/// Whether `text` contains at least one well-formed `%XX` escape.
pub fn has_escape(text: &str) -> bool {
    text.as_bytes()
        .windows(3)
        .any(|w| w[0] == b'%' && w[1].is_ascii_hexdigit() && w[2].is_ascii_hexdigit())
}
