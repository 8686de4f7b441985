//! The results codec: [`ScoreProfile`] to and from a shareable string.
//!
//! [`encode`] always writes the current (v3) format. [`decode`] reads every
//! historical format and is total: any input, however corrupt, yields either
//! a fully valid profile or `None`.
//!
//! # Decode pipeline
//!
//! ```text
//! input ── unescape once ──┬── bare "vN|" text ─────────────┐
//!                          └── pad ── base64 ── UTF-8/Latin-1 ┤
//!                                                             ▼
//!                               unwrap %-escapes (≤ 3 rounds, legacy only)
//!                                                             ▼
//!                                              format::parse (v3 | v2 | JSON)
//!   on any failure: plain base64 → JSON of the untouched input, else None
//! ```

use log::{debug, trace};

use crate::persona::format::{self, legacy, v3};
use crate::persona::types::error::{ProfileError, Result};
use crate::persona::types::models::{ScoreProfile, WireVersion};

pub mod transport;

/// Upper bound on percent-unwrapping rounds applied to decoded text.
pub const MAX_UNWRAP_ROUNDS: usize = 3;

/// Encodes `profile` into a compact base64 string without padding.
///
/// The output uses the standard base64 alphabet; callers placing it in a URL
/// still percent-encode it as a query value.
pub fn encode(profile: &ScoreProfile) -> String {
    let text = v3::write(profile);
    trace!("Encoding payload text: {}", text);
    transport::encode_base64(&text)
}

/// Decodes a shared payload, returning `None` when it cannot be read.
pub fn decode(encoded: &str) -> Option<ScoreProfile> {
    match try_decode(encoded) {
        Ok(profile) => Some(profile),
        Err(e) => {
            debug!("Could not decode shared result: {}", e);
            None
        }
    }
}

/// Decodes an optional query parameter; a missing parameter yields `None`.
pub fn decode_param(encoded: Option<&str>) -> Option<ScoreProfile> {
    encoded.and_then(decode)
}

/// Decodes a shared payload, reporting why it failed.
///
/// Runs the full pipeline and, if any stage fails, retries the untouched
/// input as plain base64-wrapped JSON. The error returned is the one from
/// the full pipeline.
pub fn try_decode(encoded: &str) -> Result<ScoreProfile> {
    if encoded.is_empty() {
        return Err(ProfileError::EmptyInput);
    }

    match decode_pipeline(encoded) {
        Ok(profile) => {
            debug!("Decoded shared result with code {}", profile.code());
            Ok(profile)
        }
        Err(e) => {
            debug!("Decode pipeline failed ({}), trying plain base64 JSON", e);
            decode_plain(encoded).map_err(|fallback| {
                trace!("Plain base64 JSON fallback failed: {}", fallback);
                e
            })
        }
    }
}

fn decode_pipeline(encoded: &str) -> Result<ScoreProfile> {
    // Undo one layer of escaping added by whatever embedded the payload.
    let outer = transport::unescape_component(encoded)?;

    let text = if WireVersion::is_prefixed(&outer) {
        trace!("Payload is bare prefixed text");
        outer
    } else {
        let padded = transport::restore_padding(&outer);
        let bytes = transport::decode_base64(&padded)?;
        transport::bytes_to_text(bytes)
    };

    format::parse(&unwrap_escapes(text))
}

/// Repeatedly reverses percent-escaping on legacy payload text.
///
/// Stops at the round cap, when no well-formed escape remains, when a round
/// changes nothing or fails, or once a version prefix is exposed. Prefixed
/// text is left alone because its fields carry their own escaping.
fn unwrap_escapes(mut text: String) -> String {
    for round in 1..=MAX_UNWRAP_ROUNDS {
        if WireVersion::is_prefixed(&text) || !transport::has_escape(&text) {
            break;
        }
        match transport::unescape_component(&text) {
            Ok(next) if next != text => {
                trace!("Unwrapped percent-escaping, round {}", round);
                text = next;
            }
            Ok(_) => break,
            Err(e) => {
                trace!("Stopped unwrapping at round {}: {}", round, e);
                break;
            }
        }
    }
    text
}

fn decode_plain(encoded: &str) -> Result<ScoreProfile> {
    let bytes = transport::decode_base64_forgiving(encoded)?;
    legacy::parse(&transport::bytes_to_text(bytes))
}
