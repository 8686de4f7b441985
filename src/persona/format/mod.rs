//! Wire-format parsing layer for shared result payloads.
//!
//! Every historical encoding is a variant of one tagged union: the version
//! is detected from the decoded text, then exactly one parser runs and
//! produces the canonical [`ScoreProfile`].
//!
//! ```text
//! "v3|56.53.56.42|||s|"          ← v3::parse()
//! "v2|56,53,56,42|||self|"       ← v2::parse()
//! {"scores":{"EI":56,...},...}   ← legacy::parse()
//! ```
//!
//! Adding a version means adding a [`WireVersion`] variant, its prefix, and
//! one parser module.

use log::debug;

use crate::persona::types::error::Result;
use crate::persona::types::models::{ScoreProfile, WireVersion};

pub mod common;
pub mod legacy;
pub mod v2;
pub mod v3;

/// Parses a fully unwrapped payload text, dispatching on its version.
pub fn parse(text: &str) -> Result<ScoreProfile> {
    let version = WireVersion::detect(text);
    debug!("Detected wire format: {}", version);
    match version {
        WireVersion::V3 => v3::parse(text),
        WireVersion::V2 => v2::parse(text),
        WireVersion::Legacy => legacy::parse(text),
    }
}
