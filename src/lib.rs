//! # persona-share
//!
//! Compact, versioned, URL-safe sharing of four-axis personality results.
//!
//! A [`ScoreProfile`] is encoded into a short base64 string that fits in a
//! query parameter, and decoded back from any of the three historical wire
//! formats (v3, v2, and legacy JSON). Decoding never fails loudly: corrupt
//! input yields `None`.
pub mod persona;

// Re-export the main types for convenience
pub use persona::{
    ProfileError, Result,
    codec::{decode, decode_param, encode, try_decode},
    scoring::{Question, calculate_diff, calculate_scores, top_axes},
    store::{KeyValueStore, MemoryStore, load_results, resolve_results, save_results},
    types::{
        axis::{Axis, Level, code_of, level_of, side_of},
        models::{AxisScores, DualScores, ScoreProfile, TargetType, WireVersion},
    },
};
