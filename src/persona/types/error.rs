//! Custom error types for the persona-share crate.

use thiserror::Error;

use super::axis::Axis;

/// The primary error type for all operations in this crate.
///
/// [`decode`](crate::persona::codec::decode) never returns these: it turns
/// every failure into `None`. They are surfaced by
/// [`try_decode`](crate::persona::codec::try_decode) and the scoring helpers.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The payload was empty.
    #[error("Empty payload")]
    EmptyInput,

    /// A `%` escape was truncated, not hex, or did not form UTF-8.
    #[error("Invalid percent-encoding: {0}")]
    InvalidPercentEncoding(String),

    /// The payload is not valid base64.
    #[error("Base64 error: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The payload carried no version prefix and is not a JSON document.
    #[error("JSON error: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The payload is structurally invalid for its detected version.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Decoding produced a profile without a complete base score group.
    #[error("Incomplete profile: {0}")]
    IncompleteProfile(String),

    /// An axis value outside the 0-100 range.
    #[error("Score out of range for {axis}: {value}")]
    ScoreOutOfRange { axis: Axis, value: f64 },

    /// A Likert answer outside 1-7.
    #[error("Invalid answer for question {question}: {value}")]
    InvalidAnswer { question: u32, value: u8 },
}

/// A convenience `Result` type alias using the crate's `ProfileError` type.
pub type Result<T> = std::result::Result<T, ProfileError>;
