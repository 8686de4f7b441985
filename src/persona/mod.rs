//! Core persona results module.
//!
//! - [`types`]: axes, score groups, profiles, and the error type
//! - [`codec`]: the shareable-string codec and its transport layers
//! - [`format`]: per-version wire parsers
//! - [`scoring`]: answer aggregation and score derivations
//! - [`store`]: result persistence over an injected key-value store

pub mod codec;
pub mod format;
pub mod scoring;
pub mod store;
pub mod types;

pub use codec::{decode, decode_param, encode, try_decode};
pub use types::error::{ProfileError, Result};
