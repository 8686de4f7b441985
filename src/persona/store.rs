//! Result persistence behind an injected key-value capability.
//!
//! The store holds one opaque document under [`RESULTS_KEY`], overwritten
//! wholesale on every save. Nothing here touches process-wide state.

use std::collections::HashMap;

use log::{debug, warn};

use crate::persona::codec;
use crate::persona::types::error::Result;
use crate::persona::types::models::ScoreProfile;

/// Key under which the latest result is persisted.
pub const RESULTS_KEY: &str = "modePersonalityResults";

/// A string key-value store, such as a browser's local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// An in-process [`KeyValueStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Persists `profile` as a JSON document, replacing any previous result.
pub fn save_results<S: KeyValueStore + ?Sized>(store: &mut S, profile: &ScoreProfile) -> Result<()> {
    let document = serde_json::to_string(profile)?;
    debug!("Saving result {} ({} bytes)", profile.code(), document.len());
    store.set(RESULTS_KEY, document);
    Ok(())
}

/// Loads the persisted result. A missing or unreadable document yields `None`.
pub fn load_results<S: KeyValueStore + ?Sized>(store: &S) -> Option<ScoreProfile> {
    let document = store.get(RESULTS_KEY)?;
    match serde_json::from_str(&document) {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!("Ignoring unreadable stored result: {}", e);
            None
        }
    }
}

/// Picks the result to show: a decodable shared payload first, then the
/// persisted result.
///
/// `None` means neither source has a result and the caller should start a
/// new quiz.
pub fn resolve_results<S: KeyValueStore + ?Sized>(
    shared: Option<&str>,
    store: &S,
) -> Option<ScoreProfile> {
    if let Some(profile) = codec::decode_param(shared) {
        return Some(profile);
    }
    if shared.is_some() {
        debug!("Shared payload unreadable, falling back to stored result");
    }
    load_results(store)
}
