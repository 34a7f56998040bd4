//! Fallback participant lists keyed by activity identifier.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used only when a card carries no usable inline payload. The table is
//! built once (from code or from a JSON document embedded in the page) and
//! handed to the renderer; nothing mutates it afterwards.

use std::collections::HashMap;

use serde::Deserialize;

use crate::participant::Participant;

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

/// Element id of the optional `<script type="application/json">` holding the table.
pub const FALLBACK_SCRIPT_ID: &str = "participants-fallback";

/// Error returned by [`FallbackTable::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid fallback participants table: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Immutable map from activity id to participants.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct FallbackTable {
    entries: HashMap<String, Vec<Participant>>,
}

impl FallbackTable {
    /// An empty table; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of the form `{ "<activity id>": [ {name?, avatarUrl?}, ... ] }`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `raw` is not valid JSON or is not an
    /// object of participant arrays.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Participants registered for `activity_id`, if any.
    pub fn get(&self, activity_id: &str) -> Option<&[Participant]> {
        self.entries.get(activity_id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Participant>)> for FallbackTable {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Participant>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
