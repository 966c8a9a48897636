//! Name identity resolution via normalized keys.
//!
//! Every team-name and player-name comparison in the engine goes through
//! [`NormalizedKey`]: lowercase, ASCII alphanumeric only. Two names refer to
//! the same entity iff their keys are equal. There is no fuzzy matching;
//! near-duplicates that fail to match are resolved by admin merge tooling,
//! not here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical comparison key derived from a free-text name.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    /// Build a key from a raw name: lowercase, keeping only `a-z` and `0-9`.
    /// Spaces, punctuation and diacritics-as-typed are dropped.
    pub fn new(name: &str) -> Self {
        let key = name
            .trim()
            .chars()
            .flat_map(char::to_lowercase)
            .filter(char::is_ascii_alphanumeric)
            .collect();
        Self(key)
    }

    /// An empty key carries no identity.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key equality with the empty-never-matches rule applied: an empty key
    /// matches nothing, not even another empty key.
    pub fn matches(&self, other: &NormalizedKey) -> bool {
        !self.is_empty() && self == other
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalizedKey({})", self.0)
    }
}
